use std::{error::Error, fmt, io};

/// Reason a purchase was rejected. Nothing is charged or reserved when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    InvalidAccountId,
    NoTicketsRequested,
    InvalidTicketCount,
    ExceedsMaximum { max_tickets: u32 },
    MissingAdult,
    InfantsExceedAdults,
}

impl fmt::Display for InvalidPurchase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidAccountId => write!(f, "Invalid account ID"),
            Self::NoTicketsRequested => write!(f, "No tickets requested"),
            Self::InvalidTicketCount => write!(f, "Invalid number of tickets"),
            Self::ExceedsMaximum { max_tickets } => {
                write!(f, "Maximum {max_tickets} tickets per purchase")
            }
            Self::MissingAdult => write!(
                f,
                "Child and Infant tickets require at least one Adult ticket."
            ),
            Self::InfantsExceedAdults => write!(f, "Each Infant must be accompanied by one Adult."),
        }
    }
}

impl Error for InvalidPurchase {}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read configuration: {e}"),
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration: {e}"),
            ConfigError::Invalid(reason) => write!(f, "Invalid configuration: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons() {
        assert_eq!("Invalid account ID", InvalidPurchase::InvalidAccountId.to_string());
        assert_eq!(
            "Maximum 25 tickets per purchase",
            InvalidPurchase::ExceedsMaximum { max_tickets: 25 }.to_string()
        );
        assert_eq!(
            "Each Infant must be accompanied by one Adult.",
            InvalidPurchase::InfantsExceedAdults.to_string()
        );
    }
}
