use std::{fs::read_to_string, path::Path};

use serde::{Deserialize, Serialize};

use crate::models::{error::ConfigError, ticket::TicketType};

pub const MAX_TICKETS: u32 = 25;
pub const ADULT_PRICE: u32 = 25;
pub const CHILD_PRICE: u32 = 15;
pub const INFANT_PRICE: u32 = 0;

/// Prices of the seated categories. Infants are always free.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PriceTable {
    pub adult: u32,
    pub child: u32,
}

impl PriceTable {
    pub fn price(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => INFANT_PRICE,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: ADULT_PRICE,
            child: CHILD_PRICE,
        }
    }
}

/// Limits and prices applied to every purchase. Fields missing from a
/// configuration document keep their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PurchaseConfig {
    pub max_tickets: u32,
    pub prices: PriceTable,
}

impl PurchaseConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PurchaseConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading purchase configuration from {}", path.display());
        Self::from_json_str(&read_to_string(path)?)
    }

    /// Rejects limits that allow no tickets or whose highest possible total
    /// does not fit the amount handed to the payment service.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tickets == 0 {
            return Err(ConfigError::Invalid(
                "max_tickets must be greater than 0".to_string(),
            ));
        }
        let highest_price = self.prices.adult.max(self.prices.child);
        if self.max_tickets.checked_mul(highest_price).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} tickets at price {highest_price} overflow the purchase total",
                self.max_tickets
            )));
        }
        Ok(())
    }
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets: MAX_TICKETS,
            prices: PriceTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_parse_config() {
        let config = PurchaseConfig::from_json_str(
            r#"{
                "max_tickets": 10,
                "prices": { "adult": 30, "child": 20 }
            }"#,
        )
        .unwrap();
        assert_eq!(10, config.max_tickets);
        assert_eq!(30, config.prices.price(TicketType::Adult));
        assert_eq!(20, config.prices.price(TicketType::Child));
        assert_eq!(0, config.prices.price(TicketType::Infant));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PurchaseConfig::from_json_str(r#"{"prices": {"child": 12}}"#).unwrap();
        assert_eq!(MAX_TICKETS, config.max_tickets);
        assert_eq!(ADULT_PRICE, config.prices.adult);
        assert_eq!(12, config.prices.child);
        assert_eq!(PurchaseConfig::default(), PurchaseConfig::from_json_str("{}").unwrap());
    }

    #[test]
    fn test_invalid_config() {
        let result = PurchaseConfig::from_json_str(r#"{"max_tickets": 0}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))), "{result:?}");

        let result = PurchaseConfig::from_json_str(
            r#"{"max_tickets": 4294967295, "prices": {"adult": 2}}"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))), "{result:?}");

        let result = PurchaseConfig::from_json_str(r#"{"max_tickets": -1}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))), "{result:?}");

        let result = PurchaseConfig::from_json_str(r#"{"prices": {"infant": 5}}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))), "{result:?}");

        let config = PurchaseConfig {
            max_tickets: 25,
            prices: PriceTable {
                adult: u32::MAX / 10,
                child: 1,
            },
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(PurchaseConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let path = temp_dir().join(format!("purchase-config-{}.json", Uuid::new_v4()));
        std::fs::write(&path, r#"{"max_tickets": 4}"#).unwrap();
        let config = PurchaseConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(4, config.max_tickets);

        let result = PurchaseConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))), "{result:?}");
    }
}
