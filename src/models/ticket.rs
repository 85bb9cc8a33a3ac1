use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Infants sit on an adult's lap and never take a seat.
    pub fn needs_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: i32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: i32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> i32 {
        self.no_of_tickets
    }
}
