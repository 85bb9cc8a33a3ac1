use crate::{
    config::{PriceTable, PurchaseConfig},
    models::{
        error::InvalidPurchase,
        purchase::AccountId,
        ticket::{TicketType, TicketTypeRequest},
    },
};

const TICKET_TYPES: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

/// Tickets per category of a request that passed every purchase rule.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounts {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl TicketCounts {
    pub fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Price of the seated tickets; infants are free. Saturates at `u32::MAX`,
    /// which a validated `PurchaseConfig` never reaches.
    pub fn total_amount(&self, prices: &PriceTable) -> u32 {
        TICKET_TYPES
            .iter()
            .filter(|t| t.needs_seat())
            .map(|t| self.count(*t).saturating_mul(prices.price(*t)))
            .fold(0, u32::saturating_add)
    }

    pub fn seats(&self) -> u32 {
        TICKET_TYPES
            .iter()
            .filter(|t| t.needs_seat())
            .map(|t| self.count(*t))
            .sum()
    }

    fn add(&mut self, ticket_type: TicketType, tickets: u32) {
        let slot = match ticket_type {
            TicketType::Adult => &mut self.adult,
            TicketType::Child => &mut self.child,
            TicketType::Infant => &mut self.infant,
        };
        *slot = slot.saturating_add(tickets);
    }
}

/// Checks a purchase against the rules in order and stops at the first one broken.
pub fn validate_purchase(
    config: &PurchaseConfig,
    account_id: AccountId,
    requests: &[TicketTypeRequest],
) -> Result<TicketCounts, InvalidPurchase> {
    if account_id <= 0 {
        return Err(InvalidPurchase::InvalidAccountId);
    }

    if requests.is_empty() {
        return Err(InvalidPurchase::NoTicketsRequested);
    }

    let mut counts = TicketCounts::default();
    let mut total: u32 = 0;
    for request in requests {
        let tickets = u32::try_from(request.no_of_tickets())
            .map_err(|_| InvalidPurchase::InvalidTicketCount)?;
        total = total.saturating_add(tickets);
        counts.add(request.ticket_type(), tickets);
    }
    log::trace!("account {account_id} requested {counts:?}");

    if total > config.max_tickets {
        return Err(InvalidPurchase::ExceedsMaximum {
            max_tickets: config.max_tickets,
        });
    }

    if counts.adult == 0 && (counts.child > 0 || counts.infant > 0) {
        return Err(InvalidPurchase::MissingAdult);
    }

    if counts.infant > counts.adult {
        return Err(InvalidPurchase::InfantsExceedAdults);
    }

    Ok(counts)
}
