use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::ticket::TicketTypeRequest;

pub type AccountId = i64;
pub type PurchaseId = Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub account_id: AccountId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requests: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    pub fn new(account_id: AccountId, requests: Vec<TicketTypeRequest>) -> Self {
        Self {
            account_id,
            requests,
        }
    }
}

/// Receipt of a purchase that passed validation and was paid for.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub id: PurchaseId,
    pub account_id: AccountId,
    pub total_amount: u32,
    pub total_seats: u32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TicketTypeRequest>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TicketTypeRequest>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use crate::models::ticket::TicketType;

    use super::*;

    #[test]
    fn test_missing_or_null_requests_are_empty() {
        let request: PurchaseRequest = serde_json::from_str(r#"{"account_id":1}"#).unwrap();
        assert!(request.requests.is_empty());

        let request: PurchaseRequest =
            serde_json::from_str(r#"{"account_id":1,"requests":null}"#).unwrap();
        assert!(request.requests.is_empty());
    }

    #[test]
    fn test_parse_purchase_request() {
        let request: PurchaseRequest = serde_json::from_str(
            r#"{
                "account_id": 7,
                "requests": [
                    {"ticket_type": "ADULT", "no_of_tickets": 2},
                    {"ticket_type": "CHILD", "no_of_tickets": 1}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            PurchaseRequest::new(
                7,
                vec![
                    TicketTypeRequest::new(TicketType::Adult, 2),
                    TicketTypeRequest::new(TicketType::Child, 1),
                ]
            ),
            request
        );
    }
}
