use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::models::purchase::AccountId;

use super::{payment::TicketPaymentService, reservation::SeatReservationService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub account_id: AccountId,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub account_id: AccountId,
    pub seats: u32,
}

/// Keeps every captured payment. Clones share the same ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    payments: Arc<RwLock<Vec<Payment>>>,
}

impl InMemoryPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.payments.read().expect("payments lock").clone()
    }

    pub fn total_for(&self, account_id: AccountId) -> u32 {
        self.payments
            .read()
            .expect("payments lock")
            .iter()
            .filter(|p| p.account_id == account_id)
            .map(|p| p.amount)
            .sum()
    }
}

#[async_trait]
impl TicketPaymentService for InMemoryPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u32) {
        log::debug!("capturing {amount} from account {account_id}");
        self.payments
            .write()
            .expect("payments lock")
            .push(Payment { account_id, amount });
    }
}

/// Keeps every seat reservation. Clones share the same ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationService {
    reservations: Arc<RwLock<Vec<Reservation>>>,
}

impl InMemoryReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations
            .read()
            .expect("reservations lock")
            .clone()
    }

    pub fn seats_for(&self, account_id: AccountId) -> u32 {
        self.reservations
            .read()
            .expect("reservations lock")
            .iter()
            .filter(|r| r.account_id == account_id)
            .map(|r| r.seats)
            .sum()
    }
}

#[async_trait]
impl SeatReservationService for InMemoryReservationService {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        log::debug!("reserving {seats} seats for account {account_id}");
        self.reservations
            .write()
            .expect("reservations lock")
            .push(Reservation { account_id, seats });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_ledger() {
        let payments = InMemoryPaymentService::new();
        payments.clone().make_payment(1, 40).await;
        payments.make_payment(2, 15).await;
        payments.make_payment(1, 25).await;

        assert_eq!(3, payments.payments().len());
        assert_eq!(65, payments.total_for(1));
        assert_eq!(0, payments.total_for(3));
    }

    #[tokio::test]
    async fn test_reservations_per_account() {
        let reservations = InMemoryReservationService::new();
        reservations.reserve_seat(1, 2).await;
        reservations.clone().reserve_seat(1, 3).await;

        assert_eq!(
            vec![
                Reservation {
                    account_id: 1,
                    seats: 2
                },
                Reservation {
                    account_id: 1,
                    seats: 3
                }
            ],
            reservations.reservations()
        );
        assert_eq!(5, reservations.seats_for(1));
    }
}
