use async_trait::async_trait;

use crate::models::purchase::AccountId;

/// Third party seat booking. Reserves `seats` for the account and is assumed to
/// always succeed.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    async fn reserve_seat(&self, account_id: AccountId, seats: u32);
}
