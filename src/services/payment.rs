use async_trait::async_trait;

use crate::models::purchase::AccountId;

/// Third party payment gateway. Captures `amount` from the account and is
/// assumed to always succeed.
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    async fn make_payment(&self, account_id: AccountId, amount: u32);
}
