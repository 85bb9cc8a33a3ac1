use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    config::PurchaseConfig,
    models::{
        error::{ConfigError, InvalidPurchase},
        purchase::{AccountId, Purchase, PurchaseRequest},
        ticket::TicketTypeRequest,
    },
    validation::validate_purchase,
};

use super::{payment::TicketPaymentService, reservation::SeatReservationService};

#[async_trait]
pub trait TicketService: Send + Sync {
    /// Validates the requested tickets, then pays for them and reserves their
    /// seats. A rejected purchase neither pays nor reserves anything.
    async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<Purchase, InvalidPurchase>;

    /// Runs a deserialized `PurchaseRequest` through `purchase_tickets`.
    async fn purchase(&self, request: &PurchaseRequest) -> Result<Purchase, InvalidPurchase> {
        self.purchase_tickets(request.account_id, &request.requests)
            .await
    }
}

pub struct TicketServiceImpl<PaymentService, ReservationService> {
    config: PurchaseConfig,
    payment_service: PaymentService,
    reservation_service: ReservationService,
}

impl<PaymentService, ReservationService> TicketServiceImpl<PaymentService, ReservationService>
where
    PaymentService: TicketPaymentService,
    ReservationService: SeatReservationService,
{
    pub fn new(payment_service: PaymentService, reservation_service: ReservationService) -> Self {
        Self {
            config: PurchaseConfig::default(),
            payment_service,
            reservation_service,
        }
    }

    pub fn with_config(
        config: PurchaseConfig,
        payment_service: PaymentService,
        reservation_service: ReservationService,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            payment_service,
            reservation_service,
        })
    }

    pub fn config(&self) -> &PurchaseConfig {
        &self.config
    }
}

#[async_trait]
impl<PaymentService, ReservationService> TicketService
    for TicketServiceImpl<PaymentService, ReservationService>
where
    PaymentService: TicketPaymentService,
    ReservationService: SeatReservationService,
{
    async fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<Purchase, InvalidPurchase> {
        log::debug!(
            "purchase of {} ticket requests for account {account_id}",
            requests.len()
        );
        let counts = validate_purchase(&self.config, account_id, requests).map_err(|e| {
            log::warn!("rejected purchase for account {account_id}: {e}");
            e
        })?;

        let purchase = Purchase {
            id: Uuid::new_v4(),
            account_id,
            total_amount: counts.total_amount(&self.config.prices),
            total_seats: counts.seats(),
        };

        self.payment_service
            .make_payment(account_id, purchase.total_amount)
            .await;
        self.reservation_service
            .reserve_seat(account_id, purchase.total_seats)
            .await;

        log::info!(
            "purchase {} for account {account_id}: paid {} for {} seats",
            purchase.id,
            purchase.total_amount,
            purchase.total_seats
        );
        Ok(purchase)
    }
}
