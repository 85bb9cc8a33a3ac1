use std::{
    env,
    error::Error,
    io::{self, Read},
};

use ticket_service::{
    config::PurchaseConfig,
    models::purchase::PurchaseRequest,
    services::{
        in_memory::{InMemoryPaymentService, InMemoryReservationService},
        ticket::{TicketService, TicketServiceImpl},
    },
};

// cargo run --example purchase -- [config.json] < request.json
//
// request.json:
// {"account_id": 1, "requests": [{"ticket_type": "ADULT", "no_of_tickets": 2}]}
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => PurchaseConfig::from_file(path)?,
        None => PurchaseConfig::default(),
    };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let request: PurchaseRequest = serde_json::from_str(&input)?;

    let payments = InMemoryPaymentService::new();
    let reservations = InMemoryReservationService::new();
    let service =
        TicketServiceImpl::with_config(config, payments.clone(), reservations.clone())?;

    match service.purchase(&request).await {
        Ok(purchase) => {
            println!("{}", serde_json::to_string_pretty(&purchase)?);
            println!("payments {:?}", payments.payments());
            println!("reservations {:?}", reservations.reservations());
            Ok(())
        }
        Err(e) => {
            println!("Purchase rejected: {e}");
            Err(e.into())
        }
    }
}
