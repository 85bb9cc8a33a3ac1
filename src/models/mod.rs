pub mod error;
pub mod purchase;
pub mod ticket;
