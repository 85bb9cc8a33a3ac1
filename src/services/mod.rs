pub mod blackhole;
pub mod in_memory;
pub mod payment;
pub mod reservation;
pub mod ticket;
