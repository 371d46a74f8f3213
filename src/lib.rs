// Public library interface for reservation-time-service
pub mod api;
pub mod export;
pub mod pipeline;
pub mod reservations;
pub mod schema;
pub mod utils;
