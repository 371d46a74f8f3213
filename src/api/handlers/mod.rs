pub mod health;
pub mod reservations;
