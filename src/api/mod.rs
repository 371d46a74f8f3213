pub mod error;
pub mod response;
pub mod validation;
pub mod handlers;
