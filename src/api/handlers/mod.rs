//! HTTP request handlers.

pub mod base_handler;
pub mod health_handler;

pub use base_handler::base_routes;
pub use health_handler::health_routes;
