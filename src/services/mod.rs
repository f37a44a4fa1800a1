//! Application services layer - Use cases.
//!
//! Services are built per request inside a database scope and borrow
//! the scope's transaction.

mod base_service;

pub use base_service::{BaseService, StatusMessage};
