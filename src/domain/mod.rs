//! Domain layer - Core business entities
//!
//! Types here are independent of HTTP and storage concerns.

pub mod user;

pub use user::User;
