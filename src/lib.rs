//! Base Service - a minimal web service scaffold
//!
//! Exposes a status message, a health check and a user lookup over HTTP,
//! backed by per-request SQLite connections and environment configuration.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Settings, env files and constants
//! - **domain**: Core entities
//! - **services**: Request-scoped use cases
//! - **infra**: SQLite connections and scoped transactions
//! - **api**: HTTP handlers, middleware and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! PORT=8000 DB_PATH=./data/app.db cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Settings;
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::Database;
