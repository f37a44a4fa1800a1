//! Infrastructure layer - External systems integration
//!
//! - SQLite connection opening and pragma tuning
//! - Scoped connections with commit/rollback on exit

pub mod db;
pub mod unit_of_work;

pub use db::Database;
pub use unit_of_work::ScopedFuture;
