//! Application state shared by all handlers.

use std::sync::Arc;

use crate::config::Settings;
use crate::infra::Database;

/// Application state.
///
/// Both members are immutable; handlers open their own connections
/// through `database` rather than sharing one.
#[derive(Clone)]
pub struct AppState {
    /// Process settings, read-only
    pub settings: Arc<Settings>,
    /// Connection provider for the SQLite store
    pub database: Arc<Database>,
}

impl AppState {
    pub fn new(settings: Settings, database: Database) -> Self {
        Self {
            settings: Arc::new(settings),
            database: Arc::new(database),
        }
    }
}
