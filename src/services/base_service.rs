//! Base service - status message and user lookup.

use sea_orm::DatabaseTransaction;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{Settings, STATUS_MESSAGE_PREFIX};
use crate::domain::User;
use crate::errors::AppResult;

/// Status message returned by the root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusMessage {
    #[serde(rename = "base project")]
    #[schema(example = "Base project working...https://github.com/acme/base")]
    pub base_project: String,
}

/// Request-scoped service.
///
/// Borrows the scope's transaction and the process settings; lives no
/// longer than the request that built it.
pub struct BaseService<'a> {
    conn: &'a DatabaseTransaction,
    settings: &'a Settings,
}

impl<'a> BaseService<'a> {
    pub fn new(conn: &'a DatabaseTransaction, settings: &'a Settings) -> Self {
        Self { conn, settings }
    }

    /// Status message embedding the configured external URL.
    pub fn status(&self) -> AppResult<StatusMessage> {
        Ok(StatusMessage {
            base_project: format!(
                "{}{}",
                STATUS_MESSAGE_PREFIX,
                self.settings.external_url().unwrap_or_default()
            ),
        })
    }

    /// Look up a user by name.
    ///
    /// Echoes the name back; no row is read.
    pub fn get_user(&self, username: &str) -> User {
        User::new(username)
    }

    /// Transaction of the current scope.
    pub fn connection(&self) -> &'a DatabaseTransaction {
        self.conn
    }
}
