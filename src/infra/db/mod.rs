//! SQLite connection opening and tuning.

use std::path::{Path, PathBuf};

use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};

use crate::config::{SQLITE_CACHE_SIZE_KIB, SQLITE_MMAP_SIZE_BYTES};

/// File-backed SQLite store.
///
/// Holds no open connection; every call to [`Database::open`] (or
/// [`Database::scope`]) creates a fresh one.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options for the file at `path`, taken as-is rather than parsed as a URL.
    /// Writable connections create the file if missing.
    pub fn connect_options(&self, read_only: bool) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(!read_only)
            .read_only(read_only)
            .disable_statement_logging()
    }

    /// Open a single connection and apply the pragmas for its mode.
    ///
    /// The caller owns the returned connection and must close it.
    pub async fn open(&self, read_only: bool) -> Result<DatabaseConnection, DbErr> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(self.connect_options(read_only))
            .await
            .map_err(|e| DbErr::Conn(RuntimeErr::SqlxError(e)))?;

        let connection = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

        for pragma in pragmas(read_only) {
            if let Err(e) = connection.execute_unprepared(&pragma).await {
                if let Err(close_err) = connection.close().await {
                    tracing::warn!("Failed to close connection: {}", close_err);
                }
                return Err(e);
            }
        }

        tracing::debug!(path = %self.path.display(), read_only, "Database connection opened");
        Ok(connection)
    }
}

/// Pragmas applied to every new connection, in order.
///
/// Journal and sync settings change the file itself, so read-only
/// connections skip them.
pub fn pragmas(read_only: bool) -> Vec<String> {
    let mut statements = vec!["PRAGMA foreign_keys = ON".to_string()];

    if !read_only {
        statements.push("PRAGMA journal_mode = WAL".to_string());
        statements.push("PRAGMA synchronous = NORMAL".to_string());
    }

    statements.push(format!("PRAGMA cache_size = {}", SQLITE_CACHE_SIZE_KIB));
    statements.push("PRAGMA temp_store = MEMORY".to_string());
    statements.push(format!("PRAGMA mmap_size = {}", SQLITE_MMAP_SIZE_BYTES));

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writable_connections_enable_wal() {
        assert_eq!(
            pragmas(false),
            vec![
                "PRAGMA foreign_keys = ON",
                "PRAGMA journal_mode = WAL",
                "PRAGMA synchronous = NORMAL",
                "PRAGMA cache_size = -64000",
                "PRAGMA temp_store = MEMORY",
                "PRAGMA mmap_size = 268435456",
            ]
        );
    }

    #[test]
    fn read_only_connections_skip_journal_settings() {
        let statements = pragmas(true);
        assert_eq!(statements.len(), 4);
        assert!(statements.iter().all(|s| !s.contains("journal_mode")));
        assert!(statements.iter().all(|s| !s.contains("synchronous")));
        assert_eq!(statements[0], "PRAGMA foreign_keys = ON");
    }
}
