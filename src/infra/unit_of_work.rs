//! Scoped connection with commit/rollback on exit.
//!
//! A scope opens its own connection, runs the caller's work inside one
//! transaction and closes the connection on every exit path:
//! - success commits (read-only scopes never commit)
//! - an error from the work rolls back and is returned unchanged
//! - commit/rollback failures propagate as database errors

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::db::Database;
use crate::errors::{AppError, AppResult};

/// Work executed inside a scope, borrowing the scope's transaction.
pub type ScopedFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

impl Database {
    /// Run `f` inside a freshly opened, pragma-configured connection.
    pub async fn scope<F, T>(&self, read_only: bool, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a DatabaseTransaction) -> ScopedFuture<'a, T> + Send,
        T: Send,
    {
        let connection = self.open(read_only).await?;

        let txn = match connection.begin().await {
            Ok(txn) => txn,
            Err(e) => {
                close(connection).await;
                return Err(AppError::from(e));
            }
        };

        let result = finish(txn, read_only, f).await;
        close(connection).await;
        result
    }
}

async fn finish<F, T>(txn: DatabaseTransaction, read_only: bool, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> ScopedFuture<'a, T> + Send,
    T: Send,
{
    let outcome = f(&txn).await;

    match outcome {
        Ok(value) if read_only => {
            // Nothing to keep; discard whatever the transaction holds.
            txn.rollback().await?;
            Ok(value)
        }
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Scope failed ({}) and rollback failed: {}", e, rollback_err);
                return Err(AppError::from(rollback_err));
            }
            tracing::debug!("Scope rolled back: {}", e);
            Err(e)
        }
    }
}

async fn close(connection: DatabaseConnection) {
    if let Err(e) = connection.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }
}

/// Run a block inside a database scope.
///
/// ```ignore
/// let user = with_connection!(state.database, false, |conn| {
///     Ok(BaseService::new(conn, &settings).get_user(&name))
/// })?;
/// ```
#[macro_export]
macro_rules! with_connection {
    ($db:expr, $read_only:expr, |$conn:ident| $body:expr) => {
        $db.scope($read_only, |$conn| {
            Box::pin(async move {
                let result: $crate::errors::AppResult<_> = { $body };
                result
            })
        })
        .await
    };
}
