// ABOUTME: Transaction management with an RAII guard for multi-statement workflows
// ABOUTME: Guarantees rollback and restoration of auto-commit mode on every exit path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! The guard wraps a `SQLx` transaction and provides:
//! - automatic rollback if dropped without an explicit `commit`
//! - type-safe commit/rollback that consume the guard (no double-commit)
//!
//! Once the guard is consumed or dropped, the connection is back in its
//! default statement-per-transaction mode. That restoration is structural
//! rather than a cleanup step, so it holds on success, error, and panic
//! paths alike.

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tracing::{debug, error};

use super::errors::{DatabaseError, DbResult};

/// RAII guard over an open transaction
pub struct TransactionGuard {
    transaction: Option<Transaction<'static, Sqlite>>,
}

impl TransactionGuard {
    /// Open a transaction on the pool and wrap it.
    pub async fn begin(pool: &SqlitePool) -> DbResult<Self> {
        let transaction = pool.begin().await?;
        debug!("transaction opened");
        Ok(Self {
            transaction: Some(transaction),
        })
    }

    /// Borrow the underlying connection to run a statement inside the
    /// transaction.
    pub fn executor(&mut self) -> DbResult<&mut SqliteConnection> {
        self.transaction
            .as_deref_mut()
            .ok_or(DatabaseError::TransactionClosed)
    }

    /// Commit the transaction, consuming the guard.
    pub async fn commit(mut self) -> DbResult<()> {
        match self.transaction.take() {
            Some(tx) => {
                tx.commit().await?;
                debug!("transaction committed");
                Ok(())
            }
            None => Err(DatabaseError::TransactionClosed),
        }
    }

    /// Roll the transaction back, consuming the guard.
    ///
    /// Dropping the guard rolls back as well; this method exists so callers
    /// can observe a rollback failure instead of losing it.
    pub async fn rollback(mut self) -> DbResult<()> {
        match self.transaction.take() {
            Some(tx) => {
                tx.rollback().await?;
                debug!("transaction rolled back");
                Ok(())
            }
            None => Err(DatabaseError::TransactionClosed),
        }
    }
}

impl Drop for TransactionGuard {
    fn drop(&mut self) {
        if self.transaction.is_some() {
            debug!("transaction guard dropped without commit; rolling back");
        }
    }
}

/// Roll back and report a failure without letting it mask the caller's
/// original error.
pub(crate) async fn rollback_logged(guard: TransactionGuard) {
    if let Err(rollback_err) = guard.rollback().await {
        error!(error = %rollback_err, "rollback failed");
    }
}
