// ABOUTME: Structured error types for database operations
// ABOUTME: Classifies driver errors so callers never match on vendor state codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! Every driver error is classified once, at this boundary. Business logic
//! and the menu layer branch on the variants, never on SQLSTATE strings.

// The driver's error trait is imported anonymously for its `kind` method.
use sqlx::error::{DatabaseError as _, ErrorKind};
use thiserror::Error;

/// Result alias for data-access operations
pub type DbResult<T> = Result<T, DatabaseError>;

/// Which schema constraint a statement violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unique => write!(f, "unique"),
            Self::ForeignKey => write!(f, "foreign key"),
            Self::NotNull => write!(f, "not null"),
            Self::Check => write!(f, "check"),
        }
    }
}

/// Classified database error
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connectivity, pool, or IO failure. Fatal to the session.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement violated a schema constraint. Local to one action.
    #[error("{kind} constraint violated: {message}")]
    ConstraintViolation {
        kind: ConstraintKind,
        message: String,
    },

    /// A row was expected but absent.
    #[error("no matching row found")]
    NotFound,

    /// A transaction guard was used after commit or rollback.
    #[error("transaction already committed or rolled back")]
    TransactionClosed,

    /// Any other driver error.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl DatabaseError {
    /// Whether this error should end the session rather than one menu action.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let kind = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                _ => None,
            };
            if let Some(kind) = kind {
                return Self::ConstraintViolation {
                    kind,
                    message: db_err.message().to_owned(),
                };
            }
            return Self::Query(err);
        }

        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(err),
            other => Self::Query(other),
        }
    }
}
