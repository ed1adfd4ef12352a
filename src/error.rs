//! Unified error types for boltx.
//!
//! This module provides a single error type that wraps the errors of the
//! workspace crates and presents a consistent interface to users.

use boltx_concurrency::TransactionError;
use thiserror::Error;

/// All boltx errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Transaction was already committed or rolled back
    #[error("transaction already closed")]
    AlreadyClosed,

    /// Commit or rollback failed; the transaction is still open
    #[error(transparent)]
    Transaction(TransactionError),

    /// Connection-level failure
    #[error(transparent)]
    Connection(#[from] boltx_core::Error),
}

/// Result type for boltx operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Retryable errors leave the transaction open on a usable connection,
    /// so a retry or an explicit rollback may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::AlreadyClosed => false,
            Error::Transaction(e) => e.is_retryable(),
            Error::Connection(e) => !e.is_connection_broken(),
        }
    }

    /// Check if this is an already-closed rejection.
    pub fn is_already_closed(&self) -> bool {
        matches!(self, Error::AlreadyClosed)
    }

    /// Check if the connection cannot be used anymore.
    pub fn is_connection_broken(&self) -> bool {
        match self {
            Error::AlreadyClosed => false,
            Error::Transaction(TransactionError::StatementCloseFailed { source, .. })
            | Error::Transaction(TransactionError::CommitTransportFailed { source })
            | Error::Transaction(TransactionError::RollbackTransportFailed { source }) => {
                source.is_connection_broken()
            }
            Error::Transaction(_) => false,
            Error::Connection(e) => e.is_connection_broken(),
        }
    }
}

impl From<TransactionError> for Error {
    fn from(e: TransactionError) -> Self {
        match e {
            TransactionError::AlreadyClosed => Error::AlreadyClosed,
            other => Error::Transaction(other),
        }
    }
}
