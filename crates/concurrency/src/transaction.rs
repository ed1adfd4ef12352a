//! Transaction state and finalization errors

use boltx_core::Message;
use std::fmt;
use thiserror::Error;

/// Lifecycle state of a transaction handle
///
/// The only transitions are `Open -> Closed`, taken when a commit or
/// rollback fully succeeds. A closed handle never reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Awaiting commit or rollback
    Open,
    /// Finalized; every further finalization is rejected
    Closed,
}

impl TransactionStatus {
    /// Check if the transaction can still be finalized
    pub fn is_open(&self) -> bool {
        matches!(self, TransactionStatus::Open)
    }
}

/// How a transaction is being finalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finalize {
    /// COMMIT
    Commit,
    /// ROLLBACK
    Rollback,
}

impl Finalize {
    /// Control keyword sent through the run/pull exchange
    pub fn keyword(&self) -> &'static str {
        match self {
            Finalize::Commit => "COMMIT",
            Finalize::Rollback => "ROLLBACK",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Finalize::Commit => "committing",
            Finalize::Rollback => "rolling back",
        }
    }
}

impl fmt::Display for Finalize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Which of the two responses to a control keyword is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePosition {
    /// First response: the control statement ran
    Run,
    /// Second response: the pull/drain completed
    Pull,
}

impl fmt::Display for ResponsePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponsePosition::Run => f.write_str("run"),
            ResponsePosition::Pull => f.write_str("pull"),
        }
    }
}

/// Errors from committing or rolling back a transaction
///
/// Every variant except `AlreadyClosed` leaves the transaction open.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The transaction was already committed or rolled back
    #[error("transaction already closed")]
    AlreadyClosed,

    /// Closing the open statement failed; nothing was sent
    #[error("an error occurred while closing open rows before {action} transaction")]
    StatementCloseFailed {
        /// Finalization that was attempted
        action: Finalize,
        /// Underlying statement error
        source: boltx_core::Error,
    },

    /// The COMMIT exchange failed
    #[error("an error occurred while committing transaction")]
    CommitTransportFailed {
        /// Underlying connection error
        source: boltx_core::Error,
    },

    /// The ROLLBACK exchange failed
    #[error("an error occurred while rolling back transaction")]
    RollbackTransportFailed {
        /// Underlying connection error
        source: boltx_core::Error,
    },

    /// A response was not an acknowledgement
    #[error("unrecognized {position} response type while {action} transaction: {response}")]
    UnexpectedResponseType {
        /// Finalization that was attempted
        action: Finalize,
        /// Which response failed classification
        position: ResponsePosition,
        /// The response actually received
        response: Message,
    },
}

impl TransactionError {
    pub(crate) fn transport(action: Finalize, source: boltx_core::Error) -> Self {
        match action {
            Finalize::Commit => TransactionError::CommitTransportFailed { source },
            Finalize::Rollback => TransactionError::RollbackTransportFailed { source },
        }
    }

    /// Check if this is an already-closed rejection.
    pub fn is_already_closed(&self) -> bool {
        matches!(self, TransactionError::AlreadyClosed)
    }

    /// Check if the transaction is still open and the connection usable,
    /// so a retry or an explicit rollback may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransactionError::AlreadyClosed => false,
            TransactionError::StatementCloseFailed { source, .. }
            | TransactionError::CommitTransportFailed { source }
            | TransactionError::RollbackTransportFailed { source } => {
                !source.is_connection_broken()
            }
            TransactionError::UnexpectedResponseType { .. } => true,
        }
    }

    /// The offending response position, for `UnexpectedResponseType`
    pub fn response_position(&self) -> Option<ResponsePosition> {
        match self {
            TransactionError::UnexpectedResponseType { position, .. } => Some(*position),
            _ => None,
        }
    }
}
