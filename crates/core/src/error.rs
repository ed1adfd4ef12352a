//! Errors reported by connection collaborators
//!
//! The connection's request/response exchange and an open statement's close
//! both report failures with this type. Higher layers wrap it with context
//! rather than inspecting it.

use thiserror::Error;

/// Connection-level error
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure on the underlying socket
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or out-of-sequence protocol data
    #[error("protocol error: {0}")]
    Protocol(String),

    /// An open statement could not be closed
    #[error("statement error: {0}")]
    Statement(String),

    /// The connection was already closed
    #[error("connection closed")]
    ConnectionClosed,
}

/// Result type for connection-level operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the connection is unusable after this error.
    pub fn is_connection_broken(&self) -> bool {
        matches!(self, Error::Io(_) | Error::ConnectionClosed)
    }
}
