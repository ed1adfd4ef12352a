//! Collaborator interfaces consumed by the transaction coordinator
//!
//! A [`Connection`] owns the transport and performs synchronous
//! request/response exchanges. It also owns two pieces of session state the
//! coordinator reads and clears: the open statement cursor, if any, and the
//! id of the transaction currently active on it.
//!
//! Connections are single-writer: every method takes `&mut self`, and a
//! connection must not carry concurrent statement traffic.

use boltx_core::{Message, Params, Result};
use std::fmt;

/// Identifier of a transaction on a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxnId(u64);

impl TxnId {
    /// Create a transaction ID from a raw value
    pub fn new(id: u64) -> Self {
        TxnId(id)
    }

    /// Get the raw ID value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TxnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn:{}", self.0)
    }
}

/// An open result cursor bound to a connection
pub trait Statement {
    /// Discard the rest of the result stream and release the cursor
    fn close(&mut self) -> Result<()>;
}

/// A stateful protocol connection
pub trait Connection {
    /// Cursor type produced by this connection
    type Statement: Statement;

    /// Send a run request for `keyword` followed by one pull/drain cycle
    ///
    /// Returns the run response and the pull response, in that order.
    fn send_run_pull_all_consume_single(
        &mut self,
        keyword: &str,
        params: Option<&Params>,
    ) -> Result<(Message, Message)>;

    /// The statement cursor currently open on this connection
    fn statement_mut(&mut self) -> Option<&mut Self::Statement>;

    /// Forget the open statement after it was closed
    fn clear_statement(&mut self);

    /// The transaction currently active on this connection
    fn transaction(&self) -> Option<TxnId>;

    /// Replace the active transaction
    fn set_transaction(&mut self, txn: Option<TxnId>);
}
