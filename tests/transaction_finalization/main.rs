//! Transaction Finalization Test Suite
//!
//! Drives `Transaction` against an instrumented in-memory connection that
//! records every statement close and every control keyword sent, in order.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test transaction_finalization
//!
//! # Scenarios only
//! cargo test --test transaction_finalization scenarios::
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

pub use boltx::{
    Connection, Error, Message, Params, ResponsePosition, Statement, Transaction,
    TransactionError, TransactionStatus, Tx, TxnId, Value,
};

// Test modules
pub mod invariants;
pub mod scratch_buffers;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// A call observed by the instrumented connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CloseStatement,
    Send(String),
}

/// Shared, ordered call log
pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// A scripted reply to one run/pull exchange
pub type Reply = boltx_core::Result<(Message, Message)>;

/// Statement cursor whose close outcome is scripted
pub struct ScriptedStatement {
    log: CallLog,
    fail_with: Option<String>,
}

impl Statement for ScriptedStatement {
    fn close(&mut self) -> boltx_core::Result<()> {
        self.log.lock().push(Call::CloseStatement);
        match &self.fail_with {
            Some(cause) => Err(boltx_core::Error::Statement(cause.clone())),
            None => Ok(()),
        }
    }
}

/// Connection replaying scripted replies and logging every call
pub struct ScriptedConnection {
    pub log: CallLog,
    pub statement: Option<ScriptedStatement>,
    pub transaction: Option<TxnId>,
    replies: VecDeque<Reply>,
}

impl ScriptedConnection {
    pub fn new(replies: Vec<Reply>) -> Self {
        ScriptedConnection {
            log: Arc::new(Mutex::new(Vec::new())),
            statement: None,
            transaction: None,
            replies: replies.into(),
        }
    }

    /// Open a statement cursor whose close fails with `fail_with`, if given
    pub fn open_statement(&mut self, fail_with: Option<&str>) {
        self.statement = Some(ScriptedStatement {
            log: Arc::clone(&self.log),
            fail_with: fail_with.map(str::to_string),
        });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().clone()
    }

    pub fn sent_keywords(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send(k) => Some(k),
                Call::CloseStatement => None,
            })
            .collect()
    }
}

impl Connection for ScriptedConnection {
    type Statement = ScriptedStatement;

    fn send_run_pull_all_consume_single(
        &mut self,
        keyword: &str,
        _params: Option<&Params>,
    ) -> boltx_core::Result<(Message, Message)> {
        self.log.lock().push(Call::Send(keyword.to_string()));
        self.replies
            .pop_front()
            .unwrap_or(Err(boltx_core::Error::ConnectionClosed))
    }

    fn statement_mut(&mut self) -> Option<&mut ScriptedStatement> {
        self.statement.as_mut()
    }

    fn clear_statement(&mut self) {
        self.statement = None;
    }

    fn transaction(&self) -> Option<TxnId> {
        self.transaction
    }

    fn set_transaction(&mut self, txn: Option<TxnId>) {
        self.transaction = txn;
    }
}

/// Both responses acknowledge
pub fn ack() -> Reply {
    Ok((Message::success(), Message::success()))
}

/// Install a test log subscriber; later calls are no-ops
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
