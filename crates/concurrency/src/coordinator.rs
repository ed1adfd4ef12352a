//! Transaction coordinator for explicit transactions
//!
//! A [`Transaction`] finalizes one explicit transaction on a connection,
//! exactly once, by committing or rolling it back.
//!
//! ## Finalization Sequence
//!
//! ```text
//! 1. Reject if already closed (no side effects)
//! 2. Close the open statement, if any
//! 3. Send COMMIT / ROLLBACK through the run/pull exchange
//! 4. Expect SUCCESS for the run response
//! 5. Expect SUCCESS for the pull response
//! 6. Clear the connection's transaction, mark closed
//! ```
//!
//! Any failure in steps 2-5 returns before step 6, leaving the transaction
//! open so the caller can retry or roll back. The control keyword travels as
//! an ordinary statement, which is why two acknowledgements are expected.
//!
//! The handle borrows the connection mutably for its whole lifetime, so the
//! connection outlives it and no other traffic can interleave with
//! finalization.

use crate::connection::{Connection, Statement, TxnId};
use crate::transaction::{Finalize, ResponsePosition, TransactionError, TransactionStatus};
use boltx_core::Message;

/// Transaction finalization interface
pub trait Tx {
    /// Commit and close the transaction
    fn commit(&mut self) -> Result<(), TransactionError>;

    /// Roll back and close the transaction
    fn rollback(&mut self) -> Result<(), TransactionError>;
}

/// An explicit transaction on a connection
pub struct Transaction<'c, C: Connection> {
    conn: &'c mut C,
    id: TxnId,
    status: TransactionStatus,
}

impl<'c, C: Connection> Transaction<'c, C> {
    /// Bind a transaction handle to a connection
    ///
    /// BEGIN must already have been issued by the connection layer. The id is
    /// recorded as the connection's active transaction.
    pub fn new(conn: &'c mut C, id: TxnId) -> Self {
        conn.set_transaction(Some(id));
        Transaction {
            conn,
            id,
            status: TransactionStatus::Open,
        }
    }

    /// Transaction identifier
    pub fn id(&self) -> TxnId {
        self.id
    }

    /// Current lifecycle state
    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// Check if the transaction was committed or rolled back
    pub fn is_closed(&self) -> bool {
        !self.status.is_open()
    }

    /// The underlying connection
    pub fn connection(&self) -> &C {
        &*self.conn
    }

    /// The underlying connection, for statement traffic inside the transaction
    pub fn connection_mut(&mut self) -> &mut C {
        &mut *self.conn
    }

    /// Commit and close the transaction
    ///
    /// # Errors
    ///
    /// - `AlreadyClosed`: the transaction was already finalized
    /// - `StatementCloseFailed`: the open statement could not be closed
    /// - `CommitTransportFailed`: the COMMIT exchange failed
    /// - `UnexpectedResponseType`: a response was not SUCCESS
    pub fn commit(&mut self) -> Result<(), TransactionError> {
        self.finalize(Finalize::Commit)
    }

    /// Roll back and close the transaction
    ///
    /// Same contract as [`commit`](Self::commit), sending ROLLBACK and failing
    /// with `RollbackTransportFailed` on exchange errors.
    pub fn rollback(&mut self) -> Result<(), TransactionError> {
        self.finalize(Finalize::Rollback)
    }

    /// Commit, rolling back if the commit fails while the transaction is
    /// still open and the connection usable.
    ///
    /// Always returns the commit outcome. A failed compensating rollback is
    /// logged; the transaction then stays open.
    pub fn commit_or_rollback(&mut self) -> Result<(), TransactionError> {
        match self.commit() {
            Ok(()) => Ok(()),
            Err(e) => {
                if e.is_retryable() && self.status.is_open() {
                    if let Err(rollback_err) = self.rollback() {
                        tracing::warn!(
                            txn = %self.id,
                            error = %rollback_err,
                            "rollback after failed commit also failed"
                        );
                    }
                }
                Err(e)
            }
        }
    }

    fn finalize(&mut self, action: Finalize) -> Result<(), TransactionError> {
        if !self.status.is_open() {
            return Err(TransactionError::AlreadyClosed);
        }

        if let Some(statement) = self.conn.statement_mut() {
            statement
                .close()
                .map_err(|source| TransactionError::StatementCloseFailed { action, source })?;
            self.conn.clear_statement();
        }

        let (run, pull) = self
            .conn
            .send_run_pull_all_consume_single(action.keyword(), None)
            .map_err(|source| TransactionError::transport(action, source))?;

        let run = expect_success(action, ResponsePosition::Run, run)?;
        tracing::info!(
            txn = %self.id,
            keyword = action.keyword(),
            response = %run,
            "got success message {} transaction",
            action
        );

        let pull = expect_success(action, ResponsePosition::Pull, pull)?;
        tracing::info!(
            txn = %self.id,
            keyword = action.keyword(),
            response = %pull,
            "got success message while pulling transaction"
        );

        self.conn.set_transaction(None);
        self.status = TransactionStatus::Closed;
        Ok(())
    }
}

fn expect_success(
    action: Finalize,
    position: ResponsePosition,
    response: Message,
) -> Result<Message, TransactionError> {
    match response {
        Message::Success { .. } => Ok(response),
        Message::Failure { .. } | Message::Record { .. } | Message::Ignored => {
            Err(TransactionError::UnexpectedResponseType {
                action,
                position,
                response,
            })
        }
    }
}

impl<C: Connection> Tx for Transaction<'_, C> {
    fn commit(&mut self) -> Result<(), TransactionError> {
        Transaction::commit(self)
    }

    fn rollback(&mut self) -> Result<(), TransactionError> {
        Transaction::rollback(self)
    }
}

impl<C: Connection> Drop for Transaction<'_, C> {
    fn drop(&mut self) {
        if self.status.is_open() {
            tracing::warn!(txn = %self.id, "transaction dropped without commit or rollback");
        }
    }
}
