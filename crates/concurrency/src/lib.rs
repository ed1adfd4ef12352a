//! Transaction coordination for boltx
//!
//! This crate finalizes explicit transactions over a single connection:
//! - Connection / Statement: collaborator interfaces the coordinator drives
//! - Transaction: exactly-once commit or rollback
//! - TransactionError: classification of every failure on that path

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod coordinator;
pub mod transaction;

pub use connection::{Connection, Statement, TxnId};
pub use coordinator::{Transaction, Tx};
pub use transaction::{Finalize, ResponsePosition, TransactionError, TransactionStatus};
