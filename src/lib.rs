//! # boltx
//!
//! Client-side transaction coordination for Bolt-style database connections.
//!
//! A [`Transaction`] finalizes one explicit transaction on a [`Connection`]:
//! it closes any open statement cursor, sends `COMMIT` or `ROLLBACK` through
//! the connection's run/pull exchange, and checks both acknowledgements.
//! Finalization succeeds at most once; later calls fail with
//! [`Error::AlreadyClosed`] without touching the connection.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boltx::prelude::*;
//!
//! // BEGIN was issued by the connection layer
//! let mut tx = Transaction::new(&mut conn, TxnId::new(1));
//! tx.connection_mut().run("CREATE (n:Person {name: $name})", params)?;
//! tx.commit()?;
//! ```
//!
//! ## Scratch Buffers
//!
//! Serialization code borrows transient byte buffers from the process-wide
//! [`scratch_pool`]; buffers are cleared before each reuse.

#![warn(missing_docs)]

mod error;
mod types;

pub mod prelude;

pub use error::{Error, Result};

// Re-export types
pub use types::*;
