//! Convenient imports for boltx.
//!
//! ```ignore
//! use boltx::prelude::*;
//!
//! let mut tx = Transaction::new(&mut conn, TxnId::new(1));
//! tx.commit()?;
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Transaction coordination
pub use crate::types::{
    Connection, ResponsePosition, Statement, Transaction, TransactionError, TransactionStatus, Tx,
    TxnId,
};

// Protocol values
pub use crate::types::{Message, MessageKind, Params, Value};

// Buffer pooling
pub use crate::types::{scratch_pool, PoolOptions};
