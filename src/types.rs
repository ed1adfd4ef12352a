//! Public types for the boltx API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Protocol values and messages
pub use boltx_core::{Message, MessageKind, Params, Value};

// Transaction coordination
pub use boltx_concurrency::{
    Connection, Finalize, ResponsePosition, Statement, Transaction, TransactionError,
    TransactionStatus, Tx, TxnId,
};

// Buffer pooling
pub use boltx_wire::{
    init_scratch_pool, scratch_pool, ObjectPool, PoolOptions, Pooled, ScratchBufferPool,
};
