//! Wire support for boltx
//!
//! Request serialization borrows transient byte buffers instead of
//! allocating per call. This crate provides the pooling used for that:
//!
//! - [`ObjectPool`]: generic pool with a reset hook run on reuse
//! - [`ScratchBufferPool`]: byte-buffer pool, cleared on reuse
//! - [`scratch_pool`]: the process-wide instance
//!
//! ## Examples
//!
//! ```
//! use boltx_wire::scratch_pool;
//!
//! let mut buf = scratch_pool().acquire();
//! buf.extend_from_slice(b"ROLLBACK");
//! assert_eq!(&buf[..], b"ROLLBACK");
//! // returned to the pool on drop
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pool;

pub use pool::{init_scratch_pool, scratch_pool, ObjectPool, PoolOptions, Pooled, ScratchBufferPool};
