//! Reusable object pooling
//!
//! [`ObjectPool`] lends out values and takes them back for reuse. A reset hook
//! runs on every recycled value before it is handed out, so borrowers always
//! start from a clean state without the pool zeroing memory.
//!
//! The process-wide scratch buffer pool used by request serialization is an
//! `ObjectPool<Vec<u8>>` whose reset clears the length and keeps capacity.
//!
//! # Thread Safety
//!
//! Acquire and release may be called from any number of threads. The free
//! list is guarded by a `parking_lot::Mutex` held only for a push or pop; no
//! ordering of reuse is guaranteed.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;
type Reset<T> = Box<dyn Fn(&mut T) + Send + Sync>;
type Retain<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A pool of reusable values
///
/// Retention is unbounded: every released value is kept unless the retain
/// predicate rejects it.
pub struct ObjectPool<T> {
    free: Mutex<Vec<T>>,
    factory: Factory<T>,
    reset: Reset<T>,
    retain: Retain<T>,
}

impl<T> ObjectPool<T> {
    /// Create a pool
    ///
    /// # Arguments
    /// * `factory` - Builds a value when the pool is empty
    /// * `reset` - Restores a recycled value before it is handed out
    pub fn new<F, R>(factory: F, reset: R) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        R: Fn(&mut T) + Send + Sync + 'static,
    {
        ObjectPool {
            free: Mutex::new(Vec::new()),
            factory: Box::new(factory),
            reset: Box::new(reset),
            retain: Box::new(|_: &T| true),
        }
    }

    /// Only keep released values for which `retain` returns true
    pub fn with_retain<P>(mut self, retain: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.retain = Box::new(retain);
        self
    }

    /// Borrow a value from the pool
    ///
    /// Returns a recycled value after running the reset hook, or a freshly
    /// built one if the pool is empty. The value goes back to the pool when
    /// the guard is dropped.
    pub fn acquire(&self) -> Pooled<'_, T> {
        let recycled = self.free.lock().pop();
        let value = match recycled {
            Some(mut value) => {
                (self.reset)(&mut value);
                value
            }
            None => {
                tracing::debug!("object pool empty, allocating");
                (self.factory)()
            }
        };

        Pooled {
            pool: self,
            value: Some(value),
        }
    }

    /// Return a value to the pool
    ///
    /// The caller must not keep using the value; it may be handed to another
    /// borrower at any time.
    pub fn release(&self, value: T) {
        if (self.retain)(&value) {
            self.free.lock().push(value);
        }
    }

    /// Number of values currently available for reuse
    pub fn len(&self) -> usize {
        self.free.lock().len()
    }

    /// Check if no values are available for reuse
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("available", &self.len())
            .finish()
    }
}

/// A value borrowed from an [`ObjectPool`]
///
/// Dereferences to the value and releases it back to the pool on drop.
pub struct Pooled<'a, T> {
    pool: &'a ObjectPool<T>,
    value: Option<T>,
}

impl<'a, T> Pooled<'a, T> {
    /// Detach the value from the pool
    ///
    /// The value is not returned on drop; hand it back with
    /// [`ObjectPool::release`] if it should be reused.
    pub fn into_inner(mut self) -> T {
        // Only `Drop` and this method take the value
        self.value.take().unwrap_or_else(|| unreachable!())
    }
}

impl<T> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl<T> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl<T> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.release(value);
        }
    }
}

/// Pool of byte buffers for transient serialization work
pub type ScratchBufferPool = ObjectPool<Vec<u8>>;

/// Options for a [`ScratchBufferPool`].
///
/// ```
/// use boltx_wire::PoolOptions;
///
/// let opts = PoolOptions::new()
///     .buffer_capacity(4096)
///     .max_retained_capacity(64 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolOptions {
    /// Capacity of newly allocated buffers
    pub buffer_capacity: usize,
    /// Buffers that grew past this capacity are dropped on release
    pub max_retained_capacity: Option<usize>,
}

impl PoolOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity of newly allocated buffers
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Drop released buffers whose capacity exceeds `capacity`
    pub fn max_retained_capacity(mut self, capacity: usize) -> Self {
        self.max_retained_capacity = Some(capacity);
        self
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        // One Bolt chunk's worth of payload
        Self {
            buffer_capacity: 8 * 1024,
            max_retained_capacity: None,
        }
    }
}

impl ObjectPool<Vec<u8>> {
    /// Create a scratch buffer pool
    pub fn scratch(options: PoolOptions) -> Self {
        let capacity = options.buffer_capacity;
        let pool = ObjectPool::new(move || Vec::with_capacity(capacity), |buf: &mut Vec<u8>| {
            buf.clear()
        });

        match options.max_retained_capacity {
            Some(max) => pool.with_retain(move |buf: &Vec<u8>| buf.capacity() <= max),
            None => pool,
        }
    }
}

static SCRATCH_POOL: OnceCell<ScratchBufferPool> = OnceCell::new();

/// Initialize the process-wide scratch buffer pool
///
/// Returns false if the pool was already initialized, either by an earlier
/// call or lazily by [`scratch_pool`]; the existing pool is kept.
pub fn init_scratch_pool(options: PoolOptions) -> bool {
    SCRATCH_POOL.set(ObjectPool::scratch(options)).is_ok()
}

/// The process-wide scratch buffer pool
///
/// Initialized with default options on first use unless
/// [`init_scratch_pool`] ran earlier.
pub fn scratch_pool() -> &'static ScratchBufferPool {
    SCRATCH_POOL.get_or_init(|| ObjectPool::scratch(PoolOptions::default()))
}
