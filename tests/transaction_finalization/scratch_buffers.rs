//! Process-wide scratch buffer pool

use boltx::prelude::{scratch_pool, PoolOptions};
use boltx::ObjectPool;
use std::thread;

#[test]
fn global_pool_hands_out_cleared_buffers() {
    {
        let mut buf = scratch_pool().acquire();
        buf.extend_from_slice(b"RUN COMMIT");
    }
    let buf = scratch_pool().acquire();
    assert!(buf.is_empty());
}

#[test]
fn global_pool_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            thread::spawn(move || {
                for i in 0..100u8 {
                    let mut buf = scratch_pool().acquire();
                    assert!(buf.is_empty());
                    buf.push(n);
                    buf.push(i);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("worker");
    }
}

#[test]
fn custom_pool_with_reset_hook() {
    let pool = ObjectPool::new(String::new, |s: &mut String| s.clear());
    {
        let mut s = pool.acquire();
        s.push_str("ROLLBACK");
    }
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.acquire().as_str(), "");
}

#[test]
fn detached_buffer_can_be_released_later() {
    let pool = ObjectPool::scratch(PoolOptions::new().buffer_capacity(64));
    let mut buf = pool.acquire().into_inner();
    buf.extend_from_slice(b"dirty");
    assert!(pool.is_empty());

    pool.release(buf);
    assert!(pool.acquire().is_empty());
}
