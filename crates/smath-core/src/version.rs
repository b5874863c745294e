//! Monotonic update counter for version-stamping mutable math types.
//!
//! A `Matrix` carries an integer `update_flag` that downstream consumers
//! (renderers, scene graphs) use as a cheap dirty-check: if the flag has
//! not changed since the last frame, the matrix has not been mutated and
//! does not need to be re-uploaded. For that check to be sound, two
//! matrices must never receive the same stamp, so stamps are drawn from a
//! single process-wide atomic counter.
//!
//! The counter type is public so tests can construct their own instance
//! and observe it deterministically instead of poking at the global one.
//!
//! # Usage
//!
//! ```rust
//! use smath_core::UpdateCounter;
//!
//! let counter = UpdateCounter::new();
//! let a = counter.next();
//! let b = counter.next();
//! assert!(b > a);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// A strictly increasing, thread-safe version counter.
///
/// Every call to [`next`](UpdateCounter::next) returns a value greater
/// than any previously returned value, even across threads: the increment
/// is a single atomic `fetch_add`, so concurrent callers can never collide
/// on a stamp.
#[derive(Debug)]
pub struct UpdateCounter(AtomicU64);

impl UpdateCounter {
    /// Creates a fresh counter starting at 1.
    #[inline]
    pub const fn new() -> Self {
        Self(AtomicU64::new(1))
    }

    /// Takes the next stamp, advancing the counter.
    #[inline]
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns the value the next call to [`next`](UpdateCounter::next)
    /// would produce, without advancing.
    #[inline]
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// The process-wide counter matrices stamp their `update_flag` from.
    #[inline]
    pub fn global() -> &'static UpdateCounter {
        static GLOBAL: UpdateCounter = UpdateCounter::new();
        &GLOBAL
    }
}

impl Default for UpdateCounter {
    fn default() -> Self {
        Self::new()
    }
}
