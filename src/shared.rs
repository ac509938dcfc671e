// src/shared.rs
//! Thread-safe buffer handle.
//!
//! [`SharedBuffer`] wraps a [`TimeSeriesBuffer`] in an `Arc<Mutex<_>>` so one
//! thread can feed samples while others pop or show them. Clones share the
//! same buffer.
//!
//! # Lock Poisoning
//!
//! A panic while the lock is held poisons it. The buffer itself stays
//! consistent (every operation completes a sample at a time), so the handle
//! recovers the guard and logs a warning instead of propagating the panic.

use crate::buffer::{BufferConfig, TimeSeriesBuffer};
use crate::error::{BufferError, Result};
use crate::input::{Columns, Row};
use crate::output::Output;
use crate::sample::Sample;
use std::sync::{Arc, Mutex, MutexGuard};

pub(crate) struct SharedInner {
    pub(crate) buffer: TimeSeriesBuffer,
    pub(crate) total_added: usize,
    pub(crate) total_evicted: usize,
    pub(crate) total_popped: usize,
    pub(crate) total_cleared: usize,
}

/// Snapshot of a shared buffer's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedStats {
    /// Samples currently stored
    pub len: usize,
    /// Maximum number of samples
    pub maxlen: usize,
    /// Samples added over the buffer's lifetime
    pub total_added: usize,
    /// Samples dropped because the buffer was full
    pub total_evicted: usize,
    /// Samples handed out by `pop`
    pub total_popped: usize,
    /// Samples discarded by `clear`
    pub total_cleared: usize,
}

impl SharedStats {
    /// Every added sample is stored, evicted, popped or cleared.
    ///
    /// Does not hold after samples were added or removed through
    /// [`SharedBuffer::with_buffer`].
    pub fn is_balanced(&self) -> bool {
        self.total_added == self.len + self.total_evicted + self.total_popped + self.total_cleared
    }
}

/// Clonable, thread-safe handle to a [`TimeSeriesBuffer`].
///
/// # Example
///
/// ```rust
/// use tsbuf::prelude::*;
/// use std::thread;
///
/// let shared = SharedBuffer::new(100);
/// let producer = shared.clone();
///
/// thread::spawn(move || {
///     for i in 0..10 {
///         producer.push(Sample::exact(i as f64, 0.5));
///     }
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(shared.len(), 10);
/// assert_eq!(shared.pop(4).len(), 4);
/// ```
#[derive(Clone)]
pub struct SharedBuffer {
    pub(crate) inner: Arc<Mutex<SharedInner>>,
}

impl Default for SharedBuffer {
    fn default() -> Self {
        Self::with_config(BufferConfig::default())
    }
}

impl SharedBuffer {
    /// Creates a shared buffer holding at most `maxlen` samples.
    pub fn new(maxlen: usize) -> Self {
        Self::from_buffer(TimeSeriesBuffer::new(maxlen))
    }

    /// Creates a shared buffer from a configuration.
    pub fn with_config(config: BufferConfig) -> Self {
        Self::from_buffer(TimeSeriesBuffer::with_config(config))
    }

    /// Wraps an existing buffer.
    pub fn from_buffer(buffer: TimeSeriesBuffer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SharedInner {
                buffer,
                total_added: 0,
                total_evicted: 0,
                total_popped: 0,
                total_cleared: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SharedInner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("shared buffer lock poisoned, recovering");
            self.inner.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Appends one sample, returning the evicted oldest sample if full.
    pub fn push(&self, sample: Sample) -> Option<Sample> {
        let mut inner = self.lock();
        inner.total_added += 1;
        let evicted = inner.buffer.push(sample);
        if evicted.is_some() {
            inner.total_evicted += 1;
        }
        evicted
    }

    /// Appends a batch of rows; see [`TimeSeriesBuffer::add_rows`].
    pub fn add_rows<I, R>(&self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = R>,
        R: TryInto<Row>,
        BufferError: From<R::Error>,
    {
        let samples = crate::input::collect_rows(rows)?;
        Ok(self.add_samples(samples))
    }

    /// Appends a column-wise batch; see [`TimeSeriesBuffer::add_columns`].
    pub fn add_columns(&self, columns: Columns) -> Result<usize> {
        let samples = columns.into_samples()?;
        Ok(self.add_samples(samples))
    }

    fn add_samples(&self, samples: Vec<Sample>) -> usize {
        let mut inner = self.lock();
        inner.total_added += samples.len();
        let evicted = inner.buffer.add_samples(samples);
        inner.total_evicted += evicted;
        evicted
    }

    /// Removes the `n` oldest samples; see [`TimeSeriesBuffer::pop`].
    pub fn pop(&self, n: usize) -> Output {
        let mut inner = self.lock();
        let out = inner.buffer.pop(n);
        inner.total_popped += out.len();
        out
    }

    /// Returns the `n` newest samples; see [`TimeSeriesBuffer::show`].
    pub fn show(&self, n: usize) -> Output {
        self.lock().buffer.show(n)
    }

    /// Returns every stored sample without removing them.
    pub fn show_all(&self) -> Output {
        self.lock().buffer.show_all()
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.lock().buffer.len()
    }

    /// Returns `true` if no samples are stored.
    pub fn is_empty(&self) -> bool {
        self.lock().buffer.is_empty()
    }

    /// Maximum number of samples.
    pub fn maxlen(&self) -> usize {
        self.lock().buffer.maxlen()
    }

    /// Removes all samples, counting them in [`SharedStats::total_cleared`].
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.total_cleared += inner.buffer.len();
        inner.buffer.clear();
    }

    /// Runs `f` on the buffer while holding the lock.
    ///
    /// Samples added or popped inside `f` are not counted in [`stats`](Self::stats).
    pub fn with_buffer<T>(&self, f: impl FnOnce(&mut TimeSeriesBuffer) -> T) -> T {
        f(&mut self.lock().buffer)
    }

    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> SharedStats {
        let inner = self.lock();
        SharedStats {
            len: inner.buffer.len(),
            maxlen: inner.buffer.maxlen(),
            total_added: inner.total_added,
            total_evicted: inner.total_evicted,
            total_popped: inner.total_popped,
            total_cleared: inner.total_cleared,
        }
    }
}

impl std::fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedBuffer").field(&self.lock().buffer).finish()
    }
}
