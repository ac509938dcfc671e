// src/buffer/core.rs
//! Core buffer structure, construction and inspection
//!
//! This module provides the [`TimeSeriesBuffer`] type: a FIFO of samples with
//! a fixed maximum length, backed by a [`SampleRing`].

use super::config::BufferConfig;
use crate::circular::{Iter, SampleRing};
use crate::error::Result;
use crate::output::ReturnType;
use crate::sample::Sample;
use std::fmt;

/// A first-in-first-out buffer for time series with uncertainty in
/// timestamps and values.
///
/// Once `maxlen` samples are stored, every new sample evicts the oldest one.
/// [`pop`](Self::pop) hands out the oldest samples and removes them,
/// [`show`](Self::show) hands out the newest samples and keeps them.
///
/// # Examples
///
/// ```
/// use tsbuf::{Output, TimeSeriesBuffer};
/// # use tsbuf::BufferError;
///
/// let mut buf = TimeSeriesBuffer::new(3);
/// buf.add_rows([[0.0, 1.0], [1.0, 2.0], [2.0, 3.0], [3.0, 4.0]])?;
/// assert_eq!(buf.len(), 3);
///
/// let oldest = buf.pop(1);
/// assert_eq!(oldest, Output::Array(vec![[1.0, 0.0, 2.0, 0.0]]));
/// assert_eq!(buf.len(), 2);
/// # Ok::<(), BufferError>(())
/// ```
pub struct TimeSeriesBuffer {
    /// Sample storage (wiped on drop)
    pub(crate) ring: SampleRing,
    /// Layout of `pop`/`show` results
    pub(crate) return_type: ReturnType,
}

impl TimeSeriesBuffer {
    /// Creates a buffer holding at most `maxlen` samples, returning data as
    /// [`ReturnType::Array`].
    ///
    /// # Panics
    ///
    /// Panics if `maxlen` exceeds [`MAX_CAPACITY`](crate::circular::MAX_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::TimeSeriesBuffer;
    ///
    /// let buf = TimeSeriesBuffer::new(50);
    /// assert_eq!(buf.maxlen(), 50);
    /// assert!(buf.is_empty());
    /// ```
    pub fn new(maxlen: usize) -> Self {
        Self::with_config(BufferConfig {
            maxlen,
            ..BufferConfig::default()
        })
    }

    /// Creates a buffer from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.maxlen` exceeds [`MAX_CAPACITY`](crate::circular::MAX_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::{BufferConfig, ReturnType, TimeSeriesBuffer};
    ///
    /// let buf = TimeSeriesBuffer::with_config(BufferConfig {
    ///     maxlen: 100,
    ///     return_type: ReturnType::UArrays,
    /// });
    /// assert_eq!(buf.return_type(), ReturnType::UArrays);
    /// ```
    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            ring: SampleRing::new(config.maxlen),
            return_type: config.return_type,
        }
    }

    /// Fallible counterpart of [`with_config`](Self::with_config).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityTooLarge`](crate::BufferError::CapacityTooLarge)
    /// if `config.maxlen` exceeds the hard maximum.
    pub fn try_with_config(config: BufferConfig) -> Result<Self> {
        Ok(Self {
            ring: SampleRing::try_new(config.maxlen)?,
            return_type: config.return_type,
        })
    }

    /// Creates a buffer holding at most `maxlen` samples and fills it from
    /// `samples`. Only the newest `maxlen` samples are kept.
    ///
    /// # Panics
    ///
    /// Panics if `maxlen` exceeds [`MAX_CAPACITY`](crate::circular::MAX_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::{Sample, TimeSeriesBuffer};
    ///
    /// let buf = TimeSeriesBuffer::from_samples(2, (0..5).map(|t| Sample::exact(t as f64, 0.0)));
    /// assert_eq!(buf.oldest().map(|s| s.time), Some(3.0));
    /// ```
    pub fn from_samples<I>(maxlen: usize, samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        let mut buf = Self::new(maxlen);
        buf.add_samples(samples);
        buf
    }

    /// Returns the configuration this buffer runs with.
    pub fn config(&self) -> BufferConfig {
        BufferConfig {
            maxlen: self.maxlen(),
            return_type: self.return_type,
        }
    }

    /// Returns the number of stored samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::TimeSeriesBuffer;
    ///
    /// let mut buf = TimeSeriesBuffer::new(2);
    /// buf.add_sample(0.0, 0.0, 1.0, 0.1);
    /// assert_eq!(buf.len(), 1);
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if no samples are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` if the next sample will evict the oldest one.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Returns the maximum number of samples.
    #[inline(always)]
    pub fn maxlen(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the layout used by `pop` and `show`.
    #[inline]
    pub fn return_type(&self) -> ReturnType {
        self.return_type
    }

    /// Changes the layout used by `pop` and `show`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::{Output, ReturnType, TimeSeriesBuffer};
    ///
    /// let mut buf = TimeSeriesBuffer::new(4);
    /// buf.set_return_type(ReturnType::List);
    /// assert!(matches!(buf.show_all(), Output::List(_)));
    /// ```
    #[inline]
    pub fn set_return_type(&mut self, return_type: ReturnType) {
        self.return_type = return_type;
    }

    /// Iterates over the stored samples, oldest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::TimeSeriesBuffer;
    /// # use tsbuf::BufferError;
    ///
    /// let mut buf = TimeSeriesBuffer::new(8);
    /// buf.add_rows([[0.0, 5.0], [1.0, 6.0]])?;
    /// let values: Vec<f64> = buf.iter().map(|s| s.value).collect();
    /// assert_eq!(values, vec![5.0, 6.0]);
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        self.ring.iter()
    }

    /// Returns the sample at `index`, counted from the oldest (0).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.ring.get(index)
    }

    /// Returns the most recently added sample.
    #[inline]
    pub fn latest(&self) -> Option<&Sample> {
        self.ring.back()
    }

    /// Returns the oldest stored sample.
    #[inline]
    pub fn oldest(&self) -> Option<&Sample> {
        self.ring.front()
    }

    /// Removes all samples, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Removes all samples and wipes the storage.
    ///
    /// The buffer stays usable; storage is allocated again on the next add.
    pub fn burn(&mut self) {
        self.ring.free();
    }
}

impl Default for TimeSeriesBuffer {
    fn default() -> Self {
        Self::with_config(BufferConfig::default())
    }
}

impl fmt::Display for TimeSeriesBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<TimeSeriesBuffer> ({}/{})", self.len(), self.maxlen())
    }
}

impl fmt::Debug for TimeSeriesBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeSeriesBuffer")
            .field("len", &self.len())
            .field("maxlen", &self.maxlen())
            .field("return_type", &self.return_type)
            .finish()
    }
}

impl<'a> IntoIterator for &'a TimeSeriesBuffer {
    type Item = &'a Sample;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Sample> for TimeSeriesBuffer {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        self.add_samples(iter);
    }
}
