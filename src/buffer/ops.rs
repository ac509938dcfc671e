// src/buffer/ops.rs
//! Adding samples to and taking samples out of a buffer

use super::core::TimeSeriesBuffer;
use crate::error::{BufferError, Result};
use crate::input::{Columns, Row, collect_rows};
use crate::output::Output;
use crate::sample::Sample;

impl TimeSeriesBuffer {
    /// Appends one sample, returning the evicted oldest sample if the buffer
    /// was full.
    #[inline]
    pub fn push(&mut self, sample: Sample) -> Option<Sample> {
        self.ring.push(sample)
    }

    /// Appends one sample given by its four components.
    ///
    /// Returns the evicted oldest sample if the buffer was full.
    #[inline]
    pub fn add_sample(
        &mut self,
        time: f64,
        time_unc: f64,
        value: f64,
        value_unc: f64,
    ) -> Option<Sample> {
        self.push(Sample::new(time, time_unc, value, value_unc))
    }

    /// Appends samples in order, returning how many old samples were evicted.
    pub fn add_samples<I>(&mut self, samples: I) -> usize
    where
        I: IntoIterator<Item = Sample>,
    {
        let evicted = samples
            .into_iter()
            .filter_map(|s| self.ring.push(s))
            .count();

        if evicted > 0 {
            tracing::debug!(
                evicted,
                len = self.len(),
                maxlen = self.maxlen(),
                "buffer full, dropped oldest samples"
            );
        }
        evicted
    }

    /// Appends a batch of rows (width 2, 3 or 4, see [`Row`]).
    ///
    /// The whole batch is validated first; on error nothing is added.
    /// Returns how many old samples were evicted.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::UnsupportedWidth`] for a row that is not 2, 3
    /// or 4 wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::{TimeSeriesBuffer, UFloat};
    /// # use tsbuf::BufferError;
    ///
    /// let mut buf = TimeSeriesBuffer::new(10);
    ///
    /// let rows: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![1.0, 2.0, 0.1]];
    /// buf.add_rows(&rows)?;
    ///
    /// buf.add_rows([[UFloat::new(2.0, 0.01), UFloat::new(3.0, 0.2)]])?;
    /// assert_eq!(buf.len(), 3);
    ///
    /// let bad = vec![vec![0.0; 5]];
    /// assert!(buf.add_rows(&bad).is_err());
    /// assert_eq!(buf.len(), 3);
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn add_rows<I, R>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = R>,
        R: TryInto<Row>,
        BufferError: From<R::Error>,
    {
        let samples = collect_rows(rows)?;
        Ok(self.add_samples(samples))
    }

    /// Appends a column-wise batch (see [`Columns`] for the rules).
    ///
    /// The whole batch is validated first; on error nothing is added.
    /// Returns how many old samples were evicted.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::LengthMismatch`] if a column's length differs
    /// from the time column, and [`BufferError::InvalidInput`] for an
    /// uncertainty column made of uncertain numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::{Columns, TimeSeriesBuffer};
    /// # use tsbuf::BufferError;
    ///
    /// let mut buf = TimeSeriesBuffer::new(10);
    /// buf.add_columns(
    ///     Columns::new(vec![0.0, 0.5, 1.0])
    ///         .value(vec![20.1, 20.3, 20.2])
    ///         .value_unc(0.05),
    /// )?;
    /// assert_eq!(buf.latest().map(|s| s.value_unc), Some(0.05));
    ///
    /// let mismatched = Columns::new(vec![0.0, 0.5]).value(vec![1.0]);
    /// assert!(buf.add_columns(mismatched).is_err());
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn add_columns(&mut self, columns: Columns) -> Result<usize> {
        let samples = columns.into_samples()?;
        Ok(self.add_samples(samples))
    }

    /// Removes the `n` oldest samples and returns them in the configured
    /// layout, oldest first.
    ///
    /// Returns fewer than `n` samples if the buffer holds fewer.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::{Output, TimeSeriesBuffer};
    /// # use tsbuf::BufferError;
    ///
    /// let mut buf = TimeSeriesBuffer::new(10);
    /// buf.add_rows([[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]])?;
    ///
    /// let out = buf.pop(2);
    /// assert_eq!(out.len(), 2);
    /// assert_eq!(buf.len(), 1);
    ///
    /// assert_eq!(buf.pop(5).len(), 1);
    /// assert_eq!(buf.pop(1), Output::Array(vec![]));
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn pop(&mut self, n: usize) -> Output {
        Output::from_samples(self.pop_samples(n), self.return_type)
    }

    /// Removes every sample and returns them in the configured layout.
    pub fn pop_all(&mut self) -> Output {
        self.pop(self.len())
    }

    /// Removes the `n` oldest samples and returns them, oldest first.
    pub fn pop_samples(&mut self, n: usize) -> Vec<Sample> {
        let samples = self.ring.drain_front(n);
        tracing::trace!(requested = n, popped = samples.len(), left = self.len(), "pop");
        samples
    }

    /// Returns the `n` newest samples in the configured layout, oldest first,
    /// without removing them.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsbuf::{Output, ReturnType, BufferConfig, TimeSeriesBuffer};
    /// # use tsbuf::BufferError;
    ///
    /// let mut buf = TimeSeriesBuffer::with_config(BufferConfig {
    ///     maxlen: 10,
    ///     return_type: ReturnType::Arrays,
    /// });
    /// buf.add_rows([[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]])?;
    ///
    /// match buf.show(2) {
    ///     Output::Arrays { time, .. } => assert_eq!(time, vec![1.0, 2.0]),
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// assert_eq!(buf.len(), 3);
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn show(&self, n: usize) -> Output {
        Output::from_samples(self.show_samples(n), self.return_type)
    }

    /// Returns every sample in the configured layout without removing them.
    pub fn show_all(&self) -> Output {
        self.show(self.len())
    }

    /// Returns the `n` newest samples, oldest first, without removing them.
    pub fn show_samples(&self, n: usize) -> Vec<Sample> {
        let samples = self.ring.newest(n);
        tracing::trace!(requested = n, shown = samples.len(), "show");
        samples
    }
}
