// src/input/columns.rs
//! Column-wise input: separate series for time, value and their uncertainties.

use crate::error::{BufferError, Result};
use crate::sample::{Sample, UFloat};

/// One column of a [`Columns`] batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// A single number, repeated for every sample of the batch
    Scalar(f64),
    /// One number per sample
    Values(Vec<f64>),
    /// One uncertain number per sample (time and value columns only)
    Uncertain(Vec<UFloat>),
}

impl Series {
    /// Number of entries, or `None` for a broadcast scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Values(v) => Some(v.len()),
            Self::Uncertain(u) => Some(u.len()),
        }
    }

    /// Returns `true` for a series with no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Splits into nominal values and, for uncertain series, their std devs.
    fn split(self, field: &'static str, n: usize) -> Result<(Vec<f64>, Option<Vec<f64>>)> {
        match self {
            Self::Scalar(x) => Ok((vec![x; n], None)),
            Self::Values(v) => Ok((check_len(field, v, n)?, None)),
            Self::Uncertain(u) => {
                let u = check_len(field, u, n)?;
                let nominal = u.iter().map(|x| x.nominal).collect();
                let std_dev = u.iter().map(|x| x.std_dev).collect();
                Ok((nominal, Some(std_dev)))
            }
        }
    }
}

impl From<f64> for Series {
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        Self::Values(v)
    }
}

impl From<&[f64]> for Series {
    fn from(v: &[f64]) -> Self {
        Self::Values(v.to_vec())
    }
}

impl From<Vec<UFloat>> for Series {
    fn from(u: Vec<UFloat>) -> Self {
        Self::Uncertain(u)
    }
}

impl From<&[UFloat]> for Series {
    fn from(u: &[UFloat]) -> Self {
        Self::Uncertain(u.to_vec())
    }
}

fn check_len<T>(field: &'static str, v: Vec<T>, expected: usize) -> Result<Vec<T>> {
    if v.len() != expected {
        return Err(BufferError::LengthMismatch {
            field,
            expected,
            actual: v.len(),
        });
    }
    Ok(v)
}

/// Fills an uncertainty column: inherited std devs win, then the explicit
/// column, then the empty default.
///
/// An explicit column of uncertain numbers is rejected even when it would be
/// overridden.
fn uncertainty(
    field: &'static str,
    inherited: Option<Vec<f64>>,
    explicit: Option<Series>,
    n: usize,
) -> Result<Vec<f64>> {
    if let Some(Series::Uncertain(_)) = explicit {
        return Err(BufferError::InvalidInput(format!(
            "{} cannot hold uncertain numbers",
            field
        )));
    }
    if let Some(std_dev) = inherited {
        return Ok(std_dev);
    }
    match explicit {
        Some(series) => Ok(series.split(field, n)?.0),
        None => Ok(vec![Sample::EMPTY_UNC; n]),
    }
}

/// A column-oriented batch of samples.
///
/// The time column fixes the batch length; a scalar time is a single sample.
/// Uncertain time or value series carry their own uncertainties, which then
/// take precedence over an explicit uncertainty column. Missing values are
/// `NaN`, missing uncertainties are `0.0`, and scalars broadcast to the
/// batch length.
///
/// # Examples
///
/// ```
/// use tsbuf::Columns;
///
/// let batch = Columns::new(vec![0.0, 0.1, 0.2])
///     .value(vec![1.0, 1.5, 2.0])
///     .value_unc(0.05);
/// assert_eq!(batch.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    time: Series,
    time_unc: Option<Series>,
    value: Option<Series>,
    value_unc: Option<Series>,
}

impl Columns {
    /// Starts a batch from its time column.
    pub fn new(time: impl Into<Series>) -> Self {
        Self {
            time: time.into(),
            time_unc: None,
            value: None,
            value_unc: None,
        }
    }

    /// Sets the timestamp uncertainties.
    pub fn time_unc(mut self, time_unc: impl Into<Series>) -> Self {
        self.time_unc = Some(time_unc.into());
        self
    }

    /// Sets the values.
    pub fn value(mut self, value: impl Into<Series>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the value uncertainties.
    pub fn value_unc(mut self, value_unc: impl Into<Series>) -> Self {
        self.value_unc = Some(value_unc.into());
        self
    }

    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.time.len().unwrap_or(1)
    }

    /// Returns `true` if the batch holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates the batch and turns it into samples.
    pub fn into_samples(self) -> Result<Vec<Sample>> {
        let n = self.len();

        let (time, time_std) = self.time.split("time", n)?;
        let time_unc = uncertainty("time_unc", time_std, self.time_unc, n)?;

        let (value, value_std) = match self.value {
            Some(series) => series.split("value", n)?,
            None => (vec![Sample::EMPTY_VALUE; n], None),
        };
        let value_unc = uncertainty("value_unc", value_std, self.value_unc, n)?;

        Ok(time
            .into_iter()
            .zip(time_unc)
            .zip(value)
            .zip(value_unc)
            .map(|(((t, ut), v), uv)| Sample::new(t, ut, v, uv))
            .collect())
    }
}
