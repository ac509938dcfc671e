// src/sample/core.rs
//! The [`Sample`] record stored by every buffer.

use super::uncertain::UFloat;
use std::fmt;
use zeroize::Zeroize;

/// One datapoint of a time series: timestamp and value, each with its
/// standard uncertainty.
///
/// The field order matches the tuple layout `(time, time_unc, value, value_unc)`
/// used by [`Sample::as_array`] and the `Array` return type.
///
/// # Examples
///
/// ```
/// use tsbuf::Sample;
///
/// let s = Sample::new(0.5, 0.001, 21.3, 0.05);
/// assert_eq!(s.as_array(), [0.5, 0.001, 21.3, 0.05]);
///
/// let exact = Sample::exact(1.0, 2.0);
/// assert_eq!(exact.time_unc, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Timestamp
    pub time: f64,
    /// Standard uncertainty of the timestamp
    pub time_unc: f64,
    /// Measured value
    pub value: f64,
    /// Standard uncertainty of the value
    pub value_unc: f64,
}

impl Sample {
    /// Placeholder for a missing time or value.
    pub const EMPTY_VALUE: f64 = f64::NAN;
    /// Placeholder for a missing uncertainty.
    pub const EMPTY_UNC: f64 = 0.0;

    /// Creates a sample from all four components.
    #[inline]
    pub const fn new(time: f64, time_unc: f64, value: f64, value_unc: f64) -> Self {
        Self {
            time,
            time_unc,
            value,
            value_unc,
        }
    }

    /// Creates a sample without uncertainty information.
    #[inline]
    pub const fn exact(time: f64, value: f64) -> Self {
        Self::new(time, Self::EMPTY_UNC, value, Self::EMPTY_UNC)
    }

    /// Creates a sample from an uncertain timestamp and an uncertain value.
    #[inline]
    pub const fn from_uncertain(time: UFloat, value: UFloat) -> Self {
        Self::new(time.nominal, time.std_dev, value.nominal, value.std_dev)
    }

    /// Timestamp together with its uncertainty.
    #[inline]
    pub const fn time_ufloat(&self) -> UFloat {
        UFloat::new(self.time, self.time_unc)
    }

    /// Value together with its uncertainty.
    #[inline]
    pub const fn value_ufloat(&self) -> UFloat {
        UFloat::new(self.value, self.value_unc)
    }

    /// Returns `[time, time_unc, value, value_unc]`.
    #[inline]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.time, self.time_unc, self.value, self.value_unc]
    }
}

impl Default for Sample {
    /// A sample with every field empty: `NaN` time and value, zero uncertainties.
    fn default() -> Self {
        Self::new(
            Self::EMPTY_VALUE,
            Self::EMPTY_UNC,
            Self::EMPTY_VALUE,
            Self::EMPTY_UNC,
        )
    }
}

impl From<[f64; 4]> for Sample {
    fn from([time, time_unc, value, value_unc]: [f64; 4]) -> Self {
        Self::new(time, time_unc, value, value_unc)
    }
}

impl From<(f64, f64, f64, f64)> for Sample {
    fn from((time, time_unc, value, value_unc): (f64, f64, f64, f64)) -> Self {
        Self::new(time, time_unc, value, value_unc)
    }
}

impl From<Sample> for [f64; 4] {
    fn from(sample: Sample) -> Self {
        sample.as_array()
    }
}

impl From<Sample> for (f64, f64, f64, f64) {
    fn from(s: Sample) -> Self {
        (s.time, s.time_unc, s.value, s.value_unc)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.time_ufloat(), self.value_ufloat())
    }
}
