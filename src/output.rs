// src/output.rs
//! Result layouts returned by [`TimeSeriesBuffer::pop`](crate::TimeSeriesBuffer::pop)
//! and [`TimeSeriesBuffer::show`](crate::TimeSeriesBuffer::show).

use crate::error::BufferError;
use crate::sample::{Sample, UFloat};
use std::fmt;
use std::str::FromStr;

/// Layout of the data handed out by a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReturnType {
    /// List of `(time, time_unc, value, value_unc)` samples
    List,
    /// N×4 rows of `[time, time_unc, value, value_unc]`
    #[default]
    Array,
    /// N×2 rows of `[time, value]` as uncertain numbers
    UArray,
    /// Four columns: time, time_unc, value, value_unc
    Arrays,
    /// Two columns of uncertain numbers: time, value
    UArrays,
}

impl ReturnType {
    /// All layouts, in declaration order.
    pub const ALL: [ReturnType; 5] = [
        ReturnType::List,
        ReturnType::Array,
        ReturnType::UArray,
        ReturnType::Arrays,
        ReturnType::UArrays,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Array => "array",
            Self::UArray => "uarray",
            Self::Arrays => "arrays",
            Self::UArrays => "uarrays",
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnType {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|rt| rt.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| BufferError::UnknownReturnType(s.to_string()))
    }
}

/// Samples taken out of a buffer, in the layout of its [`ReturnType`].
///
/// Samples are always in insertion order, oldest first. An empty result
/// keeps its layout, e.g. an `Array` with zero rows.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// `(time, time_unc, value, value_unc)` per sample
    List(Vec<Sample>),
    /// `[time, time_unc, value, value_unc]` per sample
    Array(Vec<[f64; 4]>),
    /// `[time, value]` per sample
    UArray(Vec<[UFloat; 2]>),
    /// Column layout
    Arrays {
        /// Timestamps
        time: Vec<f64>,
        /// Timestamp uncertainties
        time_unc: Vec<f64>,
        /// Values
        value: Vec<f64>,
        /// Value uncertainties
        value_unc: Vec<f64>,
    },
    /// Uncertain column layout
    UArrays {
        /// Timestamps with uncertainty
        time: Vec<UFloat>,
        /// Values with uncertainty
        value: Vec<UFloat>,
    },
}

impl Output {
    /// Arranges `samples` in the given layout.
    pub fn from_samples(samples: Vec<Sample>, return_type: ReturnType) -> Self {
        match return_type {
            ReturnType::List => Self::List(samples),
            ReturnType::Array => Self::Array(samples.iter().map(Sample::as_array).collect()),
            ReturnType::UArray => Self::UArray(
                samples
                    .iter()
                    .map(|s| [s.time_ufloat(), s.value_ufloat()])
                    .collect(),
            ),
            ReturnType::Arrays => {
                let n = samples.len();
                let mut time = Vec::with_capacity(n);
                let mut time_unc = Vec::with_capacity(n);
                let mut value = Vec::with_capacity(n);
                let mut value_unc = Vec::with_capacity(n);
                for s in &samples {
                    time.push(s.time);
                    time_unc.push(s.time_unc);
                    value.push(s.value);
                    value_unc.push(s.value_unc);
                }
                Self::Arrays {
                    time,
                    time_unc,
                    value,
                    value_unc,
                }
            }
            ReturnType::UArrays => {
                let (time, value) = samples
                    .iter()
                    .map(|s| (s.time_ufloat(), s.value_ufloat()))
                    .unzip();
                Self::UArrays { time, value }
            }
        }
    }

    /// Layout of this output.
    pub fn return_type(&self) -> ReturnType {
        match self {
            Self::List(_) => ReturnType::List,
            Self::Array(_) => ReturnType::Array,
            Self::UArray(_) => ReturnType::UArray,
            Self::Arrays { .. } => ReturnType::Arrays,
            Self::UArrays { .. } => ReturnType::UArrays,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Self::List(v) => v.len(),
            Self::Array(v) => v.len(),
            Self::UArray(v) => v.len(),
            Self::Arrays { time, .. } => time.len(),
            Self::UArrays { time, .. } => time.len(),
        }
    }

    /// Returns `true` if no samples were returned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape as `(samples, width)`: width 4 for plain layouts, 2 for
    /// uncertain ones.
    pub fn shape(&self) -> (usize, usize) {
        let width = match self {
            Self::List(_) | Self::Array(_) | Self::Arrays { .. } => 4,
            Self::UArray(_) | Self::UArrays { .. } => 2,
        };
        (self.len(), width)
    }

    /// Converts back into samples, whatever the layout.
    pub fn into_samples(self) -> Vec<Sample> {
        match self {
            Self::List(v) => v,
            Self::Array(rows) => rows.into_iter().map(Sample::from).collect(),
            Self::UArray(rows) => rows
                .into_iter()
                .map(|[t, v]| Sample::from_uncertain(t, v))
                .collect(),
            Self::Arrays {
                time,
                time_unc,
                value,
                value_unc,
            } => time
                .into_iter()
                .zip(time_unc)
                .zip(value)
                .zip(value_unc)
                .map(|(((t, ut), v), uv)| Sample::new(t, ut, v, uv))
                .collect(),
            Self::UArrays { time, value } => time
                .into_iter()
                .zip(value)
                .map(|(t, v)| Sample::from_uncertain(t, v))
                .collect(),
        }
    }
}
