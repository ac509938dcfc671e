// src/buffer/config.rs
//! Buffer configuration.

use crate::output::ReturnType;

/// Default maximum number of samples held by a buffer.
pub const DEFAULT_MAXLEN: usize = 10;

/// Configuration for a [`TimeSeriesBuffer`](crate::TimeSeriesBuffer).
///
/// With the `serde` feature, missing fields fall back to their defaults, so a
/// configuration file may set only what it needs:
///
/// ```toml
/// maxlen = 500
/// return_type = "arrays"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferConfig {
    /// Maximum number of samples; adding beyond it evicts the oldest
    pub maxlen: usize,
    /// Layout of the data returned by `pop` and `show`
    pub return_type: ReturnType,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            maxlen: DEFAULT_MAXLEN,
            return_type: ReturnType::default(),
        }
    }
}
