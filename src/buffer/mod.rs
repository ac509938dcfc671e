//! The time-series FIFO buffer.

mod config;
mod core;
mod ops;

pub use self::config::{BufferConfig, DEFAULT_MAXLEN};
pub use self::core::TimeSeriesBuffer;
