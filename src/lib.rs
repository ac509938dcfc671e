// src/lib.rs
//! # Time-Series Buffer
//!
//! A bounded first-in-first-out buffer for streams of measurements that carry
//! uncertainty in both their timestamps and their values.
//!
//! Features:
//! - Fixed-capacity ring storage; adding to a full buffer evicts the oldest samples
//! - Row-wise input of `(t, v)`, `(t, v, uv)` or `(t, ut, v, uv)` datapoints,
//!   with optional uncertain numbers in pairs
//! - Column-wise input with scalar broadcasting and length validation
//! - Five output layouts: list, array, uarray, arrays, uarrays
//! - Thread-safe shared handle for producer/consumer setups
//! - Sample storage is wiped with `zeroize` on drop and on `burn()`
//!
//! ```
//! use tsbuf::prelude::*;
//!
//! let mut buf = TimeSeriesBuffer::new(50);
//! buf.add_rows([[0.0, 0.001, 20.4, 0.05], [0.1, 0.001, 20.5, 0.05]])?;
//! buf.add_columns(Columns::new(vec![0.2, 0.3]).value(vec![20.6, 20.7]))?;
//!
//! let newest = buf.show(2);
//! assert_eq!(newest.shape(), (2, 4));
//!
//! let oldest = buf.pop(1).into_samples();
//! assert_eq!(oldest[0].value, 20.4);
//! # Ok::<(), BufferError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod circular;
pub mod error;
pub mod input;
pub mod output;
pub mod sample;
pub mod shared;

// Re-export main types
pub use buffer::{BufferConfig, TimeSeriesBuffer};
pub use circular::SampleRing;
pub use error::{BufferError, Result, ResultExt};
pub use input::{Columns, Row, Series};
pub use output::{Output, ReturnType};
pub use sample::{Quantity, Sample, UFloat};
pub use shared::{SharedBuffer, SharedStats};

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::{BufferConfig, TimeSeriesBuffer};
    pub use crate::error::{BufferError, Result, ResultExt};
    pub use crate::input::{Columns, Row, Series};
    pub use crate::output::{Output, ReturnType};
    pub use crate::sample::{Quantity, Sample, UFloat};
    pub use crate::shared::{SharedBuffer, SharedStats};
}
