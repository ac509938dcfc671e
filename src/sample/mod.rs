//! Sample and uncertain-number value types

mod core;
mod uncertain;

pub use self::core::Sample;
pub use self::uncertain::{Quantity, UFloat};
