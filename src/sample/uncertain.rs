// src/sample/uncertain.rs
//! Numbers carrying a standard uncertainty.
//!
//! These types only pair a nominal value with its standard deviation so that
//! timestamps and values can be handed to the buffer in one piece. No
//! arithmetic is defined on them.

use std::fmt;

/// A nominal value with its standard uncertainty.
///
/// # Examples
///
/// ```
/// use tsbuf::UFloat;
///
/// let t = UFloat::new(12.5, 0.01);
/// assert_eq!(t.nominal, 12.5);
/// assert_eq!(t.to_string(), "12.5+/-0.01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UFloat {
    /// Nominal value
    pub nominal: f64,
    /// Standard uncertainty
    pub std_dev: f64,
}

impl UFloat {
    /// Creates a new uncertain number.
    #[inline]
    pub const fn new(nominal: f64, std_dev: f64) -> Self {
        Self { nominal, std_dev }
    }
}

impl From<(f64, f64)> for UFloat {
    fn from((nominal, std_dev): (f64, f64)) -> Self {
        Self::new(nominal, std_dev)
    }
}

impl fmt::Display for UFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+/-{}", self.nominal, self.std_dev)
    }
}

/// A single row element that may or may not carry an uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// Plain number; its uncertainty is taken as zero
    Exact(f64),
    /// Number with standard uncertainty
    Uncertain(UFloat),
}

impl Quantity {
    /// Splits the quantity into `(nominal, uncertainty)`.
    #[inline]
    pub fn split(self) -> (f64, f64) {
        match self {
            Self::Exact(v) => (v, 0.0),
            Self::Uncertain(u) => (u.nominal, u.std_dev),
        }
    }
}

impl From<f64> for Quantity {
    fn from(v: f64) -> Self {
        Self::Exact(v)
    }
}

impl From<UFloat> for Quantity {
    fn from(u: UFloat) -> Self {
        Self::Uncertain(u)
    }
}
