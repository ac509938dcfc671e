// src/error.rs
//! Error types for time-series buffer operations

use std::fmt;

/// Errors that can occur while filling or configuring a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A column does not have the length of the time column
    LengthMismatch {
        /// Name of the offending column
        field: &'static str,
        /// Length of the time column
        expected: usize,
        /// Length of the offending column
        actual: usize,
    },
    /// A row has a width other than 2, 3 or 4
    UnsupportedWidth(usize),
    /// Input has a shape the buffer cannot interpret
    InvalidInput(String),
    /// Unknown return type name
    UnknownReturnType(String),
    /// Requested capacity exceeds the hard maximum
    CapacityTooLarge {
        /// Requested number of samples
        requested: usize,
        /// Largest supported number of samples
        max: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Lengths of time, time_unc, value or value_unc don't match: \
                 {} has {} entries, time has {}",
                field, actual, expected
            ),
            Self::UnsupportedWidth(n) => {
                write!(f, "Unsupported row width {} (expected 2, 3 or 4)", n)
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::UnknownReturnType(name) => write!(
                f,
                "Unknown return type '{}' (expected list, array, uarray, arrays or uarrays)",
                name
            ),
            Self::CapacityTooLarge { requested, max } => write!(
                f,
                "Buffer capacity {} exceeds maximum {}",
                requested, max
            ),
        }
    }
}

impl std::error::Error for BufferError {}

// ============================================================================
// ERROR CONVERSION
// ============================================================================

/// Convert BufferError to std::io::Error
///
/// All variants map to `InvalidInput`; the wrapped error stays reachable
/// through `get_ref`.
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

impl From<std::convert::Infallible> for BufferError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

// ============================================================================
// RESULT TYPE ALIASES
// ============================================================================

/// Result type alias for buffer operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`tsbuf::Result<T>`) or use the conversion traits.
pub type Result<T> = std::result::Result<T, BufferError>;

// ============================================================================
// EXTENSION TRAIT FOR EASY CONVERSION
// ============================================================================

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}
