//! Error types for host value operations

use thiserror::Error;

/// Errors raised while reading or writing host values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Index out of bounds (0-based)
    #[error("BoundsError: attempt to access index {index} of vector with length {length}")]
    BoundsError {
        /// Attempted index
        index: usize,
        /// Vector length
        length: usize,
    },

    /// Operation applied to a representation that does not support it
    #[error("TypeError: {0}")]
    TypeError(String),
}

impl ValueError {
    /// Create a bounds error
    pub fn bounds_error(index: usize, length: usize) -> Self {
        ValueError::BoundsError { index, length }
    }

    /// Create a type error
    pub fn type_error<S: Into<String>>(msg: S) -> Self {
        ValueError::TypeError(msg.into())
    }
}

/// Result type alias for host value operations
pub type ValueResult<T> = Result<T, ValueError>;
