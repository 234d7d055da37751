//! Error types for the frame crate

use thiserror::Error;

/// Result type alias for frame operations
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised by the table primitives
#[derive(Error, Debug, Clone)]
pub enum FrameError {
    /// A column name could not be found in the frame
    #[error("column not found: {0:?}")]
    ColumnNotFound(String),

    /// Two columns that must be aligned have different lengths
    #[error("length mismatch for column {name:?}: expected {expected}, got {actual}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A frame would end up with two columns of the same name
    #[error("duplicate column name: {0:?}")]
    DuplicateColumn(String),

    /// Invalid arguments to a primitive
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FrameError {
    /// Create a new column-not-found error
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound(name.into())
    }

    /// Create a new length-mismatch error
    pub fn length_mismatch(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create a new duplicate-column error
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Self::DuplicateColumn(name.into())
    }

    /// Create a new invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
