//! Error types for the tabulation layer

use thiserror::Error;
use xtab_frame::FrameError;

/// Result alias for tabulation operations
pub type TabResult<T> = Result<T, TabError>;

/// Errors produced while building a summary table
#[derive(Debug, Clone, Error)]
pub enum TabError {
    /// The caller combined arguments in an unsupported way
    #[error("{0}")]
    Usage(String),

    /// A frame primitive failed underneath
    #[error(transparent)]
    Frame(FrameError),
}

impl TabError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

impl From<FrameError> for TabError {
    /// Pairing violations raised by the frame primitives are usage errors
    /// from the caller's point of view; everything else stays a frame error.
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::InvalidInput(message) => Self::Usage(message),
            other => Self::Frame(other),
        }
    }
}
