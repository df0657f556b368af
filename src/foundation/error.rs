/// Convenience result type used across the engine.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid composition or scene descriptor data, detected at definition time.
    #[error("validation error: {0}")]
    Validation(String),

    /// A scene was asked to evaluate a negative or non-finite local frame.
    #[error("invalid frame: local frame {0} must be finite and >= 0")]
    InvalidFrame(f64),

    /// A global frame outside `[0, total)` was requested from the sequencer.
    #[error("frame {frame} is out of range for a timeline of {total} frames")]
    FrameOutOfRange {
        /// Requested global frame.
        frame: i64,
        /// Total timeline length in frames.
        total: u64,
    },

    /// Errors while evaluating timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
