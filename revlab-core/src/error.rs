//! Structured error types for the pipeline stages.
//!
//! Every stage validates its inputs before computing anything. Errors are
//! never retried: the pipeline is deterministic, so a retry cannot succeed.

use thiserror::Error;

/// Errors raised by the core pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A scalar parameter or input sequence violates its contract.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Sequences handed to one stage are not index-aligned.
    #[error("shape mismatch: expected length {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl CoreError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
