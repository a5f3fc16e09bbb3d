//! Error types for payroll commitment primitives.

use thiserror::Error;

/// Errors raised while encoding, hashing, or proving.
///
/// Every variant is a local, synchronous failure. Nothing in this crate
/// retries or substitutes a default after returning one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// Malformed or wrong-length scalar, or non-canonical decimal text.
    #[error("format error in {field}: {reason}")]
    Format { field: &'static str, reason: String },

    /// Integer does not fit its declared bit width.
    #[error("{field} out of range for u{bits}: {value}")]
    Range {
        field: &'static str,
        value: u64,
        bits: u8,
    },

    /// Structurally invalid input (empty leaf set, bad proof index, empty item set).
    #[error("invalid input: {0}")]
    Input(String),
}

impl CommitError {
    pub(crate) fn format(field: &'static str, reason: impl Into<String>) -> Self {
        CommitError::Format {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this is a format error.
    pub fn is_format(&self) -> bool {
        matches!(self, CommitError::Format { .. })
    }

    /// Check if this is a range error.
    pub fn is_range(&self) -> bool {
        matches!(self, CommitError::Range { .. })
    }

    /// Check if this is an input error.
    pub fn is_input(&self) -> bool {
        matches!(self, CommitError::Input(_))
    }
}

/// Result type for commitment primitives.
pub type Result<T> = std::result::Result<T, CommitError>;
