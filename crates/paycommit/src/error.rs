//! Error types for the commitment API.

use paycommit_core::{CommitError, Hash32, LeafId, PeriodRange};
use thiserror::Error;

/// Errors that can occur while building commitments or disclosures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Encoding, hashing, or proof construction failed.
    #[error("commit error: {0}")]
    Commit(#[from] CommitError),

    /// The summary's inputs hash does not match the supplied inputs set.
    #[error("inputs hash mismatch: summary has {declared}, inputs set hashes to {computed}")]
    InputsMismatch { declared: Hash32, computed: Hash32 },

    /// Summary and inputs set belong to different agreements.
    #[error("agreement mismatch: {summary} vs {inputs}")]
    AgreementMismatch { summary: Hash32, inputs: Hash32 },

    /// Summary and inputs set cover different periods.
    #[error("period mismatch: {summary:?} vs {inputs:?}")]
    PeriodMismatch {
        summary: PeriodRange,
        inputs: PeriodRange,
    },

    /// Summary and inputs set are denominated in different currencies.
    #[error("currency mismatch: {summary} vs {inputs}")]
    CurrencyMismatch { summary: u8, inputs: u8 },

    /// Currency code not in the configured allow list.
    #[error("unsupported currency code: {0}")]
    UnsupportedCurrency(u8),

    /// JSON rendering failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A freshly built proof failed to verify against its own root.
    #[error("self-check failed for leaf {0:?}")]
    SelfCheckFailed(LeafId),
}

/// Result type for commitment API operations.
pub type Result<T> = std::result::Result<T, Error>;
