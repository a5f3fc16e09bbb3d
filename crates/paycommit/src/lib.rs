//! # Paycommit
//!
//! The commitment API for payroll records: document hashes, Merkle roots,
//! derived record identifiers, and selective disclosure of document leaves.
//!
//! ## Overview
//!
//! - **Documents**: pay-period settlements and period summaries, encoded to
//!   one canonical byte string each
//! - **Inputs sets**: the receipts backing a summary, hashed order-independently
//! - **Leaves**: each document splits into binding, amounts, and provenance
//!   leaves under one Merkle root
//! - **Record ids**: derived from scope, period, agreement, and inputs hash
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paycommit::{Committer, LeafId, PayPeriodDocument};
//!
//! fn example(doc: &PayPeriodDocument) -> paycommit::Result<()> {
//!     let committer = Committer::default();
//!
//!     // Everything the anchoring layer needs, as hex JSON
//!     let bundle = committer.commit_pay_period(doc)?;
//!     println!("{}", bundle.to_json()?);
//!
//!     // Reveal only the amounts
//!     let disclosure = committer.disclose_pay_period(doc, LeafId::Amounts)?;
//!     assert!(disclosure.verify());
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `paycommit::core` - Encoding, hashing, and Merkle primitives

pub mod commitments;
pub mod committer;
pub mod disclosure;
pub mod error;

// Re-export component crate
pub use paycommit_core as core;

// Re-export main types for convenience
pub use commitments::Commitments;
pub use committer::{Committer, CommitterConfig};
pub use disclosure::Disclosure;
pub use error::{Error, Result};

// Re-export commonly used core types
pub use paycommit_core::{
    derive_record_id, encode_inputs_set, encode_pay_period, encode_period_summary, inputs_hash,
    merkle_proof, merkle_root, pay_period_hash, period_summary_hash, verify_merkle_proof,
    verify_merkle_proof_slices, Amounts, AnchorRef, CanonicalDecimal, CommitError, Document,
    Hash32, InputsItem, InputsSet, LeafId, Partitioned, PayPeriodDocument, PeriodKind,
    PeriodRange, PeriodSummaryDocument, ProofStep, ReceiptKind, RecordId, Scope, Side,
    VersionTriplet, CURRENCY_USDCX, ENCODING_VERSION, IDENTIFIER_SPEC_VERSION,
};
