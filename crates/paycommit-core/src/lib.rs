//! # Paycommit Core
//!
//! Deterministic commitment primitives for payroll records: canonical
//! encoding, domain-separated hashing, Merkle proofs, and record identifiers.
//!
//! This crate contains no I/O, no logging, no global state. Every function is
//! a pure computation over caller-supplied values, safe to call concurrently.
//!
//! ## Wire format
//!
//! - TLV chunk: `type:u8 | length:u16 BE | value`
//! - Framed object: `object_kind:u16 BE | encoding_version:u16 BE | TLV*`
//! - Domain hash: `BLAKE3(label || 0x00 || payload)`
//!
//! ## Key Types
//!
//! - [`PayPeriodDocument`] - One payroll cycle's settlement
//! - [`PeriodSummaryDocument`] - Totals over a period range
//! - [`InputsSet`] - The receipts backing a summary
//! - [`Hash32`] - Every hash, anchor, and identifier
//! - [`RecordId`] - Derived primary key of an anchored record

pub mod canonical;
pub mod codec;
pub mod document;
pub mod error;
pub mod frame;
pub mod hash;
pub mod identifier;
pub mod leaf;
pub mod merkle;
pub mod sort;
pub mod types;

pub use canonical::{
    encode_inputs_set, encode_pay_period, encode_period_summary, inputs_hash, pay_period_hash,
    period_summary_hash,
};
pub use document::{
    Amounts, Document, InputsItem, InputsSet, PayPeriodDocument, PeriodSummaryDocument,
};
pub use error::{CommitError, Result};
pub use frame::{ObjectKind, ENCODING_VERSION};
pub use hash::{hash_domain, Domain};
pub use identifier::{derive_record_id, RecordId, Scope, IDENTIFIER_SPEC_VERSION};
pub use leaf::{LeafId, Partitioned};
pub use merkle::{
    merkle_proof, merkle_root, verify_merkle_proof, verify_merkle_proof_slices, ProofStep, Side,
};
pub use sort::sort_inputs;
pub use types::{
    AnchorRef, CanonicalDecimal, Hash32, PeriodKind, PeriodRange, ReceiptKind, VersionTriplet,
    CURRENCY_USDCX, HASH_LEN,
};
