//! # Paycommit Testkit
//!
//! Testing utilities for payroll commitments.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known documents with expected bytes, hashes, and roots
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Golden documents, document builders, seeded shuffling
//!
//! ## Golden Vectors
//!
//! ```rust
//! use paycommit_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, hash) in verify_all_vectors() {
//!     println!("{name}: {hash} ({})", if matches { "ok" } else { "MISMATCH" });
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use paycommit_testkit::generators::inputs_set;
//!
//! proptest! {
//!     #[test]
//!     fn inputs_hash_is_deterministic(set in inputs_set(8)) {
//!         prop_assert_eq!(paycommit::inputs_hash(&set)?, paycommit::inputs_hash(&set)?);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{golden_inputs_set, golden_pay_period, golden_summary, shuffled, PayrollFixture};
pub use generators::{inputs_set, pay_period_document, period_summary_document};
pub use vectors::{all_vectors, export_vectors_json, verify_all_vectors, GoldenVector};
