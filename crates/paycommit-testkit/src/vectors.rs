//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonical bytes, hashes, and Merkle roots that
//! every implementation must reproduce.

use paycommit_core::{Document, Partitioned};
use serde::Serialize;

use crate::fixtures::{golden_inputs_set, golden_pay_period, golden_summary};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Builds the input document.
    pub document: fn() -> Document,
    /// Expected canonical bytes (hex).
    pub expected_bytes: &'static str,
    /// Expected document or inputs hash (hex).
    pub expected_hash: &'static str,
    /// Expected Merkle root (hex), for documents that have leaves.
    pub expected_root: Option<&'static str>,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Weekly pay period, audit absent",
            document: || Document::from(golden_pay_period()),
            expected_bytes: concat!(
                "10010001020002000102000200010200020001",
                "0400201111111111111111111111111111111111111111111111111111111111111111",
                "0300040000000105000130050001300100010108000631303030303008000538353030",
                "30080005313230303008000433303030",
                "0400200000000000000000000000000000000000000000000000000000000000000000",
                "040020aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "03000400000064",
                "0400200000000000000000000000000000000000000000000000000000000000000000",
                "03000400000000",
                "0400200000000000000000000000000000000000000000000000000000000000000000",
            ),
            expected_hash: "0329bb20cca0701387592a56923220aa3855bc56b8c8f9c1a8d4a2181c608ae1",
            expected_root: Some(
                "70e7996c7948289323b1dc30b31594f1b39cf3077fb1b6bfb00406da4bbb83c2",
            ),
        },
        GoldenVector {
            name: "Q1 inputs set, two receipts out of order",
            document: || Document::from(golden_inputs_set()),
            expected_bytes: concat!(
                "20010001020002000102000200010200020001",
                "0400201111111111111111111111111111111111111111111111111111111111111111",
                "01000102",
                "03000400000001",
                "0300040000000d",
                "01000101",
                "03000400000002",
                "040020cccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc",
                "0300040000000a",
                "0400200202020202020202020202020202020202020202020202020202020202020202",
                "01000102",
                "040020bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                "03000400000032",
                "0400200101010101010101010101010101010101010101010101010101010101010101",
                "01000101",
            ),
            expected_hash: "09e43ba7a6db63213cf927b7d35bc4f2a50435e4747f1578aca30a4f4b578eab",
            expected_root: None,
        },
        GoldenVector {
            name: "Q1 summary with audit anchor",
            document: || Document::from(golden_summary()),
            expected_bytes: concat!(
                "10020001020002000102000200010200020001010001020400201111111111111111",
                "111111111111111111111111111111111111111111111111030004000000010300040000000d",
                "050009313233343536373839050009393837363534333231010001010800073133303030",
                "303008000731313035303030080006313536303030080005333930303004002009e43ba7",
                "a6db63213cf927b7d35bc4f2a50435e4747f1578aca30a4f4b578eab040020dddddddddd",
                "dddddddddddddddddddddddddddddddddddddddddddddddddddddd03000400001388",
            ),
            expected_hash: "427aa900399529b4746abdfaae54b6587a25e48078bfb9b1da550afd244550d2",
            expected_root: Some(
                "fced88146d70075c55a160946f96763d8556749855b4e7f5a4fad7b9e418fd11",
            ),
        },
    ]
}

/// Merkle root of a document, if it splits into leaves.
pub fn document_root(doc: &Document) -> Option<String> {
    let root = match doc {
        Document::PayPeriod(d) => d.merkle_root(),
        Document::PeriodSummary(d) => d.merkle_root(),
        Document::InputsSet(_) => return None,
    };
    Some(root.map(|r| r.to_hex()).unwrap_or_else(|e| format!("error: {e}")))
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, computed_hash)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let doc = (v.document)();
            let bytes = doc.encode().map(hex::encode).unwrap_or_default();
            let hash = doc.hash().map(|h| h.to_hex()).unwrap_or_default();
            let root = document_root(&doc);

            let matches = bytes == v.expected_bytes
                && hash == v.expected_hash
                && root.as_deref() == v.expected_root;

            (v.name.to_string(), matches, hash)
        })
        .collect()
}

/// A vector as computed by this implementation, for export to other ones.
#[derive(Debug, Clone, Serialize)]
pub struct VectorRecord {
    pub name: String,
    pub document: Document,
    pub bytes: String,
    pub hash: String,
    pub root: Option<String>,
}

/// Compute every vector and render the results as JSON.
pub fn export_vectors_json() -> serde_json::Result<String> {
    let records: Vec<VectorRecord> = all_vectors()
        .iter()
        .map(|v| {
            let document = (v.document)();
            VectorRecord {
                name: v.name.to_string(),
                bytes: document.encode().map(hex::encode).unwrap_or_default(),
                hash: document.hash().map(|h| h.to_hex()).unwrap_or_default(),
                root: document_root(&document),
                document,
            }
        })
        .collect();
    serde_json::to_string_pretty(&records)
}
