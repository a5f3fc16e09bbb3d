//! The commitment bundle handed to the anchoring layer.

use paycommit_core::{derive_record_id, Hash32, RecordId, Scope, VersionTriplet};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Every 32-byte value needed to anchor one document.
///
/// Hashes serialize as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitments {
    /// Hash of the full canonical document.
    pub doc_hash: Hash32,
    /// Upstream inputs hash (pay period) or inputs-set hash (summary).
    pub inputs_hash: Hash32,
    /// Merkle root over the document's leaves.
    pub root: Hash32,
    /// Leaf hashes in tree order.
    pub leaf_hashes: [Hash32; 3],
    pub record_id: RecordId,
    pub scope: Scope,
    pub period_id: u32,
    pub versions: VersionTriplet,
    pub agreement_id: Hash32,
}

impl Commitments {
    /// Render as a JSON request payload.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Check `record_id` against the scope, period, agreement, and inputs
    /// hash it claims to bind.
    ///
    /// A bundle parsed from JSON carries whatever id the sender wrote.
    pub fn record_id_matches(&self) -> bool {
        derive_record_id(
            self.scope,
            self.period_id,
            &self.agreement_id,
            &self.inputs_hash,
        ) == self.record_id
    }
}
