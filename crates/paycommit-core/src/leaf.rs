//! Leaf partitions for selective disclosure.
//!
//! Every document splits into three disjoint leaves: identity and period
//! binding, amounts, provenance. Each leaf repeats the agreement and period
//! context so it stands alone, and is framed under its parent's leaf kind.
//!
//! The document root is the Merkle root over the three leaf hashes in leaf-id
//! order.

use serde::{Deserialize, Serialize};

use crate::document::{PayPeriodDocument, PeriodSummaryDocument};
use crate::error::Result;
use crate::frame::{ObjectEncoder, ObjectKind};
use crate::hash::{hash_domain, Domain};
use crate::merkle::{merkle_proof, merkle_root, ProofStep};
use crate::types::Hash32;

/// Leaf identifier, written as the first chunk of every leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum LeafId {
    /// Agreement, period, and name hashes.
    Binding = 1,
    /// Currency and money amounts.
    Amounts = 2,
    /// Upstream hashes and anchors.
    Provenance = 3,
}

impl LeafId {
    /// Every leaf, in tree order.
    pub const ALL: [LeafId; 3] = [LeafId::Binding, LeafId::Amounts, LeafId::Provenance];

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Binding),
            2 => Some(Self::Amounts),
            3 => Some(Self::Provenance),
            _ => None,
        }
    }

    /// Position of this leaf in the tree.
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

/// A document that splits into Merkle leaves.
pub trait Partitioned {
    /// Object kind every leaf of this document is framed under.
    const LEAF_KIND: ObjectKind;

    /// Encode one leaf to framed bytes.
    fn encode_leaf(&self, leaf: LeafId) -> Result<Vec<u8>>;

    /// Hash of one leaf.
    fn leaf_hash(&self, leaf: LeafId) -> Result<Hash32> {
        Ok(hash_domain(Domain::Leaf, &self.encode_leaf(leaf)?))
    }

    /// All leaf hashes in tree order.
    fn leaf_hashes(&self) -> Result<[Hash32; 3]> {
        Ok([
            self.leaf_hash(LeafId::Binding)?,
            self.leaf_hash(LeafId::Amounts)?,
            self.leaf_hash(LeafId::Provenance)?,
        ])
    }

    /// Merkle root over the leaf hashes.
    fn merkle_root(&self) -> Result<Hash32> {
        merkle_root(&self.leaf_hashes()?)
    }

    /// Inclusion proof for one leaf.
    fn leaf_proof(&self, leaf: LeafId) -> Result<Vec<ProofStep>> {
        merkle_proof(&self.leaf_hashes()?, leaf.index())
    }
}

impl Partitioned for PayPeriodDocument {
    const LEAF_KIND: ObjectKind = ObjectKind::PayPeriodLeaf;

    fn encode_leaf(&self, leaf: LeafId) -> Result<Vec<u8>> {
        let mut enc = ObjectEncoder::new(Self::LEAF_KIND);
        enc.u8(leaf.to_u8())
            .bytes32(&self.agreement_id)
            .u32(self.epoch_id);
        match leaf {
            LeafId::Binding => {
                enc.field_str(&self.worker_name_hash)?
                    .field_str(&self.employer_name_hash)?;
            }
            LeafId::Amounts => {
                enc.u8(self.currency_code).amounts(self.amounts.in_order())?;
            }
            LeafId::Provenance => {
                enc.bytes32(&self.payroll_inputs_hash)
                    .anchor(&self.receipt)
                    .anchor(&self.audit)
                    .bytes32(&self.utc_time_hash);
            }
        }
        Ok(enc.finish())
    }
}

impl Partitioned for PeriodSummaryDocument {
    const LEAF_KIND: ObjectKind = ObjectKind::PeriodSummaryLeaf;

    fn encode_leaf(&self, leaf: LeafId) -> Result<Vec<u8>> {
        let mut enc = ObjectEncoder::new(Self::LEAF_KIND);
        enc.u8(leaf.to_u8())
            .bytes32(&self.agreement_id)
            .u8(self.period.kind.to_u8());
        match leaf {
            LeafId::Binding => {
                enc.u32(self.period.start)
                    .u32(self.period.end)
                    .field_str(&self.worker_name_hash)?
                    .field_str(&self.employer_name_hash)?;
            }
            LeafId::Amounts => {
                enc.u8(self.currency_code).amounts(self.totals.in_order())?;
            }
            LeafId::Provenance => {
                enc.bytes32(&self.inputs_hash).anchor(&self.audit);
            }
        }
        Ok(enc.finish())
    }
}
