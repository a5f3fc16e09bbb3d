//! Selective disclosure of a single document leaf.
//!
//! A disclosure carries one leaf's framed bytes plus its inclusion proof.
//! A verifier learns that partition and nothing about the other two.

use paycommit_core::frame::{read_header, FRAME_HEADER_LEN};
use paycommit_core::{
    hash_domain, verify_merkle_proof, Domain, Hash32, LeafId, ObjectKind, ProofStep, Side,
    ENCODING_VERSION,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One disclosed leaf and the proof tying it to a document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    pub leaf: LeafId,
    /// Wire tag of the leaf's object kind.
    pub object_kind: u16,
    #[serde(with = "hex::serde")]
    pub leaf_bytes: Vec<u8>,
    pub leaf_hash: Hash32,
    pub proof: Vec<ProofStep>,
    pub root: Hash32,
}

impl Disclosure {
    /// Check the disclosure for internal consistency.
    ///
    /// The framed header must name a leaf kind matching `object_kind`, the
    /// first chunk must carry `leaf`, the bytes must hash to `leaf_hash`, the
    /// proof path must land at the leaf's tree position, and the proof must
    /// fold to `root`.
    ///
    /// `root` comes from the same package as the leaf, so this alone says
    /// nothing about which document was committed. Use
    /// [`verify_against`](Self::verify_against) with the anchored root.
    pub fn verify(&self) -> bool {
        match read_header(&self.leaf_bytes) {
            Some((kind, version))
                if kind.is_leaf()
                    && kind.to_u16() == self.object_kind
                    && version == ENCODING_VERSION => {}
            _ => return false,
        }

        let id_chunk = [0x01, 0x00, 0x01, self.leaf.to_u8()];
        if self.leaf_bytes.get(FRAME_HEADER_LEN..FRAME_HEADER_LEN + 4) != Some(&id_chunk[..]) {
            return false;
        }

        if hash_domain(Domain::Leaf, &self.leaf_bytes) != self.leaf_hash {
            return false;
        }

        if proof_index(&self.proof) != Some(self.leaf.index()) {
            return false;
        }

        verify_merkle_proof(&self.root, &self.leaf_hash, &self.proof)
    }

    /// Check the disclosure against a root obtained out of band, such as
    /// the one recorded when the document was anchored.
    pub fn verify_against(&self, anchored_root: &Hash32) -> bool {
        self.root == *anchored_root && self.verify()
    }

    /// The leaf's object kind, if the tag is known.
    pub fn kind(&self) -> Option<ObjectKind> {
        ObjectKind::from_u16(self.object_kind)
    }

    /// Render as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}

// Leaf position implied by the side of each sibling, lowest level first.
fn proof_index(proof: &[ProofStep]) -> Option<usize> {
    if proof.len() >= usize::BITS as usize {
        return None;
    }
    Some(
        proof
            .iter()
            .enumerate()
            .filter(|(_, step)| step.side == Side::Left)
            .map(|(level, _)| 1usize << level)
            .sum(),
    )
}
