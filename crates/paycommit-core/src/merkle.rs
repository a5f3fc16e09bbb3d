//! Merkle roots and inclusion proofs over 32-byte leaf hashes.
//!
//! Each level pairs adjacent nodes left to right. An odd last node is paired
//! with itself. Parents are `H(PNW::MERKLE_NODE, left || right)`.
//!
//! The level reduction always runs at least once, so a single leaf `a` has
//! root `H(node, a || a)` and a one-step proof.

use serde::{Deserialize, Serialize};

use crate::error::{CommitError, Result};
use crate::hash::{hash_domain_parts, Domain};
use crate::types::Hash32;

/// Which side of the running node a proof sibling sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

/// One level of an inclusion proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProofStep {
    pub sibling: Hash32,
    pub side: Side,
}

/// Hash two children into their parent.
pub fn merkle_parent(left: &Hash32, right: &Hash32) -> Hash32 {
    hash_domain_parts(Domain::MerkleNode, &[&left.as_bytes()[..], &right.as_bytes()[..]])
}

fn next_level(level: &[Hash32]) -> Vec<Hash32> {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            merkle_parent(left, right)
        })
        .collect()
}

/// Compute the root over `leaves` in the given order.
pub fn merkle_root(leaves: &[Hash32]) -> Result<Hash32> {
    if leaves.is_empty() {
        return Err(CommitError::Input("merkle root over zero leaves".into()));
    }
    let mut level = next_level(leaves);
    while level.len() > 1 {
        level = next_level(&level);
    }
    Ok(level[0])
}

/// Build the inclusion proof for the leaf at `index`.
pub fn merkle_proof(leaves: &[Hash32], index: usize) -> Result<Vec<ProofStep>> {
    if leaves.is_empty() {
        return Err(CommitError::Input("merkle proof over zero leaves".into()));
    }
    if index >= leaves.len() {
        return Err(CommitError::Input(format!(
            "proof index {index} out of range for {} leaves",
            leaves.len()
        )));
    }

    let mut steps = Vec::new();
    let mut level = leaves.to_vec();
    let mut idx = index;
    loop {
        let step = if idx % 2 == 0 {
            ProofStep {
                sibling: *level.get(idx + 1).unwrap_or(&level[idx]),
                side: Side::Right,
            }
        } else {
            ProofStep {
                sibling: level[idx - 1],
                side: Side::Left,
            }
        };
        steps.push(step);
        level = next_level(&level);
        idx /= 2;
        if level.len() == 1 {
            break;
        }
    }
    Ok(steps)
}

/// Fold `proof` onto `leaf` and compare with `root`.
///
/// A mismatch is an ordinary `false`, not an error.
pub fn verify_merkle_proof(root: &Hash32, leaf: &Hash32, proof: &[ProofStep]) -> bool {
    let computed = proof.iter().fold(*leaf, |acc, step| match step.side {
        Side::Left => merkle_parent(&step.sibling, &acc),
        Side::Right => merkle_parent(&acc, &step.sibling),
    });
    computed == *root
}

/// Verify a proof given as unvalidated byte slices.
///
/// Wrong-length root, leaf, or sibling fails with a format error; otherwise
/// behaves like [`verify_merkle_proof`].
pub fn verify_merkle_proof_slices(
    root: &[u8],
    leaf: &[u8],
    proof: &[(&[u8], Side)],
) -> Result<bool> {
    let root = Hash32::from_slice("merkle_root", root)?;
    let leaf = Hash32::from_slice("merkle_leaf", leaf)?;
    let steps = proof
        .iter()
        .map(|(sibling, side)| {
            Ok(ProofStep {
                sibling: Hash32::from_slice("merkle_sibling", sibling)?,
                side: *side,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(verify_merkle_proof(&root, &leaf, &steps))
}
