//! Domain-separated hashing.
//!
//! The single hashing entry point for every commitment:
//!
//! ```text
//! H(domain) = BLAKE3-256(utf8(label) || 0x00 || payload)
//! ```
//!
//! Labels form a closed set, one per commitment purpose. A label is always
//! followed by the 0x00 separator before any payload byte.

use crate::types::Hash32;

/// Separator between the domain label and the payload.
pub const DOMAIN_SEPARATOR: u8 = 0x00;

/// Commitment purposes. Each has its own label; labels are never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Pay-period and period-summary document hashes.
    Document,
    /// Inputs-set hashes.
    Inputs,
    /// Merkle leaf hashes.
    Leaf,
    /// Merkle internal nodes.
    MerkleNode,
    /// Record identifier derivation.
    Identifier,
}

impl Domain {
    /// Every domain, in declaration order.
    pub const ALL: [Domain; 5] = [
        Domain::Document,
        Domain::Inputs,
        Domain::Leaf,
        Domain::MerkleNode,
        Domain::Identifier,
    ];

    /// The textual label hashed in front of the payload.
    pub const fn label(self) -> &'static str {
        match self {
            Domain::Document => "PNW::DOC",
            Domain::Inputs => "PNW::INPUTS",
            Domain::Leaf => "PNW::LEAF",
            Domain::MerkleNode => "PNW::MERKLE_NODE",
            Domain::Identifier => "PNW::TOKEN_ID",
        }
    }
}

/// Hash a payload under a domain.
pub fn hash_domain(domain: Domain, payload: &[u8]) -> Hash32 {
    hash_domain_parts(domain, &[payload])
}

/// Hash the concatenation of `parts` under a domain, without materializing it.
pub fn hash_domain_parts(domain: Domain, parts: &[&[u8]]) -> Hash32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(domain.label().as_bytes());
    hasher.update(&[DOMAIN_SEPARATOR]);
    for part in parts {
        hasher.update(part);
    }
    Hash32(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_manual_concatenation() {
        let payload = b"payroll";
        let mut manual = Vec::new();
        manual.extend_from_slice(b"PNW::DOC");
        manual.push(0x00);
        manual.extend_from_slice(payload);
        assert_eq!(
            hash_domain(Domain::Document, payload),
            Hash32(*blake3::hash(&manual).as_bytes())
        );
    }

    #[test]
    fn test_parts_equal_whole() {
        let whole = hash_domain(Domain::MerkleNode, b"leftright");
        let parts = hash_domain_parts(Domain::MerkleNode, &[&b"left"[..], &b"right"[..]]);
        assert_eq!(whole, parts);
    }

    #[test]
    fn test_known_empty_payload_vectors() {
        assert_eq!(
            hash_domain(Domain::Document, b"").to_hex(),
            "de427876ed59cdc4f1877d3c1f49a5de65a7434be216786c44997a64e5023f93"
        );
        assert_eq!(
            hash_domain(Domain::MerkleNode, b"").to_hex(),
            "725d29ba54e98b7c0ab809e852959d4be19dee9dc92a701a7137fc5235c133a6"
        );
    }

    #[test]
    fn test_domains_separate() {
        let payload = b"same bytes";
        for (i, a) in Domain::ALL.iter().enumerate() {
            for b in &Domain::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(hash_domain(*a, payload), hash_domain(*b, payload));
            }
        }
    }

    #[test]
    fn test_separator_prevents_label_shift() {
        // Label + payload must not read as one longer label.
        let a = hash_domain(Domain::Document, b"UMENT");
        let b = hash_domain_parts(Domain::Document, &[&b""[..], &b"UMENT"[..]]);
        assert_eq!(a, b);
        assert_ne!(a, Hash32(*blake3::hash(b"PNW::DOCUMENT").as_bytes()));
    }
}
