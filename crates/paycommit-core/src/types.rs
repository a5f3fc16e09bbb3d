//! Strong type definitions for payroll commitments.
//!
//! Scalars that cross a text boundary (hashes, decimals) are newtypes that
//! validate on construction, so an encoder never sees a malformed value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{CommitError, Result};

/// Length of every hash, anchor, and identifier in bytes.
pub const HASH_LEN: usize = 32;

/// Currency code for USDCx.
pub const CURRENCY_USDCX: u8 = 1;

/// A 32-byte hash value.
///
/// Raw bytes on the wire; lowercase 64-character hex at any text boundary.
/// Ordering is bytewise, which matches lexicographic order of the hex form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash32(pub [u8; 32]);

impl Hash32 {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice that must be exactly 32 bytes long.
    pub fn from_slice(field: &'static str, bytes: &[u8]) -> Result<Self> {
        let arr: [u8; HASH_LEN] = bytes.try_into().map_err(|_| {
            CommitError::format(field, format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex (64 chars, no prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex. An optional `0x` prefix is accepted; the digits must
    /// be exactly 64 lowercase hex characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != HASH_LEN * 2 {
            return Err(CommitError::format(
                "bytes32",
                format!("expected 64 hex chars, got {}", digits.len()),
            ));
        }
        if !digits
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(CommitError::format("bytes32", "must be lowercase hex"));
        }
        let mut arr = [0u8; HASH_LEN];
        hex::decode_to_slice(digits, &mut arr)
            .map_err(|e| CommitError::format("bytes32", e.to_string()))?;
        Ok(Self(arr))
    }

    /// Check whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// The all-zero hash, used as the absent-value sentinel.
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash32({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Hash32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Hash32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Hash32 {
    type Error = CommitError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice("bytes32", slice)
    }
}

impl FromStr for Hash32 {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A non-negative integer as ASCII digits with no leading zeros.
///
/// Used for ledger-unit money amounts and for field-element strings. The
/// value is unbounded; any integer width renders to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalDecimal(String);

impl CanonicalDecimal {
    /// Parse and validate decimal text. No trimming is performed.
    pub fn parse(s: &str) -> Result<Self> {
        validate_decimal(s)?;
        Ok(Self(s.to_owned()))
    }

    /// The decimal `0`.
    pub fn zero() -> Self {
        Self("0".to_owned())
    }

    /// Get the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the digits as bytes (what goes on the wire).
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

fn validate_decimal(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(CommitError::format("canonical_decimal", "empty string"));
    }
    if let Some(pos) = s.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(CommitError::format(
            "canonical_decimal",
            format!("non-digit character at offset {pos}"),
        ));
    }
    if s.len() > 1 && s.starts_with('0') {
        return Err(CommitError::format("canonical_decimal", "leading zero"));
    }
    Ok(())
}

macro_rules! decimal_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CanonicalDecimal {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

decimal_from_uint!(u8, u16, u32, u64, u128);

impl TryFrom<String> for CanonicalDecimal {
    type Error = CommitError;

    fn try_from(s: String) -> Result<Self> {
        validate_decimal(&s)?;
        Ok(Self(s))
    }
}

impl From<CanonicalDecimal> for String {
    fn from(d: CanonicalDecimal) -> Self {
        d.0
    }
}

impl FromStr for CanonicalDecimal {
    type Err = CommitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CanonicalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Schema, calculation, and policy version counters.
///
/// Encoded into every document but never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionTriplet {
    pub schema_v: u16,
    pub calc_v: u16,
    pub policy_v: u16,
}

impl VersionTriplet {
    /// Create a version triplet.
    pub const fn new(schema_v: u16, calc_v: u16, policy_v: u16) -> Self {
        Self {
            schema_v,
            calc_v,
            policy_v,
        }
    }

    /// The first released versions (1, 1, 1).
    pub const INITIAL: Self = Self::new(1, 1, 1);
}

/// The kind of payroll period a document covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PeriodKind {
    /// A single payroll cycle.
    Cycle = 1,
    /// A calendar quarter.
    Quarter = 2,
    /// Year to date.
    Ytd = 3,
    /// End of year.
    Eoy = 4,
}

impl PeriodKind {
    /// Convert to the wire tag.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Try to parse from the wire tag.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Cycle),
            2 => Some(Self::Quarter),
            3 => Some(Self::Ytd),
            4 => Some(Self::Eoy),
            _ => None,
        }
    }
}

/// A period kind plus caller-defined start and end markers (not wall-clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodRange {
    pub kind: PeriodKind,
    pub start: u32,
    pub end: u32,
}

impl PeriodRange {
    /// Create a period range.
    pub const fn new(kind: PeriodKind, start: u32, end: u32) -> Self {
        Self { kind, start, end }
    }
}

/// Distinguishes normal receipts from reversals in an inputs set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ReceiptKind {
    Paystub = 1,
    Reversal = 2,
}

impl ReceiptKind {
    /// Convert to the wire tag.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Try to parse from the wire tag.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Paystub),
            2 => Some(Self::Reversal),
            _ => None,
        }
    }
}

/// A hash recorded at a specific on-chain height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorRef {
    pub anchor: Hash32,
    pub height: u32,
}

impl AnchorRef {
    /// Create an anchor reference.
    pub const fn new(anchor: Hash32, height: u32) -> Self {
        Self { anchor, height }
    }

    /// The absent-anchor sentinel: zero hash at height zero.
    ///
    /// Indistinguishable on the wire from a real all-zero anchor at height 0.
    pub const ABSENT: Self = Self::new(Hash32::ZERO, 0);

    /// Check whether this is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        self.anchor.is_zero() && self.height == 0
    }
}

impl Default for AnchorRef {
    fn default() -> Self {
        Self::ABSENT
    }
}
