//! Object framing.
//!
//! A framed object is a 4-byte header followed by TLV chunks in a fixed order:
//!
//! ```text
//! object_kind:u16 (BE) | encoding_version:u16 (BE) | TLV*
//! ```

use bytes::BufMut;

use crate::codec;
use crate::error::Result;
use crate::types::{AnchorRef, CanonicalDecimal, Hash32, VersionTriplet};

/// Encoding version for every framed object. Bump only on a breaking layout change.
pub const ENCODING_VERSION: u16 = 1;

/// Bytes occupied by the object header.
pub const FRAME_HEADER_LEN: usize = 4;

/// Object kind tags. One per document or leaf family, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ObjectKind {
    PayPeriodDoc = 0x1001,
    PeriodSummaryDoc = 0x1002,
    InputsSet = 0x2001,
    PayPeriodLeaf = 0x3001,
    PeriodSummaryLeaf = 0x3002,
}

impl ObjectKind {
    /// Convert to the wire tag.
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    /// Try to parse from the wire tag.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x1001 => Some(Self::PayPeriodDoc),
            0x1002 => Some(Self::PeriodSummaryDoc),
            0x2001 => Some(Self::InputsSet),
            0x3001 => Some(Self::PayPeriodLeaf),
            0x3002 => Some(Self::PeriodSummaryLeaf),
            _ => None,
        }
    }

    /// Check if this kind tags a Merkle leaf.
    pub fn is_leaf(self) -> bool {
        (self.to_u16() & 0xF000) == 0x3000
    }
}

fn put_header<B: BufMut>(buf: &mut B, kind: ObjectKind) {
    buf.put_u16(kind.to_u16());
    buf.put_u16(ENCODING_VERSION);
}

/// Frame already-encoded chunks under the given kind.
pub fn frame_object(kind: ObjectKind, chunks: &[&[u8]]) -> Vec<u8> {
    let body: usize = chunks.iter().map(|c| c.len()).sum();
    let mut buf = Vec::with_capacity(FRAME_HEADER_LEN + body);
    put_header(&mut buf, kind);
    for chunk in chunks {
        buf.put_slice(chunk);
    }
    buf
}

/// Read the object kind and encoding version from a framed object.
///
/// Returns `None` if the buffer is shorter than the header or the kind is unknown.
pub fn read_header(bytes: &[u8]) -> Option<(ObjectKind, u16)> {
    if bytes.len() < FRAME_HEADER_LEN {
        return None;
    }
    let kind = ObjectKind::from_u16(u16::from_be_bytes([bytes[0], bytes[1]]))?;
    let version = u16::from_be_bytes([bytes[2], bytes[3]]);
    Some((kind, version))
}

/// Streaming writer for one framed object.
///
/// The header is written on construction; fields are appended in call order,
/// which is exactly the wire order.
#[derive(Debug)]
pub struct ObjectEncoder {
    buf: Vec<u8>,
}

impl ObjectEncoder {
    /// Start a new object of the given kind.
    pub fn new(kind: ObjectKind) -> Self {
        let mut buf = Vec::with_capacity(256);
        put_header(&mut buf, kind);
        Self { buf }
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        codec::put_u8(&mut self.buf, value);
        self
    }

    pub fn u16(&mut self, value: u16) -> &mut Self {
        codec::put_u16(&mut self.buf, value);
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        codec::put_u32(&mut self.buf, value);
        self
    }

    pub fn bytes32(&mut self, hash: &Hash32) -> &mut Self {
        codec::put_bytes32(&mut self.buf, hash);
        self
    }

    /// Schema, calc, and policy versions as three u16 chunks.
    pub fn versions(&mut self, versions: &VersionTriplet) -> &mut Self {
        self.u16(versions.schema_v)
            .u16(versions.calc_v)
            .u16(versions.policy_v)
    }

    /// Anchor hash followed by its height.
    pub fn anchor(&mut self, anchor: &AnchorRef) -> &mut Self {
        self.bytes32(&anchor.anchor).u32(anchor.height)
    }

    pub fn field_str(&mut self, value: &CanonicalDecimal) -> Result<&mut Self> {
        codec::put_field_str(&mut self.buf, value)?;
        Ok(self)
    }

    pub fn ledger(&mut self, value: &CanonicalDecimal) -> Result<&mut Self> {
        codec::put_ledger(&mut self.buf, value)?;
        Ok(self)
    }

    /// Gross, net, tax, fee, in that order.
    pub fn amounts(&mut self, amounts: [&CanonicalDecimal; 4]) -> Result<&mut Self> {
        for amount in amounts {
            self.ledger(amount)?;
        }
        Ok(self)
    }

    /// Finish the object and return its bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
