//! Primitive TLV codec.
//!
//! Every scalar becomes one self-describing chunk:
//!
//! ```text
//! type:u8 | length:u16 (big-endian) | value:bytes[length]
//! ```
//!
//! Integers are big-endian and unsigned. Decimals and text are written as
//! their UTF-8 bytes without normalization or trimming. Encoding is one-way:
//! there is no decoder, only a deterministic writer.

use bytes::BufMut;

use crate::error::{CommitError, Result};
use crate::types::{CanonicalDecimal, Hash32};

/// Bytes occupied by the type and length prefix of a chunk.
pub const TLV_HEADER_LEN: usize = 3;

/// Largest value a single chunk can carry.
pub const MAX_TLV_VALUE_LEN: usize = u16::MAX as usize;

/// Chunk type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TlvType {
    U8 = 0x01,
    U16 = 0x02,
    U32 = 0x03,
    Bytes32 = 0x04,
    /// Field element rendered as a canonical decimal.
    FieldStr = 0x05,
    /// Free UTF-8 text.
    Utf8Str = 0x07,
    /// Ledger-unit amount rendered as a canonical decimal.
    LedgerDec = 0x08,
}

impl TlvType {
    /// Convert to the wire code.
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Fixed integer widths supported by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    U8,
    U16,
    U32,
}

impl IntWidth {
    /// Width in bits.
    pub fn bits(self) -> u8 {
        match self {
            IntWidth::U8 => 8,
            IntWidth::U16 => 16,
            IntWidth::U32 => 32,
        }
    }

    /// Largest representable value.
    pub fn max(self) -> u64 {
        match self {
            IntWidth::U8 => u8::MAX as u64,
            IntWidth::U16 => u16::MAX as u64,
            IntWidth::U32 => u32::MAX as u64,
        }
    }
}

/// Narrow a wide integer into a fixed-width one, failing with a range error.
pub fn narrow<T: TryFrom<u64>>(field: &'static str, value: u64) -> Result<T> {
    T::try_from(value).map_err(|_| CommitError::Range {
        field,
        value,
        bits: (std::mem::size_of::<T>() * 8) as u8,
    })
}

/// Write one chunk. Fails if the value is longer than a u16 length allows.
pub fn put_tlv<B: BufMut>(buf: &mut B, ty: TlvType, value: &[u8]) -> Result<()> {
    let len: u16 = narrow("tlv_length", value.len() as u64)?;
    buf.put_u8(ty.to_u8());
    buf.put_u16(len);
    buf.put_slice(value);
    Ok(())
}

/// Encode one chunk into a fresh buffer.
pub fn tlv(ty: TlvType, value: &[u8]) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(TLV_HEADER_LEN + value.len());
    put_tlv(&mut buf, ty, value)?;
    Ok(buf)
}

// Fixed-size chunks never exceed the length limit, so these skip the check.
fn put_fixed<B: BufMut>(buf: &mut B, ty: TlvType, value: &[u8]) {
    buf.put_u8(ty.to_u8());
    buf.put_u16(value.len() as u16);
    buf.put_slice(value);
}

pub fn put_u8<B: BufMut>(buf: &mut B, value: u8) {
    put_fixed(buf, TlvType::U8, &[value]);
}

pub fn put_u16<B: BufMut>(buf: &mut B, value: u16) {
    put_fixed(buf, TlvType::U16, &value.to_be_bytes());
}

pub fn put_u32<B: BufMut>(buf: &mut B, value: u32) {
    put_fixed(buf, TlvType::U32, &value.to_be_bytes());
}

/// Write an integer of the given width, validating its range first.
pub fn put_uint<B: BufMut>(
    buf: &mut B,
    field: &'static str,
    width: IntWidth,
    value: u64,
) -> Result<()> {
    match width {
        IntWidth::U8 => put_u8(buf, narrow(field, value)?),
        IntWidth::U16 => put_u16(buf, narrow(field, value)?),
        IntWidth::U32 => put_u32(buf, narrow(field, value)?),
    }
    Ok(())
}

pub fn put_bytes32<B: BufMut>(buf: &mut B, hash: &Hash32) {
    put_fixed(buf, TlvType::Bytes32, hash.as_bytes());
}

/// Write a field-element decimal.
pub fn put_field_str<B: BufMut>(buf: &mut B, value: &CanonicalDecimal) -> Result<()> {
    put_tlv(buf, TlvType::FieldStr, value.as_bytes())
}

/// Write a ledger-unit decimal.
pub fn put_ledger<B: BufMut>(buf: &mut B, value: &CanonicalDecimal) -> Result<()> {
    put_tlv(buf, TlvType::LedgerDec, value.as_bytes())
}

/// Write UTF-8 text exactly as given.
pub fn put_utf8<B: BufMut>(buf: &mut B, value: &str) -> Result<()> {
    put_tlv(buf, TlvType::Utf8Str, value.as_bytes())
}
