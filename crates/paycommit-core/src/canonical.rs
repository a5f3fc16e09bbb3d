//! Canonical document encoding.
//!
//! Each document kind is written field by field through the TLV codec in
//! one fixed order, then framed under its object kind. The order is part of
//! the wire contract: reordering fields changes every resulting hash.
//!
//! Optional audit linkage is always written. When absent it is the zero
//! sentinel (32 zero bytes, height 0), so the layout never varies.

use crate::codec::narrow;
use crate::document::{Document, InputsSet, PayPeriodDocument, PeriodSummaryDocument};
use crate::error::{CommitError, Result};
use crate::frame::{ObjectEncoder, ObjectKind};
use crate::hash::{hash_domain, Domain};
use crate::sort::sort_inputs;
use crate::types::Hash32;

/// Encode a pay-period document to canonical bytes.
///
/// Field order: versions, agreement, epoch, worker and employer name hashes,
/// currency, gross/net/tax/fee, upstream inputs hash, receipt anchor and
/// height, audit anchor and height, time-commitment hash.
pub fn encode_pay_period(doc: &PayPeriodDocument) -> Result<Vec<u8>> {
    let mut enc = ObjectEncoder::new(ObjectKind::PayPeriodDoc);
    enc.versions(&doc.versions)
        .bytes32(&doc.agreement_id)
        .u32(doc.epoch_id)
        .field_str(&doc.worker_name_hash)?
        .field_str(&doc.employer_name_hash)?
        .u8(doc.currency_code)
        .amounts(doc.amounts.in_order())?
        .bytes32(&doc.payroll_inputs_hash)
        .anchor(&doc.receipt)
        .anchor(&doc.audit)
        .bytes32(&doc.utc_time_hash);
    Ok(enc.finish())
}

/// Encode a period-summary document to canonical bytes.
///
/// The period kind precedes the agreement id; start and end follow it.
pub fn encode_period_summary(doc: &PeriodSummaryDocument) -> Result<Vec<u8>> {
    let mut enc = ObjectEncoder::new(ObjectKind::PeriodSummaryDoc);
    enc.versions(&doc.versions)
        .u8(doc.period.kind.to_u8())
        .bytes32(&doc.agreement_id)
        .u32(doc.period.start)
        .u32(doc.period.end)
        .field_str(&doc.worker_name_hash)?
        .field_str(&doc.employer_name_hash)?
        .u8(doc.currency_code)
        .amounts(doc.totals.in_order())?
        .bytes32(&doc.inputs_hash)
        .anchor(&doc.audit);
    Ok(enc.finish())
}

/// Encode an inputs set to canonical bytes.
///
/// Items are written in canonical order, so any permutation of `items`
/// yields identical bytes. An empty set is rejected.
pub fn encode_inputs_set(set: &InputsSet) -> Result<Vec<u8>> {
    if set.items.is_empty() {
        return Err(CommitError::Input(
            "inputs set must contain at least one item".into(),
        ));
    }
    let count: u32 = narrow("item_count", set.items.len() as u64)?;

    let mut enc = ObjectEncoder::new(ObjectKind::InputsSet);
    enc.versions(&set.versions)
        .bytes32(&set.agreement_id)
        .u8(set.period.kind.to_u8())
        .u32(set.period.start)
        .u32(set.period.end)
        .u8(set.currency_code)
        .u32(count);

    for item in sort_inputs(&set.items) {
        enc.anchor(&item.receipt)
            .bytes32(&item.payroll_inputs_hash)
            .u8(item.kind.to_u8());
    }
    Ok(enc.finish())
}

/// Document hash of a pay-period document.
pub fn pay_period_hash(doc: &PayPeriodDocument) -> Result<Hash32> {
    Ok(hash_domain(Domain::Document, &encode_pay_period(doc)?))
}

/// Document hash of a period-summary document.
pub fn period_summary_hash(doc: &PeriodSummaryDocument) -> Result<Hash32> {
    Ok(hash_domain(Domain::Document, &encode_period_summary(doc)?))
}

/// Inputs hash of an inputs set.
pub fn inputs_hash(set: &InputsSet) -> Result<Hash32> {
    Ok(hash_domain(Domain::Inputs, &encode_inputs_set(set)?))
}

impl Document {
    /// Encode to canonical bytes with the encoder for this kind.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Document::PayPeriod(doc) => encode_pay_period(doc),
            Document::PeriodSummary(doc) => encode_period_summary(doc),
            Document::InputsSet(set) => encode_inputs_set(set),
        }
    }

    /// The domain this kind's hash is computed under.
    pub fn hash_domain(&self) -> Domain {
        match self {
            Document::PayPeriod(_) | Document::PeriodSummary(_) => Domain::Document,
            Document::InputsSet(_) => Domain::Inputs,
        }
    }

    /// Hash the canonical bytes under this kind's domain.
    pub fn hash(&self) -> Result<Hash32> {
        Ok(hash_domain(self.hash_domain(), &self.encode()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Amounts, InputsItem};
    use crate::frame::{read_header, ENCODING_VERSION};
    use crate::types::{
        AnchorRef, CanonicalDecimal, PeriodKind, PeriodRange, ReceiptKind, VersionTriplet,
        CURRENCY_USDCX,
    };

    const GOLDEN_PAY_PERIOD_HEX: &str = concat!(
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
    );

    fn golden_pay_period() -> PayPeriodDocument {
        PayPeriodDocument {
            versions: VersionTriplet::INITIAL,
            agreement_id: Hash32([0x11; 32]),
            epoch_id: 1,
            worker_name_hash: CanonicalDecimal::zero(),
            employer_name_hash: CanonicalDecimal::zero(),
            currency_code: CURRENCY_USDCX,
            amounts: Amounts::from_units(100_000, 85_000, 12_000, 3_000),
            payroll_inputs_hash: Hash32::ZERO,
            receipt: AnchorRef::new(Hash32([0xaa; 32]), 100),
            audit: AnchorRef::ABSENT,
            utc_time_hash: Hash32::ZERO,
        }
    }

    fn sample_inputs(items: Vec<InputsItem>) -> InputsSet {
        InputsSet {
            versions: VersionTriplet::INITIAL,
            agreement_id: Hash32([0x11; 32]),
            period: PeriodRange::new(PeriodKind::Quarter, 1, 13),
            currency_code: CURRENCY_USDCX,
            items,
        }
    }

    fn item(anchor: u8, height: u32, upstream: u8, kind: ReceiptKind) -> InputsItem {
        InputsItem {
            receipt: AnchorRef::new(Hash32([anchor; 32]), height),
            payroll_inputs_hash: Hash32([upstream; 32]),
            kind,
        }
    }

    #[test]
    fn test_golden_pay_period_bytes() {
        let bytes = encode_pay_period(&golden_pay_period()).unwrap();
        assert_eq!(bytes.len(), 259);
        assert_eq!(hex::encode(&bytes), GOLDEN_PAY_PERIOD_HEX);
        assert_eq!(
            pay_period_hash(&golden_pay_period()).unwrap().to_hex(),
            "0329bb20cca0701387592a56923220aa3855bc56b8c8f9c1a8d4a2181c608ae1"
        );
    }

    #[test]
    fn test_encoding_deterministic() {
        let doc = golden_pay_period();
        assert_eq!(
            encode_pay_period(&doc).unwrap(),
            encode_pay_period(&doc.clone()).unwrap()
        );
    }

    #[test]
    fn test_absent_audit_still_encoded() {
        let mut with_audit = golden_pay_period();
        with_audit.audit = AnchorRef::new(Hash32([0xdd; 32]), 7);
        let a = encode_pay_period(&golden_pay_period()).unwrap();
        let b = encode_pay_period(&with_audit).unwrap();
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn test_inputs_set_sorted_by_height() {
        let set = sample_inputs(vec![
            item(0xbb, 50, 0x01, ReceiptKind::Paystub),
            item(0xcc, 10, 0x02, ReceiptKind::Reversal),
        ]);
        let bytes = encode_inputs_set(&set).unwrap();

        // Header, three versions, agreement, kind, start, end, currency, count.
        let first_item = 4 + 3 * 5 + 35 + 4 + 7 + 7 + 4 + 7;
        assert_eq!(&bytes[first_item..first_item + 3], &[0x04, 0x00, 0x20]);
        assert_eq!(bytes[first_item + 3], 0xcc);

        assert_eq!(
            inputs_hash(&set).unwrap().to_hex(),
            "09e43ba7a6db63213cf927b7d35bc4f2a50435e4747f1578aca30a4f4b578eab"
        );
    }

    #[test]
    fn test_inputs_set_permutation_invariant() {
        let a = sample_inputs(vec![
            item(0xbb, 50, 0x01, ReceiptKind::Paystub),
            item(0xcc, 10, 0x02, ReceiptKind::Reversal),
            item(0x0a, 10, 0x03, ReceiptKind::Paystub),
        ]);
        let mut b = a.clone();
        b.items.reverse();
        assert_eq!(encode_inputs_set(&a).unwrap(), encode_inputs_set(&b).unwrap());
    }

    #[test]
    fn test_empty_inputs_set_rejected() {
        let err = encode_inputs_set(&sample_inputs(vec![])).unwrap_err();
        assert!(err.is_input());
        assert!(inputs_hash(&sample_inputs(vec![])).is_err());
    }

    #[test]
    fn test_summary_period_kind_before_agreement() {
        let doc = PeriodSummaryDocument {
            versions: VersionTriplet::INITIAL,
            agreement_id: Hash32([0x11; 32]),
            period: PeriodRange::new(PeriodKind::Ytd, 1, 52),
            worker_name_hash: CanonicalDecimal::zero(),
            employer_name_hash: CanonicalDecimal::zero(),
            currency_code: CURRENCY_USDCX,
            totals: Amounts::from_units(0, 0, 0, 0),
            inputs_hash: Hash32::ZERO,
            audit: AnchorRef::ABSENT,
        };
        let bytes = encode_period_summary(&doc).unwrap();
        assert_eq!(
            read_header(&bytes),
            Some((ObjectKind::PeriodSummaryDoc, ENCODING_VERSION))
        );
        // Kind chunk sits right after the three version chunks.
        assert_eq!(&bytes[19..23], &[0x01, 0x00, 0x01, 0x03]);
        assert_eq!(&bytes[23..26], &[0x04, 0x00, 0x20]);
    }

    #[test]
    fn test_document_dispatch_matches_direct() {
        let pp = golden_pay_period();
        let doc = Document::from(pp.clone());
        assert_eq!(doc.encode().unwrap(), encode_pay_period(&pp).unwrap());
        assert_eq!(doc.hash().unwrap(), pay_period_hash(&pp).unwrap());

        let set = sample_inputs(vec![item(0xbb, 50, 0x01, ReceiptKind::Paystub)]);
        let doc = Document::from(set.clone());
        assert_eq!(doc.hash_domain(), Domain::Inputs);
        assert_eq!(doc.hash().unwrap(), inputs_hash(&set).unwrap());
    }

    #[test]
    fn test_document_and_inputs_domains_differ() {
        // Same bytes hashed as a document and as an inputs set must differ.
        let set = sample_inputs(vec![item(0xbb, 50, 0x01, ReceiptKind::Paystub)]);
        let bytes = encode_inputs_set(&set).unwrap();
        assert_ne!(
            hash_domain(Domain::Document, &bytes),
            inputs_hash(&set).unwrap()
        );
    }
}
