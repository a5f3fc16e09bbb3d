//! Payroll document types.
//!
//! Every struct carries every field. Optional audit linkage is an
//! [`AnchorRef`] that is [`AnchorRef::ABSENT`] when missing, so the byte
//! layout never depends on presence.

use serde::{Deserialize, Serialize};

use crate::frame::ObjectKind;
use crate::types::{
    AnchorRef, CanonicalDecimal, Hash32, PeriodRange, ReceiptKind, VersionTriplet,
};

/// Money amounts in ledger units, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amounts {
    pub gross: CanonicalDecimal,
    pub net: CanonicalDecimal,
    pub tax_withheld: CanonicalDecimal,
    pub fee: CanonicalDecimal,
}

impl Amounts {
    /// Create from integer ledger units.
    pub fn from_units(gross: u128, net: u128, tax_withheld: u128, fee: u128) -> Self {
        Self {
            gross: gross.into(),
            net: net.into(),
            tax_withheld: tax_withheld.into(),
            fee: fee.into(),
        }
    }

    /// The four amounts as gross, net, tax, fee.
    pub fn in_order(&self) -> [&CanonicalDecimal; 4] {
        [&self.gross, &self.net, &self.tax_withheld, &self.fee]
    }
}

/// One payroll cycle's settlement (a paystub).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodDocument {
    pub versions: VersionTriplet,
    pub agreement_id: Hash32,
    /// Caller-defined cycle marker.
    pub epoch_id: u32,
    /// Field-element hash of the worker name.
    pub worker_name_hash: CanonicalDecimal,
    /// Field-element hash of the employer name.
    pub employer_name_hash: CanonicalDecimal,
    pub currency_code: u8,
    pub amounts: Amounts,
    /// Hash of the upstream payroll inputs this settlement was computed from.
    pub payroll_inputs_hash: Hash32,
    pub receipt: AnchorRef,
    #[serde(default)]
    pub audit: AnchorRef,
    /// Commitment to the settlement's wall-clock time.
    pub utc_time_hash: Hash32,
}

/// Aggregate over a period range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummaryDocument {
    pub versions: VersionTriplet,
    pub agreement_id: Hash32,
    pub period: PeriodRange,
    pub worker_name_hash: CanonicalDecimal,
    pub employer_name_hash: CanonicalDecimal,
    pub currency_code: u8,
    pub totals: Amounts,
    /// Hash of the [`InputsSet`] backing these totals.
    pub inputs_hash: Hash32,
    #[serde(default)]
    pub audit: AnchorRef,
}

/// One receipt reference backing a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputsItem {
    pub receipt: AnchorRef,
    pub payroll_inputs_hash: Hash32,
    pub kind: ReceiptKind,
}

/// The receipts behind a [`PeriodSummaryDocument`]'s inputs hash.
///
/// Item order as supplied is irrelevant; encoding sorts canonically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputsSet {
    pub versions: VersionTriplet,
    pub agreement_id: Hash32,
    pub period: PeriodRange,
    pub currency_code: u8,
    pub items: Vec<InputsItem>,
}

/// Any document that can be hashed, selected by an exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "doc_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Document {
    PayPeriod(PayPeriodDocument),
    PeriodSummary(PeriodSummaryDocument),
    InputsSet(InputsSet),
}

impl Document {
    /// The object kind this document is framed under.
    pub fn object_kind(&self) -> ObjectKind {
        match self {
            Document::PayPeriod(_) => ObjectKind::PayPeriodDoc,
            Document::PeriodSummary(_) => ObjectKind::PeriodSummaryDoc,
            Document::InputsSet(_) => ObjectKind::InputsSet,
        }
    }

    /// The agreement this document belongs to.
    pub fn agreement_id(&self) -> &Hash32 {
        match self {
            Document::PayPeriod(d) => &d.agreement_id,
            Document::PeriodSummary(d) => &d.agreement_id,
            Document::InputsSet(s) => &s.agreement_id,
        }
    }
}

impl From<PayPeriodDocument> for Document {
    fn from(doc: PayPeriodDocument) -> Self {
        Document::PayPeriod(doc)
    }
}

impl From<PeriodSummaryDocument> for Document {
    fn from(doc: PeriodSummaryDocument) -> Self {
        Document::PeriodSummary(doc)
    }
}

impl From<InputsSet> for Document {
    fn from(set: InputsSet) -> Self {
        Document::InputsSet(set)
    }
}
