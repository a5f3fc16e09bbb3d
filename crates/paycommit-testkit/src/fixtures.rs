//! Test fixtures and helpers.
//!
//! Common documents for integration tests, plus seeded shuffling so
//! order-independence checks are reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use paycommit::Committer;
use paycommit_core::{
    inputs_hash, Amounts, AnchorRef, CanonicalDecimal, CommitError, Hash32, InputsItem, InputsSet,
    PayPeriodDocument, PeriodKind, PeriodRange, PeriodSummaryDocument, ReceiptKind,
    VersionTriplet, CURRENCY_USDCX,
};

/// Agreement id shared by every golden document.
pub const GOLDEN_AGREEMENT: Hash32 = Hash32([0x11; 32]);

/// The golden pay-period document: one weekly cycle, audit absent.
pub fn golden_pay_period() -> PayPeriodDocument {
    PayPeriodDocument {
        versions: VersionTriplet::INITIAL,
        agreement_id: GOLDEN_AGREEMENT,
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

/// Two receipts for Q1, supplied out of canonical order.
pub fn golden_inputs_set() -> InputsSet {
    InputsSet {
        versions: VersionTriplet::INITIAL,
        agreement_id: GOLDEN_AGREEMENT,
        period: PeriodRange::new(PeriodKind::Quarter, 1, 13),
        currency_code: CURRENCY_USDCX,
        items: vec![
            InputsItem {
                receipt: AnchorRef::new(Hash32([0xbb; 32]), 50),
                payroll_inputs_hash: Hash32([0x01; 32]),
                kind: ReceiptKind::Paystub,
            },
            InputsItem {
                receipt: AnchorRef::new(Hash32([0xcc; 32]), 10),
                payroll_inputs_hash: Hash32([0x02; 32]),
                kind: ReceiptKind::Reversal,
            },
        ],
    }
}

/// Q1 summary backed by [`golden_inputs_set`], with an audit anchor.
pub fn golden_summary() -> PeriodSummaryDocument {
    PeriodSummaryDocument {
        versions: VersionTriplet::INITIAL,
        agreement_id: GOLDEN_AGREEMENT,
        period: PeriodRange::new(PeriodKind::Quarter, 1, 13),
        worker_name_hash: CanonicalDecimal::from(123_456_789u32),
        employer_name_hash: CanonicalDecimal::from(987_654_321u32),
        currency_code: CURRENCY_USDCX,
        totals: Amounts::from_units(1_300_000, 1_105_000, 156_000, 39_000),
        inputs_hash: Hash32([
            0x09, 0xe4, 0x3b, 0xa7, 0xa6, 0xdb, 0x63, 0x21, 0x3c, 0xf9, 0x27, 0xb7, 0xd3, 0x5b,
            0xc4, 0xf2, 0xa5, 0x04, 0x35, 0xe4, 0x74, 0x7f, 0x15, 0x78, 0xac, 0xa3, 0x0a, 0x4f,
            0x4b, 0x57, 0x8e, 0xab,
        ]),
        audit: AnchorRef::new(Hash32([0xdd; 32]), 5000),
    }
}

/// Shuffle a copy of `items` with a seeded RNG.
pub fn shuffled<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = items.to_vec();
    out.shuffle(&mut rng);
    out
}

/// A fixture for one agreement: a committer and document builders.
pub struct PayrollFixture {
    pub committer: Committer,
    pub agreement_id: Hash32,
}

impl PayrollFixture {
    /// Create a fixture for the golden agreement.
    pub fn new() -> Self {
        Self::with_agreement(GOLDEN_AGREEMENT)
    }

    /// Create a fixture for a specific agreement.
    pub fn with_agreement(agreement_id: Hash32) -> Self {
        Self {
            committer: Committer::default(),
            agreement_id,
        }
    }

    /// A pay period for `epoch` with net = gross - tax - fee.
    pub fn make_pay_period(&self, epoch: u32, gross: u64, tax: u64, fee: u64) -> PayPeriodDocument {
        let net = gross.saturating_sub(tax).saturating_sub(fee);
        PayPeriodDocument {
            versions: VersionTriplet::INITIAL,
            agreement_id: self.agreement_id,
            epoch_id: epoch,
            worker_name_hash: CanonicalDecimal::from(1u8),
            employer_name_hash: CanonicalDecimal::from(2u8),
            currency_code: CURRENCY_USDCX,
            amounts: Amounts::from_units(gross.into(), net.into(), tax.into(), fee.into()),
            payroll_inputs_hash: Hash32([epoch as u8; 32]),
            receipt: AnchorRef::new(Hash32([0xa0 ^ epoch as u8; 32]), epoch.saturating_mul(10)),
            audit: AnchorRef::ABSENT,
            utc_time_hash: Hash32::ZERO,
        }
    }

    /// An inputs set over `count` paystub receipts for `period`.
    pub fn make_inputs(&self, period: PeriodRange, count: u32) -> InputsSet {
        let items = (0..count)
            .map(|i| InputsItem {
                receipt: AnchorRef::new(Hash32([i as u8; 32]), count - i),
                payroll_inputs_hash: Hash32([0x40 ^ i as u8; 32]),
                kind: ReceiptKind::Paystub,
            })
            .collect();
        InputsSet {
            versions: VersionTriplet::INITIAL,
            agreement_id: self.agreement_id,
            period,
            currency_code: CURRENCY_USDCX,
            items,
        }
    }

    /// A summary consistent with `inputs`. Fails if `inputs` is empty.
    pub fn make_summary(
        &self,
        inputs: &InputsSet,
        totals: Amounts,
    ) -> Result<PeriodSummaryDocument, CommitError> {
        Ok(PeriodSummaryDocument {
            versions: inputs.versions,
            agreement_id: inputs.agreement_id,
            period: inputs.period,
            worker_name_hash: CanonicalDecimal::from(1u8),
            employer_name_hash: CanonicalDecimal::from(2u8),
            currency_code: inputs.currency_code,
            totals,
            inputs_hash: inputs_hash(inputs)?,
            audit: AnchorRef::ABSENT,
        })
    }
}

impl Default for PayrollFixture {
    fn default() -> Self {
        Self::new()
    }
}
