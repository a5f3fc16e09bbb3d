//! Proptest generators for property-based testing.

use proptest::prelude::*;

use paycommit_core::{
    Amounts, AnchorRef, CanonicalDecimal, Hash32, InputsItem, InputsSet, PayPeriodDocument,
    PeriodKind, PeriodRange, PeriodSummaryDocument, ReceiptKind, VersionTriplet, CURRENCY_USDCX,
};

/// Generate a random Hash32.
pub fn hash32() -> impl Strategy<Value = Hash32> {
    any::<[u8; 32]>().prop_map(Hash32::from_bytes)
}

/// Generate a canonical decimal from any u128.
pub fn decimal() -> impl Strategy<Value = CanonicalDecimal> {
    any::<u128>().prop_map(CanonicalDecimal::from)
}

/// Generate a long canonical decimal, beyond any native integer width.
pub fn big_decimal() -> impl Strategy<Value = CanonicalDecimal> {
    "[1-9][0-9]{0,120}".prop_map(|s| {
        CanonicalDecimal::parse(&s).unwrap_or_else(|_| CanonicalDecimal::zero())
    })
}

/// Generate decimal text that is never canonical.
pub fn non_canonical_decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "0[0-9]{1,10}",
        "-[0-9]{1,10}",
        "[0-9]{0,5}[a-zA-Z .+][0-9]{0,5}",
    ]
}

pub fn versions() -> impl Strategy<Value = VersionTriplet> {
    (any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(s, c, p)| VersionTriplet::new(s, c, p))
}

pub fn period_kind() -> impl Strategy<Value = PeriodKind> {
    prop_oneof![
        Just(PeriodKind::Cycle),
        Just(PeriodKind::Quarter),
        Just(PeriodKind::Ytd),
        Just(PeriodKind::Eoy),
    ]
}

pub fn period_range() -> impl Strategy<Value = PeriodRange> {
    (period_kind(), any::<u32>(), any::<u32>())
        .prop_map(|(kind, start, end)| PeriodRange::new(kind, start, end))
}

pub fn receipt_kind() -> impl Strategy<Value = ReceiptKind> {
    prop_oneof![Just(ReceiptKind::Paystub), Just(ReceiptKind::Reversal)]
}

/// Generate an anchor, absent about a quarter of the time.
pub fn anchor() -> impl Strategy<Value = AnchorRef> {
    prop_oneof![
        1 => Just(AnchorRef::ABSENT),
        3 => (hash32(), any::<u32>()).prop_map(|(h, height)| AnchorRef::new(h, height)),
    ]
}

pub fn amounts() -> impl Strategy<Value = Amounts> {
    (decimal(), decimal(), decimal(), decimal()).prop_map(|(gross, net, tax_withheld, fee)| {
        Amounts {
            gross,
            net,
            tax_withheld,
            fee,
        }
    })
}

pub fn inputs_item() -> impl Strategy<Value = InputsItem> {
    (hash32(), any::<u32>(), hash32(), receipt_kind()).prop_map(|(anchor, height, upstream, kind)| {
        InputsItem {
            receipt: AnchorRef::new(anchor, height),
            payroll_inputs_hash: upstream,
            kind,
        }
    })
}

/// Generate a non-empty inputs set of up to `max_items` items.
///
/// Heights are drawn from a small range so ties on height are common.
pub fn inputs_set(max_items: usize) -> impl Strategy<Value = InputsSet> {
    let item = (hash32(), 0u32..8, hash32(), receipt_kind()).prop_map(
        |(anchor, height, upstream, kind)| InputsItem {
            receipt: AnchorRef::new(anchor, height),
            payroll_inputs_hash: upstream,
            kind,
        },
    );
    (
        versions(),
        hash32(),
        period_range(),
        prop::collection::vec(item, 1..=max_items.max(1)),
    )
        .prop_map(|(versions, agreement_id, period, items)| InputsSet {
            versions,
            agreement_id,
            period,
            currency_code: CURRENCY_USDCX,
            items,
        })
}

pub fn pay_period_document() -> impl Strategy<Value = PayPeriodDocument> {
    (
        (versions(), hash32(), any::<u32>(), decimal(), decimal()),
        (amounts(), hash32(), anchor(), anchor(), hash32()),
    )
        .prop_map(
            |(
                (versions, agreement_id, epoch_id, worker_name_hash, employer_name_hash),
                (amounts, payroll_inputs_hash, receipt, audit, utc_time_hash),
            )| PayPeriodDocument {
                versions,
                agreement_id,
                epoch_id,
                worker_name_hash,
                employer_name_hash,
                currency_code: CURRENCY_USDCX,
                amounts,
                payroll_inputs_hash,
                receipt,
                audit,
                utc_time_hash,
            },
        )
}

pub fn period_summary_document() -> impl Strategy<Value = PeriodSummaryDocument> {
    (
        (versions(), hash32(), period_range(), decimal(), decimal()),
        (amounts(), hash32(), anchor()),
    )
        .prop_map(
            |(
                (versions, agreement_id, period, worker_name_hash, employer_name_hash),
                (totals, inputs_hash, audit),
            )| PeriodSummaryDocument {
                versions,
                agreement_id,
                period,
                worker_name_hash,
                employer_name_hash,
                currency_code: CURRENCY_USDCX,
                totals,
                inputs_hash,
                audit,
            },
        )
}

/// Generate between 1 and `max` leaf hashes.
pub fn leaf_hashes(max: usize) -> impl Strategy<Value = Vec<Hash32>> {
    prop::collection::vec(hash32(), 1..=max.max(1))
}
