//! Golden vectors for cross-implementation verification.
//!
//! Every implementation must reproduce these bytes and hashes exactly:
//! - canonical document bytes
//! - document and inputs-set hashes
//! - leaf hashes and Merkle roots
//! - record identifiers

use paycommit::{
    encode_inputs_set, encode_pay_period, encode_period_summary, inputs_hash, pay_period_hash,
    period_summary_hash, Amounts, AnchorRef, CanonicalDecimal, Committer, Disclosure, Hash32,
    InputsItem, InputsSet, LeafId, Partitioned, PayPeriodDocument, PeriodKind, PeriodRange,
    PeriodSummaryDocument, ReceiptKind, Scope, VersionTriplet, CURRENCY_USDCX,
};

const PAY_PERIOD_BYTES: &str = concat!(
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
const PAY_PERIOD_HASH: &str = "0329bb20cca0701387592a56923220aa3855bc56b8c8f9c1a8d4a2181c608ae1";
const PAY_PERIOD_ROOT: &str = "70e7996c7948289323b1dc30b31594f1b39cf3077fb1b6bfb00406da4bbb83c2";
const PAY_PERIOD_RECORD_ID: &str =
    "95fd71aea58bc210b3c79a69a4d8aafea43bef7266e51c21dd815689472649fa";

const INPUTS_BYTES: &str = concat!(
    "20010001020002000102000200010200020001",
    "0400201111111111111111111111111111111111111111111111111111111111111111",
    "01000102",
    "03000400000001",
    "0300040000000d",
    "01000101",
    "03000400000002",
    "040020cccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc",
    "0300040000000a",
    "0400200202020202020202020202020202020202020202020202020202020202020202",
    "01000102",
    "040020bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
    "03000400000032",
    "0400200101010101010101010101010101010101010101010101010101010101010101",
    "01000101",
);
const INPUTS_HASH: &str = "09e43ba7a6db63213cf927b7d35bc4f2a50435e4747f1578aca30a4f4b578eab";

const SUMMARY_BYTES: &str = concat!(
    "10020001020002000102000200010200020001010001020400201111111111111111",
    "111111111111111111111111111111111111111111111111030004000000010300040000000d",
    "050009313233343536373839050009393837363534333231010001010800073133303030",
    "303008000731313035303030080006313536303030080005333930303004002009e43ba7",
    "a6db63213cf927b7d35bc4f2a50435e4747f1578aca30a4f4b578eab040020dddddddddd",
    "dddddddddddddddddddddddddddddddddddddddddddddddddddddd03000400001388",
);
const SUMMARY_HASH: &str = "427aa900399529b4746abdfaae54b6587a25e48078bfb9b1da550afd244550d2";
const SUMMARY_LEAF_HASHES: [&str; 3] = [
    "4a3bc8ccf278909fc7d7015cab3dfff1f3ed0afdfc0c57d50c441569e47f3a41",
    "00a48a6b8b91eef7f40d2c37a0fa4fef2f2b33070e05ac2a265173e0ee5c5f4d",
    "fd1677e79b7fe8efc6cf160fba0d4158270eda73c5b22c22492a501a6f527175",
];
const SUMMARY_ROOT: &str = "fced88146d70075c55a160946f96763d8556749855b4e7f5a4fad7b9e418fd11";
const SUMMARY_RECORD_ID: &str =
    "ceddbd399329735c8595749effccc93409e05c4c87c4746b2f18b0310e9733c6";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

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

fn golden_inputs() -> InputsSet {
    InputsSet {
        versions: VersionTriplet::INITIAL,
        agreement_id: Hash32([0x11; 32]),
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

fn golden_summary() -> PeriodSummaryDocument {
    PeriodSummaryDocument {
        versions: VersionTriplet::INITIAL,
        agreement_id: Hash32([0x11; 32]),
        period: PeriodRange::new(PeriodKind::Quarter, 1, 13),
        worker_name_hash: "123456789".parse().unwrap(),
        employer_name_hash: "987654321".parse().unwrap(),
        currency_code: CURRENCY_USDCX,
        totals: Amounts::from_units(1_300_000, 1_105_000, 156_000, 39_000),
        inputs_hash: INPUTS_HASH.parse().unwrap(),
        audit: AnchorRef::new(Hash32([0xdd; 32]), 5000),
    }
}

#[test]
fn golden_pay_period_bytes_and_hash() {
    let bytes = encode_pay_period(&golden_pay_period()).unwrap();
    assert_eq!(hex::encode(&bytes), PAY_PERIOD_BYTES);
    assert_eq!(
        pay_period_hash(&golden_pay_period()).unwrap().to_hex(),
        PAY_PERIOD_HASH
    );
    assert_eq!(
        golden_pay_period().merkle_root().unwrap().to_hex(),
        PAY_PERIOD_ROOT
    );
}

#[test]
fn golden_inputs_set_sorted() {
    let set = golden_inputs();
    assert_eq!(hex::encode(encode_inputs_set(&set).unwrap()), INPUTS_BYTES);
    assert_eq!(inputs_hash(&set).unwrap().to_hex(), INPUTS_HASH);

    // Supplying the items in the other order changes nothing.
    let mut reversed = set.clone();
    reversed.items.reverse();
    assert_eq!(
        encode_inputs_set(&reversed).unwrap(),
        encode_inputs_set(&set).unwrap()
    );
}

#[test]
fn golden_summary_bytes_and_leaves() {
    let doc = golden_summary();
    assert_eq!(hex::encode(encode_period_summary(&doc).unwrap()), SUMMARY_BYTES);
    assert_eq!(period_summary_hash(&doc).unwrap().to_hex(), SUMMARY_HASH);

    let leaves: Vec<String> = doc
        .leaf_hashes()
        .unwrap()
        .iter()
        .map(Hash32::to_hex)
        .collect();
    assert_eq!(leaves, SUMMARY_LEAF_HASHES);
    assert_eq!(doc.merkle_root().unwrap().to_hex(), SUMMARY_ROOT);
}

#[test]
fn golden_bundles() {
    init_tracing();
    let committer = Committer::default();

    let bundle = committer.commit_pay_period(&golden_pay_period()).unwrap();
    assert_eq!(bundle.doc_hash.to_hex(), PAY_PERIOD_HASH);
    assert_eq!(bundle.root.to_hex(), PAY_PERIOD_ROOT);
    assert_eq!(bundle.record_id.to_hex(), PAY_PERIOD_RECORD_ID);

    let bundle = committer
        .commit_period_summary(&golden_summary(), &golden_inputs(), 20261)
        .unwrap();
    assert_eq!(bundle.scope, Scope::Quarterly);
    assert_eq!(bundle.doc_hash.to_hex(), SUMMARY_HASH);
    assert_eq!(bundle.inputs_hash.to_hex(), INPUTS_HASH);
    assert_eq!(bundle.root.to_hex(), SUMMARY_ROOT);
    assert_eq!(bundle.record_id.to_hex(), SUMMARY_RECORD_ID);

    let json: serde_json::Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();
    assert_eq!(json["record_id"], SUMMARY_RECORD_ID);
    assert_eq!(json["scope"], "QUARTERLY");
}

#[test]
fn disclosure_survives_json() {
    init_tracing();
    let committer = Committer::default();
    let disclosure = committer
        .disclose_period_summary(&golden_summary(), LeafId::Amounts)
        .unwrap();
    assert_eq!(disclosure.root.to_hex(), SUMMARY_ROOT);
    assert_eq!(disclosure.leaf_hash.to_hex(), SUMMARY_LEAF_HASHES[1]);

    let json = disclosure.to_json().unwrap();
    let parsed = Disclosure::from_json(&json).unwrap();
    assert_eq!(parsed, disclosure);
    assert!(parsed.verify());
    assert!(parsed.verify_against(&SUMMARY_ROOT.parse().unwrap()));
}

#[test]
fn disclosure_bound_to_anchored_root() {
    let committer = Committer::default();
    let anchored: Hash32 = PAY_PERIOD_ROOT.parse().unwrap();

    let honest = committer
        .disclose_pay_period(&golden_pay_period(), LeafId::Amounts)
        .unwrap();
    assert!(honest.verify_against(&anchored));

    // Inflated gross, packaged with the root of the inflated document.
    let mut inflated = golden_pay_period();
    inflated.amounts.gross = "999999999".parse().unwrap();
    let forged = committer
        .disclose_pay_period(&inflated, LeafId::Amounts)
        .unwrap();
    assert!(forged.verify());
    assert_ne!(forged.root, anchored);
    assert!(!forged.verify_against(&anchored));

    // Swapping in the anchored root breaks the proof instead.
    let mut rerooted = forged;
    rerooted.root = anchored;
    assert!(!rerooted.verify_against(&anchored));
}

#[test]
fn tampered_disclosure_rejected() {
    let committer = Committer::default();
    let honest = committer
        .disclose_pay_period(&golden_pay_period(), LeafId::Amounts)
        .unwrap();

    // Flip the last digit of the fee.
    let mut d = honest.clone();
    let last = d.leaf_bytes.len() - 1;
    d.leaf_bytes[last] ^= 0x01;
    assert!(!d.verify());

    // Claim a different leaf id for the same bytes.
    let mut d = honest.clone();
    d.leaf = LeafId::Binding;
    assert!(!d.verify());

    // Claim the summary leaf kind.
    let mut d = honest.clone();
    d.object_kind = 0x3002;
    assert!(!d.verify());

    // Wrong root.
    let mut d = honest;
    d.root.0[31] ^= 0xff;
    assert!(!d.verify());
}
