//! Canonical ordering of inputs-set items.
//!
//! Items are ordered by receipt height ascending, then by receipt anchor
//! bytes ascending. Byte order on the anchor is the same as lexicographic
//! order of its lowercase hex, so both views agree.
//!
//! Items sharing height and anchor fall back to upstream hash, then kind,
//! so distinct items never compare equal.

use std::cmp::Ordering;

use crate::document::InputsItem;

/// Compare two items in canonical order.
pub fn canonical_order(a: &InputsItem, b: &InputsItem) -> Ordering {
    a.receipt
        .height
        .cmp(&b.receipt.height)
        .then_with(|| a.receipt.anchor.cmp(&b.receipt.anchor))
        .then_with(|| a.payroll_inputs_hash.cmp(&b.payroll_inputs_hash))
        .then_with(|| a.kind.to_u8().cmp(&b.kind.to_u8()))
}

/// Return references to `items` in canonical order.
pub fn sort_inputs(items: &[InputsItem]) -> Vec<&InputsItem> {
    let mut sorted: Vec<&InputsItem> = items.iter().collect();
    sorted.sort_by(|a, b| canonical_order(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnchorRef, Hash32, ReceiptKind};

    fn item(anchor: u8, height: u32) -> InputsItem {
        InputsItem {
            receipt: AnchorRef::new(Hash32([anchor; 32]), height),
            payroll_inputs_hash: Hash32([anchor ^ 0xff; 32]),
            kind: ReceiptKind::Paystub,
        }
    }

    #[test]
    fn test_height_first() {
        let items = vec![item(0x01, 50), item(0xff, 10)];
        let sorted = sort_inputs(&items);
        assert_eq!(sorted[0].receipt.height, 10);
        assert_eq!(sorted[1].receipt.height, 50);
    }

    #[test]
    fn test_anchor_breaks_ties() {
        let items = vec![item(0xcc, 7), item(0xbb, 7), item(0x0a, 7)];
        let sorted = sort_inputs(&items);
        let anchors: Vec<u8> = sorted.iter().map(|i| i.receipt.anchor.0[0]).collect();
        assert_eq!(anchors, vec![0x0a, 0xbb, 0xcc]);
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let a = vec![item(3, 1), item(1, 2), item(2, 1)];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(sort_inputs(&a), sort_inputs(&b));
    }

    #[test]
    fn test_full_ties_resolved() {
        let mut a = item(0x05, 3);
        let mut b = item(0x05, 3);
        a.payroll_inputs_hash = Hash32([0x02; 32]);
        b.payroll_inputs_hash = Hash32([0x01; 32]);
        assert_eq!(canonical_order(&a, &b), Ordering::Greater);

        b.payroll_inputs_hash = a.payroll_inputs_hash;
        b.kind = ReceiptKind::Reversal;
        assert_eq!(canonical_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_compare() {
        assert_eq!(canonical_order(&item(9, 1), &item(1, 2)), Ordering::Less);
        assert_eq!(canonical_order(&item(1, 2), &item(1, 2)), Ordering::Equal);
    }
}
