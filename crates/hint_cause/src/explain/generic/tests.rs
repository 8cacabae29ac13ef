use crate::test_helpers::{cause_in, int, str_hint};
use hint_ir::{ClassId, ClassTable, Hint, Pith, SequenceKind};
use pretty_assertions::assert_eq;

/// `class Box(List[int])` and `class Pair(Box, Sequence[str])`.
fn boxes() -> (ClassTable, Hint, Hint) {
    let mut classes = ClassTable::new();
    let boxed = classes.define("Box", &[ClassId::LIST]);
    let pair = classes.define("Pair", &[boxed]);
    let box_hint = Hint::generic(boxed, vec![Hint::list(int())]);
    let pair_hint = Hint::generic(
        pair,
        vec![
            box_hint.clone(),
            Hint::sequence(SequenceKind::Sequence, str_hint()),
        ],
    );
    (classes, box_hint, pair_hint)
}

#[test]
fn test_origin_checked_first() {
    let (classes, box_hint, _) = boxes();
    assert_eq!(
        cause_in(&classes, &Pith::list(vec![Pith::Int(1)]), &box_hint),
        Some("list [1] not Box".to_string())
    );
}

#[test]
fn test_base_hints_descend() {
    let (classes, box_hint, _) = boxes();
    let Some(boxed) = classes.lookup("Box") else {
        panic!("Box is defined");
    };

    let good = Pith::object_with_items(boxed, vec![Pith::Int(1)]);
    assert_eq!(cause_in(&classes, &good, &box_hint), None);

    let bad = Pith::object_with_items(boxed, vec![Pith::Int(1), Pith::str("x")]);
    assert_eq!(
        cause_in(&classes, &bad, &box_hint),
        Some("Box Box([1, 'x']) index 1 item str 'x' not int".to_string())
    );
}

#[test]
fn test_bases_visited_in_order() {
    let (classes, _, pair_hint) = boxes();
    let Some(pair) = classes.lookup("Pair") else {
        panic!("Pair is defined");
    };

    // Fails both bases; the first one declared is reported.
    let pith = Pith::object_with_items(pair, vec![Pith::Float(1.5)]);
    assert_eq!(
        cause_in(&classes, &pith, &pair_hint),
        Some("Pair Pair([1.5]) index 0 item float 1.5 not int".to_string())
    );

    // Passes the first base, fails the second.
    let pith = Pith::object_with_items(pair, vec![Pith::Int(1)]);
    assert_eq!(
        cause_in(&classes, &pith, &pair_hint),
        Some("Pair Pair([1]) index 0 item int 1 not str".to_string())
    );

    let empty = Pith::object_with_items(pair, vec![]);
    assert_eq!(cause_in(&classes, &empty, &pair_hint), None);
}

#[test]
fn test_generic_without_bases() {
    let (classes, _, _) = boxes();
    let Some(boxed) = classes.lookup("Box") else {
        panic!("Box is defined");
    };
    assert_eq!(
        cause_in(&classes, &Pith::object(boxed), &Hint::generic(boxed, vec![])),
        None
    );
}
