use crate::test_helpers::{cause, cause_in, int, str_hint};
use hint_ir::{ClassId, ClassTable, Hint, Pith, SequenceKind};
use pretty_assertions::assert_eq;

fn ints_and(last: Pith) -> Pith {
    Pith::list(vec![Pith::Int(1), Pith::Int(2), last])
}

#[test]
fn test_first_bad_item_is_indexed() {
    let hint = Hint::sequence(SequenceKind::Sequence, int());
    assert_eq!(
        cause(&ints_and(Pith::str("x")), &hint),
        Some("list [1, 2, 'x'] index 2 item str 'x' not int".to_string())
    );
    assert_eq!(cause(&ints_and(Pith::Int(3)), &hint), None);
}

#[test]
fn test_first_failure_wins() {
    let pith = Pith::list(vec![Pith::Int(1), Pith::str("a"), Pith::str("b")]);
    assert_eq!(
        cause(&pith, &Hint::list(int())),
        Some("list [1, 'a', 'b'] index 1 item str 'a' not int".to_string())
    );
}

#[test]
fn test_wrong_container_reported_before_items() {
    assert_eq!(
        cause(&Pith::tuple(vec![Pith::Int(1)]), &Hint::list(int())),
        Some("tuple (1,) not list".to_string())
    );
    assert_eq!(
        cause(&Pith::set(vec![Pith::Int(1)]), &Hint::sequence(SequenceKind::FrozenSet, int())),
        Some("set {1} not frozenset".to_string())
    );
}

#[test]
fn test_abstract_origins_accept_concrete_containers() {
    let abstract_set = Hint::sequence(SequenceKind::AbstractSet, int());
    assert_eq!(cause(&Pith::frozenset(vec![Pith::Int(1)]), &abstract_set), None);

    let mutable = Hint::sequence(SequenceKind::MutableSequence, int());
    assert_eq!(cause(&Pith::list(vec![Pith::Int(1)]), &mutable), None);
    assert_eq!(
        cause(&Pith::tuple(vec![Pith::Int(1)]), &mutable),
        Some("tuple (1,) not MutableSequence".to_string())
    );
}

#[test]
fn test_set_items_are_not_indexed() {
    let hint = Hint::sequence(SequenceKind::Set, int());
    assert_eq!(
        cause(&Pith::set(vec![Pith::str("a")]), &hint),
        Some("set {'a'} item str 'a' not int".to_string())
    );
}

#[test]
fn test_strings_and_bytes_are_sequences() {
    let of_str = Hint::sequence(SequenceKind::Sequence, str_hint());
    let of_int = Hint::sequence(SequenceKind::Sequence, int());

    assert_eq!(cause(&Pith::str("ab"), &of_str), None);
    assert_eq!(
        cause(&Pith::str("ab"), &of_int),
        Some("str 'ab' index 0 item str 'a' not int".to_string())
    );
    assert_eq!(cause(&Pith::bytes(b"ab".to_vec()), &of_int), None);
    assert_eq!(
        cause(&Pith::str("ab"), &Hint::list(str_hint())),
        Some("str 'ab' not list".to_string())
    );
}

#[test]
fn test_ignorable_items_are_not_visited() {
    let pith = ints_and(Pith::str("x"));
    assert_eq!(cause(&pith, &Hint::list(Hint::Any)), None);
    assert_eq!(cause(&pith, &Hint::list(Hint::class(ClassId::OBJECT))), None);
}

#[test]
fn test_nested_sequences() {
    let pith = Pith::list(vec![
        Pith::list(vec![Pith::Int(1)]),
        Pith::list(vec![Pith::Int(2), Pith::str("x")]),
    ]);
    assert_eq!(
        cause(&pith, &Hint::list(Hint::list(int()))),
        Some(
            "list [[1], [2, 'x']] index 1 item list [2, 'x'] index 1 item str 'x' not int"
                .to_string()
        )
    );
}

#[test]
fn test_user_sequence_subclasses() {
    let mut classes = ClassTable::new();
    let bag = classes.define("Bag", &[ClassId::LIST]);
    let hint = Hint::list(int());

    assert_eq!(
        cause_in(
            &classes,
            &Pith::object_with_items(bag, vec![Pith::Int(3), Pith::str("y")]),
            &hint
        ),
        Some("Bag Bag([3, 'y']) index 1 item str 'y' not int".to_string())
    );
    // Nothing to inspect beyond the class.
    assert_eq!(cause_in(&classes, &Pith::object(bag), &hint), None);
}
