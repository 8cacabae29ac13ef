use super::*;
use crate::hint::{MappingKind, SequenceKind};
use pretty_assertions::assert_eq;

#[test]
fn test_format_scalars() {
    let table = ClassTable::new();
    assert_eq!(table.format_pith(&Pith::None), "None");
    assert_eq!(table.format_pith(&Pith::Bool(false)), "False");
    assert_eq!(table.format_pith(&Pith::Int(-42)), "-42");
    assert_eq!(table.format_pith(&Pith::Float(2.5)), "2.5");
    assert_eq!(table.format_pith(&Pith::Float(2.0)), "2.0");
    assert_eq!(table.format_pith(&Pith::Float(f64::NEG_INFINITY)), "-inf");
}

#[test]
fn test_format_strings_escape_quotes() {
    let table = ClassTable::new();
    assert_eq!(table.format_pith(&Pith::str("x")), "'x'");
    assert_eq!(table.format_pith(&Pith::str("it's\n")), "'it\\'s\\n'");
    assert_eq!(table.format_pith(&Pith::bytes(b"a\x00".to_vec())), "b'a\\x00'");
}

#[test]
fn test_format_collections() {
    let table = ClassTable::new();
    let list = Pith::list(vec![Pith::Int(1), Pith::Int(2), Pith::str("x")]);
    assert_eq!(table.format_pith(&list), "[1, 2, 'x']");
    assert_eq!(table.format_pith(&Pith::tuple(vec![Pith::Int(1)])), "(1,)");
    assert_eq!(table.format_pith(&Pith::tuple(vec![])), "()");
    assert_eq!(table.format_pith(&Pith::set(vec![])), "set()");
    assert_eq!(
        table.format_pith(&Pith::frozenset(vec![Pith::Int(1)])),
        "frozenset({1})"
    );
    let dict = Pith::dict(vec![(Pith::str("a"), Pith::Int(1))]);
    assert_eq!(table.format_pith(&dict), "{'a': 1}");
}

#[test]
fn test_format_classes_and_objects() {
    let mut table = ClassTable::new();
    let widget = table.define("Widget", &[]);
    let bag = table.define("Bag", &[ClassId::LIST]);
    assert_eq!(table.format_pith(&Pith::Class(ClassId::INT)), "<class 'int'>");
    assert_eq!(table.format_pith(&Pith::object(widget)), "<Widget object>");
    assert_eq!(
        table.format_pith(&Pith::object_with_items(bag, vec![Pith::Int(3)])),
        "Bag([3])"
    );
}

#[test]
fn test_format_hints() {
    let table = ClassTable::new();
    let int = Hint::class(ClassId::INT);
    let str_ = Hint::class(ClassId::STR);
    assert_eq!(
        table.format_hint(&Hint::union([int.clone(), str_.clone()])),
        "Union[int, str]"
    );
    assert_eq!(
        table.format_hint(&Hint::optional(int.clone())),
        "Optional[int]"
    );
    assert_eq!(
        table.format_hint(&Hint::sequence(SequenceKind::Sequence, int.clone())),
        "Sequence[int]"
    );
    assert_eq!(table.format_hint(&Hint::tuple(vec![])), "Tuple[()]");
    assert_eq!(
        table.format_hint(&Hint::tuple_of(int.clone())),
        "Tuple[int, ...]"
    );
    assert_eq!(
        table.format_hint(&Hint::mapping(MappingKind::Mapping, str_.clone(), int.clone())),
        "Mapping[str, int]"
    );
    assert_eq!(
        table.format_hint(&Hint::literal(vec![Pith::Int(1), Pith::str("a")])),
        "Literal[1, 'a']"
    );
    assert_eq!(table.format_hint(&Hint::forward_ref("Node")), "'Node'");
    assert_eq!(
        table.format_hint(&Hint::callable(vec![int], str_)),
        "Callable[[int], str]"
    );
    assert_eq!(table.format_hint(&Hint::type_var("T")), "~T");
    assert_eq!(table.format_hint(&Hint::subclass(ClassId::FLOAT)), "Type[float]");
}

#[test]
fn test_format_pith_prefix_agrees_with_full_text() {
    let table = ClassTable::new();
    let pith = Pith::dict(vec![
        (Pith::str("key"), Pith::list(vec![Pith::Int(10), Pith::str("été")])),
        (Pith::Int(2), Pith::bytes(b"\x00abc".to_vec())),
        (Pith::str("tail"), Pith::tuple(vec![Pith::Float(0.5)])),
    ]);
    let full = table.format_pith(&pith);
    for max_chars in [0, 1, 3, 8, 17, 40, 200] {
        let prefix = table.format_pith_prefix(&pith, max_chars);
        let head = |text: &str| text.chars().take(max_chars).collect::<String>();
        assert_eq!(head(&prefix), head(&full), "max_chars = {max_chars}");
    }
    assert_eq!(table.format_pith_prefix(&pith, 200), full);
}

#[test]
fn test_format_pith_prefix_stops_early_on_deep_pith() {
    let table = ClassTable::new();
    let mut pith = Pith::Int(1);
    for _ in 0..50_000 {
        pith = Pith::list(vec![pith]);
    }
    let prefix = table.format_pith_prefix(&pith, 10);
    assert!(prefix.starts_with(&"[".repeat(10)));
    assert!(prefix.len() < 100, "{} bytes written", prefix.len());
}

#[test]
fn test_format_deeply_nested_values() {
    let table = ClassTable::new();
    let mut pith = Pith::Int(1);
    let mut hint = Hint::class(ClassId::INT);
    for _ in 0..10_000 {
        pith = Pith::list(vec![pith]);
        hint = Hint::list(hint);
    }
    assert_eq!(
        table.format_pith(&pith),
        format!("{}1{}", "[".repeat(10_000), "]".repeat(10_000))
    );
    assert_eq!(
        table.format_hint(&hint),
        format!("{}int{}", "List[".repeat(10_000), "]".repeat(10_000))
    );
}
