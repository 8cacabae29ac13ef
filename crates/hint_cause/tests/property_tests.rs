//! Property-based tests for the cause engine.
//!
//! Random piths are checked against random explainable hints and the
//! engine is compared with a small reference `isinstance` walk:
//! 1. Soundness: a cause is found exactly when the reference rejects
//! 2. Determinism: asking twice gives the same answer
//! 3. Every cause describes the pith it was asked about

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use hint_cause::{
    get_cause_or_none, represent_pith, CauseConfig, CauseSleuth, SleuthError,
};
use hint_ir::{ClassId, ClassTable, Hint, MappingKind, Pith, SequenceKind, TupleHint};
use proptest::prelude::*;

// -- Strategies --

fn pith_strategy() -> impl Strategy<Value = Pith> {
    let leaf = prop_oneof![
        Just(Pith::None),
        any::<bool>().prop_map(Pith::Bool),
        (-3i64..3).prop_map(Pith::Int),
        prop::sample::select(vec![0.5, 1.5, -2.0]).prop_map(Pith::Float),
        prop::sample::select(vec!["", "a", "bc"]).prop_map(Pith::str),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Pith::list),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Pith::tuple),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Pith::set),
            prop::collection::vec((inner.clone(), inner), 0..3).prop_map(Pith::dict),
        ]
    })
}

fn hint_strategy() -> impl Strategy<Value = Hint> {
    let leaf = prop_oneof![
        Just(Hint::Any),
        prop::sample::select(vec![
            ClassId::INT,
            ClassId::BOOL,
            ClassId::FLOAT,
            ClassId::STR,
            ClassId::NONE_TYPE,
            ClassId::OBJECT,
            ClassId::LIST,
            ClassId::TUPLE,
        ])
        .prop_map(Hint::class),
        prop::collection::vec((-2i64..2).prop_map(Pith::Int), 1..3).prop_map(Hint::literal),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 2..4).prop_map(Hint::union),
            inner.clone().prop_map(Hint::list),
            inner
                .clone()
                .prop_map(|item| Hint::sequence(SequenceKind::Sequence, item)),
            inner
                .clone()
                .prop_map(|item| Hint::sequence(SequenceKind::AbstractSet, item)),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Hint::tuple),
            inner.clone().prop_map(Hint::tuple_of),
            (inner.clone(), inner)
                .prop_map(|(key, value)| Hint::mapping(MappingKind::Mapping, key, value)),
        ]
    })
}

// -- Reference checker --

fn satisfies(classes: &ClassTable, pith: &Pith, hint: &Hint) -> bool {
    let instance_of = |class| classes.is_subclass(pith.class_id(), class);
    let all_items = |item: &Hint| {
        pith.elements()
            .map_or(true, |items| items.iter().all(|p| satisfies(classes, p, item)))
    };
    match hint {
        Hint::Any => true,
        Hint::Class(class) => instance_of(*class),
        Hint::Union(members) => members.iter().any(|m| satisfies(classes, pith, m)),
        Hint::Sequence { kind, item } => instance_of(kind.origin()) && all_items(item),
        Hint::Tuple(TupleHint::Variadic(item)) => instance_of(ClassId::TUPLE) && all_items(item),
        Hint::Tuple(TupleHint::Fixed(items)) => {
            instance_of(ClassId::TUPLE)
                && pith.elements().is_some_and(|elements| {
                    elements.len() == items.len()
                        && elements
                            .iter()
                            .zip(items)
                            .all(|(p, h)| satisfies(classes, p, h))
                })
        }
        Hint::Mapping { kind, key, value } => {
            instance_of(kind.origin())
                && pith.entries().map_or(true, |entries| {
                    entries
                        .iter()
                        .all(|(k, v)| satisfies(classes, k, key) && satisfies(classes, v, value))
                })
        }
        Hint::Literal(values) => values.iter().any(|v| v.same_literal(pith)),
        other => panic!("strategy never generates {other:?}"),
    }
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn cause_found_exactly_when_violated(pith in pith_strategy(), hint in hint_strategy()) {
        let classes = ClassTable::new();
        let cause = get_cause_or_none(&classes, &pith, &hint, "", "f() parameter x").unwrap();

        prop_assert_eq!(
            cause.is_none(),
            satisfies(&classes, &pith, &hint),
            "pith {} hint {} cause {:?}",
            classes.format_pith(&pith),
            classes.format_hint(&hint),
            cause
        );
    }

    #[test]
    fn repeated_requests_agree(pith in pith_strategy(), hint in hint_strategy()) {
        let classes = ClassTable::new();
        let sleuth = CauseSleuth::new(&pith, &hint, "  ", "f() return", &classes);

        prop_assert_eq!(sleuth.get_cause_or_none(), sleuth.get_cause_or_none());
    }

    #[test]
    fn causes_start_with_pith_label(pith in pith_strategy(), hint in hint_strategy()) {
        let classes = ClassTable::new();
        let cause = get_cause_or_none(&classes, &pith, &hint, "", "f() return").unwrap();

        if let Some(cause) = cause {
            let label = represent_pith(&classes, &pith, CauseConfig::DEFAULT.max_repr_len);
            prop_assert!(cause.starts_with(&label), "{cause:?} does not start with {label:?}");
        }
    }

    #[test]
    fn unsupported_hint_keeps_label(label in "[a-z_]{1,12}\\(\\) parameter [a-z]{1,8}", pith in pith_strategy()) {
        let classes = ClassTable::new();
        let hint = Hint::list(Hint::opaque("<not a hint>"));
        let result = get_cause_or_none(&classes, &pith, &hint, "", &label);

        match result {
            Err(err @ SleuthError::UnsupportedHint { .. }) => {
                prop_assert_eq!(err.label(), label.as_str());
                prop_assert!(err.to_string().starts_with(label.as_str()));
            }
            // Non-lists fail the origin check before the item hint is seen.
            Ok(Some(_)) => prop_assert!(!matches!(pith, Pith::List(_))),
            // Empty lists never reach the item hint.
            Ok(None) => prop_assert_eq!(pith, Pith::list(vec![])),
            Err(other) => return Err(TestCaseError::fail(format!("unexpected error {other}"))),
        }
    }
}
