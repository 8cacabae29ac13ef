//! Shorthands for explainer unit tests.

#![allow(clippy::unwrap_used)]

use hint_ir::{ClassId, ClassTable, Hint, Pith};

use crate::error::SleuthError;
use crate::sleuth::get_cause_or_none;

/// Label every test sleuth reports under.
pub const LABEL: &str = "f() parameter x";

pub fn int() -> Hint {
    Hint::class(ClassId::INT)
}

pub fn str_hint() -> Hint {
    Hint::class(ClassId::STR)
}

/// Cause of `pith` violating `hint`, against the builtin class table.
pub fn cause(pith: &Pith, hint: &Hint) -> Option<String> {
    cause_in(&ClassTable::new(), pith, hint)
}

/// Cause of `pith` violating `hint`, against a custom class table.
pub fn cause_in(classes: &ClassTable, pith: &Pith, hint: &Hint) -> Option<String> {
    get_cause_or_none(classes, pith, hint, "", LABEL).unwrap()
}

/// The error explaining `pith` against `hint` must raise.
pub fn error_in(classes: &ClassTable, pith: &Pith, hint: &Hint) -> SleuthError {
    get_cause_or_none(classes, pith, hint, "", LABEL).unwrap_err()
}
