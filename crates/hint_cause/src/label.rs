//! Text fragments shared by every explainer.

use hint_ir::{ClassTable, Pith};

/// Shorten `repr` to at most `max_len` characters, ending it with `...`
/// when anything was cut.
pub fn truncate_repr(repr: String, max_len: usize) -> String {
    if repr.chars().count() <= max_len {
        return repr;
    }
    let keep = max_len.saturating_sub(3);
    let mut short: String = repr.chars().take(keep).collect();
    short.push_str(&"..."[..max_len.min(3)]);
    short
}

/// Truncated representation of a pith (`[1, 2, 'x']`).
///
/// Only the part of the representation that survives truncation is
/// formatted, so deep or large piths cost no more than short ones.
pub fn represent_object(classes: &ClassTable, pith: &Pith, max_len: usize) -> String {
    truncate_repr(classes.format_pith_prefix(pith, max_len), max_len)
}

/// Class name followed by the truncated representation (`str 'x'`).
///
/// `None` is its own label.
pub fn represent_pith(classes: &ClassTable, pith: &Pith, max_len: usize) -> String {
    let repr = represent_object(classes, pith, max_len);
    if matches!(pith, Pith::None) {
        return repr;
    }
    format!("{} {repr}", classes.name(pith.class_id()))
}

/// Join alternatives as a disjunction: `a`, `a or b`, `a, b, or c`.
pub fn join_disjunction<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let mut joined = String::new();
            for item in init {
                joined.push_str(item.as_ref());
                joined.push_str(", ");
            }
            joined.push_str("or ");
            joined.push_str(last.as_ref());
            joined
        }
    }
}
