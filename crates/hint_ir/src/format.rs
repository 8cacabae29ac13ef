//! Representations of piths and hints for causes.
//!
//! Both need class names, so formatting hangs off [`ClassTable`] instead of
//! `Display`.

#![allow(clippy::format_push_string)] // Cause text favours clarity over allocation

use hint_stack::ensure_sufficient_stack;

use crate::class::{ClassId, ClassTable};
use crate::hint::{Hint, TupleHint};
use crate::pith::{ObjectContents, Pith};

impl ClassTable {
    /// Format a pith as a human-readable representation (`[1, 2, 'x']`).
    pub fn format_pith(&self, pith: &Pith) -> String {
        let mut buf = String::new();
        self.format_pith_into(pith, &mut buf);
        buf
    }

    /// Format a pith into an existing string buffer.
    pub fn format_pith_into(&self, pith: &Pith, buf: &mut String) {
        self.write_pith(pith, buf, usize::MAX);
    }

    /// Format the start of a pith's representation, for callers that keep
    /// at most `max_chars` characters of it.
    ///
    /// Writing stops once more than `max_chars` characters of
    /// [`format_pith`](Self::format_pith)'s output are in the buffer (only
    /// closing brackets follow), so truncating the result to `max_chars`
    /// gives the same text as truncating the full representation. Work and
    /// recursion depth are bounded by `max_chars`, not by the size of the
    /// pith.
    pub fn format_pith_prefix(&self, pith: &Pith, max_chars: usize) -> String {
        let mut buf = String::new();
        // A char is at most four bytes long.
        self.write_pith(pith, &mut buf, max_chars.saturating_mul(4));
        buf
    }

    /// Write `pith`, stopping once `buf` grows past `stop` bytes.
    fn write_pith(&self, pith: &Pith, buf: &mut String, stop: usize) {
        if buf.len() > stop {
            return;
        }
        ensure_sufficient_stack(|| match pith {
            Pith::None => buf.push_str("None"),
            Pith::Bool(true) => buf.push_str("True"),
            Pith::Bool(false) => buf.push_str("False"),
            Pith::Int(n) => buf.push_str(&n.to_string()),
            Pith::Float(f) => format_float_into(*f, buf),
            Pith::Str(s) => format_str_into(s, buf, stop),
            Pith::Bytes(b) => format_bytes_into(b, buf, stop),
            Pith::List(items) => {
                buf.push('[');
                self.write_piths(items, buf, stop);
                buf.push(']');
            }
            Pith::Tuple(items) => {
                buf.push('(');
                self.write_piths(items, buf, stop);
                if items.len() == 1 {
                    buf.push(',');
                }
                buf.push(')');
            }
            Pith::Set(items) if items.is_empty() => buf.push_str("set()"),
            Pith::Set(items) => {
                buf.push('{');
                self.write_piths(items, buf, stop);
                buf.push('}');
            }
            Pith::FrozenSet(items) if items.is_empty() => buf.push_str("frozenset()"),
            Pith::FrozenSet(items) => {
                buf.push_str("frozenset({");
                self.write_piths(items, buf, stop);
                buf.push_str("})");
            }
            Pith::Dict(entries) => self.write_entries(entries, buf, stop),
            Pith::Class(id) => {
                buf.push_str("<class '");
                buf.push_str(self.name(*id));
                buf.push_str("'>");
            }
            Pith::Object(obj) => match &obj.contents {
                ObjectContents::Opaque => {
                    buf.push('<');
                    buf.push_str(self.name(obj.class));
                    buf.push_str(" object>");
                }
                ObjectContents::Items(items) => {
                    buf.push_str(self.name(obj.class));
                    buf.push_str("([");
                    self.write_piths(items, buf, stop);
                    buf.push_str("])");
                }
                ObjectContents::Entries(entries) => {
                    buf.push_str(self.name(obj.class));
                    buf.push('(');
                    self.write_entries(entries, buf, stop);
                    buf.push(')');
                }
            },
        });
    }

    fn write_piths(&self, items: &[Pith], buf: &mut String, stop: usize) {
        for (i, item) in items.iter().enumerate() {
            if buf.len() > stop {
                return;
            }
            if i > 0 {
                buf.push_str(", ");
            }
            self.write_pith(item, buf, stop);
        }
    }

    fn write_entries(&self, entries: &[(Pith, Pith)], buf: &mut String, stop: usize) {
        buf.push('{');
        for (i, (key, value)) in entries.iter().enumerate() {
            if buf.len() > stop {
                return;
            }
            if i > 0 {
                buf.push_str(", ");
            }
            self.write_pith(key, buf, stop);
            buf.push_str(": ");
            self.write_pith(value, buf, stop);
        }
        buf.push('}');
    }

    /// Format a hint as it would be written (`Union[int, str]`).
    pub fn format_hint(&self, hint: &Hint) -> String {
        let mut buf = String::new();
        self.format_hint_into(hint, &mut buf);
        buf
    }

    /// Format a hint into an existing string buffer.
    pub fn format_hint_into(&self, hint: &Hint, buf: &mut String) {
        ensure_sufficient_stack(|| match hint {
            Hint::Any => buf.push_str("Any"),
            Hint::Class(id) => buf.push_str(self.name(*id)),
            Hint::Union(members) => match optional_inner(members) {
                Some(inner) => {
                    buf.push_str("Optional[");
                    self.format_hint_into(inner, buf);
                    buf.push(']');
                }
                None => {
                    buf.push_str("Union[");
                    self.format_hints_into(members, buf);
                    buf.push(']');
                }
            },
            Hint::Sequence { kind, item } => {
                buf.push_str(kind.name());
                buf.push('[');
                self.format_hint_into(item, buf);
                buf.push(']');
            }
            Hint::Tuple(TupleHint::Fixed(items)) if items.is_empty() => {
                buf.push_str("Tuple[()]");
            }
            Hint::Tuple(TupleHint::Fixed(items)) => {
                buf.push_str("Tuple[");
                self.format_hints_into(items, buf);
                buf.push(']');
            }
            Hint::Tuple(TupleHint::Variadic(item)) => {
                buf.push_str("Tuple[");
                self.format_hint_into(item, buf);
                buf.push_str(", ...]");
            }
            Hint::Mapping { kind, key, value } => {
                buf.push_str(kind.name());
                buf.push('[');
                self.format_hint_into(key, buf);
                buf.push_str(", ");
                self.format_hint_into(value, buf);
                buf.push(']');
            }
            Hint::Generic { origin, .. } => buf.push_str(self.name(*origin)),
            Hint::Subclass(id) => {
                buf.push_str("Type[");
                buf.push_str(self.name(*id));
                buf.push(']');
            }
            Hint::Literal(values) => {
                buf.push_str("Literal[");
                self.write_piths(values, buf, usize::MAX);
                buf.push(']');
            }
            Hint::ForwardRef(name) => {
                buf.push('\'');
                buf.push_str(name);
                buf.push('\'');
            }
            Hint::Callable { params, ret } => {
                buf.push_str("Callable[[");
                self.format_hints_into(params, buf);
                buf.push_str("], ");
                self.format_hint_into(ret, buf);
                buf.push(']');
            }
            Hint::TypeVar(name) => {
                buf.push('~');
                buf.push_str(name);
            }
            Hint::Opaque(text) => buf.push_str(text),
        });
    }

    fn format_hints_into(&self, hints: &[Hint], buf: &mut String) {
        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_hint_into(hint, buf);
        }
    }
}

/// `Union[X, None]` prints as `Optional[X]`.
fn optional_inner(members: &[Hint]) -> Option<&Hint> {
    match members {
        [inner, Hint::Class(ClassId::NONE_TYPE)] | [Hint::Class(ClassId::NONE_TYPE), inner] => {
            Some(inner)
        }
        _ => None,
    }
}

#[allow(clippy::float_cmp, reason = "integral floats print with a trailing .0")]
fn format_float_into(f: f64, buf: &mut String) {
    if f.is_nan() {
        buf.push_str("nan");
    } else if f.is_infinite() {
        buf.push_str(if f > 0.0 { "inf" } else { "-inf" });
    } else if f.fract() == 0.0 && f.abs() < 1e16 {
        buf.push_str(&format!("{f:.1}"));
    } else {
        buf.push_str(&f.to_string());
    }
}

fn format_str_into(s: &str, buf: &mut String, stop: usize) {
    buf.push('\'');
    for c in s.chars() {
        if buf.len() > stop {
            break;
        }
        match c {
            '\\' => buf.push_str("\\\\"),
            '\'' => buf.push_str("\\'"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c => buf.push(c),
        }
    }
    buf.push('\'');
}

fn format_bytes_into(bytes: &[u8], buf: &mut String, stop: usize) {
    buf.push_str("b'");
    for &byte in bytes {
        if buf.len() > stop {
            break;
        }
        match byte {
            b'\\' => buf.push_str("\\\\"),
            b'\'' => buf.push_str("\\'"),
            b'\n' => buf.push_str("\\n"),
            b'\r' => buf.push_str("\\r"),
            b'\t' => buf.push_str("\\t"),
            0x20..=0x7e => buf.push(char::from(byte)),
            _ => buf.push_str(&format!("\\x{byte:02x}")),
        }
    }
    buf.push('\'');
}

#[cfg(test)]
mod tests;
