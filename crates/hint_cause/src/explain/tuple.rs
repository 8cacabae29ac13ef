//! Tuple explainer.

use hint_ir::{ClassId, Hint, TupleHint};

use crate::error::CauseResult;
use crate::explain::class::explain_origin;
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// `Tuple[int, str]`, `Tuple[int, ...]` and `Tuple[()]`.
///
/// Fixed tuples are checked for length before any item, so a tuple that is
/// too short is reported by its length rather than by a missing index.
pub struct TupleExplainer;

impl Explain for TupleExplainer {
    fn name(&self) -> &'static str {
        "tuple"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Tuple(shape) = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        if let Some(cause) = explain_origin(sleuth, ClassId::TUPLE)? {
            return Ok(Some(cause));
        }
        let Some(elements) = sleuth.pith().elements() else {
            return Ok(None);
        };

        match shape {
            TupleHint::Variadic(item) => {
                if item.is_ignorable() {
                    return Ok(None);
                }
                for (index, element) in elements.iter().enumerate() {
                    if let Some(cause) = sleuth.with_pith_hint(element, item).get_cause_or_none()? {
                        return Ok(Some(format!(
                            "{} index {index} item {cause}",
                            sleuth.pith_label()
                        )));
                    }
                }
                Ok(None)
            }
            TupleHint::Fixed(items) if items.is_empty() => {
                if elements.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(format!("{} not empty tuple", sleuth.pith_label())))
                }
            }
            TupleHint::Fixed(items) => {
                if elements.len() != items.len() {
                    return Ok(Some(format!(
                        "{} length {} not {}",
                        sleuth.pith_label(),
                        elements.len(),
                        items.len()
                    )));
                }
                for (index, (element, item)) in elements.iter().zip(items).enumerate() {
                    if item.is_ignorable() {
                        continue;
                    }
                    if let Some(cause) = sleuth.with_pith_hint(element, item).get_cause_or_none()? {
                        return Ok(Some(format!(
                            "{} index {index} item {cause}",
                            sleuth.pith_label()
                        )));
                    }
                }
                Ok(None)
            }
        }
    }
}
