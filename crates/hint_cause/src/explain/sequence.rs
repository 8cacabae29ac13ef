//! Homogeneous collection explainer (`List`, `Sequence`, `Set`, ...).

use hint_ir::Hint;

use crate::error::CauseResult;
use crate::explain::class::explain_origin;
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// Checks the origin class, then every item against the item hint.
///
/// The first failing item is reported with its index for ordered kinds
/// (`list [1, 2, 'x'] index 2 item str 'x' not int`) and without one for
/// sets, whose positions carry no meaning.
pub struct SequenceExplainer;

impl Explain for SequenceExplainer {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Sequence { kind, item } = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        if let Some(cause) = explain_origin(sleuth, kind.origin())? {
            return Ok(Some(cause));
        }
        if item.is_ignorable() {
            return Ok(None);
        }
        // An instance of the origin whose items cannot be inspected (a user
        // subclass carrying no contents) has nothing left to blame.
        let Some(elements) = sleuth.pith().elements() else {
            return Ok(None);
        };

        for (index, element) in elements.iter().enumerate() {
            let Some(cause) = sleuth.with_pith_hint(element, item).get_cause_or_none()? else {
                continue;
            };
            let label = sleuth.pith_label();
            return Ok(Some(if kind.is_ordered() {
                format!("{label} index {index} item {cause}")
            } else {
                format!("{label} item {cause}")
            }));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests;
