//! Terminal explainer for plain classes.

use hint_ir::{ClassId, Hint};

use crate::error::CauseResult;
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// Plain class hints: `isinstance` against the class table.
///
/// Never recurses. The cause names the pith's class and representation
/// and the expected class (`str 'x' not int`).
pub struct ClassExplainer;

impl Explain for ClassExplainer {
    fn name(&self) -> &'static str {
        "class"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Class(expected) = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        let classes = sleuth.classes();
        if classes.is_subclass(sleuth.pith().class_id(), *expected) {
            return Ok(None);
        }
        Ok(Some(format!(
            "{} not {}",
            sleuth.pith_label(),
            classes.name(*expected)
        )))
    }
}

/// Check the sleuth's pith against `origin` before looking inside it.
///
/// Container explainers call this first so that a pith of the wrong class
/// is reported as such instead of by its contents.
pub(crate) fn explain_origin(sleuth: &CauseSleuth<'_>, origin: ClassId) -> CauseResult {
    let origin_hint = Hint::Class(origin);
    sleuth.with_hint(&origin_hint).get_cause_or_none()
}
