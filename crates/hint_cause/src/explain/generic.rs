//! User generic explainer.

use hint_ir::Hint;

use crate::error::CauseResult;
use crate::explain::class::explain_origin;
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// A generic is satisfied by instances of its origin class that also
/// satisfy each of its subscripted pseudo-superclasses.
///
/// Bases are visited in declaration order and the first cause is returned
/// unchanged, since it already describes the pith.
pub struct GenericExplainer;

impl Explain for GenericExplainer {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Generic { origin, bases } = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        if let Some(cause) = explain_origin(sleuth, *origin)? {
            return Ok(Some(cause));
        }
        for base in bases {
            if let Some(cause) = sleuth.with_hint(base).get_cause_or_none()? {
                return Ok(Some(cause));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests;
