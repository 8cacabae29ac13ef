use hint_ir::{Hint, Pith};

use crate::error::CauseResult;
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// `Type[C]`: the pith must be a class object deriving from `C`.
pub struct SubclassExplainer;

impl Explain for SubclassExplainer {
    fn name(&self) -> &'static str {
        "subclass"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Subclass(expected) = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        let classes = sleuth.classes();
        let cause = match sleuth.pith() {
            Pith::Class(actual) if classes.is_subclass(*actual, *expected) => return Ok(None),
            Pith::Class(_) => format!(
                "{} not subclass of {}",
                sleuth.pith_label(),
                classes.name(*expected)
            ),
            _ => format!("{} not class", sleuth.pith_label()),
        };
        Ok(Some(cause))
    }
}
