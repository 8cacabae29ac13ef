use hint_ir::Hint;

use crate::error::{CauseResult, SleuthError};
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// Forward references are resolved against the class table when a cause
/// is requested, then explained as the plain class they name.
pub struct ForwardRefExplainer;

impl Explain for ForwardRefExplainer {
    fn name(&self) -> &'static str {
        "forward_ref"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::ForwardRef(name) = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        let Some(class) = sleuth.classes().lookup(name) else {
            tracing::error!(%name, label = sleuth.exception_label(), "unresolvable forward reference");
            return Err(SleuthError::UnresolvedForwardRef {
                label: sleuth.exception_label().to_string(),
                name: name.clone(),
            });
        };
        let resolved = Hint::Class(class);
        sleuth.with_hint(&resolved).get_cause_or_none()
    }
}
