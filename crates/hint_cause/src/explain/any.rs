use crate::error::CauseResult;
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// `Any` is satisfied by every pith.
pub struct AnyExplainer;

impl Explain for AnyExplainer {
    fn name(&self) -> &'static str {
        "any"
    }

    fn explain(&self, _sleuth: &CauseSleuth<'_>) -> CauseResult {
        Ok(None)
    }
}
