use hint_ir::Hint;
use smallvec::SmallVec;

use crate::error::CauseResult;
use crate::explain::Explain;
use crate::label::join_disjunction;
use crate::sleuth::CauseSleuth;

/// `Literal[...]`: the pith must equal one of the values and share its
/// class, so `True` does not satisfy `Literal[1]`.
pub struct LiteralExplainer;

impl Explain for LiteralExplainer {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Literal(values) = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        let pith = sleuth.pith();
        if values.iter().any(|value| value.same_literal(pith)) {
            return Ok(None);
        }
        let allowed: SmallVec<[String; 4]> = values.iter().map(|v| sleuth.represent(v)).collect();
        Ok(Some(format!(
            "{} not {}",
            sleuth.pith_label(),
            join_disjunction(&allowed)
        )))
    }
}
