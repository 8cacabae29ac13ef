//! Mapping explainer (`Dict`, `Mapping`, `MutableMapping`).

use hint_ir::Hint;

use crate::error::CauseResult;
use crate::explain::class::explain_origin;
use crate::explain::Explain;
use crate::sleuth::CauseSleuth;

/// Checks the origin class, then each entry in iteration order: the key
/// against the key hint, then the value against the value hint.
///
/// Key failures read `dict {...} key <cause>`; value failures name the key
/// they sit under: `dict {...} key 'a' value <cause>`.
pub struct MappingExplainer;

impl Explain for MappingExplainer {
    fn name(&self) -> &'static str {
        "mapping"
    }

    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult {
        let Hint::Mapping { kind, key, value } = sleuth.hint() else {
            return Err(sleuth.unsupported_hint());
        };
        if let Some(cause) = explain_origin(sleuth, kind.origin())? {
            return Ok(Some(cause));
        }
        let check_keys = !key.is_ignorable();
        let check_values = !value.is_ignorable();
        if !check_keys && !check_values {
            return Ok(None);
        }
        let Some(entries) = sleuth.pith().entries() else {
            return Ok(None);
        };

        for (pith_key, pith_value) in entries {
            if check_keys {
                if let Some(cause) = sleuth.with_pith_hint(pith_key, key).get_cause_or_none()? {
                    return Ok(Some(format!("{} key {cause}", sleuth.pith_label())));
                }
            }
            if check_values {
                if let Some(cause) = sleuth
                    .with_pith_hint(pith_value, value)
                    .get_cause_or_none()?
                {
                    return Ok(Some(format!(
                        "{} key {} value {cause}",
                        sleuth.pith_label(),
                        sleuth.represent(pith_key)
                    )));
                }
            }
        }
        Ok(None)
    }
}
