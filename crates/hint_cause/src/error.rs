//! Errors raised while explaining a violation.
//!
//! Every variant is a programming or configuration failure upstream of the
//! engine. An ordinary "this pith satisfies this hint" outcome is `Ok(None)`,
//! never an error.

use crate::category::HintCategory;

/// Result of asking for a cause: `Ok(Some(cause))`, `Ok(None)` when the
/// pith satisfies the hint, or an internal failure.
pub type CauseResult = Result<Option<String>, SleuthError>;

/// Internal failure of the cause engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SleuthError {
    /// The hint is neither a composite form nor a plain class.
    #[error("{label} type hint {hint} unsupported (i.e., neither composite hint nor plain class)")]
    UnsupportedHint { label: String, hint: String },

    /// The hint classified into a category with no registered explainer.
    #[error(
        "{label} type hint {hint} unsupported (i.e., no explainer registered for {category} hints)"
    )]
    MissingExplainer {
        label: String,
        hint: String,
        category: HintCategory,
    },

    /// A forward reference names no class in the class table.
    #[error("{label} forward reference '{name}' unresolvable (i.e., no class of that name defined)")]
    UnresolvedForwardRef { label: String, name: String },

    /// A violation was reported for a pith that satisfies its hint.
    #[error("{label} value {pith} satisfies type hint {hint} (i.e., no violation to explain)")]
    NotViolated {
        label: String,
        pith: String,
        hint: String,
    },
}

impl SleuthError {
    /// The caller-supplied label embedded in this error.
    pub fn label(&self) -> &str {
        match self {
            SleuthError::UnsupportedHint { label, .. }
            | SleuthError::MissingExplainer { label, .. }
            | SleuthError::UnresolvedForwardRef { label, .. }
            | SleuthError::NotViolated { label, .. } => label,
        }
    }
}
