//! Call violation messages.
//!
//! Wraps the sleuth for the common case: a decorated callable received a
//! parameter, or produced a return value, that violates its annotation.
//! The resulting message names the callable, the offending value, the hint
//! and the cause:
//!
//! ```text
//! f() parameter xs=[1, 2, 'x'] violates type hint List[int], as list [1, 2, 'x'] index 2 item str 'x' not int.
//! ```

use std::fmt;

use hint_ir::{ClassTable, Hint, Pith};

use crate::config::CauseConfig;
use crate::error::SleuthError;
use crate::sleuth::CauseSleuth;

/// Which value of a call violated its hint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PithRole {
    /// A parameter, by name.
    Param(String),
    Return,
}

impl PithRole {
    pub fn param(name: impl Into<String>) -> Self {
        PithRole::Param(name.into())
    }
}

impl fmt::Display for PithRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PithRole::Param(name) => write!(f, "parameter {name}"),
            PithRole::Return => f.write_str("return"),
        }
    }
}

/// A fully explained type-hint violation of one call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CallViolation {
    role: PithRole,
    cause: String,
    message: String,
}

impl CallViolation {
    pub fn role(&self) -> &PithRole {
        &self.role
    }

    /// The sleuth's cause, without the surrounding sentence.
    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Label naming the violating value of a call (`f() parameter x`).
pub fn exception_label(func_name: &str, role: &PithRole) -> String {
    format!("{func_name}() {role}")
}

/// Explain why `pith`, passed to or returned from `func_name`, violates
/// `hint`.
///
/// Fails with [`SleuthError::NotViolated`] if the pith satisfies the hint,
/// and with any error the sleuth raises.
#[tracing::instrument(level = "debug", skip(classes, config, pith, hint))]
pub fn explain_call_violation(
    classes: &ClassTable,
    config: &CauseConfig,
    func_name: &str,
    role: PithRole,
    pith: &Pith,
    hint: &Hint,
) -> Result<CallViolation, SleuthError> {
    let label = exception_label(func_name, &role);
    let sleuth = CauseSleuth::with_config(pith, hint, "", &label, classes, config);

    let Some(cause) = sleuth.get_cause_or_none()? else {
        let pith = sleuth.represent(pith);
        let hint = classes.format_hint(hint);
        tracing::error!(%label, %pith, %hint, "violation reported for a satisfying value");
        return Err(SleuthError::NotViolated { label, pith, hint });
    };

    let repr = sleuth.represent(pith);
    let hint = classes.format_hint(hint);
    let message = match &role {
        PithRole::Param(_) => {
            format!("{label}={repr} violates type hint {hint}, as {cause}.")
        }
        PithRole::Return => format!("{label} {repr} violates type hint {hint}, as {cause}."),
    };
    Ok(CallViolation {
        role,
        cause,
        message,
    })
}
