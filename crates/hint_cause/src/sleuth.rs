//! The cause sleuth.
//!
//! A [`CauseSleuth`] pairs one pith with one hint and finds out whether, and
//! why, the pith violates the hint. It classifies the hint, picks the
//! explainer registered for that category, and hands itself to it.
//! Explainers for composite hints derive child sleuths with
//! [`CauseSleuth::permute`] and recurse, stopping at the first child that
//! yields a cause.
//!
//! # Probing
//!
//! `Ok(None)` is an ordinary answer, not a failure. Explainers probe every
//! item of a container (or every member of a union) to find the one that
//! fails, so most child sleuths are asked about piths that satisfy their
//! hint.
//!
//! # Example
//!
//! ```text
//! let classes = ClassTable::new();
//! let hint = Hint::list(Hint::class(ClassId::INT));
//! let pith = Pith::list(vec![Pith::Int(1), Pith::Int(2), Pith::str("x")]);
//! let sleuth = CauseSleuth::new(&pith, &hint, "", "f() parameter xs", &classes);
//! assert_eq!(
//!     sleuth.get_cause_or_none()?,
//!     Some("list [1, 2, 'x'] index 2 item str 'x' not int".to_string()),
//! );
//! ```

use hint_ir::{ClassTable, Hint, Pith};
use hint_stack::ensure_sufficient_stack;

use crate::category::{classify, HintCategory};
use crate::config::CauseConfig;
use crate::error::{CauseResult, SleuthError};
use crate::explain::Explain;
use crate::label::{represent_object, represent_pith};
use crate::registry::REGISTRY;

/// Context for explaining one pith/hint pair.
///
/// Immutable: recursive descent derives new sleuths with [`permute`]
/// (or the `with_*` shorthands) and never modifies this one. All fields
/// are borrowed, so a derived sleuth shares everything it does not
/// override.
///
/// [`permute`]: CauseSleuth::permute
#[derive(Clone, Debug)]
pub struct CauseSleuth<'a> {
    pith: &'a Pith,
    hint: &'a Hint,
    /// Always `classify(hint)`; recomputed whenever `hint` changes.
    hint_category: Option<HintCategory>,
    /// Spaces preceding each continuation line of a multi-line cause.
    cause_indent: &'a str,
    /// Describes where the pith came from (`f() parameter x`); embedded in
    /// errors.
    exception_label: &'a str,
    classes: &'a ClassTable,
    config: &'a CauseConfig,
}

/// Field overrides for [`CauseSleuth::permute`].
///
/// `None` fields are carried over from the parent sleuth unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Permute<'b> {
    pub pith: Option<&'b Pith>,
    pub hint: Option<&'b Hint>,
    pub cause_indent: Option<&'b str>,
    pub exception_label: Option<&'b str>,
}

impl<'a> CauseSleuth<'a> {
    /// Create a sleuth using [`CauseConfig::DEFAULT`].
    pub fn new(
        pith: &'a Pith,
        hint: &'a Hint,
        cause_indent: &'a str,
        exception_label: &'a str,
        classes: &'a ClassTable,
    ) -> Self {
        Self::with_config(
            pith,
            hint,
            cause_indent,
            exception_label,
            classes,
            &CauseConfig::DEFAULT,
        )
    }

    /// Create a sleuth with an explicit configuration.
    pub fn with_config(
        pith: &'a Pith,
        hint: &'a Hint,
        cause_indent: &'a str,
        exception_label: &'a str,
        classes: &'a ClassTable,
        config: &'a CauseConfig,
    ) -> Self {
        debug_assert!(
            cause_indent.chars().all(|c| c == ' '),
            "cause indent {cause_indent:?} must consist of spaces"
        );
        CauseSleuth {
            pith,
            hint,
            hint_category: classify(hint),
            cause_indent,
            exception_label,
            classes,
            config,
        }
    }

    #[inline]
    pub fn pith(&self) -> &'a Pith {
        self.pith
    }

    #[inline]
    pub fn hint(&self) -> &'a Hint {
        self.hint
    }

    #[inline]
    pub fn hint_category(&self) -> Option<HintCategory> {
        self.hint_category
    }

    #[inline]
    pub fn cause_indent(&self) -> &'a str {
        self.cause_indent
    }

    #[inline]
    pub fn exception_label(&self) -> &'a str {
        self.exception_label
    }

    #[inline]
    pub fn classes(&self) -> &'a ClassTable {
        self.classes
    }

    #[inline]
    pub fn config(&self) -> &'a CauseConfig {
        self.config
    }

    // Getters

    /// Explain why this pith violates this hint.
    ///
    /// Returns `Ok(Some(cause))` if it does, `Ok(None)` if the pith
    /// satisfies the hint, and an error if the hint cannot be explained at
    /// all (see [`SleuthError`]).
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(category = ?self.hint_category, label = self.exception_label)
    )]
    pub fn get_cause_or_none(&self) -> CauseResult {
        ensure_sufficient_stack(|| {
            let explainer = self.explainer()?;
            tracing::trace!(explainer = explainer.name(), "dispatching");
            explainer.explain(self)
        })
    }

    /// Pick the explainer for this hint.
    fn explainer(&self) -> Result<&'static dyn Explain, SleuthError> {
        match self.hint_category {
            None => match self.hint {
                Hint::Class(_) => Ok(REGISTRY.class_explainer()),
                _ => Err(self.unsupported_hint()),
            },
            Some(category) => REGISTRY.get(category).ok_or_else(|| {
                let hint = self.classes.format_hint(self.hint);
                tracing::error!(%category, %hint, "no explainer registered for category");
                SleuthError::MissingExplainer {
                    label: self.exception_label.to_string(),
                    hint,
                    category,
                }
            }),
        }
    }

    /// Error for a hint this sleuth cannot explain.
    ///
    /// Also returned by explainers handed a hint of the wrong shape.
    pub(crate) fn unsupported_hint(&self) -> SleuthError {
        let hint = self.classes.format_hint(self.hint);
        tracing::error!(%hint, label = self.exception_label, "unsupported type hint");
        SleuthError::UnsupportedHint {
            label: self.exception_label.to_string(),
            hint,
        }
    }

    /// Label prefixing causes about this pith (`list [1, 2, 'x']`).
    pub fn pith_label(&self) -> String {
        represent_pith(self.classes, self.pith, self.config.max_repr_len)
    }

    /// Truncated representation of an arbitrary pith.
    pub fn represent(&self, pith: &Pith) -> String {
        represent_object(self.classes, pith, self.config.max_repr_len)
    }

    // Permuters

    /// Copy of this sleuth with the given fields overridden.
    ///
    /// The hint category is recomputed from the resulting hint.
    pub fn permute<'b>(&self, overrides: Permute<'b>) -> CauseSleuth<'b>
    where
        'a: 'b,
    {
        CauseSleuth::with_config(
            overrides.pith.unwrap_or(self.pith),
            overrides.hint.unwrap_or(self.hint),
            overrides.cause_indent.unwrap_or(self.cause_indent),
            overrides.exception_label.unwrap_or(self.exception_label),
            self.classes,
            self.config,
        )
    }

    /// Copy of this sleuth checking another pith against the same hint.
    pub fn with_pith<'b>(&self, pith: &'b Pith) -> CauseSleuth<'b>
    where
        'a: 'b,
    {
        self.permute(Permute {
            pith: Some(pith),
            ..Permute::default()
        })
    }

    /// Copy of this sleuth checking the same pith against another hint.
    pub fn with_hint<'b>(&self, hint: &'b Hint) -> CauseSleuth<'b>
    where
        'a: 'b,
    {
        self.permute(Permute {
            hint: Some(hint),
            ..Permute::default()
        })
    }

    /// Copy of this sleuth for a child pith/hint pair.
    pub fn with_pith_hint<'b>(&self, pith: &'b Pith, hint: &'b Hint) -> CauseSleuth<'b>
    where
        'a: 'b,
    {
        self.permute(Permute {
            pith: Some(pith),
            hint: Some(hint),
            ..Permute::default()
        })
    }

    pub fn with_cause_indent<'b>(&self, cause_indent: &'b str) -> CauseSleuth<'b>
    where
        'a: 'b,
    {
        self.permute(Permute {
            cause_indent: Some(cause_indent),
            ..Permute::default()
        })
    }
}

/// Explain why `pith` violates `hint`, using the default configuration.
///
/// `cause_indent` prefixes every continuation line of a multi-line cause;
/// `exception_label` is embedded verbatim in any error.
#[tracing::instrument(level = "debug", skip_all, fields(label = exception_label))]
pub fn get_cause_or_none(
    classes: &ClassTable,
    pith: &Pith,
    hint: &Hint,
    cause_indent: &str,
    exception_label: &str,
) -> CauseResult {
    CauseSleuth::new(pith, hint, cause_indent, exception_label, classes).get_cause_or_none()
}
