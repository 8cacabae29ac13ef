//! Hint classification.
//!
//! [`classify`] maps a hint to the category identifying its form, or to
//! `None` when the hint is not a composite form (a plain class, or an
//! opaque value). Categories mirror the subscriptable attribute a hint was
//! built from, so `List[int]` and `Sequence[int]` classify differently even
//! though one explainer handles both.

use std::fmt;

use hint_ir::{Hint, MappingKind, SequenceKind};

/// Category of a composite hint; the key of the explainer registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HintCategory {
    Any,
    Union,
    List,
    Sequence,
    MutableSequence,
    Set,
    FrozenSet,
    AbstractSet,
    MutableSet,
    Tuple,
    Dict,
    Mapping,
    MutableMapping,
    Generic,
    Type,
    Literal,
    ForwardRef,
    Callable,
    TypeVar,
}

impl HintCategory {
    /// Every category, in declaration order.
    pub const ALL: [HintCategory; 19] = [
        HintCategory::Any,
        HintCategory::Union,
        HintCategory::List,
        HintCategory::Sequence,
        HintCategory::MutableSequence,
        HintCategory::Set,
        HintCategory::FrozenSet,
        HintCategory::AbstractSet,
        HintCategory::MutableSet,
        HintCategory::Tuple,
        HintCategory::Dict,
        HintCategory::Mapping,
        HintCategory::MutableMapping,
        HintCategory::Generic,
        HintCategory::Type,
        HintCategory::Literal,
        HintCategory::ForwardRef,
        HintCategory::Callable,
        HintCategory::TypeVar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HintCategory::Any => "Any",
            HintCategory::Union => "Union",
            HintCategory::List => "List",
            HintCategory::Sequence => "Sequence",
            HintCategory::MutableSequence => "MutableSequence",
            HintCategory::Set => "Set",
            HintCategory::FrozenSet => "FrozenSet",
            HintCategory::AbstractSet => "AbstractSet",
            HintCategory::MutableSet => "MutableSet",
            HintCategory::Tuple => "Tuple",
            HintCategory::Dict => "Dict",
            HintCategory::Mapping => "Mapping",
            HintCategory::MutableMapping => "MutableMapping",
            HintCategory::Generic => "Generic",
            HintCategory::Type => "Type",
            HintCategory::Literal => "Literal",
            HintCategory::ForwardRef => "ForwardRef",
            HintCategory::Callable => "Callable",
            HintCategory::TypeVar => "TypeVar",
        }
    }
}

impl fmt::Display for HintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a hint.
///
/// Returns `None` for hints that are not composite forms: plain classes,
/// which the terminal class explainer handles, and opaque values, which
/// nothing handles.
pub fn classify(hint: &Hint) -> Option<HintCategory> {
    let category = match hint {
        Hint::Class(_) | Hint::Opaque(_) => return None,
        Hint::Any => HintCategory::Any,
        Hint::Union(_) => HintCategory::Union,
        Hint::Sequence { kind, .. } => match kind {
            SequenceKind::List => HintCategory::List,
            SequenceKind::Sequence => HintCategory::Sequence,
            SequenceKind::MutableSequence => HintCategory::MutableSequence,
            SequenceKind::Set => HintCategory::Set,
            SequenceKind::FrozenSet => HintCategory::FrozenSet,
            SequenceKind::AbstractSet => HintCategory::AbstractSet,
            SequenceKind::MutableSet => HintCategory::MutableSet,
        },
        Hint::Tuple(_) => HintCategory::Tuple,
        Hint::Mapping { kind, .. } => match kind {
            MappingKind::Dict => HintCategory::Dict,
            MappingKind::Mapping => HintCategory::Mapping,
            MappingKind::MutableMapping => HintCategory::MutableMapping,
        },
        Hint::Generic { .. } => HintCategory::Generic,
        Hint::Subclass(_) => HintCategory::Type,
        Hint::Literal(_) => HintCategory::Literal,
        Hint::ForwardRef(_) => HintCategory::ForwardRef,
        Hint::Callable { .. } => HintCategory::Callable,
        Hint::TypeVar(_) => HintCategory::TypeVar,
    };
    Some(category)
}

/// Whether a hint is a recognized composite form.
pub fn is_composite(hint: &Hint) -> bool {
    classify(hint).is_some()
}
