//! Explainer registry: looks up the explainer for a hint category.

use crate::category::HintCategory;
use crate::explain::{
    AnyExplainer, ClassExplainer, Explain, ForwardRefExplainer, GenericExplainer,
    LiteralExplainer, MappingExplainer, SequenceExplainer, SubclassExplainer, TupleExplainer,
    UnionExplainer,
};

// Static explainer instances for 'static lifetime references
static ANY: AnyExplainer = AnyExplainer;
static CLASS: ClassExplainer = ClassExplainer;
static UNION: UnionExplainer = UnionExplainer;
static SEQUENCE: SequenceExplainer = SequenceExplainer;
static TUPLE: TupleExplainer = TupleExplainer;
static MAPPING: MappingExplainer = MappingExplainer;
static GENERIC: GenericExplainer = GenericExplainer;
static SUBCLASS: SubclassExplainer = SubclassExplainer;
static LITERAL: LiteralExplainer = LiteralExplainer;
static FORWARD_REF: ForwardRefExplainer = ForwardRefExplainer;

/// The registry every sleuth dispatches through.
pub static REGISTRY: ExplainerRegistry = ExplainerRegistry::new();

/// Registry mapping `HintCategory` to explainers.
///
/// Uses direct enum dispatch instead of `HashMap` lookup. All explainers
/// are ZSTs with static lifetime, so the registry is fixed at compile time
/// and safe to share between threads.
pub struct ExplainerRegistry {
    // Marker field to prevent external construction
    _private: (),
}

impl ExplainerRegistry {
    pub const fn new() -> Self {
        ExplainerRegistry { _private: () }
    }

    /// Get the explainer for a category, if one is registered.
    ///
    /// Every container kind of one family shares an explainer; the kind
    /// itself travels in the hint.
    pub fn get(&self, category: HintCategory) -> Option<&'static dyn Explain> {
        let explainer: &'static dyn Explain = match category {
            HintCategory::Any => &ANY,
            HintCategory::Union => &UNION,
            HintCategory::List
            | HintCategory::Sequence
            | HintCategory::MutableSequence
            | HintCategory::Set
            | HintCategory::FrozenSet
            | HintCategory::AbstractSet
            | HintCategory::MutableSet => &SEQUENCE,
            HintCategory::Tuple => &TUPLE,
            HintCategory::Dict | HintCategory::Mapping | HintCategory::MutableMapping => &MAPPING,
            HintCategory::Generic => &GENERIC,
            HintCategory::Type => &SUBCLASS,
            HintCategory::Literal => &LITERAL,
            HintCategory::ForwardRef => &FORWARD_REF,
            // Recognized, but no violation of these can be pinned on a
            // single value.
            HintCategory::Callable | HintCategory::TypeVar => return None,
        };
        Some(explainer)
    }

    /// The terminal explainer for plain classes, which have no category.
    pub fn class_explainer(&self) -> &'static dyn Explain {
        &CLASS
    }

    /// Categories with a registered explainer.
    pub fn categories(&self) -> impl Iterator<Item = HintCategory> + '_ {
        HintCategory::ALL
            .into_iter()
            .filter(|category| self.get(*category).is_some())
    }

    /// Number of categories with a registered explainer.
    pub fn len(&self) -> usize {
        self.categories().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExplainerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
