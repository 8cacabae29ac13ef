//! Type hints.
//!
//! [`Hint`] is a closed sum over every hint form the cause engine knows
//! about. Composite forms carry their children directly; the engine only
//! ever borrows a hint, so children are plain `Box`/`Vec` values.
//!
//! Not every variant is explainable. `Callable` and `TypeVar` are valid
//! hints that classify into a category with no registered explainer, and
//! `Opaque` stands for any value used as a hint that is neither a composite
//! form nor a class.

use crate::class::ClassId;
use crate::pith::Pith;

/// A type hint.
#[derive(Clone, Debug, PartialEq)]
pub enum Hint {
    /// Matches everything.
    Any,
    /// Plain, unparameterized class.
    Class(ClassId),
    /// Union of two or more members, in declaration order.
    Union(Vec<Hint>),
    /// Homogeneous collection (`List[int]`, `Set[str]`, ...).
    Sequence { kind: SequenceKind, item: Box<Hint> },
    Tuple(TupleHint),
    /// Mapping from keys to values (`Dict[str, int]`, ...).
    Mapping {
        kind: MappingKind,
        key: Box<Hint>,
        value: Box<Hint>,
    },
    /// User generic class with its subscripted pseudo-superclasses.
    ///
    /// For `class IntList(list, Sequence[int])`, `origin` is `IntList` and
    /// `bases` holds `Sequence[int]`.
    Generic { origin: ClassId, bases: Vec<Hint> },
    /// `Type[C]`: a class object that is `C` or a subclass of it.
    Subclass(ClassId),
    /// One of a fixed set of values.
    Literal(Vec<Pith>),
    /// Class referenced by name, resolved against the class table.
    ForwardRef(String),
    Callable { params: Vec<Hint>, ret: Box<Hint> },
    TypeVar(String),
    /// A value used as a hint that is neither composite nor a class.
    Opaque(String),
}

/// Shape of a tuple hint.
#[derive(Clone, Debug, PartialEq)]
pub enum TupleHint {
    /// `Tuple[int, str]`; an empty list is `Tuple[()]`.
    Fixed(Vec<Hint>),
    /// `Tuple[int, ...]`.
    Variadic(Box<Hint>),
}

/// Origin of a homogeneous collection hint.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SequenceKind {
    List,
    Sequence,
    MutableSequence,
    Set,
    FrozenSet,
    AbstractSet,
    MutableSet,
}

impl SequenceKind {
    /// Class a pith must be an instance of.
    pub const fn origin(self) -> ClassId {
        match self {
            SequenceKind::List => ClassId::LIST,
            SequenceKind::Sequence => ClassId::SEQUENCE,
            SequenceKind::MutableSequence => ClassId::MUTABLE_SEQUENCE,
            SequenceKind::Set => ClassId::SET,
            SequenceKind::FrozenSet => ClassId::FROZENSET,
            SequenceKind::AbstractSet => ClassId::ABSTRACT_SET,
            SequenceKind::MutableSet => ClassId::MUTABLE_SET,
        }
    }

    /// Subscriptable name used in hint representations.
    pub const fn name(self) -> &'static str {
        match self {
            SequenceKind::List => "List",
            SequenceKind::Sequence => "Sequence",
            SequenceKind::MutableSequence => "MutableSequence",
            SequenceKind::Set => "Set",
            SequenceKind::FrozenSet => "FrozenSet",
            SequenceKind::AbstractSet => "AbstractSet",
            SequenceKind::MutableSet => "MutableSet",
        }
    }

    /// Whether items have meaningful positions.
    pub const fn is_ordered(self) -> bool {
        matches!(
            self,
            SequenceKind::List | SequenceKind::Sequence | SequenceKind::MutableSequence
        )
    }
}

/// Origin of a mapping hint.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MappingKind {
    Dict,
    Mapping,
    MutableMapping,
}

impl MappingKind {
    pub const fn origin(self) -> ClassId {
        match self {
            MappingKind::Dict => ClassId::DICT,
            MappingKind::Mapping => ClassId::MAPPING,
            MappingKind::MutableMapping => ClassId::MUTABLE_MAPPING,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MappingKind::Dict => "Dict",
            MappingKind::Mapping => "Mapping",
            MappingKind::MutableMapping => "MutableMapping",
        }
    }
}

// Factory Methods

impl Hint {
    #[inline]
    pub fn class(id: ClassId) -> Self {
        Hint::Class(id)
    }

    /// Build a union the way subscripting `Union` does: nested unions are
    /// flattened, duplicate members dropped, and a single remaining member
    /// is returned as is.
    ///
    /// No members give `Hint::Union(vec![])`, which no pith satisfies.
    pub fn union(members: impl IntoIterator<Item = Hint>) -> Self {
        fn push_new(flat: &mut Vec<Hint>, hint: Hint) {
            if !flat.contains(&hint) {
                flat.push(hint);
            }
        }

        let mut flat: Vec<Hint> = Vec::new();
        for mut member in members {
            if let Hint::Union(inner) = &mut member {
                for hint in std::mem::take(inner) {
                    push_new(&mut flat, hint);
                }
                continue;
            }
            push_new(&mut flat, member);
        }
        if flat.len() == 1 {
            flat.pop().unwrap_or(Hint::Any)
        } else {
            Hint::Union(flat)
        }
    }

    /// `Optional[hint]`, i.e. `Union[hint, None]`.
    pub fn optional(hint: Hint) -> Self {
        Hint::union([hint, Hint::Class(ClassId::NONE_TYPE)])
    }

    pub fn sequence(kind: SequenceKind, item: Hint) -> Self {
        Hint::Sequence {
            kind,
            item: Box::new(item),
        }
    }

    pub fn list(item: Hint) -> Self {
        Hint::sequence(SequenceKind::List, item)
    }

    /// Fixed-length tuple hint.
    pub fn tuple(items: Vec<Hint>) -> Self {
        Hint::Tuple(TupleHint::Fixed(items))
    }

    /// Variable-length tuple hint, `Tuple[item, ...]`.
    pub fn tuple_of(item: Hint) -> Self {
        Hint::Tuple(TupleHint::Variadic(Box::new(item)))
    }

    pub fn mapping(kind: MappingKind, key: Hint, value: Hint) -> Self {
        Hint::Mapping {
            kind,
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn dict(key: Hint, value: Hint) -> Self {
        Hint::mapping(MappingKind::Dict, key, value)
    }

    pub fn generic(origin: ClassId, bases: Vec<Hint>) -> Self {
        Hint::Generic { origin, bases }
    }

    pub fn subclass(id: ClassId) -> Self {
        Hint::Subclass(id)
    }

    pub fn literal(values: Vec<Pith>) -> Self {
        Hint::Literal(values)
    }

    pub fn forward_ref(name: impl Into<String>) -> Self {
        Hint::ForwardRef(name.into())
    }

    pub fn callable(params: Vec<Hint>, ret: Hint) -> Self {
        Hint::Callable {
            params,
            ret: Box::new(ret),
        }
    }

    pub fn type_var(name: impl Into<String>) -> Self {
        Hint::TypeVar(name.into())
    }

    pub fn opaque(text: impl Into<String>) -> Self {
        Hint::Opaque(text.into())
    }
}

// Hint Methods

impl Hint {
    /// Whether every pith satisfies this hint (`Any` or `object`).
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Hint::Any | Hint::Class(ClassId::OBJECT))
    }

    /// Child hints in declaration order.
    pub fn children(&self) -> Vec<&Hint> {
        match self {
            Hint::Union(members) | Hint::Generic { bases: members, .. } => {
                members.iter().collect()
            }
            Hint::Sequence { item, .. } | Hint::Tuple(TupleHint::Variadic(item)) => {
                vec![item.as_ref()]
            }
            Hint::Tuple(TupleHint::Fixed(items)) => items.iter().collect(),
            Hint::Mapping { key, value, .. } => vec![key.as_ref(), value.as_ref()],
            Hint::Callable { params, ret } => {
                params.iter().chain(std::iter::once(ret.as_ref())).collect()
            }
            Hint::Any
            | Hint::Class(_)
            | Hint::Subclass(_)
            | Hint::Literal(_)
            | Hint::ForwardRef(_)
            | Hint::TypeVar(_)
            | Hint::Opaque(_) => Vec::new(),
        }
    }
}

// Nested hints are dropped from a worklist so that a hint nested
// thousands of levels deep does not recurse once per level.
impl Drop for Hint {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut hint) = pending.pop() {
            hint.take_children(&mut pending);
        }
    }
}

impl Hint {
    /// Move child hints out, leaving `Any` behind in boxed slots.
    fn take_children(&mut self, pending: &mut Vec<Hint>) {
        fn take(slot: &mut Hint) -> Hint {
            std::mem::replace(slot, Hint::Any)
        }

        match self {
            Hint::Union(members)
            | Hint::Generic { bases: members, .. }
            | Hint::Tuple(TupleHint::Fixed(members)) => pending.append(members),
            Hint::Sequence { item, .. } | Hint::Tuple(TupleHint::Variadic(item)) => {
                pending.push(take(item));
            }
            Hint::Mapping { key, value, .. } => {
                pending.push(take(key));
                pending.push(take(value));
            }
            Hint::Callable { params, ret } => {
                pending.append(params);
                pending.push(take(ret));
            }
            Hint::Any
            | Hint::Class(_)
            | Hint::Subclass(_)
            | Hint::Literal(_)
            | Hint::ForwardRef(_)
            | Hint::TypeVar(_)
            | Hint::Opaque(_) => {}
        }
    }
}
