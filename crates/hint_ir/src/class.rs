//! Class identifiers and the class table.
//!
//! Every runtime class a hint can name is an entry in a [`ClassTable`]. The
//! builtin classes are pre-registered at fixed indices so that hints and
//! piths can refer to them through the `ClassId` constants without a table
//! lookup. User classes are appended with [`ClassTable::define`].
//!
//! Subclass relationships are explicit: each class lists its direct bases,
//! and [`ClassTable::is_subclass`] walks them transitively. Bases must exist
//! before the class that names them, so the base graph is always acyclic.

use std::fmt;

use rustc_hash::FxHashMap;

/// Index of a class in a [`ClassTable`].
///
/// Builtin classes occupy the first [`ClassId::FIRST_USER`] slots.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    // Builtin concrete classes
    pub const OBJECT: ClassId = ClassId(0);
    pub const NONE_TYPE: ClassId = ClassId(1);
    pub const BOOL: ClassId = ClassId(2);
    pub const INT: ClassId = ClassId(3);
    pub const FLOAT: ClassId = ClassId(4);
    pub const STR: ClassId = ClassId(5);
    pub const BYTES: ClassId = ClassId(6);
    pub const LIST: ClassId = ClassId(7);
    pub const TUPLE: ClassId = ClassId(8);
    pub const DICT: ClassId = ClassId(9);
    pub const SET: ClassId = ClassId(10);
    pub const FROZENSET: ClassId = ClassId(11);
    pub const TYPE: ClassId = ClassId(12);

    // Abstract container classes
    pub const SEQUENCE: ClassId = ClassId(13);
    pub const MUTABLE_SEQUENCE: ClassId = ClassId(14);
    pub const ABSTRACT_SET: ClassId = ClassId(15);
    pub const MUTABLE_SET: ClassId = ClassId(16);
    pub const MAPPING: ClassId = ClassId(17);
    pub const MUTABLE_MAPPING: ClassId = ClassId(18);

    /// First index handed out by [`ClassTable::define`].
    pub const FIRST_USER: u32 = 19;

    /// Whether this is one of the pre-registered classes.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_USER
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Builtin classes, in `ClassId` order, with their direct bases.
const BUILTINS: &[(ClassId, &str, &[ClassId])] = &[
    (ClassId::OBJECT, "object", &[]),
    (ClassId::NONE_TYPE, "NoneType", &[ClassId::OBJECT]),
    // bool is an int subclass, so True satisfies `int`
    (ClassId::BOOL, "bool", &[ClassId::INT]),
    (ClassId::INT, "int", &[ClassId::OBJECT]),
    (ClassId::FLOAT, "float", &[ClassId::OBJECT]),
    (ClassId::STR, "str", &[ClassId::SEQUENCE]),
    (ClassId::BYTES, "bytes", &[ClassId::SEQUENCE]),
    (ClassId::LIST, "list", &[ClassId::MUTABLE_SEQUENCE]),
    (ClassId::TUPLE, "tuple", &[ClassId::SEQUENCE]),
    (ClassId::DICT, "dict", &[ClassId::MUTABLE_MAPPING]),
    (ClassId::SET, "set", &[ClassId::MUTABLE_SET]),
    (ClassId::FROZENSET, "frozenset", &[ClassId::ABSTRACT_SET]),
    (ClassId::TYPE, "type", &[ClassId::OBJECT]),
    (ClassId::SEQUENCE, "Sequence", &[ClassId::OBJECT]),
    (
        ClassId::MUTABLE_SEQUENCE,
        "MutableSequence",
        &[ClassId::SEQUENCE],
    ),
    (ClassId::ABSTRACT_SET, "AbstractSet", &[ClassId::OBJECT]),
    (ClassId::MUTABLE_SET, "MutableSet", &[ClassId::ABSTRACT_SET]),
    (ClassId::MAPPING, "Mapping", &[ClassId::OBJECT]),
    (ClassId::MUTABLE_MAPPING, "MutableMapping", &[ClassId::MAPPING]),
];

/// A registered class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDef {
    name: String,
    bases: Vec<ClassId>,
}

impl ClassDef {
    /// Unqualified class name, as shown in causes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct bases in declaration order.
    pub fn bases(&self) -> &[ClassId] {
        &self.bases
    }
}

/// Registry of every class hints and piths may refer to.
#[derive(Clone, Debug)]
pub struct ClassTable {
    classes: Vec<ClassDef>,
    by_name: FxHashMap<String, ClassId>,
}

impl ClassTable {
    /// Create a table holding only the builtin classes.
    pub fn new() -> Self {
        let mut table = ClassTable {
            classes: Vec::with_capacity(BUILTINS.len()),
            by_name: FxHashMap::default(),
        };
        for &(id, name, bases) in BUILTINS {
            debug_assert_eq!(id.index(), table.classes.len());
            table.push(name.to_string(), bases.to_vec());
        }
        table
    }

    /// Register a user class and return its id.
    ///
    /// An empty `bases` slice means the class derives directly from
    /// `object`. Redefining a name shadows the earlier class for
    /// [`lookup`](Self::lookup); the earlier id stays valid.
    pub fn define(&mut self, name: impl Into<String>, bases: &[ClassId]) -> ClassId {
        let bases = if bases.is_empty() {
            vec![ClassId::OBJECT]
        } else {
            bases.to_vec()
        };
        debug_assert!(
            bases.iter().all(|base| base.index() < self.classes.len()),
            "class bases must be defined before their subclasses"
        );
        self.push(name.into(), bases)
    }

    fn push(&mut self, name: String, bases: Vec<ClassId>) -> ClassId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "class tables never approach u32::MAX entries"
        )]
        let id = ClassId(self.classes.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.classes.push(ClassDef { name, bases });
        id
    }

    /// Get a class definition.
    pub fn get(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.index())
    }

    /// Get a class name, or a placeholder for ids from another table.
    pub fn name(&self, id: ClassId) -> &str {
        self.get(id).map_or("<unknown class>", ClassDef::name)
    }

    /// Resolve a class by name (used for forward references).
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Whether `child` is `parent` or transitively derives from it.
    ///
    /// Every known class is a subclass of `object`.
    pub fn is_subclass(&self, child: ClassId, parent: ClassId) -> bool {
        if child == parent {
            return true;
        }
        if parent == ClassId::OBJECT {
            return self.get(child).is_some();
        }

        let mut pending = vec![child];
        let mut seen = vec![false; self.classes.len()];
        while let Some(current) = pending.pop() {
            let Some(def) = self.get(current) else {
                continue;
            };
            for &base in def.bases() {
                if base == parent {
                    return true;
                }
                if let Some(flag) = seen.get_mut(base.index()) {
                    if !*flag {
                        *flag = true;
                        pending.push(base);
                    }
                }
            }
        }
        false
    }

    /// Number of registered classes, builtins included.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always `false`: the builtins are registered on construction.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::new()
    }
}
