//! Runtime values checked against hints.
//!
//! A [`Pith`] is the object whose violation of a hint is being explained.
//! Heap payloads sit behind [`Heap`], so handing a container item to a
//! child sleuth is a reference-count bump rather than a copy.
//!
//! # Construction
//!
//! Heap-backed piths are built through the factory methods:
//!
//! ```text
//! let s = Pith::str("x");
//! let items = Pith::list(vec![Pith::Int(1), Pith::Int(2), Pith::str("x")]);
//! let entries = Pith::dict(vec![(Pith::str("a"), Pith::Int(1))]);
//! ```

use std::borrow::Cow;

use crate::class::ClassId;
use crate::heap::Heap;

/// Runtime value.
///
/// Sets and dicts keep insertion order, which is also the order explainers
/// visit their members in.
#[derive(Clone, Debug, PartialEq)]
pub enum Pith {
    /// The `None` singleton.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<str>),
    Bytes(Heap<Vec<u8>>),
    List(Heap<Vec<Pith>>),
    Tuple(Heap<Vec<Pith>>),
    Set(Heap<Vec<Pith>>),
    FrozenSet(Heap<Vec<Pith>>),
    Dict(Heap<Vec<(Pith, Pith)>>),
    /// A class object (the value of `int`, not an instance of it).
    Class(ClassId),
    /// Instance of a user class.
    Object(Heap<ObjectValue>),
}

/// Instance of a user class, optionally carrying container contents.
///
/// A user subclass of `list` carries `Items`; a user subclass of `dict`
/// carries `Entries`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub class: ClassId,
    pub contents: ObjectContents,
}

/// Container contents of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectContents {
    Opaque,
    Items(Vec<Pith>),
    Entries(Vec<(Pith, Pith)>),
}

// Factory Methods

impl Pith {
    #[inline]
    pub fn str(s: &str) -> Self {
        Pith::Str(Heap::from_text(s))
    }

    #[inline]
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Pith::Bytes(Heap::new(b.into()))
    }

    #[inline]
    pub fn list(items: Vec<Pith>) -> Self {
        Pith::List(Heap::new(items))
    }

    #[inline]
    pub fn tuple(items: Vec<Pith>) -> Self {
        Pith::Tuple(Heap::new(items))
    }

    #[inline]
    pub fn set(items: Vec<Pith>) -> Self {
        Pith::Set(Heap::new(items))
    }

    #[inline]
    pub fn frozenset(items: Vec<Pith>) -> Self {
        Pith::FrozenSet(Heap::new(items))
    }

    #[inline]
    pub fn dict(entries: Vec<(Pith, Pith)>) -> Self {
        Pith::Dict(Heap::new(entries))
    }

    /// Plain instance of a user class.
    #[inline]
    pub fn object(class: ClassId) -> Self {
        Pith::Object(Heap::new(ObjectValue {
            class,
            contents: ObjectContents::Opaque,
        }))
    }

    /// Instance of a user sequence class.
    #[inline]
    pub fn object_with_items(class: ClassId, items: Vec<Pith>) -> Self {
        Pith::Object(Heap::new(ObjectValue {
            class,
            contents: ObjectContents::Items(items),
        }))
    }

    /// Instance of a user mapping class.
    #[inline]
    pub fn object_with_entries(class: ClassId, entries: Vec<(Pith, Pith)>) -> Self {
        Pith::Object(Heap::new(ObjectValue {
            class,
            contents: ObjectContents::Entries(entries),
        }))
    }
}

// Pith Methods

impl Pith {
    /// Class of this value (`type(pith)`).
    pub fn class_id(&self) -> ClassId {
        match self {
            Pith::None => ClassId::NONE_TYPE,
            Pith::Bool(_) => ClassId::BOOL,
            Pith::Int(_) => ClassId::INT,
            Pith::Float(_) => ClassId::FLOAT,
            Pith::Str(_) => ClassId::STR,
            Pith::Bytes(_) => ClassId::BYTES,
            Pith::List(_) => ClassId::LIST,
            Pith::Tuple(_) => ClassId::TUPLE,
            Pith::Set(_) => ClassId::SET,
            Pith::FrozenSet(_) => ClassId::FROZENSET,
            Pith::Dict(_) => ClassId::DICT,
            Pith::Class(_) => ClassId::TYPE,
            Pith::Object(obj) => obj.class,
        }
    }

    /// Items in iteration order, if this value is a collection.
    ///
    /// Strings yield one-character strings and bytes yield integers, so
    /// these are materialized; every other collection is borrowed.
    pub fn elements(&self) -> Option<Cow<'_, [Pith]>> {
        match self {
            Pith::List(items) | Pith::Tuple(items) | Pith::Set(items) | Pith::FrozenSet(items) => {
                Some(Cow::Borrowed(items.as_slice()))
            }
            Pith::Str(s) => Some(Cow::Owned(
                s.chars()
                    .map(|c| Pith::str(c.encode_utf8(&mut [0; 4])))
                    .collect(),
            )),
            Pith::Bytes(b) => Some(Cow::Owned(
                b.iter().map(|&byte| Pith::Int(i64::from(byte))).collect(),
            )),
            Pith::Object(obj) => match &obj.contents {
                ObjectContents::Items(items) => Some(Cow::Borrowed(items.as_slice())),
                ObjectContents::Opaque | ObjectContents::Entries(_) => None,
            },
            _ => None,
        }
    }

    /// Key-value pairs in iteration order, if this value is a mapping.
    pub fn entries(&self) -> Option<&[(Pith, Pith)]> {
        match self {
            Pith::Dict(entries) => Some(entries.as_slice()),
            Pith::Object(obj) => match &obj.contents {
                ObjectContents::Entries(entries) => Some(entries.as_slice()),
                ObjectContents::Opaque | ObjectContents::Items(_) => None,
            },
            _ => None,
        }
    }

    /// Literal equality: same class and same value, so `True != 1`.
    pub fn same_literal(&self, other: &Pith) -> bool {
        self.class_id() == other.class_id() && self == other
    }
}

// Nested piths are dropped from a worklist so that a value nested
// thousands of levels deep does not recurse once per level.
impl Drop for Pith {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut pith) = pending.pop() {
            pith.take_children(&mut pending);
        }
    }
}

impl Pith {
    /// Move children out of payloads this pith owns alone.
    fn take_children(&mut self, pending: &mut Vec<Pith>) {
        match self {
            Pith::List(items) | Pith::Tuple(items) | Pith::Set(items) | Pith::FrozenSet(items) => {
                if let Some(items) = items.get_mut() {
                    pending.append(items);
                }
            }
            Pith::Dict(entries) => {
                if let Some(entries) = entries.get_mut() {
                    drain_entries(entries, pending);
                }
            }
            Pith::Object(obj) => {
                if let Some(obj) = obj.get_mut() {
                    match &mut obj.contents {
                        ObjectContents::Items(items) => pending.append(items),
                        ObjectContents::Entries(entries) => drain_entries(entries, pending),
                        ObjectContents::Opaque => {}
                    }
                }
            }
            Pith::None
            | Pith::Bool(_)
            | Pith::Int(_)
            | Pith::Float(_)
            | Pith::Str(_)
            | Pith::Bytes(_)
            | Pith::Class(_) => {}
        }
    }
}

fn drain_entries(entries: &mut Vec<(Pith, Pith)>, pending: &mut Vec<Pith>) {
    for (key, value) in entries.drain(..) {
        pending.push(key);
        pending.push(value);
    }
}
