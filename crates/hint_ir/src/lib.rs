//! Hint IR - data model for the hint cause engine.
//!
//! This crate contains the values the cause engine reasons about:
//! - Classes and the class table (`ClassId`, `ClassTable`)
//! - Runtime values checked against hints (`Pith`)
//! - Type hints as a closed sum of supported forms (`Hint`)
//! - Human-readable representations of both (`ClassTable::format_*`)
//!
//! # Design Philosophy
//!
//! - **Closed grammar**: every hint form is a `Hint` variant, so consumers
//!   classify hints with an exhaustive `match` rather than introspection.
//! - **Immutable values**: piths and hints are never mutated after
//!   construction; container piths share their payloads through `Heap`.
//! - **Explicit classes**: subclass checks go through the class table, and
//!   builtin classes have fixed `ClassId` constants.

mod class;
mod format;
mod heap;
mod hint;
mod pith;

pub use class::{ClassDef, ClassId, ClassTable};
pub use heap::Heap;
pub use hint::{Hint, MappingKind, SequenceKind, TupleHint};
pub use pith::{ObjectContents, ObjectValue, Pith};
