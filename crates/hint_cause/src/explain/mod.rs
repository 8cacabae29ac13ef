//! Per-category explainers.
//!
//! Each explainer handles one family of hint forms and is registered
//! against the categories of that family in
//! [`ExplainerRegistry`](crate::ExplainerRegistry). Explainers are
//! zero-sized types with `'static` instances, so the registry hands out
//! plain `&'static dyn Explain` references.
//!
//! # Contract
//!
//! - Return `Ok(None)` when the pith satisfies the hint.
//! - Visit children in a fixed order (declaration order for unions and
//!   tuples, iteration order for containers) and return the FIRST cause.
//! - Recurse only through sleuths derived with `permute`.

mod any;
mod class;
mod forward_ref;
mod generic;
mod literal;
mod mapping;
mod sequence;
mod subclass;
mod tuple;
mod union;

pub use any::AnyExplainer;
pub use class::ClassExplainer;
pub use forward_ref::ForwardRefExplainer;
pub use generic::GenericExplainer;
pub use literal::LiteralExplainer;
pub use mapping::MappingExplainer;
pub use sequence::SequenceExplainer;
pub use subclass::SubclassExplainer;
pub use tuple::TupleExplainer;
pub use union::UnionExplainer;

use crate::error::CauseResult;
use crate::sleuth::CauseSleuth;

/// Explains violations of one category of hint.
pub trait Explain: Send + Sync {
    /// Short name for tracing output.
    fn name(&self) -> &'static str;

    /// Cause of the sleuth's pith violating its hint, or `None`.
    fn explain(&self, sleuth: &CauseSleuth<'_>) -> CauseResult;
}
