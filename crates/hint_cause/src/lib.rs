//! Hint Cause - explains why a value violates a type hint.
//!
//! A fast type check has already decided that a value (the *pith*) does not
//! satisfy its type hint. This crate walks the hint and the pith together to
//! find out *which* part of the pith is to blame, and describes it in one
//! human-readable sentence fragment (the *cause*):
//!
//! ```text
//! list [1, 2, 'x'] index 2 item str 'x' not int
//! ```
//!
//! This crate provides:
//! - Hint classification into categories (`HintCategory`, `classify`)
//! - The explainer registry and per-category explainers (`ExplainerRegistry`)
//! - The recursive cause sleuth (`CauseSleuth`, `get_cause_or_none`)
//! - Call violation messages (`explain_call_violation`)
//!
//! # Architecture
//!
//! Dispatch is a closed `match` over `HintCategory`: every category maps to
//! one `'static` explainer in `ExplainerRegistry`. Explainers of composite
//! hints derive child sleuths with `CauseSleuth::permute` and recurse until
//! a plain class either accepts or rejects the child pith. The first child
//! cause found is wrapped in context and returned.
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=hint_cause=debug`: Trace top-level requests.
//! - `RUST_LOG=hint_cause=trace`: Trace every dispatch (very verbose).

mod category;
mod config;
mod error;
mod explain;
mod label;
mod registry;
mod sleuth;
mod violation;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use category::{classify, is_composite, HintCategory};
pub use config::CauseConfig;
pub use error::{CauseResult, SleuthError};
pub use explain::{
    AnyExplainer, ClassExplainer, Explain, ForwardRefExplainer, GenericExplainer,
    LiteralExplainer, MappingExplainer, SequenceExplainer, SubclassExplainer, TupleExplainer,
    UnionExplainer,
};
pub use label::{join_disjunction, represent_object, represent_pith, truncate_repr};
pub use registry::{ExplainerRegistry, REGISTRY};
pub use sleuth::{get_cause_or_none, CauseSleuth, Permute};
pub use violation::{exception_label, explain_call_violation, CallViolation, PithRole};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, and
/// leaves an already installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
