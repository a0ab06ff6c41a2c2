//! L1 evaluation.
//!
//! Two independent evaluators over the shared expression tree:
//! - [`step`]/[`run`] — the small-step evaluator, the primary execution
//!   path, reducing one rule application at a time;
//! - [`reference::eval_direct`] — a big-step recursive evaluator used as
//!   the golden reference for differential cross-checking.
//!
//! [`Program`] couples one expression with one store, type-checks at
//! construction, and exposes stepping, running, inspection, and the
//! cross-check entry point.

mod evaluator;
mod program;
pub mod reference;

pub use evaluator::{run, step, Step};
pub use program::Program;
