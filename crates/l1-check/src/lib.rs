//! L1 static type checker.
//!
//! Entry point: [`check`].

mod checker;

pub use checker::check;
