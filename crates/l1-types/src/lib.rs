//! Shared types for the L1 interpreter.
//!
//! This crate defines the expression tree, the terminal value and static
//! type enumerations, the mutable store, and the error type used across
//! all interpreter stages.

pub mod ast;
mod error;
mod store;
mod ty;

pub use ast::{Expr, Loc, Value};
pub use error::L1Error;
pub use store::Store;
pub use ty::Ty;

/// Result type used throughout the L1 interpreter.
pub type Result<T> = std::result::Result<T, L1Error>;
