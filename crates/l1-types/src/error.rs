//! Error types for the L1 interpreter.
//!
//! Two recoverable kinds, both caller-facing and both raised before any
//! reduction happens: static type mismatches and references to locations
//! absent from the store. A third condition — the evaluator reaching a
//! configuration with no applicable rule ("stuck") — is an internal
//! invariant violation, unreachable for programs that passed the checker
//! against the store they run on, and panics instead of returning here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A static validation error, detected before evaluation begins.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum L1Error {
    /// Static type mismatch detected by the checker.
    #[error("type error: {construct}: {detail}")]
    Type {
        /// The construct being checked (e.g. "add", "if").
        construct: String,
        /// Human-readable description of the mismatch.
        detail: String,
    },

    /// Reference to a location absent from the store.
    #[error("location error: {construct}: location {location} does not exist in store")]
    Location {
        /// The construct naming the location ("deref" or "assign").
        construct: String,
        /// The offending location identifier.
        location: String,
    },
}

impl L1Error {
    /// Construct a type error.
    pub fn type_error(construct: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Type {
            construct: construct.into(),
            detail: detail.into(),
        }
    }

    /// Construct a location error.
    pub fn location_error(construct: impl Into<String>, location: impl Into<String>) -> Self {
        Self::Location {
            construct: construct.into(),
            location: location.into(),
        }
    }
}
