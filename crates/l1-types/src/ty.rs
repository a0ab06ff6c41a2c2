//! The L1 static type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of an L1 expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ty {
    /// 64-bit signed integers.
    Int,
    /// Booleans.
    Bool,
    /// The type of `skip` and of completed commands.
    Unit,
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Int => write!(f, "int"),
            Ty::Bool => write!(f, "bool"),
            Ty::Unit => write!(f, "unit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Ty::Int.to_string(), "int");
        assert_eq!(Ty::Bool.to_string(), "bool");
        assert_eq!(Ty::Unit.to_string(), "unit");
    }
}
