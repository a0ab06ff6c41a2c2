//! Expression tree for the L1 language.
//!
//! L1 is a closed language: exactly ten node kinds, no extensibility.
//! Every non-leaf node owns its children exclusively via [`Box`] — the
//! tree is pure (no sharing, no cycles), and a reduction step replaces
//! the whole tree rather than mutating it in place. Recursive variants
//! are boxed to keep the enum size reasonable.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Locations
// ══════════════════════════════════════════════════════════════════════════════

/// A store location identifier.
///
/// Purely a name — locations have no structure beyond identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Loc(String);

impl Loc {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The location's identifier.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Loc {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Loc {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An L1 expression.
///
/// The terminal forms are `IntLit`, `BoolLit` and `Skip`; everything else
/// reduces. [`Expr::is_value`] distinguishes the two.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal (64-bit signed).
    IntLit(i64),
    /// Boolean literal.
    BoolLit(bool),
    /// The unit value.
    Skip,
    /// Integer addition: `e1 + e2`.
    Add(Box<Expr>, Box<Expr>),
    /// Integer comparison: `e1 >= e2`, yields a boolean.
    Ge(Box<Expr>, Box<Expr>),
    /// Store read: `!l`.
    Deref(Loc),
    /// Store write: `l := e`, yields `skip`.
    Assign(Loc, Box<Expr>),
    /// Sequencing: `e1; e2`. `e1` must terminate with `skip`.
    Seq(Box<Expr>, Box<Expr>),
    /// Conditional: `if cond then e1 else e2`.
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// Loop: `while cond do body`, yields `skip` on termination.
    While { cond: Box<Expr>, body: Box<Expr> },
}

impl Expr {
    // ── Construction helpers ──────────────────────────────────────────────
    //
    // Children are composed by ownership transfer; these exist so callers
    // building trees by hand are not writing `Box::new` chains.

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn ge(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Ge(Box::new(lhs), Box::new(rhs))
    }

    pub fn deref(l: impl Into<Loc>) -> Expr {
        Expr::Deref(l.into())
    }

    pub fn assign(l: impl Into<Loc>, e: Expr) -> Expr {
        Expr::Assign(l.into(), Box::new(e))
    }

    pub fn seq(e1: Expr, e2: Expr) -> Expr {
        Expr::Seq(Box::new(e1), Box::new(e2))
    }

    pub fn if_then_else(cond: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_do(cond: Expr, body: Expr) -> Expr {
        Expr::While {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    // ── Classification ────────────────────────────────────────────────────

    /// Whether this expression is a terminal form (no reduction applies).
    pub fn is_value(&self) -> bool {
        matches!(self, Expr::IntLit(_) | Expr::BoolLit(_) | Expr::Skip)
    }

    /// View a terminal form as a [`Value`], or `None` if still reducible.
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Expr::IntLit(n) => Some(Value::Int(*n)),
            Expr::BoolLit(b) => Some(Value::Bool(*b)),
            Expr::Skip => Some(Value::Skip),
            _ => None,
        }
    }

    /// The construct name, for diagnostics.
    pub fn construct_name(&self) -> &'static str {
        match self {
            Expr::IntLit(_) => "int",
            Expr::BoolLit(_) => "bool",
            Expr::Skip => "skip",
            Expr::Add(..) => "add",
            Expr::Ge(..) => "ge",
            Expr::Deref(_) => "deref",
            Expr::Assign(..) => "assign",
            Expr::Seq(..) => "seq",
            Expr::If { .. } => "if",
            Expr::While { .. } => "while",
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::IntLit(n) => write!(f, "{n}"),
            Expr::BoolLit(b) => write!(f, "{b}"),
            Expr::Skip => write!(f, "skip"),
            Expr::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            Expr::Ge(lhs, rhs) => write!(f, "({lhs} >= {rhs})"),
            Expr::Deref(l) => write!(f, "!{l}"),
            Expr::Assign(l, e) => write!(f, "{l} := {e}"),
            Expr::Seq(e1, e2) => write!(f, "{e1}; {e2}"),
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "if {cond} then {then_branch} else {else_branch}"),
            Expr::While { cond, body } => write!(f, "while {cond} do ({body})"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Values
// ══════════════════════════════════════════════════════════════════════════════

/// A terminal form: the result of a completed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Int(i64),
    Bool(bool),
    Skip,
}

impl From<Value> for Expr {
    fn from(v: Value) -> Expr {
        match v {
            Value::Int(n) => Expr::IntLit(n),
            Value::Bool(b) => Expr::BoolLit(b),
            Value::Skip => Expr::Skip,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Skip => write!(f, "skip"),
        }
    }
}
