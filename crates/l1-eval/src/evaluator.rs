//! Small-step evaluator for L1.
//!
//! [`step`] applies exactly one reduction rule, left-to-right,
//! call-by-value. The expression tree is consumed and a brand-new tree is
//! returned; the store is the only thing mutated in place, and only by
//! the assign rule. [`run`] drives `step` until a terminal form is
//! reached — with no fuel limit, so a diverging loop runs forever, which
//! is the correct semantics of an unbounded `while`.
//!
//! A configuration with no applicable rule is *stuck*. Stuck states are
//! unreachable for any expression that passed `l1_check::check` against
//! the store being evaluated, so they panic instead of returning an
//! error.

use l1_types::{Expr, Store};

/// Outcome of one reduction attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The input was already a terminal form; it is handed back unchanged.
    Done(Expr),
    /// One rule fired; this is the replacement tree.
    Next(Expr),
}

impl Step {
    /// The expression inside, terminal or not.
    pub fn into_expr(self) -> Expr {
        match self {
            Step::Done(e) | Step::Next(e) => e,
        }
    }
}

/// Apply at most one reduction to `expr` against `store`.
///
/// Panics if the configuration is stuck — an internal invariant
/// violation for type-checked programs.
pub fn step(expr: Expr, store: &mut Store) -> Step {
    if expr.is_value() {
        Step::Done(expr)
    } else {
        Step::Next(reduce(expr, store))
    }
}

/// Drive `expr` to a terminal form, returning it.
pub fn run(mut expr: Expr, store: &mut Store) -> Expr {
    loop {
        match step(expr, store) {
            Step::Done(v) => return v,
            Step::Next(e) => expr = e,
        }
    }
}

/// Apply exactly one rule to a non-terminal expression.
fn reduce(expr: Expr, store: &mut Store) -> Expr {
    match expr {
        Expr::Add(lhs, rhs) => match (*lhs, *rhs) {
            // (op+)
            (Expr::IntLit(a), Expr::IntLit(b)) => Expr::IntLit(a.wrapping_add(b)),
            // (op1)
            (l, r) if !l.is_value() => Expr::add(reduce(l, store), r),
            // (op2)
            (l, r) if !r.is_value() => Expr::add(l, reduce(r, store)),
            (l, r) => stuck("add", &format!("operands {l} and {r} are not integers")),
        },

        Expr::Ge(lhs, rhs) => match (*lhs, *rhs) {
            // (op>=)
            (Expr::IntLit(a), Expr::IntLit(b)) => Expr::BoolLit(a >= b),
            // (op1)
            (l, r) if !l.is_value() => Expr::ge(reduce(l, store), r),
            // (op2)
            (l, r) if !r.is_value() => Expr::ge(l, reduce(r, store)),
            (l, r) => stuck("ge", &format!("operands {l} and {r} are not integers")),
        },

        // (deref)
        Expr::Deref(l) => match store.deref(&l) {
            Ok(v) => Expr::IntLit(v),
            Err(_) => stuck("deref", &format!("location {l} missing from store")),
        },

        Expr::Assign(l, e) => match *e {
            // (assign1)
            Expr::IntLit(v) => {
                if store.assign(&l, v).is_err() {
                    stuck("assign", &format!("location {l} missing from store"));
                }
                Expr::Skip
            }
            e if e.is_value() => stuck("assign", &format!("assigned value {e} is not an integer")),
            // (assign2)
            e => Expr::assign(l, reduce(e, store)),
        },

        Expr::Seq(e1, e2) => match *e1 {
            // (seq1) — the second expression is returned as-is, not
            // reduced further within this step.
            Expr::Skip => *e2,
            // (seq2)
            e1 if !e1.is_value() => Expr::seq(reduce(e1, store), *e2),
            e1 => stuck("seq", &format!("first expression terminated with {e1}, not skip")),
        },

        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => match *cond {
            // (if1) / (if2) — the untaken branch is discarded unevaluated.
            Expr::BoolLit(true) => *then_branch,
            Expr::BoolLit(false) => *else_branch,
            // (if3)
            c if !c.is_value() => Expr::if_then_else(reduce(c, store), *then_branch, *else_branch),
            c => stuck("if", &format!("guard terminated with {c}, not a boolean")),
        },

        // (while) — unroll one iteration. The guard check and the
        // body-then-loop continuation each need their own copy of the
        // condition/body, while the original instances move into the
        // inner `while` for the next iteration.
        Expr::While { cond, body } => {
            let guard = (*cond).clone();
            let once = (*body).clone();
            Expr::if_then_else(
                guard,
                Expr::seq(once, Expr::While { cond, body }),
                Expr::Skip,
            )
        }

        // `step` filters terminal forms before calling here.
        Expr::IntLit(_) | Expr::BoolLit(_) | Expr::Skip => {
            unreachable!("reduce called on a terminal form")
        }
    }
}

/// Abort on a configuration with no applicable rule.
///
/// Progress guarantees this is unreachable once `l1_check::check` has
/// accepted the expression against the same store, so a stuck state is a
/// fatal internal-invariant violation, not a recoverable error.
fn stuck(construct: &str, detail: &str) -> ! {
    panic!("stuck: {construct}: {detail}; expression was not type-checked against this store")
}
