//! Big-step reference evaluator.
//!
//! A directly recursive evaluator over the same expression tree as the
//! small-step one: `while` is a native loop here, not a rewrite. It is
//! not the primary execution path — it exists so the small-step
//! evaluator's final value and store can be cross-checked against an
//! independent implementation running on an independent store copy.
//!
//! The only error kind it surfaces is the store's location failure;
//! value-shape mismatches are the same internal invariant violation as a
//! stuck small-step state and panic the same way.

use l1_types::{Expr, Result, Store, Value};

/// Evaluate `expr` to a value, mutating `store` directly.
pub fn eval_direct(expr: &Expr, store: &mut Store) -> Result<Value> {
    match expr {
        Expr::IntLit(n) => Ok(Value::Int(*n)),
        Expr::BoolLit(b) => Ok(Value::Bool(*b)),
        Expr::Skip => Ok(Value::Skip),

        Expr::Add(lhs, rhs) => {
            let a = int_of(eval_direct(lhs, store)?, "add");
            let b = int_of(eval_direct(rhs, store)?, "add");
            Ok(Value::Int(a.wrapping_add(b)))
        }

        Expr::Ge(lhs, rhs) => {
            let a = int_of(eval_direct(lhs, store)?, "ge");
            let b = int_of(eval_direct(rhs, store)?, "ge");
            Ok(Value::Bool(a >= b))
        }

        Expr::Deref(l) => Ok(Value::Int(store.deref(l)?)),

        Expr::Assign(l, e) => {
            let v = int_of(eval_direct(e, store)?, "assign");
            store.assign(l, v)?;
            Ok(Value::Skip)
        }

        Expr::Seq(e1, e2) => {
            eval_direct(e1, store)?;
            eval_direct(e2, store)
        }

        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => {
            if bool_of(eval_direct(cond, store)?, "if") {
                eval_direct(then_branch, store)
            } else {
                eval_direct(else_branch, store)
            }
        }

        Expr::While { cond, body } => {
            while bool_of(eval_direct(cond, store)?, "while") {
                eval_direct(body, store)?;
            }
            Ok(Value::Skip)
        }
    }
}

fn int_of(v: Value, construct: &str) -> i64 {
    match v {
        Value::Int(n) => n,
        other => panic!("stuck: {construct}: expected an integer, got {other}"),
    }
}

fn bool_of(v: Value, construct: &str) -> bool {
    match v {
        Value::Bool(b) => b,
        other => panic!("stuck: {construct}: expected a boolean, got {other}"),
    }
}
