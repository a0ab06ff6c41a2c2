//! Type checking of L1 expressions against a store.
//!
//! Checking is pure: it walks the expression tree and the store's
//! location set, never reading or mutating live values. Run once before
//! any reduction, a successful check of `(expr, store)` guarantees the
//! small-step evaluator never gets stuck on that pair (Progress), and
//! every reduction preserves the checked type (Preservation).

use l1_types::{Expr, L1Error, Result, Store, Ty};

/// Compute the static type of `expr` against `store`.
///
/// Errors:
/// - [`L1Error::Type`] on operand, branch, guard or sequencing mismatches;
/// - [`L1Error::Location`] when `deref`/`assign` name a location absent
///   from `store`.
pub fn check(expr: &Expr, store: &Store) -> Result<Ty> {
    match expr {
        Expr::IntLit(_) => Ok(Ty::Int),
        Expr::BoolLit(_) => Ok(Ty::Bool),
        Expr::Skip => Ok(Ty::Unit),

        Expr::Add(lhs, rhs) => {
            expect(Ty::Int, lhs, store, "add", "left operand")?;
            expect(Ty::Int, rhs, store, "add", "right operand")?;
            Ok(Ty::Int)
        }

        Expr::Ge(lhs, rhs) => {
            expect(Ty::Int, lhs, store, "ge", "left operand")?;
            expect(Ty::Int, rhs, store, "ge", "right operand")?;
            Ok(Ty::Bool)
        }

        Expr::Deref(l) => {
            if store.contains(l) {
                Ok(Ty::Int)
            } else {
                Err(L1Error::location_error("deref", l.id()))
            }
        }

        Expr::Assign(l, e) => {
            if !store.contains(l) {
                return Err(L1Error::location_error("assign", l.id()));
            }
            expect(Ty::Int, e, store, "assign", "assigned value")?;
            Ok(Ty::Unit)
        }

        Expr::Seq(e1, e2) => {
            expect(Ty::Unit, e1, store, "seq", "first expression")?;
            check(e2, store)
        }

        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => {
            expect(Ty::Bool, cond, store, "if", "guard")?;
            let then_ty = check(then_branch, store)?;
            let else_ty = check(else_branch, store)?;
            if then_ty == else_ty {
                Ok(then_ty)
            } else {
                Err(L1Error::type_error(
                    "if",
                    format!("branches must agree, got {then_ty} and {else_ty}"),
                ))
            }
        }

        Expr::While { cond, body } => {
            expect(Ty::Bool, cond, store, "while", "guard")?;
            expect(Ty::Unit, body, store, "while", "body")?;
            Ok(Ty::Unit)
        }
    }
}

/// Check `expr` and require the given type.
fn expect(expected: Ty, expr: &Expr, store: &Store, construct: &str, role: &str) -> Result<Ty> {
    let got = check(expr, store)?;
    if got == expected {
        Ok(got)
    } else {
        Err(L1Error::type_error(
            construct,
            format!("{role} must be {expected}, got {got}"),
        ))
    }
}
