//! Program — one expression coupled with one store.
//!
//! Construction type-checks the pair once; an ill-typed program never
//! yields a usable driver. The checked expression is bound to its store
//! irrevocably (there is no store-swapping API), which is what makes the
//! evaluator's Progress guarantee hold for the whole run.

use crate::evaluator;
use crate::reference;
use l1_types::{Expr, Result, Store, Value};

/// Driver for evaluating a single L1 program.
pub struct Program {
    /// The current expression — replaced wholesale on every step.
    expr: Expr,
    /// The live store, mutated in place by assign reductions.
    store: Store,
    /// The program as constructed, retained for differential runs.
    initial: (Expr, Store),
}

impl Program {
    /// Couple `expr` with `store`, type-checking the pair.
    ///
    /// Fails with the checker's error if the program is ill-typed or
    /// names a location absent from `store`.
    pub fn new(expr: Expr, store: Store) -> Result<Self> {
        l1_check::check(&expr, &store)?;
        let initial = (expr.clone(), store.clone());
        Ok(Self {
            expr,
            store,
            initial,
        })
    }

    /// Advance by exactly one reduction. No-op once terminal.
    pub fn step(&mut self) {
        // The tree is consumed and replaced; `Skip` stands in while the
        // evaluator owns it.
        let expr = std::mem::replace(&mut self.expr, Expr::Skip);
        self.expr = evaluator::step(expr, &mut self.store).into_expr();
    }

    /// Drive the program to its terminal form and return the value.
    ///
    /// Diverges (by design) on programs whose loops never terminate.
    pub fn run_to_completion(&mut self) -> Value {
        loop {
            if let Some(v) = self.expr.as_value() {
                return v;
            }
            self.step();
        }
    }

    /// Whether the expression has reached a terminal form.
    pub fn has_terminated(&self) -> bool {
        self.expr.is_value()
    }

    /// The current expression tree (for step-by-step inspection).
    pub fn current_expr(&self) -> &Expr {
        &self.expr
    }

    /// A read-only snapshot of the store.
    pub fn get_state(&self) -> Store {
        self.store.clone()
    }

    /// Run the big-step reference evaluator over independent copies of
    /// the *initial* expression and store, returning its final value and
    /// store for comparison against the primary result. Neither
    /// evaluation can observe the other.
    pub fn cross_check(&self) -> Result<(Value, Store)> {
        let (expr, mut store) = self.initial.clone();
        let value = reference::eval_direct(&expr, &mut store)?;
        Ok((value, store))
    }
}
