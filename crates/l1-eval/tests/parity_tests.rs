//! Differential and metatheory tests.
//!
//! Three harnesses over one corpus of well-typed programs:
//! 1. **Progress & Preservation**: every intermediate configuration of a
//!    checked program keeps checking, at the same type, against the
//!    current store — and stepping never panics.
//! 2. **Determinism**: two runs of a structurally identical program over
//!    structurally identical stores produce identical step traces, final
//!    values, and final stores.
//! 3. **Small-step ↔ big-step parity**: the small-step evaluator and the
//!    big-step reference evaluator agree on final value and final store
//!    for every terminating program.

use l1_check::check;
use l1_eval::{step, Program, Step};
use l1_types::{Expr, Store};

// ══════════════════════════════════════════════════════════════════════════════
// Corpus
// ══════════════════════════════════════════════════════════════════════════════

fn int(n: i64) -> Expr {
    Expr::IntLit(n)
}

/// Terminating well-typed programs paired with their stores.
fn corpus() -> Vec<(&'static str, Expr, Store)> {
    let sum_down = Expr::seq(
        Expr::assign("l2", int(0)),
        Expr::while_do(
            Expr::ge(Expr::deref("l1"), int(1)),
            Expr::seq(
                Expr::assign("l2", Expr::add(Expr::deref("l2"), Expr::deref("l1"))),
                Expr::assign("l1", Expr::add(Expr::deref("l1"), int(-1))),
            ),
        ),
    );

    vec![
        ("int literal", int(42), Store::new()),
        ("bool literal", Expr::BoolLit(false), Store::new()),
        ("skip", Expr::Skip, Store::new()),
        (
            "nested add",
            Expr::add(Expr::add(int(1), int(2)), Expr::add(int(3), int(4))),
            Store::new(),
        ),
        ("ge true", Expr::ge(int(5), int(3)), Store::new()),
        ("ge false", Expr::ge(int(-5), int(3)), Store::new()),
        (
            "deref",
            Expr::deref("x"),
            [("x", 11)].into_iter().collect(),
        ),
        (
            "assign computed value",
            Expr::assign("x", Expr::add(Expr::deref("x"), int(1))),
            [("x", 41)].into_iter().collect(),
        ),
        (
            "assign then deref",
            Expr::seq(Expr::assign("x", int(42)), Expr::deref("x")),
            [("x", 1)].into_iter().collect(),
        ),
        (
            "if over store guard",
            Expr::if_then_else(
                Expr::ge(Expr::deref("x"), int(0)),
                Expr::assign("x", int(1)),
                Expr::assign("x", int(-1)),
            ),
            [("x", 7)].into_iter().collect(),
        ),
        (
            "while with false guard",
            Expr::while_do(Expr::ge(int(0), int(1)), Expr::Skip),
            Store::new(),
        ),
        (
            "sum down from 5",
            sum_down.clone(),
            [("l1", 5), ("l2", 0)].into_iter().collect(),
        ),
        (
            "sum down from 100",
            sum_down,
            [("l1", 100), ("l2", 0)].into_iter().collect(),
        ),
        (
            "nested loops",
            Expr::while_do(
                Expr::ge(Expr::deref("i"), int(1)),
                Expr::seq(
                    Expr::seq(
                        Expr::assign("j", int(3)),
                        Expr::while_do(
                            Expr::ge(Expr::deref("j"), int(1)),
                            Expr::seq(
                                Expr::assign("acc", Expr::add(Expr::deref("acc"), int(1))),
                                Expr::assign("j", Expr::add(Expr::deref("j"), int(-1))),
                            ),
                        ),
                    ),
                    Expr::assign("i", Expr::add(Expr::deref("i"), int(-1))),
                ),
            ),
            [("i", 4), ("j", 0), ("acc", 0)].into_iter().collect(),
        ),
    ]
}

/// Run a program recording every intermediate expression.
fn trace(mut expr: Expr, store: &mut Store) -> Vec<Expr> {
    let mut steps = vec![expr.clone()];
    loop {
        match step(expr, store) {
            Step::Done(v) => {
                steps.push(v);
                return steps;
            }
            Step::Next(e) => {
                steps.push(e.clone());
                expr = e;
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Progress & Preservation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn preservation_holds_across_every_step() {
    for (name, expr, store) in corpus() {
        let mut store = store;
        let ty = check(&expr, &store).unwrap_or_else(|e| panic!("{name}: does not check: {e}"));

        let mut current = expr;
        loop {
            // Progress: a checked non-value always steps (a stuck panic
            // here fails the test).
            match step(current, &mut store) {
                Step::Done(_) => break,
                Step::Next(next) => {
                    let next_ty = check(&next, &store)
                        .unwrap_or_else(|e| panic!("{name}: intermediate form does not check: {e}"));
                    assert_eq!(next_ty, ty, "{name}: type changed during reduction");
                    current = next;
                }
            }
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn reduction_is_deterministic() {
    for (name, expr, store) in corpus() {
        let mut s1 = store.clone();
        let mut s2 = store;
        let t1 = trace(expr.clone(), &mut s1);
        let t2 = trace(expr, &mut s2);
        assert_eq!(t1, t2, "{name}: step traces diverged");
        assert_eq!(s1, s2, "{name}: final stores diverged");
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Small-step ↔ big-step parity
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn small_step_and_reference_evaluator_agree() {
    for (name, expr, store) in corpus() {
        let mut prog = Program::new(expr, store)
            .unwrap_or_else(|e| panic!("{name}: does not check: {e}"));
        let value = prog.run_to_completion();
        let (ref_value, ref_store) = prog
            .cross_check()
            .unwrap_or_else(|e| panic!("{name}: reference run failed: {e}"));
        assert_eq!(ref_value, value, "{name}: final values diverged");
        assert_eq!(ref_store, prog.get_state(), "{name}: final stores diverged");
    }
}
