//! Demonstration driver for the L1 interpreter.
//!
//! Hardcodes the sample program
//!
//! ```text
//! l2 := 0; while !l1 >= 1 do (l2 := !l2 + !l1; l1 := !l1 + -1)
//! ```
//!
//! over the store `{l1: 10000, l2: 0}`, runs it to completion via the
//! small-step driver, cross-checks the result against the big-step
//! reference evaluator, and prints the final value plus a JSON snapshot
//! of the store.

use l1_eval::Program;
use l1_types::{Expr, Store};

fn int(n: i64) -> Expr {
    Expr::IntLit(n)
}

/// Sum the integers from `!l1` down to 1 into `l2`.
fn sum_down() -> Expr {
    Expr::seq(
        Expr::assign("l2", int(0)),
        Expr::while_do(
            Expr::ge(Expr::deref("l1"), int(1)),
            Expr::seq(
                Expr::assign("l2", Expr::add(Expr::deref("l2"), Expr::deref("l1"))),
                Expr::assign("l1", Expr::add(Expr::deref("l1"), int(-1))),
            ),
        ),
    )
}

fn main() {
    let expr = sum_down();
    let store: Store = [("l1", 10_000), ("l2", 0)].into_iter().collect();

    println!("program: {expr}");
    println!("initial: {store}");

    let mut prog = Program::new(expr, store).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let value = prog.run_to_completion();
    let state = prog.get_state();

    match prog.cross_check() {
        Ok((ref_value, ref_store)) if ref_value == value && ref_store == state => {
            println!("cross-check: reference evaluator agrees");
        }
        Ok(_) => {
            eprintln!("Error: reference evaluator disagrees with small-step result");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: reference run failed: {e}");
            std::process::exit(1);
        }
    }

    println!("value: {value}");
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("final store: {json}"),
        Err(e) => {
            eprintln!("Error: could not serialize store: {e}");
            std::process::exit(1);
        }
    }
}
