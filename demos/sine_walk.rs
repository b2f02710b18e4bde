//! Approximate `sin(x)` on `[-2π, 2π)` with the canonical configuration.
//!
//! Prints every accepted step, then the summary and a polynomial that can be
//! pasted into a graphing calculator.
//!
//! Run with: `cargo run --release --example sine_walk`

use polywalk::prelude::*;

fn main() {
    let walk = GreedyWalk::builder()
        .initial_vector_size(6)
        .n_iterations(10_000)
        .build()
        .unwrap();

    let report = walk.run_with(|step: &Step| {
        println!(
            "#{:>5}  score {:.6}  plateau {:>3}  terms {}",
            step.iteration,
            step.score,
            step.plateau_length,
            step.coefficients.len()
        );
    });

    println!();
    println!("{report}");

    // Worst case, y = 0, for comparison.
    println!(
        "Improvement over baseline: {:.2}x",
        report.baseline / report.best_score
    );
}
