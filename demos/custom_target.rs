//! Fit a polynomial to a user-supplied function and export the progress as CSV.
//!
//! Run with: `cargo run --release --example custom_target`

use std::ops::ControlFlow;

use polywalk::prelude::*;

/// Prints a line whenever the walk changes phase, and stops the walk once
/// the score is good enough.
struct PhaseWatcher {
    phase: SearchPhase,
    good_enough: f64,
    convergence: ConvergenceConfig,
}

impl Observer for PhaseWatcher {
    fn on_accept(&mut self, step: &Step) -> ControlFlow<()> {
        let phase = if step.plateau_length >= self.convergence.super_converged_threshold() {
            SearchPhase::Expanding
        } else if step.plateau_length >= self.convergence.converged_threshold() {
            SearchPhase::Plateaued
        } else {
            SearchPhase::Exploring
        };
        if phase != self.phase {
            println!(
                "iteration {}: {} -> {} ({} terms)",
                step.iteration,
                self.phase,
                phase,
                step.coefficients.len()
            );
            self.phase = phase;
        }
        if step.score < self.good_enough {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn on_finish(&mut self, report: &WalkReport) {
        println!("finished: {}", report.stop_reason);
    }
}

fn main() {
    let walk = GreedyWalk::builder()
        .target_function(TargetFunction::new("gaussian", |x| (-x * x).exp()))
        .interval(-2.0, 2.0)
        .sample_step(0.02)
        .initial_vector_size(3)
        .n_iterations(20_000)
        .aggregation(Aggregation::MeanAbsolute)
        .convergence_threshold(20)
        .super_convergence_threshold(60)
        .seed(7)
        .build()
        .unwrap();

    let watcher = PhaseWatcher {
        phase: SearchPhase::Exploring,
        good_enough: 1e-3,
        convergence: walk.convergence(),
    };
    let report = walk.run_with(watcher);

    println!("{report}");

    let mut csv = Vec::new();
    report.to_csv(&mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    println!("\nfirst rows of the progress CSV:");
    for line in csv.lines().take(5) {
        println!("  {line}");
    }
}
