use core::fmt;
use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convergence::ConvergenceTracker;
use crate::polynomial::Coefficients;
use crate::types::{SearchPhase, StopReason};

/// One accepted iteration of a walk.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// Zero-based index of the iteration that produced this step.
    pub iteration: usize,
    /// The accepted coefficient vector.
    pub coefficients: Coefficients,
    /// Its score.
    pub score: f64,
    /// Plateau length after folding in `score`.
    pub plateau_length: u64,
}

/// The outcome of a finished walk.
///
/// # Examples
///
/// ```
/// use polywalk::prelude::*;
///
/// let walk = GreedyWalk::builder().n_iterations(300).seed(5).build().unwrap();
/// let report = walk.run();
///
/// assert!(report.best_score <= report.initial_score);
/// let last_score = report.history.last().map(|s| s.score);
/// assert_eq!(last_score, report.improved().then_some(report.best_score));
/// assert!(report.summary().contains("Best score:"));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WalkReport {
    /// Name of the approximated function.
    pub target_name: String,
    /// The starting vector.
    pub initial: Coefficients,
    /// Score of the starting vector.
    pub initial_score: f64,
    /// The best vector found.
    pub best: Coefficients,
    /// Score of the best vector.
    pub best_score: f64,
    /// Score of the zero function on the same target, for comparison.
    pub baseline: f64,
    /// Every accepted step, in order.
    pub history: Vec<Step>,
    /// Iterations actually run, including rejected ones.
    pub iterations_run: usize,
    /// Why the walk stopped.
    pub stop_reason: StopReason,
    /// Plateau state at the end of the walk.
    pub tracker: ConvergenceTracker,
}

impl WalkReport {
    /// Returns `true` if at least one candidate was accepted.
    #[must_use]
    pub fn improved(&self) -> bool {
        !self.history.is_empty()
    }

    /// The best vector as `c0 + c1*x^1 + ...`, ready for a graphing tool.
    #[must_use]
    pub fn graph_expression(&self) -> String {
        self.best.graph_expression()
    }

    /// The phase the walk would have proposed its next candidate in.
    #[must_use]
    pub fn final_phase(&self) -> SearchPhase {
        self.tracker.phase()
    }

    /// Human-readable multi-line summary of the walk.
    #[must_use]
    pub fn summary(&self) -> String {
        use fmt::Write;

        let mut s = format!(
            "Walk: {} | {} iterations, {} accepted ({})",
            self.target_name,
            self.iterations_run,
            self.history.len(),
            self.stop_reason
        );
        let _ = write!(s, "\nInitial score: {}", self.initial_score);
        let _ = write!(s, "\nBest score: {}", self.best_score);
        let _ = write!(s, "\nBaseline (y = 0): {}", self.baseline);
        let _ = write!(
            s,
            "\nTerms: {} | plateau {} ({})",
            self.best.len(),
            self.tracker.plateau_length(),
            self.final_phase()
        );
        let _ = write!(s, "\n{}", self.graph_expression());
        s
    }

    /// Write the accepted steps as CSV.
    ///
    /// Columns: `iteration`, `score`, `plateau_length`, `terms`, then the
    /// coefficients joined by `;` in a single column.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn to_csv(&self, mut writer: impl io::Write) -> io::Result<()> {
        writeln!(writer, "iteration,score,plateau_length,terms,coefficients")?;
        for step in &self.history {
            let coefficients = step
                .coefficients
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(";");
            writeln!(
                writer,
                "{},{},{},{},{}",
                step.iteration,
                step.score,
                step.plateau_length,
                step.coefficients.len(),
                coefficients
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for WalkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
