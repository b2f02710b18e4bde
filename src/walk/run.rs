use core::ops::ControlFlow;

use crate::convergence::ConvergenceTracker;
use crate::cost::is_improvement;
use crate::observer::{Observer, Silent};
use crate::perturbation::Proposer;
use crate::polynomial::Coefficients;
use crate::types::StopReason;

use super::{GreedyWalk, Step, WalkReport};

impl GreedyWalk {
    /// Run the walk once.
    ///
    /// With a configured seed every call produces the same report; without
    /// one the generator is seeded from entropy on each call.
    ///
    /// # Examples
    ///
    /// ```
    /// use polywalk::prelude::*;
    ///
    /// let walk = GreedyWalk::builder()
    ///     .initial_vector_size(1)
    ///     .n_iterations(50)
    ///     .target_function(TargetFunction::zero())
    ///     .interval(-1.0, 1.0)
    ///     .sample_step(0.5)
    ///     .seed(42)
    ///     .build()
    ///     .unwrap();
    ///
    /// let report = walk.run();
    /// assert!(report.best_score < report.initial_score);
    /// ```
    #[must_use]
    pub fn run(&self) -> WalkReport {
        self.run_with(Silent)
    }

    /// Run the walk once, reporting accepted steps to `observer`.
    pub fn run_with(&self, observer: impl Observer) -> WalkReport {
        let mut rng = self.make_rng();
        self.run_with_rng_and_observer(&mut rng, observer)
    }

    /// Run the walk once, drawing all randomness from `rng`.
    ///
    /// The configured seed, if any, is ignored.
    #[must_use]
    pub fn run_with_rng(&self, rng: &mut fastrand::Rng) -> WalkReport {
        self.run_with_rng_and_observer(rng, Silent)
    }

    /// Run the walk once with an explicit generator and observer.
    ///
    /// Per iteration: stop if the score is below the target error, propose a
    /// candidate in the tracker's current phase, score it, and accept it only
    /// if [`is_improvement`] holds. The tracker is updated on acceptance only.
    pub fn run_with_rng_and_observer(
        &self,
        rng: &mut fastrand::Rng,
        mut observer: impl Observer,
    ) -> WalkReport {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "greedy_walk",
            n_iterations = self.n_iterations,
            target = self.target.function().name(),
            aggregation = ?self.aggregation
        )
        .entered();

        let evaluator = self.evaluator();
        let initial = match &self.initial_coefficients {
            Some(coefficients) => coefficients.clone(),
            None => Coefficients::random(self.initial_vector_size, rng),
        };
        let initial_score = evaluator.evaluate(&initial);
        let proposer = Proposer::new(
            self.perturbation,
            self.growth,
            initial.len(),
            self.target_error,
        );
        trace_debug!(initial_score, terms = initial.len(), "walk started");

        let mut current = initial.clone();
        let mut score = initial_score;
        let mut tracker = ConvergenceTracker::new(score, self.convergence);
        let mut history = Vec::new();
        let mut stop_reason = StopReason::BudgetExhausted;
        let mut iterations_run = 0;

        for iteration in 0..self.n_iterations {
            if self.target_reached(score) {
                stop_reason = StopReason::TargetReached;
                break;
            }
            iterations_run = iteration + 1;

            let candidate = proposer.propose(&current, score, tracker.phase(), rng);
            let candidate_score = evaluator.evaluate(&candidate);
            if !is_improvement(candidate_score, score) {
                continue;
            }

            current = candidate;
            score = candidate_score;
            let next = tracker.update(score);
            if next.phase() != tracker.phase() {
                trace_info!(
                    iteration,
                    from = %tracker.phase(),
                    to = %next.phase(),
                    "phase changed"
                );
            }
            tracker = next;

            let step = Step {
                iteration,
                coefficients: current.clone(),
                score,
                plateau_length: tracker.plateau_length(),
            };
            trace_debug!(
                iteration,
                score,
                plateau_length = step.plateau_length,
                terms = current.len(),
                "step accepted"
            );
            let flow = observer.on_accept(&step);
            history.push(step);
            if let ControlFlow::Break(()) = flow {
                stop_reason = StopReason::Interrupted;
                break;
            }
        }

        if stop_reason == StopReason::BudgetExhausted && self.target_reached(score) {
            stop_reason = StopReason::TargetReached;
        }
        trace_info!(
            iterations_run,
            accepted = history.len(),
            best_score = score,
            reason = %stop_reason,
            "walk finished"
        );

        let report = WalkReport {
            target_name: self.target.function().name().to_owned(),
            initial,
            initial_score,
            best: current,
            best_score: score,
            baseline: evaluator.baseline(),
            history,
            iterations_run,
            stop_reason,
            tracker,
        };
        observer.on_finish(&report);
        report
    }
}
