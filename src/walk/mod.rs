//! The greedy random-walk search driver.
//!
//! A [`GreedyWalk`] holds a validated configuration. Each call to
//! [`GreedyWalk::run`] starts from a fresh random vector and repeatedly
//! proposes a perturbed candidate, keeping it only when it scores strictly
//! better. The walk ends when the iteration budget is exhausted or the score
//! drops below the target error, and returns a [`WalkReport`].

use crate::cost::CostEvaluator;
use crate::convergence::ConvergenceConfig;
use crate::perturbation::PerturbationPolicy;
use crate::polynomial::Coefficients;
use crate::target::TargetSpec;
use crate::types::{Aggregation, GrowthPolicy};

mod builder;
mod report;
mod run;

pub use builder::GreedyWalkBuilder;
pub use report::{Step, WalkReport};

/// Named configurations matching the experiment's historical variants.
///
/// Load one with [`GreedyWalkBuilder::preset`]; setters called afterwards
/// override individual options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    /// Sine on `[-2π, 2π)` sampled every 0.01, mean squared deviation,
    /// 6 initial terms, 10 000 iterations, margin 0.001%, thresholds 30 and
    /// 100, fixed `[0.9, 1.1)` band with 5% sign flips, freeze-then-grow.
    #[default]
    Canonical,
    /// Sine on `[-π, π)` sampled every 0.05, mean absolute deviation,
    /// 5 initial terms, 1 000 iterations, target error `1e-5`, margin 0.1%,
    /// growth as soon as the plateau reaches 10, adaptive band, no sign
    /// flips.
    AdaptiveAbsolute,
}

/// A configured greedy walk.
///
/// Build one with [`GreedyWalk::builder`]. The configuration is immutable;
/// running the same walk twice with a seed produces identical reports.
///
/// # Examples
///
/// ```
/// use polywalk::prelude::*;
///
/// let walk = GreedyWalk::builder()
///     .initial_vector_size(4)
///     .n_iterations(2_000)
///     .interval(-1.0, 1.0)
///     .sample_step(0.05)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let report = walk.run();
/// assert!(report.best_score <= report.initial_score);
/// println!("{}", report.graph_expression());
/// ```
#[derive(Clone, Debug)]
pub struct GreedyWalk {
    pub(crate) target: TargetSpec,
    pub(crate) aggregation: Aggregation,
    pub(crate) initial_vector_size: usize,
    pub(crate) initial_coefficients: Option<Coefficients>,
    pub(crate) n_iterations: usize,
    pub(crate) target_error: Option<f64>,
    pub(crate) convergence: ConvergenceConfig,
    pub(crate) growth: GrowthPolicy,
    pub(crate) perturbation: PerturbationPolicy,
    pub(crate) seed: Option<u64>,
}

impl GreedyWalk {
    /// Start configuring a walk from the [`Preset::Canonical`] defaults.
    #[must_use]
    pub fn builder() -> GreedyWalkBuilder {
        GreedyWalkBuilder::new()
    }

    /// The target function, interval and sample step.
    #[must_use]
    pub fn target(&self) -> &TargetSpec {
        &self.target
    }

    #[must_use]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Length of the starting coefficient vector.
    #[must_use]
    pub fn initial_vector_size(&self) -> usize {
        self.initial_vector_size
    }

    /// Hard cap on search iterations.
    #[must_use]
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Score below which the walk stops early, if any.
    #[must_use]
    pub fn target_error(&self) -> Option<f64> {
        self.target_error
    }

    #[must_use]
    pub fn convergence(&self) -> ConvergenceConfig {
        self.convergence
    }

    #[must_use]
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    #[must_use]
    pub fn perturbation(&self) -> PerturbationPolicy {
        self.perturbation
    }

    /// An evaluator for this walk's target and aggregation.
    ///
    /// Useful for scoring hand-written coefficient vectors on the same
    /// terms as the walk.
    #[must_use]
    pub fn evaluator(&self) -> CostEvaluator {
        CostEvaluator::new(&self.target, self.aggregation)
    }

    fn make_rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    fn target_reached(&self, score: f64) -> bool {
        self.target_error.is_some_and(|target| score < target)
    }
}
