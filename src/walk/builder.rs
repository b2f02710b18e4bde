use crate::convergence::ConvergenceConfig;
use crate::perturbation::{PerturbationPolicy, ScaleBand};
use crate::polynomial::Coefficients;
use crate::target::{Interval, TargetFunction, TargetSpec};
use crate::types::{Aggregation, GrowthPolicy};
use crate::{Error, Result};

use super::{GreedyWalk, Preset};

/// A builder for constructing [`GreedyWalk`] instances with a fluent API.
///
/// Created via [`GreedyWalk::builder()`]. Every option starts at its
/// [`Preset::Canonical`] value; nothing is validated until
/// [`build`](Self::build).
///
/// # Defaults
///
/// | Option | Default |
/// |--------|---------|
/// | `initial_vector_size` | 6 |
/// | `n_iterations` | 10 000 |
/// | `target_function` | `sin` |
/// | `interval` | `[-2π, 2π)` |
/// | `sample_step` | 0.01 |
/// | `aggregation` | [`Aggregation::MeanSquared`] |
/// | `target_error` | none |
/// | `improvement_margin` | `1e-5` |
/// | `convergence_threshold` | 30 |
/// | `super_convergence_threshold` | 100 |
/// | `growth_policy` | [`GrowthPolicy::Expand`] |
/// | `scale_band` | fixed, half-width 0.1 |
/// | `perturb_probability` | 0.5 |
/// | `sign_flip_probability` | 0.05 |
/// | `seed` | random |
///
/// # Examples
///
/// ```
/// use polywalk::prelude::*;
///
/// let walk = GreedyWalk::builder()
///     .preset(Preset::AdaptiveAbsolute)
///     .n_iterations(500)
///     .seed(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(walk.aggregation(), Aggregation::MeanAbsolute);
/// assert_eq!(walk.n_iterations(), 500);
/// ```
#[derive(Clone, Debug)]
pub struct GreedyWalkBuilder {
    initial_vector_size: usize,
    initial_coefficients: Option<Coefficients>,
    n_iterations: usize,
    target_function: TargetFunction,
    lower: f64,
    upper: f64,
    sample_step: f64,
    aggregation: Aggregation,
    target_error: Option<f64>,
    improvement_margin: f64,
    convergence_threshold: u64,
    super_convergence_threshold: u64,
    growth: GrowthPolicy,
    perturbation: PerturbationPolicy,
    seed: Option<u64>,
}

impl Default for GreedyWalkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyWalkBuilder {
    /// Create a builder with the canonical defaults.
    #[must_use]
    pub fn new() -> Self {
        let convergence = ConvergenceConfig::default();
        let interval = Interval::two_periods();
        Self {
            initial_vector_size: 6,
            initial_coefficients: None,
            n_iterations: 10_000,
            target_function: TargetFunction::sine(),
            lower: interval.lower(),
            upper: interval.upper(),
            sample_step: 0.01,
            aggregation: Aggregation::MeanSquared,
            target_error: None,
            improvement_margin: convergence.margin(),
            convergence_threshold: convergence.converged_threshold(),
            super_convergence_threshold: convergence.super_converged_threshold(),
            growth: GrowthPolicy::Expand,
            perturbation: PerturbationPolicy::default(),
            seed: None,
        }
    }

    /// Load every option of a preset except the target function, the seed
    /// and any explicit initial coefficients.
    #[must_use]
    pub fn preset(mut self, preset: Preset) -> Self {
        match preset {
            Preset::Canonical => {
                let fresh = Self::new();
                Self {
                    target_function: self.target_function,
                    initial_coefficients: self.initial_coefficients,
                    seed: self.seed,
                    ..fresh
                }
            }
            Preset::AdaptiveAbsolute => {
                let interval = Interval::one_period();
                self.initial_vector_size = 5;
                self.n_iterations = 1_000;
                self.lower = interval.lower();
                self.upper = interval.upper();
                self.sample_step = 0.05;
                self.aggregation = Aggregation::MeanAbsolute;
                self.target_error = Some(1e-5);
                self.improvement_margin = 1e-3;
                self.convergence_threshold = 10;
                self.super_convergence_threshold = 10;
                self.growth = GrowthPolicy::Expand;
                self.perturbation = PerturbationPolicy {
                    perturb_probability: 0.5,
                    sign_flip_probability: 0.0,
                    band: ScaleBand::Adaptive {
                        max_sensitivity: 0.5,
                    },
                };
                self
            }
        }
    }

    /// Length of the randomly initialized starting vector.
    #[must_use]
    pub fn initial_vector_size(mut self, size: usize) -> Self {
        self.initial_vector_size = size;
        self
    }

    /// Start from the given coefficients instead of a random vector.
    ///
    /// Overrides [`initial_vector_size`](Self::initial_vector_size) with the
    /// vector's length.
    #[must_use]
    pub fn initial_coefficients(mut self, coefficients: impl Into<Coefficients>) -> Self {
        self.initial_coefficients = Some(coefficients.into());
        self
    }

    /// Hard cap on search iterations.
    #[must_use]
    pub fn n_iterations(mut self, n: usize) -> Self {
        self.n_iterations = n;
        self
    }

    /// The function to approximate.
    #[must_use]
    pub fn target_function(mut self, function: TargetFunction) -> Self {
        self.target_function = function;
        self
    }

    /// The half-open interval `[lower, upper)` the error is sampled on.
    #[must_use]
    pub fn interval(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Distance between consecutive sample points.
    #[must_use]
    pub fn sample_step(mut self, step: f64) -> Self {
        self.sample_step = step;
        self
    }

    #[must_use]
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Stop as soon as the score drops below `error`.
    #[must_use]
    pub fn target_error(mut self, error: f64) -> Self {
        self.target_error = Some(error);
        self
    }

    /// Run for the full budget regardless of the score.
    #[must_use]
    pub fn no_target_error(mut self) -> Self {
        self.target_error = None;
        self
    }

    /// Relative improvement an accepted score needs over the plateau's
    /// reference to start a new plateau.
    #[must_use]
    pub fn improvement_margin(mut self, margin: f64) -> Self {
        self.improvement_margin = margin;
        self
    }

    /// Plateau length that triggers the plateau response.
    #[must_use]
    pub fn convergence_threshold(mut self, threshold: u64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Plateau length that triggers vector growth.
    #[must_use]
    pub fn super_convergence_threshold(mut self, threshold: u64) -> Self {
        self.super_convergence_threshold = threshold;
        self
    }

    #[must_use]
    pub fn growth_policy(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    #[must_use]
    pub fn scale_band(mut self, band: ScaleBand) -> Self {
        self.perturbation.band = band;
        self
    }

    /// Probability that each coefficient is rescaled in a proposal.
    #[must_use]
    pub fn perturb_probability(mut self, probability: f64) -> Self {
        self.perturbation.perturb_probability = probability;
        self
    }

    /// Probability that a rescaled coefficient also flips sign.
    #[must_use]
    pub fn sign_flip_probability(mut self, probability: f64) -> Self {
        self.perturbation.sign_flip_probability = probability;
        self
    }

    /// Seed the random generator so runs are reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the walk.
    ///
    /// # Errors
    ///
    /// Returns an error for which
    /// [`Error::is_invalid_configuration`] holds when:
    /// - the iteration budget is zero ([`Error::InvalidIterations`]),
    /// - the starting vector would be empty ([`Error::InvalidVectorSize`]),
    /// - the interval is empty, inverted or unbounded ([`Error::InvalidInterval`]),
    /// - the sample step is not positive ([`Error::InvalidStep`]),
    /// - the grid would be too large to sample ([`Error::TooManySamples`]),
    /// - the target error is not positive ([`Error::InvalidTargetError`]),
    /// - the margin or thresholds are invalid ([`Error::InvalidMargin`],
    ///   [`Error::InvalidThresholds`]),
    /// - a probability or the band width is out of range
    ///   ([`Error::InvalidProbability`], [`Error::InvalidScaleBand`]),
    /// - the adaptive band is used without a target error
    ///   ([`Error::AdaptiveBandWithoutTarget`]).
    pub fn build(self) -> Result<GreedyWalk> {
        if self.n_iterations == 0 {
            return Err(Error::InvalidIterations);
        }
        let initial_vector_size = match &self.initial_coefficients {
            Some(coefficients) => coefficients.len(),
            None => self.initial_vector_size,
        };
        if initial_vector_size == 0 {
            return Err(Error::InvalidVectorSize);
        }

        let interval = Interval::new(self.lower, self.upper)?;
        let target = TargetSpec::new(self.target_function, interval, self.sample_step)?;

        if let Some(error) = self.target_error
            && !(error.is_finite() && error > 0.0)
        {
            return Err(Error::InvalidTargetError(error));
        }

        let convergence = ConvergenceConfig::new(
            self.improvement_margin,
            self.convergence_threshold,
            self.super_convergence_threshold,
        )?;

        self.perturbation.validate()?;
        if self.perturbation.band.is_adaptive() && self.target_error.is_none() {
            return Err(Error::AdaptiveBandWithoutTarget);
        }

        Ok(GreedyWalk {
            target,
            aggregation: self.aggregation,
            initial_vector_size,
            initial_coefficients: self.initial_coefficients,
            n_iterations: self.n_iterations,
            target_error: self.target_error,
            convergence,
            growth: self.growth,
            perturbation: self.perturbation,
            seed: self.seed,
        })
    }
}
