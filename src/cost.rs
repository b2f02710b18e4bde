//! Scoring a coefficient vector against the target function.
//!
//! The score is the mean pointwise deviation between the target and the
//! candidate polynomial over the target's sample grid, aggregated by
//! [`Aggregation`]. Lower is better; zero is the unreachable ideal.
//!
//! ```
//! use polywalk::cost::evaluate;
//! use polywalk::polynomial::Coefficients;
//! use polywalk::target::{Interval, TargetFunction, TargetSpec};
//! use polywalk::Aggregation;
//!
//! let target = TargetSpec::new(
//!     TargetFunction::new("line", |x| 2.0 * x),
//!     Interval::new(-1.0, 1.0).unwrap(),
//!     0.25,
//! )
//! .unwrap();
//!
//! let exact = Coefficients::from(vec![0.0, 2.0]);
//! assert_eq!(evaluate(&exact, &target, Aggregation::MeanSquared), 0.0);
//! ```

use crate::polynomial::Coefficients;
use crate::target::TargetSpec;
use crate::types::Aggregation;

/// Score `coefficients` against `target` in one shot.
///
/// Prefer [`CostEvaluator`] when scoring many vectors against the same
/// target; it caches the sample grid and the target's values on it.
#[must_use]
pub fn evaluate(coefficients: &Coefficients, target: &TargetSpec, aggregation: Aggregation) -> f64 {
    CostEvaluator::new(target, aggregation).evaluate(coefficients)
}

/// Acceptance rule: `candidate` replaces `current` only if it is finite and
/// strictly lower.
///
/// An infinite candidate is never accepted, even against an infinite
/// current score.
#[must_use]
pub fn is_improvement(candidate: f64, current: f64) -> bool {
    candidate.is_finite() && candidate < current
}

/// Scores coefficient vectors against a fixed target.
///
/// Evaluation is pure: the same coefficients always produce a bit-identical
/// score. A score that would be NaN (for example `inf - inf` after an
/// overflowing high-degree term) is reported as `+inf`, so it ranks below
/// every finite score.
#[derive(Clone, Debug)]
pub struct CostEvaluator {
    aggregation: Aggregation,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl CostEvaluator {
    /// Sample the target once and build an evaluator for it.
    #[must_use]
    pub fn new(target: &TargetSpec, aggregation: Aggregation) -> Self {
        let xs: Vec<f64> = target.samples().collect();
        let ys = xs.iter().map(|&x| target.function().eval(x)).collect();
        Self {
            aggregation,
            xs,
            ys,
        }
    }

    /// The aggregation policy in use.
    #[must_use]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Number of sample points the score averages over.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.xs.len()
    }

    /// Score a coefficient vector. Lower is better.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, coefficients: &Coefficients) -> f64 {
        if self.xs.is_empty() {
            return 0.0;
        }
        let deviations = self
            .xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| y - coefficients.eval(x));
        let total: f64 = match self.aggregation {
            Aggregation::MeanAbsolute => deviations.map(f64::abs).sum(),
            Aggregation::MeanSquared => deviations.map(|d| d * d).sum(),
        };
        let score = total / self.xs.len() as f64;
        if score.is_nan() { f64::INFINITY } else { score }
    }

    /// Score of the zero function, the sanity baseline every walk should beat.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.evaluate(&Coefficients::from(vec![0.0]))
    }
}
