//! The function being approximated and the grid it is sampled on.

use core::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Upper limit on the number of grid points a [`TargetSpec`] may sample.
pub const MAX_SAMPLES: usize = 10_000_000;

/// A unary real function wrapped for sharing between the walk and its
/// evaluator.
#[derive(Clone)]
pub struct TargetFunction {
    name: String,
    f: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl TargetFunction {
    /// Wrap an arbitrary function under a display name.
    #[must_use]
    pub fn new(name: impl Into<String>, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    /// `sin(x)`, the default target.
    #[must_use]
    pub fn sine() -> Self {
        Self::new("sin", f64::sin)
    }

    /// The constant zero function.
    #[must_use]
    pub fn zero() -> Self {
        Self::new("zero", |_| 0.0)
    }

    /// Evaluate the target at `x`.
    #[inline]
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    /// The display name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TargetFunction {
    fn default() -> Self {
        Self::sine()
    }
}

impl fmt::Debug for TargetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TargetFunction").field(&self.name).finish()
    }
}

/// A half-open interval `[lower, upper)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Create an interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if either bound is not finite or
    /// `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(Error::InvalidInterval { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// `[-π, π)`.
    #[must_use]
    pub fn one_period() -> Self {
        Self {
            lower: -core::f64::consts::PI,
            upper: core::f64::consts::PI,
        }
    }

    /// `[-2π, 2π)`.
    #[must_use]
    pub fn two_periods() -> Self {
        Self {
            lower: -core::f64::consts::TAU,
            upper: core::f64::consts::TAU,
        }
    }

    /// The inclusive lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The exclusive upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// The target function, the interval it is compared on and the sampling
/// step. Immutable for the lifetime of a walk.
#[derive(Clone, Debug)]
pub struct TargetSpec {
    function: TargetFunction,
    interval: Interval,
    step: f64,
    n_samples: usize,
}

impl TargetSpec {
    /// Create a target specification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] if `step` is not positive and finite,
    /// and [`Error::TooManySamples`] if the grid would hold more than
    /// [`MAX_SAMPLES`] points (including an interval too wide to measure).
    pub fn new(function: TargetFunction, interval: Interval, step: f64) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidStep(step));
        }
        let n_samples = grid_len(interval, step)?;
        Ok(Self {
            function,
            interval,
            step,
            n_samples,
        })
    }

    /// Sine on `[-2π, 2π)` sampled every `0.01`.
    #[must_use]
    pub fn sine() -> Self {
        Self {
            function: TargetFunction::sine(),
            interval: Interval::two_periods(),
            step: 0.01,
            n_samples: 1257,
        }
    }

    /// The function being approximated.
    #[must_use]
    pub fn function(&self) -> &TargetFunction {
        &self.function
    }

    /// The interval the error is measured on.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The distance between consecutive samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples in the grid: the `k` for which `lower + k * step`
    /// falls below `upper`.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// The sample grid `lower + k * step` for `k in 0..n_samples()`.
    ///
    /// Deterministic for a given target; the upper bound is never included.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        let (lower, step) = (self.interval.lower, self.step);
        (0..self.n_samples).map(move |k| grid_point(lower, step, k))
    }
}

#[allow(clippy::cast_precision_loss)]
fn grid_point(lower: f64, step: f64, k: usize) -> f64 {
    lower + step * k as f64
}

/// `ceil(width / step)`, minus any trailing points that rounding pushed onto
/// or past `upper`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn grid_len(interval: Interval, step: f64) -> Result<usize> {
    let requested = (interval.width() / step).ceil();
    if !requested.is_finite() || requested > MAX_SAMPLES as f64 {
        return Err(Error::TooManySamples {
            requested,
            max: MAX_SAMPLES,
        });
    }
    let mut n = requested as usize;
    while n > 0 && grid_point(interval.lower, step, n - 1) >= interval.upper {
        n -= 1;
    }
    Ok(n)
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self::sine()
    }
}
