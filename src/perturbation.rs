//! Candidate generation for the greedy walk.
//!
//! A [`Proposer`] turns the current coefficient vector into a new candidate
//! in up to four steps, each gated by the walk's [`SearchPhase`] and
//! [`GrowthPolicy`]:
//!
//! 1. **Propose**: every coefficient is independently rescaled with
//!    probability `perturb_probability`, by a factor drawn from the current
//!    [`ScaleBand`], and sign-flipped with probability
//!    `sign_flip_probability`.
//! 2. **Plateau response** (`Plateaued` or `Expanding`, [`GrowthPolicy::Expand`]):
//!    terms beyond the initial length are retained with probability
//!    `(k + 9) / (k + 10)`, `k` counting from the first appended term, and
//!    rescaled otherwise. Later terms are progressively more frozen.
//! 3. **Expansion** (`Expanding`, [`GrowthPolicy::Expand`]): one fresh term
//!    from `[-0.5, 0.5)` is appended.
//! 4. **Degeneracy guard** ([`GrowthPolicy::FixedWithDegeneracyGuard`]): a
//!    candidate identical to the current vector loses its last term or gains
//!    a fresh one, with probability 0.5 each.
//!
//! The current vector is never modified; every step works on a copy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::polynomial::Coefficients;
use crate::rng_util;
use crate::types::{GrowthPolicy, SearchPhase};
use crate::{Error, Result};

/// Divides `ln(score / target_error)` in the adaptive band.
const SENSITIVITY_DIVISOR: f64 = 100.0;

/// Width of the multiplicative band a perturbed coefficient is scaled by.
///
/// A band of half-width `w` draws scales uniformly from `[1 - w, 1 + w)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleBand {
    /// The same half-width for the whole walk.
    Fixed {
        /// Half-width of the band, in `(0, 1)`.
        half_width: f64,
    },
    /// Half-width `ln(score / target_error) / 100`, clamped to
    /// `[0, max_sensitivity]`.
    ///
    /// The band narrows as the score approaches the target error and closes
    /// completely once the score is at or below it. An infinite score uses
    /// `max_sensitivity`. Requires a target error.
    Adaptive {
        /// Upper clamp for the half-width, in `(0, 1)`.
        max_sensitivity: f64,
    },
}

impl ScaleBand {
    /// Half-width of the band for a walk whose current score is `score`.
    ///
    /// An adaptive band without a target error falls back to its maximum.
    #[must_use]
    pub fn half_width(&self, score: f64, target_error: Option<f64>) -> f64 {
        match *self {
            Self::Fixed { half_width } => half_width,
            Self::Adaptive { max_sensitivity } => {
                let Some(target) = target_error else {
                    return max_sensitivity;
                };
                let sensitivity = (score / target).ln() / SENSITIVITY_DIVISOR;
                if sensitivity.is_nan() {
                    max_sensitivity
                } else {
                    sensitivity.clamp(0.0, max_sensitivity)
                }
            }
        }
    }

    /// Returns `true` for [`ScaleBand::Adaptive`].
    #[must_use]
    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }

    fn validate(&self) -> Result<()> {
        let width = match *self {
            Self::Fixed { half_width } => half_width,
            Self::Adaptive { max_sensitivity } => max_sensitivity,
        };
        // NaN fails both comparisons
        if width > 0.0 && width < 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidScaleBand(width))
        }
    }
}

impl Default for ScaleBand {
    /// A fixed band of `[0.9, 1.1)`.
    fn default() -> Self {
        Self::Fixed { half_width: 0.1 }
    }
}

/// How existing coefficients are perturbed in the proposal step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerturbationPolicy {
    /// Probability that a given coefficient is rescaled.
    pub perturb_probability: f64,
    /// Probability that a rescaled coefficient also changes sign. Zero gives
    /// the constrained-sign variant.
    pub sign_flip_probability: f64,
    /// The band scale factors are drawn from.
    pub band: ScaleBand,
}

impl PerturbationPolicy {
    /// Check probabilities and band width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProbability`] for a probability outside
    /// `[0, 1]` and [`Error::InvalidScaleBand`] for a band width outside
    /// `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        check_probability("perturb", self.perturb_probability)?;
        check_probability("sign flip", self.sign_flip_probability)?;
        self.band.validate()
    }
}

impl Default for PerturbationPolicy {
    fn default() -> Self {
        Self {
            perturb_probability: 0.5,
            sign_flip_probability: 0.05,
            band: ScaleBand::default(),
        }
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidProbability { name, value })
    }
}

/// Builds candidate vectors from the current one.
#[derive(Clone, Copy, Debug)]
pub struct Proposer {
    policy: PerturbationPolicy,
    growth: GrowthPolicy,
    initial_len: usize,
    target_error: Option<f64>,
}

impl Proposer {
    /// Create a proposer.
    ///
    /// `initial_len` is the length of the walk's starting vector; the
    /// plateau response only touches indices at or beyond it.
    #[must_use]
    pub fn new(
        policy: PerturbationPolicy,
        growth: GrowthPolicy,
        initial_len: usize,
        target_error: Option<f64>,
    ) -> Self {
        Self {
            policy,
            growth,
            initial_len,
            target_error,
        }
    }

    /// Propose a candidate derived from `current`.
    ///
    /// `score` is the current score, used by the adaptive band; `phase`
    /// selects the plateau and expansion steps.
    #[must_use]
    pub fn propose(
        &self,
        current: &Coefficients,
        score: f64,
        phase: SearchPhase,
        rng: &mut fastrand::Rng,
    ) -> Coefficients {
        let half_width = self.policy.band.half_width(score, self.target_error);

        let mut candidate: Coefficients = current
            .iter()
            .map(|&c| {
                if rng_util::chance(rng, self.policy.perturb_probability) {
                    let scale = rng_util::f64_range(rng, 1.0 - half_width, 1.0 + half_width);
                    let sign = if rng_util::chance(rng, self.policy.sign_flip_probability) {
                        -1.0
                    } else {
                        1.0
                    };
                    c * scale * sign
                } else {
                    c
                }
            })
            .collect();

        match self.growth {
            GrowthPolicy::Expand => {
                if phase >= SearchPhase::Plateaued {
                    self.freeze_appended(&mut candidate, half_width, rng);
                }
                if phase == SearchPhase::Expanding {
                    candidate.push(rng_util::fresh_coefficient(rng));
                }
            }
            GrowthPolicy::Fixed => {}
            GrowthPolicy::FixedWithDegeneracyGuard => {
                if candidate.is_identical(current) {
                    if candidate.is_empty() || rng_util::chance(rng, 0.5) {
                        candidate.push(rng_util::fresh_coefficient(rng));
                    } else {
                        candidate.pop();
                    }
                }
            }
        }

        candidate
    }

    #[allow(clippy::cast_precision_loss)]
    fn freeze_appended(
        &self,
        candidate: &mut Coefficients,
        half_width: f64,
        rng: &mut fastrand::Rng,
    ) {
        let initial_len = self.initial_len;
        for (idx, c) in candidate.as_mut_slice().iter_mut().enumerate().skip(initial_len) {
            let k = (idx - initial_len) as f64;
            let retain = (k + 9.0) / (k + 10.0);
            if !rng_util::chance(rng, retain) {
                *c *= rng_util::f64_range(rng, 1.0 - half_width, 1.0 + half_width);
            }
        }
    }
}
