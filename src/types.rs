//! Core types shared by the cost evaluator and the search driver.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How pointwise deviations are folded into a single score.
///
/// Both policies divide by the number of samples so scores stay comparable
/// across interval and step configurations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Aggregation {
    /// Mean of `|target(x) - f(x)|`.
    MeanAbsolute,
    /// Mean of `(target(x) - f(x))²`.
    #[default]
    MeanSquared,
}

/// Whether, and how, the coefficient vector may change length during a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrowthPolicy {
    /// Freeze-then-grow: once converged, terms beyond the initial length are
    /// progressively frozen; once super-converged, one fresh term is appended
    /// per proposal. The vector never shrinks.
    #[default]
    Expand,
    /// The vector keeps its initial length for the whole walk.
    Fixed,
    /// Like [`Fixed`](Self::Fixed), but a proposal identical to the current
    /// vector is forced to differ by popping the last term or appending a
    /// fresh one, each with probability 0.5.
    FixedWithDegeneracyGuard,
}

/// The behavioral state of the search driver, derived from the plateau length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchPhase {
    /// Plain perturbation of every coefficient.
    Exploring,
    /// The plateau reached the convergence threshold.
    Plateaued,
    /// The plateau reached the super-convergence threshold.
    Expanding,
}

impl fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exploring => "exploring",
            Self::Plateaued => "plateaued",
            Self::Expanding => "expanding",
        })
    }
}

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// Every iteration of the budget was used.
    BudgetExhausted,
    /// The current score dropped below the configured target error.
    TargetReached,
    /// An observer asked the walk to stop.
    Interrupted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BudgetExhausted => "iteration budget exhausted",
            Self::TargetReached => "target error reached",
            Self::Interrupted => "interrupted by observer",
        })
    }
}
