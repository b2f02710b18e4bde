/// Errors produced while configuring a walk.
///
/// Every variant describes an invalid configuration and is raised before
/// any search begins. The search loop itself cannot fail: a candidate whose
/// score overflows is simply never accepted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when the iteration budget is zero.
    #[error("invalid iteration budget: must be at least 1")]
    InvalidIterations,

    /// Returned when the initial coefficient vector would be empty.
    #[error("invalid initial vector size: must be at least 1")]
    InvalidVectorSize,

    /// Returned when the sampling interval is empty, inverted or not finite.
    #[error("invalid interval: lower ({lower}) must be finite and strictly less than upper ({upper})")]
    InvalidInterval {
        /// The lower bound value.
        lower: f64,
        /// The upper bound value.
        upper: f64,
    },

    /// Returned when the sample step is not a positive finite number.
    #[error("invalid sample step: {0} must be positive and finite")]
    InvalidStep(f64),

    /// Returned when the target error is not a positive finite number.
    #[error("invalid target error: {0} must be positive and finite")]
    InvalidTargetError(f64),

    /// Returned when a plateau threshold is zero or the super-convergence
    /// threshold is below the convergence threshold.
    #[error(
        "invalid convergence thresholds: converged ({converged}) must be positive and not exceed super-converged ({super_converged})"
    )]
    InvalidThresholds {
        /// The plateau length that triggers the plateau response.
        converged: u64,
        /// The plateau length that triggers vector growth.
        super_converged: u64,
    },

    /// Returned when a probability lies outside `[0, 1]`.
    #[error("invalid probability for {name}: {value} must be in [0.0, 1.0]")]
    InvalidProbability {
        /// Which probability was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a perturbation band width is not in `(0, 1)`.
    #[error("invalid scale band: {0} must be in (0.0, 1.0)")]
    InvalidScaleBand(f64),

    /// Returned when the relative improvement margin is negative or not finite.
    #[error("invalid improvement margin: {0} must be non-negative and finite")]
    InvalidMargin(f64),

    /// Returned when the interval and step would produce more sample points
    /// than the evaluator accepts.
    #[error("too many sample points: {requested} requested, at most {max} allowed")]
    TooManySamples {
        /// `ceil(width / step)`; infinite when the interval width overflows.
        requested: f64,
        /// The accepted maximum.
        max: usize,
    },

    /// Returned when the adaptive perturbation band is selected without a
    /// target error to measure the current score against.
    #[error("adaptive scale band requires a target error")]
    AdaptiveBandWithoutTarget,
}

impl Error {
    /// Returns `true` if the error describes an invalid configuration.
    ///
    /// This holds for every variant today; callers that only care about the
    /// error kind can match on this instead of individual variants.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidIterations
                | Self::InvalidVectorSize
                | Self::InvalidInterval { .. }
                | Self::InvalidStep(_)
                | Self::TooManySamples { .. }
                | Self::InvalidTargetError(_)
                | Self::InvalidThresholds { .. }
                | Self::InvalidProbability { .. }
                | Self::InvalidScaleBand(_)
                | Self::InvalidMargin(_)
                | Self::AdaptiveBandWithoutTarget
        )
    }
}

pub type Result<T> = core::result::Result<T, Error>;
