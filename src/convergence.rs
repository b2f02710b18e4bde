//! Plateau tracking for the search driver.
//!
//! A plateau is a run of consecutive accepted steps whose score stayed within
//! a relative margin of the score that opened the run. Its length decides the
//! driver's [`SearchPhase`].
//!
//! The tracker is a plain value: [`ConvergenceTracker::update`] returns the
//! next state and leaves the old one untouched.
//!
//! ```
//! use polywalk::convergence::{ConvergenceConfig, ConvergenceTracker};
//! use polywalk::SearchPhase;
//!
//! let config = ConvergenceConfig::new(1e-3, 2, 3).unwrap();
//! let tracker = ConvergenceTracker::new(1.0, config);
//!
//! // Large improvement: a fresh plateau of length 1.
//! let tracker = tracker.update(0.5);
//! assert_eq!(tracker.plateau_length(), 1);
//!
//! // Tiny improvements keep extending it.
//! let tracker = tracker.update(0.49999).update(0.49998);
//! assert_eq!(tracker.plateau_length(), 3);
//! assert_eq!(tracker.phase(), SearchPhase::Expanding);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::SearchPhase;
use crate::{Error, Result};

/// Margin and thresholds that drive plateau detection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvergenceConfig {
    margin: f64,
    converged: u64,
    super_converged: u64,
}

impl ConvergenceConfig {
    /// Create a configuration.
    ///
    /// `margin` is relative: an accepted score only opens a new plateau when
    /// `reference / score > 1 + margin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMargin`] if `margin` is negative or not
    /// finite, and [`Error::InvalidThresholds`] if `converged` is zero or
    /// greater than `super_converged`.
    pub fn new(margin: f64, converged: u64, super_converged: u64) -> Result<Self> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::InvalidMargin(margin));
        }
        if converged == 0 || converged > super_converged {
            return Err(Error::InvalidThresholds {
                converged,
                super_converged,
            });
        }
        Ok(Self {
            margin,
            converged,
            super_converged,
        })
    }

    /// The relative improvement margin.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Plateau length at which the walk counts as converged.
    #[must_use]
    pub fn converged_threshold(&self) -> u64 {
        self.converged
    }

    /// Plateau length at which the walk counts as super-converged.
    #[must_use]
    pub fn super_converged_threshold(&self) -> u64 {
        self.super_converged
    }
}

impl Default for ConvergenceConfig {
    /// Margin `1e-5` (0.001%), thresholds 30 and 100.
    fn default() -> Self {
        Self {
            margin: 1e-5,
            converged: 30,
            super_converged: 100,
        }
    }
}

/// How long the score has failed to improve meaningfully.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvergenceTracker {
    plateau_length: u64,
    reference_max: f64,
    config: ConvergenceConfig,
}

impl ConvergenceTracker {
    /// Start tracking from the walk's initial score, with an empty plateau.
    #[must_use]
    pub fn new(initial_score: f64, config: ConvergenceConfig) -> Self {
        Self {
            plateau_length: 0,
            reference_max: initial_score,
            config,
        }
    }

    /// Fold an accepted score into the tracker.
    ///
    /// If the score improves on the plateau's reference by more than the
    /// margin, it becomes the new reference and the plateau restarts at 1.
    /// Otherwise the plateau grows by one and the reference is kept.
    #[must_use]
    pub fn update(self, new_score: f64) -> Self {
        if self.reference_max / new_score <= 1.0 + self.config.margin {
            Self {
                plateau_length: self.plateau_length + 1,
                ..self
            }
        } else {
            Self {
                plateau_length: 1,
                reference_max: new_score,
                ..self
            }
        }
    }

    /// Number of consecutive accepted steps in the current plateau.
    #[must_use]
    pub fn plateau_length(&self) -> u64 {
        self.plateau_length
    }

    /// Score that opened the current plateau.
    #[must_use]
    pub fn reference_max(&self) -> f64 {
        self.reference_max
    }

    /// The configuration this tracker was created with.
    #[must_use]
    pub fn config(&self) -> ConvergenceConfig {
        self.config
    }

    #[must_use]
    pub fn has_converged(&self) -> bool {
        self.plateau_length >= self.config.converged
    }

    #[must_use]
    pub fn has_super_converged(&self) -> bool {
        self.plateau_length >= self.config.super_converged
    }

    /// The driver phase implied by the current plateau length.
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.has_super_converged() {
            SearchPhase::Expanding
        } else if self.has_converged() {
            SearchPhase::Plateaued
        } else {
            SearchPhase::Exploring
        }
    }
}
