#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Greedy random-walk search for polynomial coefficients that approximate a
//! scalar function over a fixed interval.
//!
//! The walk keeps one coefficient vector and its score. Every iteration it
//! perturbs a copy, scores the copy against the target, and keeps it only if
//! the score is strictly lower. When progress stalls, terms beyond the
//! starting length are progressively frozen and, if the stall persists, new
//! higher-order terms are appended. The result deliberately overfits the
//! sampled interval; no analytic expansion is computed.
//!
//! # Getting Started
//!
//! Approximate `sin(x)` on `[-π, π)`:
//!
//! ```
//! use polywalk::prelude::*;
//!
//! let walk = GreedyWalk::builder()
//!     .initial_vector_size(6)
//!     .n_iterations(3_000)
//!     .interval(-std::f64::consts::PI, std::f64::consts::PI)
//!     .sample_step(0.05)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let report = walk.run();
//! assert!(report.best_score <= report.initial_score);
//! println!("{}", report.graph_expression());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`GreedyWalk`] | Validated configuration; [`run`](GreedyWalk::run) performs one walk. |
//! | [`Coefficients`](polynomial::Coefficients) | Coefficient vector; index `i` multiplies `x^i`. |
//! | [`TargetSpec`](target::TargetSpec) | Function, interval and sample step the score is measured on. |
//! | [`CostEvaluator`](cost::CostEvaluator) | Scores a vector: mean absolute or mean squared deviation. |
//! | [`ConvergenceTracker`](convergence::ConvergenceTracker) | Plateau length that drives the [`SearchPhase`]. |
//! | [`Proposer`](perturbation::Proposer) | Builds each candidate from the current vector. |
//! | [`WalkReport`] | Best vector, score history, baseline and stop reason. |
//!
//! # Phases
//!
//! | Phase | Entered when | Extra behavior |
//! |-------|--------------|----------------|
//! | [`Exploring`](SearchPhase::Exploring) | plateau below the convergence threshold | none |
//! | [`Plateaued`](SearchPhase::Plateaued) | plateau ≥ convergence threshold | appended terms are mostly frozen |
//! | [`Expanding`](SearchPhase::Expanding) | plateau ≥ super-convergence threshold | one fresh term appended per proposal |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on value types and [`WalkReport`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) for accepted steps and phase changes | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod convergence;
pub mod cost;
mod error;
pub mod observer;
pub mod perturbation;
pub mod polynomial;
mod rng_util;
pub mod target;
mod types;
mod walk;

pub use error::{Error, Result};
pub use observer::Observer;
pub use types::{Aggregation, GrowthPolicy, SearchPhase, StopReason};
pub use walk::{GreedyWalk, GreedyWalkBuilder, Preset, Step, WalkReport};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use polywalk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::convergence::{ConvergenceConfig, ConvergenceTracker};
    pub use crate::cost::{CostEvaluator, evaluate, is_improvement};
    pub use crate::error::{Error, Result};
    pub use crate::observer::{Observer, Silent};
    pub use crate::perturbation::{PerturbationPolicy, Proposer, ScaleBand};
    pub use crate::polynomial::Coefficients;
    pub use crate::target::{Interval, TargetFunction, TargetSpec};
    pub use crate::types::{Aggregation, GrowthPolicy, SearchPhase, StopReason};
    pub use crate::walk::{GreedyWalk, GreedyWalkBuilder, Preset, Step, WalkReport};
}
