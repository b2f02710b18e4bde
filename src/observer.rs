//! The [`Observer`] trait receives progress from a running walk.
//!
//! Closures taking a [`Step`] work directly:
//!
//! ```
//! use polywalk::prelude::*;
//!
//! let walk = GreedyWalk::builder()
//!     .initial_vector_size(3)
//!     .n_iterations(200)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let mut accepted = 0;
//! let report = walk.run_with(|_step: &Step| accepted += 1);
//! assert_eq!(accepted, report.history.len());
//! ```
//!
//! Implement the trait on a struct when the walk should be able to stop
//! early on the observer's say-so:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use polywalk::prelude::*;
//!
//! struct StopAfter(usize);
//!
//! impl Observer for StopAfter {
//!     fn on_accept(&mut self, step: &Step) -> ControlFlow<()> {
//!         if step.iteration >= self.0 {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let walk = GreedyWalk::builder().n_iterations(5_000).seed(1).build().unwrap();
//! let report = walk.run_with(StopAfter(100));
//! assert!(report.iterations_run <= 5_000);
//! ```

use core::ops::ControlFlow;

use crate::walk::{Step, WalkReport};

/// Receives accepted steps and the final report from a walk.
///
/// Rejected candidates are never reported; most iterations of a walk reject
/// their candidate.
pub trait Observer {
    /// Called after each accepted step, once the tracker has been updated.
    ///
    /// Return `ControlFlow::Break(())` to end the walk after this step.
    ///
    /// Default: always continues.
    fn on_accept(&mut self, _step: &Step) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called once with the finished report.
    fn on_finish(&mut self, _report: &WalkReport) {}
}

impl<F> Observer for F
where
    F: FnMut(&Step),
{
    fn on_accept(&mut self, step: &Step) -> ControlFlow<()> {
        self(step);
        ControlFlow::Continue(())
    }
}

/// An observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {}
