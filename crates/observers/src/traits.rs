//! Capability traits for cross-solver observers.
//!
//! Solvers define their own event and action types. Implementing these traits
//! on them lets a single observer, such as [`ProgressLog`](crate::ProgressLog),
//! be used with any of them.
//!
//! # Event traits
//!
//! - [`HasStep`] — events that belong to a numbered step
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can end a run early
//!
//! # Example
//!
//! ```rust
//! use trophic_core::Observer;
//! use trophic_observers::traits::{CanStopEarly, HasStep};
//!
//! struct StopAt(usize);
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StopAt {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use trophic_solvers::transient::euler;

/// An event that belongs to a numbered solver step.
pub trait HasStep {
    /// Returns the step number, starting at 0 for the initial state.
    fn step(&self) -> usize;
}

/// An action type that can end a run early.
pub trait CanStopEarly {
    /// Returns the action that stops the solver.
    fn stop_early() -> Self;
}

impl<I, O> HasStep for euler::Event<I, O> {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
