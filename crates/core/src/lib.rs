//! Core traits and types for the Trophic workspace.
//!
//! The abstractions here are independent of any particular population model:
//!
//! - [`Model`] — a deterministic map from a typed input to a typed output
//! - [`Snapshot`] — an input together with the output computed from it
//! - [`Observer`] — receives solver events and may answer with an action
//! - [`OdeProblem`] — adapts a model's input/output to an integrable state
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`

mod model;
mod observer;
mod problem;
mod step;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
