//! Reusable observers for Trophic solvers.
//!
//! - [`traits`] — capability traits that let observers work across solvers
//! - [`ProgressLog`] — reports solver progress through `tracing`
//!
//! # Features
//!
//! - `plot` — enables [`TracePlot`], which shows recorded traces in an egui
//!   window. Adds dependencies on `eframe` and `egui_plot`.

pub mod traits;

mod progress;

#[cfg(feature = "plot")]
mod plot;

pub use progress::ProgressLog;

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, TracePlot};
