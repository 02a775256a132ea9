//! Discrete-time Lotka-Volterra predator-prey simulation.
//!
//! Two populations evolve under the forward Euler recurrence
//!
//! ```text
//! prey[i+1]     = max(0, prey[i]     + dt * (a*prey[i] - b*prey[i]*predator[i]))
//! predator[i+1] = max(0, predator[i] + dt * (-c*predator[i] + d*prey[i]*predator[i]))
//! ```
//!
//! Both right-hand sides read the populations at step `i`. The recurrence is
//! assembled from the pieces `trophic-core` defines:
//!
//! - [`LotkaVolterra`] is the [`Model`](trophic_core::Model) mapping the
//!   current populations to their rates of change,
//! - [`PredatorPrey`] is the [`OdeProblem`](trophic_core::OdeProblem) that
//!   clamps both populations at zero after every step,
//! - [`simulate`] runs them through the Euler solver and collects the
//!   [`Trajectory`].
//!
//! ```
//! use trophic_lotka_volterra::{SimulationConfig, simulate};
//!
//! let trajectory = simulate(&SimulationConfig::reference());
//! let last = trajectory.final_populations();
//!
//! assert_eq!(trajectory.len(), 1000);
//! assert!(last.prey >= 0.0 && last.predator >= 0.0);
//! ```

mod config;
mod model;
mod parameters;
mod populations;
mod problem;
mod simulation;
mod trajectory;

pub use config::{ConfigError, SimulationConfig};
pub use model::{Input, LotkaVolterra};
pub use parameters::Parameters;
pub use populations::{Populations, Rates};
pub use problem::PredatorPrey;
pub use simulation::{simulate, simulate_observed};
pub use trajectory::Trajectory;
