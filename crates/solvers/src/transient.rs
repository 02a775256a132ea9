//! Time-stepping solvers for [`OdeProblem`](trophic_core::OdeProblem)s.

pub mod euler;
