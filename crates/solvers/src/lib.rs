//! Integrators for problems defined with `trophic-core`.
//!
//! - [`transient::euler`] — fixed-step explicit (forward) Euler

pub mod transient;
