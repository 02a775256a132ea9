use serde::{Deserialize, Serialize};
use trophic_core::StepIntegrable;

/// Sizes of the prey and predator populations at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Populations {
    pub prey: f64,
    pub predator: f64,
}

/// Time derivative of [`Populations`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub prey: f64,
    pub predator: f64,
}

impl Populations {
    /// The reference initial conditions: 10 prey and 5 predators.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            prey: 10.0,
            predator: 5.0,
        }
    }

    /// Returns the populations with negative values replaced by zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            prey: clamp_non_negative(self.prey),
            predator: clamp_non_negative(self.predator),
        }
    }
}

impl Default for Populations {
    fn default() -> Self {
        Self::reference()
    }
}

impl StepIntegrable<f64> for Populations {
    type Derivative = Rates;

    fn step(&self, rates: Rates, dt: f64) -> Self {
        Self {
            prey: self.prey + dt * rates.prey,
            predator: self.predator + dt * rates.predator,
        }
    }
}

/// Lower-bounds `value` at zero; anything not below zero passes through.
fn clamp_non_negative(value: f64) -> f64 {
    if value < 0.0 { 0.0 } else { value }
}
