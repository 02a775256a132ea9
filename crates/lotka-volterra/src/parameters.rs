use serde::{Deserialize, Serialize};

/// Rate constants of the Lotka-Volterra equations.
///
/// The values are used as given. Negative or zero rates are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Prey growth rate.
    pub a: f64,
    /// Predation rate.
    pub b: f64,
    /// Predator death rate.
    pub c: f64,
    /// Predator growth per unit of predation.
    pub d: f64,
}

impl Parameters {
    /// The reference rate constants: `a = 1.0`, `b = 0.1`, `c = 0.01`, `d = 1.5`.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            a: 1.0,
            b: 0.1,
            c: 0.01,
            d: 1.5,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::reference()
    }
}
