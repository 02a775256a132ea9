use std::convert::Infallible;

use trophic_core::Model;

use crate::{Parameters, Populations, Rates};

/// The Lotka-Volterra predator-prey equations.
///
/// ```text
/// d(prey)/dt     =  a * prey - b * prey * predator
/// d(predator)/dt = -c * predator + d * prey * predator
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotkaVolterra {
    pub parameters: Parameters,
}

/// Model input: simulated time and the populations at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub time: f64,
    pub populations: Populations,
}

impl LotkaVolterra {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }
}

impl Model for LotkaVolterra {
    type Input = Input;
    type Output = Rates;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Rates, Infallible> {
        let Parameters { a, b, c, d } = self.parameters;
        let Populations { prey, predator } = input.populations;

        Ok(Rates {
            prey: a * prey - b * prey * predator,
            predator: -c * predator + d * prey * predator,
        })
    }
}
