use std::convert::Infallible;

use trophic_core::{DerivativeOf, OdeProblem};

use crate::{Input, Populations, Rates};

/// Integrates [`LotkaVolterra`](crate::LotkaVolterra) populations in time.
///
/// After every step both populations are clamped at zero, so a step that
/// overshoots into negative values stores exactly `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredatorPrey;

impl OdeProblem for PredatorPrey {
    type Input = Input;
    type Output = Rates;
    type Delta = f64;
    type State = Populations;
    type Error = Infallible;

    fn state(&self, input: &Input) -> Result<Populations, Infallible> {
        Ok(input.populations)
    }

    fn derivative(
        &self,
        _input: &Input,
        output: &Rates,
    ) -> Result<DerivativeOf<Populations, f64>, Infallible> {
        Ok(*output)
    }

    fn build_input(&self, base: &Input, state: &Populations, dt: &f64) -> Result<Input, Infallible> {
        Ok(Input {
            time: base.time + dt,
            populations: *state,
        })
    }

    fn finalize_step(
        &self,
        next_input: Input,
        _prev_input: &Input,
        _prev_output: &Rates,
        _dt: &f64,
    ) -> Result<Input, Infallible> {
        Ok(Input {
            populations: next_input.populations.clamped(),
            ..next_input
        })
    }
}
