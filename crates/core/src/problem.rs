use crate::{DerivativeOf, StepIntegrable};

/// Describes how to integrate a model's state forward in an independent
/// variable (usually time).
///
/// The problem sits between a [`Model`](crate::Model) and a solver. It pulls
/// the integrable state out of a model input, reads the derivative of that
/// state from the model's output, and assembles the next model input once the
/// solver has stepped the state.
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the integrable state from a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input does not hold a usable state.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Reads the derivative of the state from a model input and its output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be formed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Assembles the next model input from the previous input and the stepped
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be assembled.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;

    /// Adjusts the next input once a step has been taken.
    ///
    /// Solvers call this exactly once per step, after [`build_input`] and
    /// before the model is evaluated at the new input. It is the place to
    /// enforce domain constraints such as bounds on the state.
    ///
    /// The default leaves the input untouched.
    ///
    /// [`build_input`]: OdeProblem::build_input
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the constraint cannot be applied.
    fn finalize_step(
        &self,
        next_input: Self::Input,
        _prev_input: &Self::Input,
        _prev_output: &Self::Output,
        _step_delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error> {
        Ok(next_input)
    }
}
