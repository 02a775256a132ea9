/// A deterministic model mapping a typed input to a typed output.
///
/// Solvers call a model repeatedly while advancing a state, so a model must
/// return the same output for the same input and must not keep hidden state
/// between calls.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the model cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A model input paired with the output computed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Pairs an input with its output.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
