/// A state that can be advanced by its derivative over a step.
///
/// Solvers only ever compute `state.step(derivative, delta)`, so implementors
/// decide how every component of the state is advanced. All components must be
/// advanced from `self`, the state at the start of the step, which keeps
/// coupled components consistent with each other.
///
/// `Delta` is usually a time step in `f64`, but any independent variable works.
pub trait StepIntegrable<Delta> {
    /// Rate of change of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state advanced by `derivative * delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
