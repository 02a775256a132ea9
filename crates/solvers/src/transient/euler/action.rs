/// Actions an observer can return to the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run now and keep the history recorded so far.
    StopEarly,
}
