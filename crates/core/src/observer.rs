/// Receives events from a solver and optionally answers with an action.
///
/// `E` is the event type a solver emits and `A` is the set of actions it
/// understands. Returning `None` lets the solver continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the observer that ignores everything.
pub trait Observer<E, A> {
    /// Handles a single event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
