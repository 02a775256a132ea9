use std::{fmt, num::NonZeroUsize};

use trophic_core::Observer;

use crate::traits::HasStep;

/// Logs every `every`-th solver event at `info` level.
///
/// Step 0 is always logged. The observer never returns an action, so it does
/// not change the course of a run.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    every: NonZeroUsize,
    logged: usize,
}

impl ProgressLog {
    /// Creates an observer that logs steps `0, every, 2 * every, ...`.
    #[must_use]
    pub fn every(every: NonZeroUsize) -> Self {
        Self { every, logged: 0 }
    }

    /// Number of events logged so far.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl<E, A> Observer<E, A> for ProgressLog
where
    E: HasStep + fmt::Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if step % self.every.get() == 0 {
            tracing::info!(step, ?event, "progress");
            self.logged += 1;
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut ProgressLog
where
    E: HasStep + fmt::Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
