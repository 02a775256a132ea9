use trophic_core::Snapshot;

/// How an Euler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every requested step was taken.
    Complete,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// The outcome of an Euler run.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,

    /// One snapshot per recorded step, starting with the initial snapshot.
    pub history: Vec<Snapshot<I, O>>,

    /// Number of integration steps taken (`history.len() - 1`).
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    pub(super) fn complete(history: Vec<Snapshot<I, O>>, steps: usize) -> Self {
        Self {
            status: Status::Complete,
            history,
            steps,
        }
    }

    pub(super) fn stopped(history: Vec<Snapshot<I, O>>, steps: usize) -> Self {
        Self {
            status: Status::StoppedByObserver,
            history,
            steps,
        }
    }
}
