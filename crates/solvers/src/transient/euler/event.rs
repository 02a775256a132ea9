use trophic_core::Snapshot;

/// Emitted by the Euler solver for every recorded snapshot.
///
/// Step 0 carries the initial snapshot; step `n` carries the snapshot after
/// `n` integration steps.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    pub step: usize,
    pub snapshot: Snapshot<I, O>,
}
