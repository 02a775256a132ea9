use std::io::{self, Write};

use crate::{Input, Populations};

/// Prey and predator populations at every stored step of a run.
///
/// Index `i` is the state after `i` steps, recorded together with the
/// simulated time the solver reached there. All sequences always have the
/// same length, and a trajectory produced by [`simulate`](crate::simulate) is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time: Vec<f64>,
    prey: Vec<f64>,
    predator: Vec<f64>,
}

impl Trajectory {
    /// Collects model inputs in step order.
    pub(crate) fn from_inputs<'a>(inputs: impl ExactSizeIterator<Item = &'a Input>) -> Self {
        let len = inputs.len();
        let mut trajectory = Self {
            time: Vec::with_capacity(len),
            prey: Vec::with_capacity(len),
            predator: Vec::with_capacity(len),
        };
        for input in inputs {
            trajectory.time.push(input.time);
            trajectory.prey.push(input.populations.prey);
            trajectory.predator.push(input.populations.predator);
        }
        trajectory
    }

    /// Number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prey.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prey.is_empty()
    }

    /// Simulated time of every stored state.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    #[must_use]
    pub fn prey(&self) -> &[f64] {
        &self.prey
    }

    #[must_use]
    pub fn predator(&self) -> &[f64] {
        &self.predator
    }

    /// Returns the populations at step `index`, if it was stored.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Populations> {
        Some(Populations {
            prey: *self.prey.get(index)?,
            predator: *self.predator.get(index)?,
        })
    }

    /// Returns the populations at the last stored step.
    ///
    /// # Panics
    ///
    /// Panics if the trajectory is empty.
    #[must_use]
    pub fn final_populations(&self) -> Populations {
        let last = self.len() - 1;
        Populations {
            prey: self.prey[last],
            predator: self.predator[last],
        }
    }

    /// Iterates over the stored states in step order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Populations> + '_ {
        self.prey
            .iter()
            .zip(&self.predator)
            .map(|(&prey, &predator)| Populations { prey, predator })
    }

    /// Iterates over `(time, populations)` pairs in step order.
    pub fn iter_timed(&self) -> impl ExactSizeIterator<Item = (f64, Populations)> + '_ {
        self.time.iter().copied().zip(self.iter())
    }

    /// Writes the trajectory as CSV with columns `step,time,prey,predator`.
    ///
    /// Values use the shortest representation that round-trips, switching to
    /// exponent notation for very small or very large magnitudes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `writer`.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "step,time,prey,predator")?;
        for (step, (time, state)) in self.iter_timed().enumerate() {
            writeln!(writer, "{step},{time:?},{:?},{:?}", state.prey, state.predator)?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(time: f64, prey: f64, predator: f64) -> Input {
        Input {
            time,
            populations: Populations { prey, predator },
        }
    }

    fn sample() -> Trajectory {
        let inputs = [
            input(0.0, 10.0, 5.0),
            input(0.5, 10.05, 5.7495),
            input(1.0, 5.8623098886117835e-81, 6.5),
        ];
        Trajectory::from_inputs(inputs.iter())
    }

    #[test]
    fn splits_inputs_into_equal_length_sequences() {
        let trajectory = sample();

        assert_eq!(trajectory.len(), 3);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.time(), [0.0, 0.5, 1.0]);
        assert_eq!(trajectory.prey(), [10.0, 10.05, 5.8623098886117835e-81]);
        assert_eq!(trajectory.predator(), [5.0, 5.7495, 6.5]);
    }

    #[test]
    fn get_and_final_populations() {
        let trajectory = sample();

        assert_eq!(trajectory.get(1), Some(Populations { prey: 10.05, predator: 5.7495 }));
        assert_eq!(trajectory.get(3), None);
        assert_eq!(
            trajectory.final_populations(),
            Populations { prey: 5.8623098886117835e-81, predator: 6.5 }
        );
    }

    #[test]
    fn iter_timed_pairs_time_with_state() {
        let pairs: Vec<(f64, f64)> = sample().iter_timed().map(|(t, p)| (t, p.predator)).collect();

        assert_eq!(pairs, vec![(0.0, 5.0), (0.5, 5.7495), (1.0, 6.5)]);
    }

    #[test]
    fn csv_has_header_one_row_per_state_and_compact_small_values() {
        let mut buffer = Vec::new();

        sample().write_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv,
            "step,time,prey,predator\n\
             0,0.0,10.0,5.0\n\
             1,0.5,10.05,5.7495\n\
             2,1.0,5.8623098886117835e-81,6.5\n"
        );
    }
}
