use trophic_core::Observer;
use trophic_solvers::transient::euler::{self, Action, Event, Status};

use crate::{Input, LotkaVolterra, PredatorPrey, Rates, SimulationConfig, Trajectory};

/// Runs the simulation described by `config`.
///
/// The returned trajectory holds `config.len` states. Index 0 is
/// `config.initial` exactly as given, and every later state is clamped at zero.
/// Identical configs produce bit-identical trajectories.
#[must_use]
pub fn simulate(config: &SimulationConfig) -> Trajectory {
    simulate_observed(config, ())
}

/// Runs the simulation, reporting every stored state to `observer`.
///
/// The observer sees the same [`euler::Event`]s the solver emits. If it stops
/// the run early, the trajectory ends at the last state it was shown.
pub fn simulate_observed<Obs>(config: &SimulationConfig, observer: Obs) -> Trajectory
where
    Obs: Observer<Event<Input, Rates>, Action>,
{
    let span = tracing::info_span!("simulate", steps = config.steps(), dt = config.dt);
    let _guard = span.enter();

    let model = LotkaVolterra::new(config.parameters);
    let initial = Input {
        time: 0.0,
        populations: config.initial,
    };

    let solution = match euler::solve(
        &model,
        &PredatorPrey,
        initial,
        config.dt,
        config.steps(),
        observer,
    ) {
        Ok(solution) => solution,
        Err(err) => unreachable!("Lotka-Volterra model and problem cannot fail: {err}"),
    };

    if solution.status == Status::StoppedByObserver {
        tracing::debug!(steps = solution.steps, "stopped early by observer");
    }

    let trajectory = Trajectory::from_inputs(solution.history.iter().map(|s| &s.input));

    let last = trajectory.final_populations();
    tracing::debug!(prey = last.prey, predator = last.predator, "simulation complete");

    trajectory
}
