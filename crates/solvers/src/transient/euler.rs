//! Fixed-step forward Euler integration.
//!
//! Each step advances the state with the derivative evaluated at the start of
//! the step:
//!
//! ```text
//! state[n+1] = finalize(state[n] + derivative(state[n]) * dt)
//! ```
//!
//! Steps are strictly ordered. Step `n + 1` reads the snapshot produced by step
//! `n`, so the loop is sequential by construction.
//!
//! # Example
//!
//! ```ignore
//! use trophic_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial, 0.01, 999)?;
//! let final_snapshot = &solution.history[solution.steps];
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use trophic_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Integrates `problem` over `steps` fixed steps of size `dt`.
///
/// The model is evaluated at `initial` first, which is recorded as step 0. A
/// complete run therefore holds `steps + 1` snapshots in its history.
///
/// For every step the solver extracts the state and its derivative from the
/// current snapshot, steps the state, builds and finalizes the next input, then
/// evaluates the model there.
///
/// # Observer
///
/// An [`Event`] is emitted for step 0 and after every step. Answering with
/// [`Action::StopEarly`] ends the run with [`Status::StoppedByObserver`] and
/// the history gathered so far.
///
/// # Errors
///
/// Returns [`Error::Model`] or [`Error::Problem`] when either side fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let output = model.call(&initial).map_err(Error::model)?;
    let mut current = Snapshot::new(initial, output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(current.clone());

    if stop_requested(&mut observer, 0, &current) {
        return Ok(Solution::stopped(history, 0));
    }

    for step in 1..=steps {
        current = advance(model, problem, &current, &dt)?;
        history.push(current.clone());

        if stop_requested(&mut observer, step, &current) {
            return Ok(Solution::stopped(history, step));
        }
    }

    Ok(Solution::complete(history, steps))
}

/// Integrates `problem` without observing the run.
///
/// Equivalent to [`solve`] with `()` as the observer.
///
/// # Errors
///
/// Returns [`Error::Model`] or [`Error::Problem`] when either side fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Takes one Euler step from `current`.
fn advance<M, P>(
    model: &M,
    problem: &P,
    current: &Snapshot<M::Input, M::Output>,
    dt: &P::Delta,
) -> Result<Snapshot<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let state = problem.state(&current.input).map_err(Error::problem)?;
    let derivative = problem
        .derivative(&current.input, &current.output)
        .map_err(Error::problem)?;

    let stepped = state.step(derivative, dt.clone());

    let input = problem
        .build_input(&current.input, &stepped, dt)
        .map_err(Error::problem)?;
    let input = problem
        .finalize_step(input, &current.input, &current.output, dt)
        .map_err(Error::problem)?;

    let output = model.call(&input).map_err(Error::model)?;
    Ok(Snapshot::new(input, output))
}

fn stop_requested<I, O, Obs>(observer: &mut Obs, step: usize, snapshot: &Snapshot<I, O>) -> bool
where
    I: Clone,
    O: Clone,
    Obs: Observer<Event<I, O>, Action>,
{
    let event = Event {
        step,
        snapshot: snapshot.clone(),
    };

    match observer.observe(&event) {
        Some(Action::StopEarly) => {
            tracing::debug!(step, "observer stopped euler integration");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{convert::Infallible, fmt};

    use approx::assert_relative_eq;
    use trophic_core::DerivativeOf;

    // --- Fixtures: exponential decay with a floor ---

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Amount(f64);

    #[derive(Debug, Clone, Copy)]
    struct Rate(f64);

    impl StepIntegrable<f64> for Amount {
        type Derivative = Rate;

        fn step(&self, derivative: Rate, dt: f64) -> Self {
            Amount(self.0 + derivative.0 * dt)
        }
    }

    #[derive(Debug, Clone)]
    struct Input {
        amount: Amount,
        time: f64,
    }

    /// dA/dt = -k * A
    struct Decay {
        k: f64,
    }

    impl Model for Decay {
        type Input = Input;
        type Output = Rate;
        type Error = Infallible;

        fn call(&self, input: &Input) -> Result<Rate, Infallible> {
            Ok(Rate(-self.k * input.amount.0))
        }
    }

    /// Decay problem that floors the amount at `floor` after every step.
    struct DecayProblem {
        floor: f64,
    }

    impl OdeProblem for DecayProblem {
        type Input = Input;
        type Output = Rate;
        type Delta = f64;
        type State = Amount;
        type Error = Infallible;

        fn state(&self, input: &Input) -> Result<Amount, Infallible> {
            Ok(input.amount)
        }

        fn derivative(
            &self,
            _input: &Input,
            output: &Rate,
        ) -> Result<DerivativeOf<Amount, f64>, Infallible> {
            Ok(*output)
        }

        fn build_input(&self, base: &Input, state: &Amount, dt: &f64) -> Result<Input, Infallible> {
            Ok(Input {
                amount: *state,
                time: base.time + dt,
            })
        }

        fn finalize_step(
            &self,
            next: Input,
            _prev_input: &Input,
            _prev_output: &Rate,
            _dt: &f64,
        ) -> Result<Input, Infallible> {
            Ok(Input {
                amount: Amount(next.amount.0.max(self.floor)),
                ..next
            })
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("model is broken")
        }
    }

    impl std::error::Error for Broken {}

    /// A model that fails once the amount drops below a threshold.
    struct FailsBelow(f64);

    impl Model for FailsBelow {
        type Input = Input;
        type Output = Rate;
        type Error = Broken;

        fn call(&self, input: &Input) -> Result<Rate, Broken> {
            if input.amount.0 < self.0 {
                Err(Broken)
            } else {
                Ok(Rate(-1.0))
            }
        }
    }

    fn start(amount: f64) -> Input {
        Input {
            amount: Amount(amount),
            time: 0.0,
        }
    }

    // --- Tests ---

    #[test]
    fn decays_geometrically() {
        let model = Decay { k: 0.5 };
        let problem = DecayProblem { floor: f64::MIN };

        let solution =
            solve_unobserved(&model, &problem, start(8.0), 1.0, 3).expect("decay is infallible");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 3);
        assert_eq!(solution.history.len(), 4);

        let amounts: Vec<f64> = solution.history.iter().map(|s| s.input.amount.0).collect();
        assert_eq!(amounts, vec![8.0, 4.0, 2.0, 1.0]);
        assert_relative_eq!(solution.history[3].input.time, 3.0);
    }

    #[test]
    fn finalize_step_is_applied_every_step() {
        // k * dt = 2 overshoots past zero each step without the floor.
        let model = Decay { k: 2.0 };
        let problem = DecayProblem { floor: 0.0 };

        let solution =
            solve_unobserved(&model, &problem, start(1.0), 1.0, 3).expect("decay is infallible");

        let amounts: Vec<f64> = solution.history.iter().map(|s| s.input.amount.0).collect();
        assert_eq!(amounts, vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_steps_returns_initial() {
        let solution = solve_unobserved(
            &Decay { k: 1.0 },
            &DecayProblem { floor: 0.0 },
            start(5.0),
            0.1,
            0,
        )
        .expect("decay is infallible");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_relative_eq!(solution.history[0].input.amount.0, 5.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |event: &Event<Input, Rate>| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve(
            &Decay { k: 0.1 },
            &DecayProblem { floor: 0.0 },
            start(1.0),
            0.1,
            100,
            observer,
        )
        .expect("decay is infallible");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6);
    }

    #[test]
    fn observer_can_stop_at_initial_state() {
        let solution = solve(
            &Decay { k: 0.1 },
            &DecayProblem { floor: 0.0 },
            start(1.0),
            0.1,
            10,
            |_: &Event<Input, Rate>| Some(Action::StopEarly),
        )
        .expect("decay is infallible");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let mut seen = Vec::new();

        solve(
            &Decay { k: 1.0 },
            &DecayProblem { floor: 0.0 },
            start(1.0),
            0.25,
            4,
            |event: &Event<Input, Rate>| {
                seen.push(event.step);
                None
            },
        )
        .expect("decay is infallible");

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn model_error_is_reported() {
        let result = solve_unobserved(
            &FailsBelow(0.5),
            &DecayProblem { floor: f64::MIN },
            start(1.0),
            0.3,
            10,
        );

        let err = result.expect_err("model should fail once the amount drops below 0.5");
        assert!(matches!(err, Error::Model(_)));
        assert_eq!(err.to_string(), "model error: model is broken");
    }

    /// Problem that rejects any step which would leave the amount negative.
    struct RejectNegative;

    impl OdeProblem for RejectNegative {
        type Input = Input;
        type Output = Rate;
        type Delta = f64;
        type State = Amount;
        type Error = Broken;

        fn state(&self, input: &Input) -> Result<Amount, Broken> {
            Ok(input.amount)
        }

        fn derivative(&self, _input: &Input, output: &Rate) -> Result<Rate, Broken> {
            Ok(*output)
        }

        fn build_input(&self, base: &Input, state: &Amount, dt: &f64) -> Result<Input, Broken> {
            if state.0 < 0.0 {
                return Err(Broken);
            }
            Ok(Input {
                amount: *state,
                time: base.time + dt,
            })
        }
    }

    #[test]
    fn problem_error_is_reported() {
        let result = solve_unobserved(&Decay { k: 3.0 }, &RejectNegative, start(1.0), 1.0, 5);

        let err = result.expect_err("the first step overshoots below zero");
        assert!(matches!(err, Error::Problem(_)));
        assert_eq!(err.to_string(), "problem error: model is broken");
    }

    #[test]
    fn final_snapshot_is_indexed_by_steps() {
        let solution = solve_unobserved(
            &Decay { k: 0.5 },
            &DecayProblem { floor: 0.0 },
            start(8.0),
            1.0,
            2,
        )
        .expect("decay is infallible");

        let final_snapshot = &solution.history[solution.steps];
        assert_eq!(solution.history.len(), solution.steps + 1);
        assert_eq!(final_snapshot.input.amount, Amount(2.0));
    }
}
