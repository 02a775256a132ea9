//! `trophic` — run a discrete-time Lotka-Volterra simulation.
//!
//! With no arguments the reference run is simulated and the final populations
//! are printed:
//!
//! ```text
//! Final prey population: <value>
//! Final predator population: <value>
//! ```
//!
//! Logs go to stderr and are filtered through `RUST_LOG` (default `warn`).
//!
//! # Usage
//!
//! ```text
//! trophic
//! trophic --config run.toml --trajectory run.csv
//! trophic -b 0.2 --dt 0.005 -n 4000 --progress 500
//! cargo run -p trophic-cli --features plot -- --plot
//! ```

mod cli;

use std::{fs::File, io::BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trophic_lotka_volterra::{Trajectory, simulate, simulate_observed};
use trophic_observers::ProgressLog;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = cli::usage_exit_code(&err);
        // Nothing more can be reported if stderr itself is gone.
        let _ = err.print();
        std::process::exit(code)
    });

    let default_level = if cli.progress.is_some() { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.simulation_config()?;
    tracing::debug!(?config, "resolved simulation config");

    let trajectory = match cli.progress {
        Some(every) => simulate_observed(&config, ProgressLog::every(every)),
        None => simulate(&config),
    };

    cli::write_report(std::io::stdout().lock(), &trajectory)?;

    if let Some(path) = &cli.trajectory {
        let file = File::create(path)
            .with_context(|| format!("failed to create trajectory file {}", path.display()))?;
        trajectory
            .write_csv(BufWriter::new(file))
            .with_context(|| format!("failed to write trajectory to {}", path.display()))?;
        tracing::info!(path = %path.display(), states = trajectory.len(), "wrote trajectory");
    }

    if cli.plot {
        plot(&trajectory, config.dt)?;
    }

    Ok(())
}

#[cfg(feature = "plot")]
fn plot(trajectory: &Trajectory, dt: f64) -> Result<()> {
    use trophic_observers::{ShowConfig, TracePlot};

    let mut plot = TracePlot::<2>::new(["Prey", "Predator"]);
    for (time, state) in trajectory.iter_timed() {
        plot.record(time, [Some(state.prey), Some(state.predator)]);
    }

    plot.show(
        ShowConfig::new()
            .title(format!("Lotka-Volterra (dt={dt}, {} states)", trajectory.len()))
            .x_label("time")
            .legend(),
    )
    .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))
}

#[cfg(not(feature = "plot"))]
fn plot(_trajectory: &Trajectory, _dt: f64) -> Result<()> {
    anyhow::bail!("--plot requires trophic to be built with the `plot` feature")
}
