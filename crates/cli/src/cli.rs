use std::{
    io::{self, Write},
    num::NonZeroUsize,
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use trophic_lotka_volterra::{SimulationConfig, Trajectory};

/// Discrete-time Lotka-Volterra predator-prey simulation.
///
/// Without options the reference run is simulated (a=1.0, b=0.1, c=0.01,
/// d=1.5, dt=0.01, 1000 states, 10 prey, 5 predators).
#[derive(Debug, Parser)]
#[command(name = "trophic", version)]
pub struct Cli {
    /// TOML file with simulation settings. Flags override its values.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prey growth rate.
    #[arg(short = 'a', long = "prey-growth", allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Predation rate.
    #[arg(short = 'b', long = "predation", allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Predator death rate.
    #[arg(short = 'c', long = "predator-death", allow_negative_numbers = true)]
    pub c: Option<f64>,

    /// Predator growth per unit of predation.
    #[arg(short = 'd', long = "predator-growth", allow_negative_numbers = true)]
    pub d: Option<f64>,

    /// Time step.
    #[arg(long, allow_negative_numbers = true)]
    pub dt: Option<f64>,

    /// Number of stored states, including the initial one.
    #[arg(short = 'n', long)]
    pub len: Option<NonZeroUsize>,

    /// Initial prey population.
    #[arg(long, allow_negative_numbers = true)]
    pub prey: Option<f64>,

    /// Initial predator population.
    #[arg(long, allow_negative_numbers = true)]
    pub predator: Option<f64>,

    /// Write the full trajectory to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub trajectory: Option<PathBuf>,

    /// Log progress every K steps.
    #[arg(long, value_name = "K")]
    pub progress: Option<NonZeroUsize>,

    /// Plot both populations over time (needs the `plot` feature).
    #[arg(long)]
    pub plot: bool,
}

impl Cli {
    /// Resolves the run settings: reference values, then the config file,
    /// then individual flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded.
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SimulationConfig::reference(),
        };

        let overrides = [
            (self.a, &mut config.parameters.a),
            (self.b, &mut config.parameters.b),
            (self.c, &mut config.parameters.c),
            (self.d, &mut config.parameters.d),
            (self.dt, &mut config.dt),
            (self.prey, &mut config.initial.prey),
            (self.predator, &mut config.initial.predator),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value;
            }
        }
        if let Some(len) = self.len {
            config.len = len;
        }

        Ok(config)
    }
}

/// Writes the final populations of `trajectory` as two lines of text.
///
/// Values are printed in their shortest round-trip form, which switches to
/// exponent notation for tiny or huge magnitudes (`5.86e-81`, not 80 zeros).
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_report(mut out: impl Write, trajectory: &Trajectory) -> io::Result<()> {
    let last = trajectory.final_populations();
    writeln!(out, "Final prey population: {:?}", last.prey)?;
    writeln!(out, "Final predator population: {:?}", last.predator)
}

/// Exit status for a failed argument parse.
///
/// `--help` and `--version` exit with 0; every usage error exits with 1, the
/// same status as any other failure of the binary.
#[must_use]
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    i32::from(err.use_stderr())
}
