use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Parameters, Populations};

/// Everything that defines a single simulation run.
///
/// Missing fields in a TOML document fall back to the reference run:
///
/// ```toml
/// dt = 0.01
/// len = 1000
///
/// [parameters]
/// a = 1.0
/// b = 0.1
/// c = 0.01
/// d = 1.5
///
/// [initial]
/// prey = 10.0
/// predator = 5.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Time step between consecutive states.
    ///
    /// Zero or negative values are accepted and simply yield a degenerate
    /// trajectory.
    pub dt: f64,

    /// Number of stored states, including the initial one.
    pub len: NonZeroUsize,

    pub parameters: Parameters,

    /// Populations at `t = 0`.
    pub initial: Populations,
}

/// Failure to load a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

const REFERENCE_LEN: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(len) => len,
    None => unreachable!(),
};

impl SimulationConfig {
    /// The reference run: reference parameters, `dt = 0.01`, 1000 states,
    /// starting from 10 prey and 5 predators.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            dt: 0.01,
            len: REFERENCE_LEN,
            parameters: Parameters::reference(),
            initial: Populations::reference(),
        }
    }

    /// Number of integration steps, one fewer than the number of states.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.len.get() - 1
    }

    /// Parses a config from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or a
    /// zero `len`.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::reference()
    }
}
