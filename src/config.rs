//! Configuration parameters for the annealing runs.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Configuration settings for the annealing engine and the run driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Starting temperature of each run
    pub initial_temperature: f64,
    /// Temperature floor; a run ends once the temperature reaches it
    pub final_temperature: f64,
    /// Linear temperature decrement applied every iteration
    pub cooling_step: f64,
    /// Independent runs per scenario; the lowest-cost outcome wins
    pub runs: usize,
    /// Master seed for reproducible runs, drawn from entropy when unset
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_temperature: 500.0,
            final_temperature: 0.0,
            cooling_step: 0.0001,
            runs: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the starting temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    /// Set the temperature floor.
    pub fn with_final_temperature(mut self, temperature: f64) -> Self {
        self.final_temperature = temperature;
        self
    }

    /// Set the per-iteration temperature decrement.
    pub fn with_cooling_step(mut self, step: f64) -> Self {
        self.cooling_step = step;
        self
    }

    /// Set the number of independent runs per scenario.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject parameter combinations the annealing loop cannot run with.
    ///
    /// Equal initial and final temperatures are allowed and produce a run
    /// of zero iterations that returns the seed partition untouched.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.initial_temperature.is_finite() || !self.final_temperature.is_finite() {
            return Err(Error::Config("temperatures must be finite".into()));
        }
        if self.initial_temperature < self.final_temperature {
            return Err(Error::Config(
                "initial temperature must not be below the final temperature".into(),
            ));
        }
        if !self.cooling_step.is_finite() || self.cooling_step <= 0.0 {
            return Err(Error::Config("cooling step must be positive".into()));
        }
        if self.runs == 0 {
            return Err(Error::Config("runs must be positive".into()));
        }
        Ok(())
    }
}
