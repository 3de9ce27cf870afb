//! Simulation configuration.

use std::path::PathBuf;

use types::Timestamp;

/// Configuration for a [`crate::Simulator`].
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Seed for the shared random stream.
    pub seed: u64,
    /// Virtual time of step zero, in nanoseconds.
    pub start_time: Timestamp,
    /// Virtual nanoseconds advanced per step.
    pub time_step: Timestamp,
    /// Upper bound on steps a caller may request.
    pub max_steps: u64,
    /// Emit progress lines on stderr while running.
    pub enable_logging: bool,
    /// Directory the CSV exports are written to.
    pub output_dir: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_time: 0,
            time_step: 1_000,
            max_steps: 1_000_000,
            enable_logging: false,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_time_step(mut self, time_step: Timestamp) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_logging(mut self, enable_logging: bool) -> Self {
        self.enable_logging = enable_logging;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
