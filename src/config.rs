//! Demo run configuration with a few presets.

use std::path::PathBuf;

use agents::{MarketMakerConfig, NoiseTraderConfig, TakerConfig};
use simulation::SimulationConfig;

/// Everything the demo binary needs for one run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub n_steps: u64,
    pub simulation: SimulationConfig,
    pub maker: MarketMakerConfig,
    pub taker: TakerConfig,
    pub noise: NoiseTraderConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            n_steps: 100_000,
            simulation: SimulationConfig::default(),
            maker: MarketMakerConfig::default(),
            taker: TakerConfig::default(),
            noise: NoiseTraderConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Short run for a quick look at the output files.
    pub fn quick() -> Self {
        Self {
            n_steps: 10_000,
            ..Default::default()
        }
    }

    /// Busy tape: every stochastic agent fires an order of magnitude
    /// more often.
    pub fn high_activity() -> Self {
        let mut config = Self::default();
        config.taker.intensity = 8.0;
        config.noise.limit_intensity = 15.0;
        config.noise.cancel_intensity = 7.0;
        config
    }

    /// Sparse, calm market.
    pub fn low_activity() -> Self {
        let mut config = Self::default();
        config.taker.intensity = 0.1;
        config.noise.limit_intensity = 0.2;
        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.simulation.seed = seed;
        self
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.simulation.output_dir
    }
}
