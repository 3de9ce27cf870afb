//! The simulator: discrete-time loop, sampling, and run results.

use std::time::Instant;

use agents::{
    Agent, AgentManager, MarketMaker, MarketMakerConfig, NoiseTrader, NoiseTraderConfig, Taker,
    TakerConfig,
};
use sim_core::{MatchingEngine, SimRng};
use types::{AgentId, MarketSnapshot, Timestamp, Trade};

use crate::collector::{AgentPnlRecord, MarketDataCollector};
use crate::config::SimulationConfig;

/// Steps between market snapshot samples.
const SNAPSHOT_INTERVAL: u64 = 100;
/// Steps between per-agent PnL samples.
const PNL_INTERVAL: u64 = 1_000;

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Full trade tape in execution order.
    pub trades: Vec<Trade>,
    /// Sampled top-of-book snapshots.
    pub market_snapshots: Vec<MarketSnapshot>,
    /// Sampled per-agent PnL rows.
    pub agent_pnl: Vec<AgentPnlRecord>,
    /// Number of events the matching engine processed.
    pub total_events_processed: u64,
    /// Number of trades the engine produced.
    pub total_trades: u64,
    /// Virtual time covered, in nanoseconds.
    pub simulation_duration: Timestamp,
    /// Real time the run took.
    pub wall_clock_seconds: f64,
}

/// Discrete-time simulation driver.
///
/// Owns the matching engine, the agent population, the shared random
/// stream, and the data collector. Each `run` starts from a clean slate:
/// the book is cleared, the stream is reseeded, and a fresh agent
/// population is installed, so identical inputs give identical results.
pub struct Simulator {
    config: SimulationConfig,
    rng: SimRng,
    engine: MatchingEngine,
    agents: AgentManager,
    collector: MarketDataCollector,
    data_collection_enabled: bool,
    current_time: Timestamp,
    current_step: u64,
    events_processed: u64,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        let seed = config.seed;
        let start_time = config.start_time;
        Self {
            config,
            rng: SimRng::new(seed),
            engine: MatchingEngine::new(),
            agents: AgentManager::new(),
            collector: MarketDataCollector::new(),
            data_collection_enabled: true,
            current_time: start_time,
            current_step: 0,
            events_processed: 0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(SimulationConfig::default())
    }

    /// Run with the three default agents (maker id 1, taker id 2, noise
    /// trader id 3) built from the given configurations.
    pub fn run(
        &mut self,
        n_steps: u64,
        maker_config: MarketMakerConfig,
        taker_config: TakerConfig,
        noise_config: NoiseTraderConfig,
    ) -> RunResult {
        self.reset();
        self.agents.add_agent(Box::new(MarketMaker::new(
            AgentId(1),
            "MarketMaker",
            maker_config,
        )));
        self.agents
            .add_agent(Box::new(Taker::new(AgentId(2), "Taker", taker_config)));
        self.agents.add_agent(Box::new(NoiseTrader::new(
            AgentId(3),
            "NoiseTrader",
            noise_config,
        )));
        self.run_loop(n_steps)
    }

    /// Run with an externally supplied agent population.
    pub fn run_with_agents(&mut self, n_steps: u64, custom_agents: Vec<Box<dyn Agent>>) -> RunResult {
        self.reset();
        for agent in custom_agents {
            self.agents.add_agent(agent);
        }
        self.run_loop(n_steps)
    }

    /// Restore the pristine pre-run state. The agent population is
    /// cleared, not merely reset, so repeated runs are independent.
    fn reset(&mut self) {
        self.engine.clear();
        self.agents.clear();
        self.collector.clear();
        self.rng.reseed(self.config.seed);
        self.current_time = self.config.start_time;
        self.current_step = 0;
        self.events_processed = 0;
    }

    fn run_loop(&mut self, n_steps: u64) -> RunResult {
        let n_steps = n_steps.min(self.config.max_steps);
        let started = Instant::now();

        if self.config.enable_logging {
            eprintln!(
                "simulation: seed={} steps={} agents={}",
                self.config.seed,
                n_steps,
                self.agents.len()
            );
        }

        for step in 0..n_steps {
            self.current_step = step;
            self.process_step();
            self.current_time += self.config.time_step;

            if self.config.enable_logging && step > 0 && step % 100_000 == 0 {
                eprintln!(
                    "simulation: step {}/{} trades={}",
                    step,
                    n_steps,
                    self.engine.trade_count()
                );
            }
        }

        // Final samples so the tape covers the end of the run.
        self.sample_market();
        self.sample_agents();

        let wall_clock_seconds = started.elapsed().as_secs_f64();
        if self.config.enable_logging {
            eprintln!(
                "simulation: done, events={} trades={} in {:.3}s",
                self.events_processed,
                self.engine.trade_count(),
                wall_clock_seconds
            );
        }

        RunResult {
            trades: self.collector.trades().to_vec(),
            market_snapshots: self.collector.snapshots().to_vec(),
            agent_pnl: self.collector.agent_pnl().to_vec(),
            total_events_processed: self.events_processed,
            total_trades: self.engine.trade_count(),
            simulation_duration: self.current_time - self.config.start_time,
            wall_clock_seconds,
        }
    }

    fn process_step(&mut self) {
        let events = self.agents.step(self.current_time, &mut self.rng);
        let trades = self.engine.process_events(&events);
        self.events_processed += events.len() as u64;

        for trade in &trades {
            self.agents.notify_trade(trade);
            if self.data_collection_enabled {
                self.collector.record_trade(*trade);
            }
        }

        if self.current_step % SNAPSHOT_INTERVAL == 0 {
            self.sample_market();
        }
        if self.current_step % PNL_INTERVAL == 0 {
            self.sample_agents();
        }
    }

    fn sample_market(&mut self) {
        if self.data_collection_enabled {
            let snapshot = self.engine.market_snapshot(self.current_time);
            self.collector.record_snapshot(snapshot);
        }
    }

    fn sample_agents(&mut self) {
        if self.data_collection_enabled {
            for stats in self.agents.stats() {
                self.collector.record_agent_pnl(AgentPnlRecord {
                    agent_id: stats.id,
                    timestamp: self.current_time,
                    pnl: stats.pnl,
                    inventory: stats.inventory,
                });
            }
        }
    }

    /// Enable or disable tape collection; the loop itself is unaffected.
    pub fn set_data_collection(&mut self, enabled: bool) {
        self.data_collection_enabled = enabled;
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn matching_engine(&self) -> &MatchingEngine {
        &self.engine
    }

    pub fn agent_manager(&self) -> &AgentManager {
        &self.agents
    }

    pub fn data_collector(&self) -> &MarketDataCollector {
        &self.collector
    }

    pub fn current_time(&self) -> Timestamp {
        self.current_time
    }
}
