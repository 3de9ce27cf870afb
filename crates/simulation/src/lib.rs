//! Simulation crate: the discrete-time loop around the matching engine.
//!
//! Each step the simulator collects events from the agent population,
//! feeds them through the matching engine, distributes the resulting
//! trades back to the agents, and samples market data on fixed cadences:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Simulator step                  │
//! │                                              │
//! │  1. events = agents.step(now, rng)           │
//! │  2. trades = engine.process_events(events)   │
//! │  3. agents.notify_trade(trade) per trade     │
//! │  4. snapshot every 100 steps,                │
//! │     per-agent PnL every 1000 steps           │
//! │  5. now += time_step                         │
//! │                                              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The loop is single-threaded and fully synchronous; one step is an
//! atomic unit of work. Reproducibility follows from the shared seeded
//! stream: a fixed (seed, configuration, step count) replays the exact
//! same trades.

mod collector;
mod config;
mod error;
mod runner;

pub use collector::{AgentPnlRecord, MarketDataCollector};
pub use config::SimulationConfig;
pub use error::ExportError;
pub use runner::{RunResult, Simulator};
