//! Trading agents for the market microstructure simulator.
//!
//! This crate provides:
//! - The `Agent` trait every trading agent implements
//! - Concrete strategies: `MarketMaker`, `Taker`, and `NoiseTrader`
//! - `AgentManager`, which fans simulation steps out to the population
//!
//! # Architecture
//! Agents are pure event emitters: each step they receive the current
//! virtual time plus the shared random stream and return the events they
//! want the matching engine to process. Trades flow back through
//! `on_trade`, where agents keep their own inventory and PnL.

mod manager;
pub mod strategies;
mod traits;

pub use manager::AgentManager;
pub use strategies::{
    MarketMaker, MarketMakerConfig, NoiseTrader, NoiseTraderConfig, Taker, TakerConfig,
};
pub use traits::{Agent, AgentStats};
