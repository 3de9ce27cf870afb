//! Sim-core: deterministic market mechanics.
//!
//! This crate provides the state machines at the heart of the simulator:
//! - Seeded random number stream shared by every stochastic component
//! - FIFO price levels and the price-time priority order book
//! - The matching engine that dispatches limit/market/cancel events

mod matching;
mod order_book;
mod price_level;
mod rng;

pub use matching::MatchingEngine;
pub use order_book::OrderBook;
pub use price_level::PriceLevel;
pub use rng::SimRng;
