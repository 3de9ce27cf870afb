//! Concrete agent strategies.

mod market_maker;
mod noise_trader;
mod taker;

pub use market_maker::{MarketMaker, MarketMakerConfig};
pub use noise_trader::{NoiseTrader, NoiseTraderConfig};
pub use taker::{Taker, TakerConfig};
