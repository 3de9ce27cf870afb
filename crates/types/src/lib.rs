//! Core value types for the market microstructure simulator.
//!
//! This crate provides the shared data types used across the simulator:
//! order/agent identifiers, integer tick prices and lot quantities, the
//! order/trade/event records consumed by the matching engine, and the
//! depth and top-of-book snapshot types.

mod event;
mod ids;
mod money;
mod order;
mod snapshot;
mod trade;

pub use event::{Event, EventType};
pub use ids::{AgentId, OrderId, Timestamp};
pub use money::{Price, Qty, mid_price, spread};
pub use order::{Order, Side};
pub use snapshot::{DepthLevel, MarketSnapshot};
pub use trade::Trade;
