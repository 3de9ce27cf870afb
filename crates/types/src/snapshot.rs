//! Depth rows and top-of-book snapshots.

use crate::ids::Timestamp;
use crate::money::{self, Price, Qty};
use serde::{Deserialize, Serialize};

/// Aggregate resting quantity at one price on one side of the book.
///
/// Exactly one of the two quantity fields is non-zero; each row belongs to
/// a single side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Price,
    pub bid_quantity: Qty,
    pub ask_quantity: Qty,
}

impl DepthLevel {
    pub fn bid(price: Price, quantity: Qty) -> Self {
        Self {
            price,
            bid_quantity: quantity,
            ask_quantity: Qty::ZERO,
        }
    }

    pub fn ask(price: Price, quantity: Qty) -> Self {
        Self {
            price,
            bid_quantity: Qty::ZERO,
            ask_quantity: quantity,
        }
    }
}

/// Top-of-book view at a point in virtual time.
///
/// An empty side reports zero for both its price and quantity, and
/// `last_trade_price` is zero until the first trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarketSnapshot {
    pub best_bid: Price,
    pub best_ask: Price,
    pub best_bid_qty: Qty,
    pub best_ask_qty: Qty,
    pub last_trade_price: Price,
    pub timestamp: Timestamp,
}

impl MarketSnapshot {
    /// Mid price of the snapshot, or zero when a side is empty.
    pub fn mid_price(&self) -> Price {
        money::mid_price(self.best_bid, self.best_ask)
    }

    /// Bid-ask spread of the snapshot, or zero when a side is empty.
    pub fn spread(&self) -> Price {
        money::spread(self.best_bid, self.best_ask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_level_sides() {
        let bid = DepthLevel::bid(Price(10000), Qty(100));
        assert_eq!(bid.bid_quantity, 100);
        assert_eq!(bid.ask_quantity, 0);

        let ask = DepthLevel::ask(Price(10002), Qty(50));
        assert_eq!(ask.bid_quantity, 0);
        assert_eq!(ask.ask_quantity, 50);
    }

    #[test]
    fn test_snapshot_derived_quotes() {
        let snapshot = MarketSnapshot {
            best_bid: Price(10000),
            best_ask: Price(10002),
            best_bid_qty: Qty(100),
            best_ask_qty: Qty(50),
            last_trade_price: Price::ZERO,
            timestamp: 1000,
        };
        assert_eq!(snapshot.mid_price(), 10001);
        assert_eq!(snapshot.spread(), 2);

        let one_sided = MarketSnapshot {
            best_ask: Price::ZERO,
            ..snapshot
        };
        assert_eq!(one_sided.mid_price(), 0);
        assert_eq!(one_sided.spread(), 0);
    }
}
