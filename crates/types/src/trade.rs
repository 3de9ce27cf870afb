//! The trade record emitted by the matching engine.

use crate::ids::{OrderId, Timestamp};
use crate::money::{Price, Qty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fill between a resting maker order and an incoming taker order.
///
/// Trades are created exclusively by the matching engine and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Id of the order that was resting in the book.
    pub maker_id: OrderId,
    /// Id of the incoming order that crossed against it.
    pub taker_id: OrderId,
    /// Execution price (the maker's resting price).
    pub price: Price,
    pub quantity: Qty,
    pub timestamp: Timestamp,
}

impl Trade {
    pub fn new(
        maker_id: OrderId,
        taker_id: OrderId,
        price: Price,
        quantity: Qty,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            maker_id,
            taker_id,
            price,
            quantity,
            timestamp,
        }
    }

    /// Traded value in tick-lots.
    #[inline]
    pub fn notional(&self) -> i64 {
        self.price.raw() * self.quantity.raw()
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} (maker {}, taker {}, ts={})",
            self.quantity, self.price, self.maker_id, self.taker_id, self.timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notional() {
        let trade = Trade::new(OrderId(1), OrderId(2), Price(10002), Qty(30), 1001);
        assert_eq!(trade.notional(), 300_060);
    }
}
