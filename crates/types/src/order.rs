//! Order side and the resting order record.

use crate::ids::{OrderId, Timestamp};
use crate::money::{Price, Qty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the market an order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A limit order as it rests in the book.
///
/// The record is immutable except for `quantity`, which the book decrements
/// in place as the head of a price level is consumed; an order whose
/// quantity reaches zero is removed from the book entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Qty,
    pub timestamp: Timestamp,
}

impl Order {
    pub fn new(id: OrderId, side: Side, price: Price, quantity: Qty, timestamp: Timestamp) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            timestamp,
        }
    }

    #[inline]
    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }

    #[inline]
    pub fn is_sell(&self) -> bool {
        self.side == Side::Sell
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {} (ts={})",
            self.id, self.side, self.quantity, self.price, self.timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_order_predicates() {
        let order = Order::new(OrderId(1), Side::Buy, Price(10000), Qty(50), 0);
        assert!(order.is_buy());
        assert!(!order.is_sell());
    }
}
