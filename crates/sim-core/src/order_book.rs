//! Central limit order book with price-time priority.
//!
//! Two `BTreeMap`s hold the price levels; bids are read back-to-front so
//! both sides present best price first. A secondary id index supports
//! cancels without scanning the book.

use std::collections::{BTreeMap, HashMap};

use types::{DepthLevel, MarketSnapshot, Order, OrderId, Price, Qty, Side, Timestamp, Trade};

use crate::price_level::PriceLevel;

/// Single-symbol order book plus running trade statistics.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Buy levels; best bid is the last key.
    bids: BTreeMap<Price, PriceLevel>,
    /// Sell levels; best ask is the first key.
    asks: BTreeMap<Price, PriceLevel>,
    /// Resting order lookup for cancels: id -> (price, side).
    order_index: HashMap<OrderId, (Price, Side)>,
    /// Number of resting orders; always equals `order_index.len()`.
    order_count: usize,
    /// Price of the most recent trade, zero before the first trade.
    last_trade_price: Price,
    /// Cumulative traded quantity.
    total_volume: Qty,
    /// Cumulative number of fills.
    trade_count: u64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rest a limit order in the book.
    ///
    /// Rejects non-positive prices and quantities by returning `false`
    /// with no side effects. Resting never matches; crossing detection is
    /// the matching engine's job.
    pub fn add_limit_order(&mut self, order: Order) -> bool {
        if !order.price.is_valid() || !order.quantity.is_valid() {
            return false;
        }

        let side_levels = match order.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        side_levels.entry(order.price).or_default().add_order(order);

        self.order_index
            .insert(order.id, (order.price, order.side));
        self.order_count += 1;
        true
    }

    /// Execute a market order for the given taker side.
    ///
    /// Walks the opposite side of the book in price priority (asks
    /// ascending for a buy, bids descending for a sell), consuming level
    /// heads FIFO and emitting one trade per consumed slice. Any quantity
    /// left after the opposing side is exhausted is dropped; market orders
    /// never rest.
    pub fn add_market_order(
        &mut self,
        side: Side,
        quantity: Qty,
        taker_id: OrderId,
        timestamp: Timestamp,
    ) -> Vec<Trade> {
        match side {
            Side::Buy => self.sweep_asks(quantity, taker_id, timestamp),
            Side::Sell => self.sweep_bids(quantity, taker_id, timestamp),
        }
    }

    fn sweep_asks(&mut self, quantity: Qty, taker_id: OrderId, timestamp: Timestamp) -> Vec<Trade> {
        let mut trades = Vec::new();
        let mut remaining = quantity;

        while remaining > Qty::ZERO {
            let Some(price) = self.asks.keys().next().copied() else {
                break;
            };
            let Some(level) = self.asks.get_mut(&price) else {
                break;
            };

            while remaining > Qty::ZERO {
                let Some((maker, fully_consumed)) = level.consume_order(remaining) else {
                    break;
                };
                remaining -= maker.quantity;
                trades.push(Trade::new(
                    maker.id,
                    taker_id,
                    price,
                    maker.quantity,
                    timestamp,
                ));
                if fully_consumed {
                    self.order_index.remove(&maker.id);
                    self.order_count -= 1;
                }
                self.last_trade_price = price;
                self.total_volume += maker.quantity;
                self.trade_count += 1;
            }

            if level.is_empty() {
                self.asks.remove(&price);
            }
        }

        trades
    }

    fn sweep_bids(&mut self, quantity: Qty, taker_id: OrderId, timestamp: Timestamp) -> Vec<Trade> {
        let mut trades = Vec::new();
        let mut remaining = quantity;

        while remaining > Qty::ZERO {
            let Some(price) = self.bids.keys().next_back().copied() else {
                break;
            };
            let Some(level) = self.bids.get_mut(&price) else {
                break;
            };

            while remaining > Qty::ZERO {
                let Some((maker, fully_consumed)) = level.consume_order(remaining) else {
                    break;
                };
                remaining -= maker.quantity;
                trades.push(Trade::new(
                    maker.id,
                    taker_id,
                    price,
                    maker.quantity,
                    timestamp,
                ));
                if fully_consumed {
                    self.order_index.remove(&maker.id);
                    self.order_count -= 1;
                }
                self.last_trade_price = price;
                self.total_volume += maker.quantity;
                self.trade_count += 1;
            }

            if level.is_empty() {
                self.bids.remove(&price);
            }
        }

        trades
    }

    /// Remove a resting order by id. Unknown ids return `false`.
    pub fn cancel_order(&mut self, order_id: OrderId) -> bool {
        let Some(&(price, side)) = self.order_index.get(&order_id) else {
            return false;
        };

        let side_levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        if let Some(level) = side_levels.get_mut(&price) {
            if level.remove_order(order_id).is_some() {
                if level.is_empty() {
                    side_levels.remove(&price);
                }
                self.order_index.remove(&order_id);
                self.order_count -= 1;
                return true;
            }
        }
        false
    }

    pub fn best_bid_price(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    pub fn best_bid_quantity(&self) -> Option<Qty> {
        self.bids.values().next_back().map(|l| l.total_quantity())
    }

    pub fn best_ask_price(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    pub fn best_ask_quantity(&self) -> Option<Qty> {
        self.asks.values().next().map(|l| l.total_quantity())
    }

    /// Top-of-book snapshot; empty sides report zero.
    pub fn top_of_book(&self, timestamp: Timestamp) -> MarketSnapshot {
        MarketSnapshot {
            best_bid: self.best_bid_price().unwrap_or(Price::ZERO),
            best_ask: self.best_ask_price().unwrap_or(Price::ZERO),
            best_bid_qty: self.best_bid_quantity().unwrap_or(Qty::ZERO),
            best_ask_qty: self.best_ask_quantity().unwrap_or(Qty::ZERO),
            last_trade_price: self.last_trade_price,
            timestamp,
        }
    }

    /// Up to `levels` bid rows (descending price) followed by up to
    /// `levels` ask rows (ascending price).
    pub fn get_depth(&self, levels: usize) -> Vec<DepthLevel> {
        let mut depth = Vec::with_capacity(levels.min(self.bids.len()) + levels.min(self.asks.len()));
        for (&price, level) in self.bids.iter().rev().take(levels) {
            depth.push(DepthLevel::bid(price, level.total_quantity()));
        }
        for (&price, level) in self.asks.iter().take(levels) {
            depth.push(DepthLevel::ask(price, level.total_quantity()));
        }
        depth
    }

    /// Look up a resting order by id.
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        let &(price, side) = self.order_index.get(&order_id)?;
        let side_levels = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        side_levels
            .get(&price)?
            .iter()
            .find(|o| o.id == order_id)
            .copied()
    }

    /// Number of resting orders.
    pub fn size(&self) -> usize {
        self.order_count
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn last_trade_price(&self) -> Price {
        self.last_trade_price
    }

    pub fn total_volume(&self) -> Qty {
        self.total_volume
    }

    pub fn trade_count(&self) -> u64 {
        self.trade_count
    }

    /// Drop all resting orders and reset the statistics.
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.order_index.clear();
        self.order_count = 0;
        self.last_trade_price = Price::ZERO;
        self.total_volume = Qty::ZERO;
        self.trade_count = 0;
    }
}
