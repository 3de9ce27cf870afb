//! Noise trader: random limit placement and random cancellation.
//!
//! Two independent exponential clocks drive order placement and
//! cancellation attempts. Limit prices wander around a reference price
//! with normally distributed offsets, floored at one tick. The trader
//! remembers its resting orders so cancels can target a uniformly random
//! one of its own.

use std::collections::BTreeMap;

use sim_core::SimRng;
use types::{AgentId, Event, Order, OrderId, Price, Qty, Side, Timestamp, Trade};

use crate::traits::Agent;

const REFERENCE_PRICE: Price = Price(10_000);

/// Configuration for a [`NoiseTrader`].
#[derive(Debug, Clone)]
pub struct NoiseTraderConfig {
    /// Limit order arrival rate in orders per microsecond.
    pub limit_intensity: f64,
    /// Cancellation attempt rate in attempts per microsecond.
    pub cancel_intensity: f64,
    /// Mean order size in lots.
    pub quantity_mean: Qty,
    /// Order size standard deviation.
    pub quantity_std: Qty,
    /// Standard deviation of the price offset from the reference, in ticks.
    pub price_volatility: Price,
    /// Probability a due cancellation attempt actually cancels.
    pub cancel_probability: f64,
}

impl Default for NoiseTraderConfig {
    fn default() -> Self {
        Self {
            limit_intensity: 1.5,
            cancel_intensity: 0.7,
            quantity_mean: Qty(30),
            quantity_std: Qty(8),
            price_volatility: Price(5),
            cancel_probability: 0.3,
        }
    }
}

/// Random activity generator keeping the book populated.
#[derive(Debug, Clone)]
pub struct NoiseTrader {
    id: AgentId,
    name: String,
    config: NoiseTraderConfig,
    inventory: Qty,
    pnl: f64,
    next_limit_time: Timestamp,
    next_cancel_time: Timestamp,
    /// Our resting orders, keyed by id. Ordered so that picking the n-th
    /// entry is deterministic under a fixed seed.
    resting: BTreeMap<OrderId, Order>,
    reference_price: Price,
}

impl NoiseTrader {
    pub fn new(id: AgentId, name: impl Into<String>, config: NoiseTraderConfig) -> Self {
        Self {
            id,
            name: name.into(),
            config,
            inventory: Qty::ZERO,
            pnl: 0.0,
            next_limit_time: 0,
            next_cancel_time: 0,
            resting: BTreeMap::new(),
            reference_price: REFERENCE_PRICE,
        }
    }

    /// Number of resting orders this trader is tracking.
    pub fn resting_order_count(&self) -> usize {
        self.resting.len()
    }

    fn draw_quantity(&self, rng: &mut SimRng) -> Qty {
        let drawn = rng.normal(
            self.config.quantity_mean.raw() as f64,
            self.config.quantity_std.raw() as f64,
        );
        Qty((drawn.round() as i64).max(1))
    }

    fn draw_limit_price(&self, rng: &mut SimRng) -> Price {
        let offset = rng.normal(0.0, self.config.price_volatility.raw() as f64);
        let price = self.reference_price.raw() + offset.round() as i64;
        Price(price.max(1))
    }

    fn place_limit(&mut self, now: Timestamp, rng: &mut SimRng, events: &mut Vec<Event>) {
        let quantity = self.draw_quantity(rng);
        let side = if rng.bernoulli(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };
        let price = self.draw_limit_price(rng);
        let order_id = OrderId(now as u64 + self.id.0 + rng.uniform_int(0, 1000) as u64);

        events.push(Event::limit(order_id, side, price, quantity, now, self.id));
        self.resting
            .insert(order_id, Order::new(order_id, side, price, quantity, now));
    }

    fn maybe_cancel(&mut self, now: Timestamp, rng: &mut SimRng, events: &mut Vec<Event>) {
        if self.resting.is_empty() {
            return;
        }
        if !rng.bernoulli(self.config.cancel_probability) {
            return;
        }

        let pick = rng.uniform_int(0, self.resting.len() as i64 - 1) as usize;
        if let Some(order_id) = self.resting.keys().nth(pick).copied() {
            events.push(Event::cancel(order_id, now, self.id));
            self.resting.remove(&order_id);
        }
    }

    fn schedule(rng: &mut SimRng, now: Timestamp, intensity: f64) -> Timestamp {
        now + (rng.exponential(intensity) * 1e6).round() as Timestamp
    }
}

impl Agent for NoiseTrader {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, now: Timestamp, rng: &mut SimRng) -> Vec<Event> {
        let mut events = Vec::new();

        if now >= self.next_limit_time {
            self.place_limit(now, rng, &mut events);
            self.next_limit_time = Self::schedule(rng, now, self.config.limit_intensity);
        }

        if now >= self.next_cancel_time {
            self.maybe_cancel(now, rng, &mut events);
            self.next_cancel_time = Self::schedule(rng, now, self.config.cancel_intensity);
        }

        events
    }

    fn on_trade(&mut self, trade: &Trade) {
        if let Some(order) = self.resting.get(&trade.maker_id).copied() {
            match order.side {
                Side::Buy => {
                    self.inventory += trade.quantity;
                    self.pnl -= trade.notional() as f64;
                }
                Side::Sell => {
                    self.inventory -= trade.quantity;
                    self.pnl += trade.notional() as f64;
                }
            }
        }
        // Any fill drops the order from the local map, even a partial one;
        // the remainder rests on without being cancellable from here.
        self.resting.remove(&trade.maker_id);
    }

    fn pnl(&self) -> f64 {
        self.pnl
    }

    fn inventory(&self) -> Qty {
        self.inventory
    }

    fn reset(&mut self) {
        self.inventory = Qty::ZERO;
        self.pnl = 0.0;
        self.next_limit_time = 0;
        self.next_cancel_time = 0;
        self.resting.clear();
        self.reference_price = REFERENCE_PRICE;
    }
}
