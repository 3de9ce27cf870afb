//! Liquidity taker: Poisson-timed aggressive orders.
//!
//! Arrivals follow an exponential inter-arrival clock. Each arrival draws
//! a side from a biased coin and a size from a clipped normal, then either
//! sends a market order or an aggressive limit one tick through the
//! placeholder quotes.

use sim_core::SimRng;
use types::{AgentId, Event, OrderId, Price, Qty, Side, Timestamp, Trade};

use crate::traits::Agent;

/// Placeholder quotes used when pricing aggressive limits.
const REFERENCE_BID: Price = Price(10_000);
const REFERENCE_ASK: Price = Price(10_002);

/// Configuration for a [`Taker`].
#[derive(Debug, Clone)]
pub struct TakerConfig {
    /// Order arrival rate in orders per microsecond.
    pub intensity: f64,
    /// Probability an arrival is a buy.
    pub side_bias: f64,
    /// Mean order size in lots.
    pub quantity_mean: Qty,
    /// Order size standard deviation.
    pub quantity_std: Qty,
    /// Send market orders when true, aggressive limits otherwise.
    pub use_market_orders: bool,
}

impl Default for TakerConfig {
    fn default() -> Self {
        Self {
            intensity: 0.8,
            side_bias: 0.5,
            quantity_mean: Qty(40),
            quantity_std: Qty(10),
            use_market_orders: true,
        }
    }
}

/// Aggressive order flow generator.
#[derive(Debug, Clone)]
pub struct Taker {
    id: AgentId,
    name: String,
    config: TakerConfig,
    inventory: Qty,
    pnl: f64,
    next_order_time: Timestamp,
    /// Most recently submitted order, used to recognize our own fills.
    last_order: Option<(OrderId, Side)>,
}

impl Taker {
    pub fn new(id: AgentId, name: impl Into<String>, config: TakerConfig) -> Self {
        Self {
            id,
            name: name.into(),
            config,
            inventory: Qty::ZERO,
            pnl: 0.0,
            next_order_time: 0,
            last_order: None,
        }
    }

    fn draw_quantity(&self, rng: &mut SimRng) -> Qty {
        let drawn = rng.normal(
            self.config.quantity_mean.raw() as f64,
            self.config.quantity_std.raw() as f64,
        );
        Qty((drawn.round() as i64).max(1))
    }

    fn aggressive_price(side: Side) -> Price {
        match side {
            Side::Buy => REFERENCE_ASK + Price(1),
            Side::Sell => REFERENCE_BID - Price(1),
        }
    }

    fn schedule_next(&mut self, now: Timestamp, rng: &mut SimRng) {
        let gap_micros = rng.exponential(self.config.intensity);
        self.next_order_time = now + (gap_micros * 1e6).round() as Timestamp;
    }
}

impl Agent for Taker {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, now: Timestamp, rng: &mut SimRng) -> Vec<Event> {
        if now < self.next_order_time {
            return Vec::new();
        }

        let quantity = self.draw_quantity(rng);
        let side = if rng.bernoulli(self.config.side_bias) {
            Side::Buy
        } else {
            Side::Sell
        };
        let order_id = OrderId(now as u64 + self.id.0);

        let event = if self.config.use_market_orders {
            Event::market(order_id, side, quantity, now, self.id)
        } else {
            Event::limit(
                order_id,
                side,
                Self::aggressive_price(side),
                quantity,
                now,
                self.id,
            )
        };

        self.last_order = Some((order_id, side));
        self.schedule_next(now, rng);

        vec![event]
    }

    fn on_trade(&mut self, trade: &Trade) {
        let Some((order_id, side)) = self.last_order else {
            return;
        };
        if trade.taker_id != order_id {
            return;
        }

        match side {
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

    fn pnl(&self) -> f64 {
        self.pnl
    }

    fn inventory(&self) -> Qty {
        self.inventory
    }

    fn reset(&mut self) {
        self.inventory = Qty::ZERO;
        self.pnl = 0.0;
        self.next_order_time = 0;
        self.last_order = None;
    }
}
