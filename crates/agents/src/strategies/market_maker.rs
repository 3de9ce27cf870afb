//! Market maker: two-sided quoting with inventory skew.
//!
//! The maker re-quotes both sides of the book on a fixed refresh interval,
//! cancelling its previous pair first. When inventory builds past half the
//! configured limit, the quote on the offloading side is shifted a quarter
//! spread toward the market to shed the position.

use sim_core::SimRng;
use types::{AgentId, Event, OrderId, Price, Qty, Side, Timestamp, Trade};

use crate::traits::Agent;

/// Reference mid used for quoting. A production maker would read the book
/// through a market-data collaborator; the simulated market is anchored to
/// a constant mid instead.
const REFERENCE_MID: Price = Price(10_000);

/// Configuration for a [`MarketMaker`].
#[derive(Debug, Clone)]
pub struct MarketMakerConfig {
    /// Quoted bid-ask spread in ticks.
    pub spread: Price,
    /// Size quoted on each side.
    pub quantity: Qty,
    /// Nanoseconds between quote refreshes.
    pub refresh_interval: Timestamp,
    /// Inventory bound; skew kicks in at half of it.
    pub max_inventory: Qty,
    /// PnL penalty per lot of open inventory, applied on every trade
    /// notification.
    pub inventory_penalty: f64,
}

impl Default for MarketMakerConfig {
    fn default() -> Self {
        Self {
            spread: Price(2),
            quantity: Qty(50),
            refresh_interval: 50_000,
            max_inventory: Qty(1000),
            inventory_penalty: 0.001,
        }
    }
}

/// Two-sided liquidity provider.
#[derive(Debug, Clone)]
pub struct MarketMaker {
    id: AgentId,
    name: String,
    config: MarketMakerConfig,
    inventory: Qty,
    pnl: f64,
    last_refresh: Timestamp,
    current_bid: Price,
    current_ask: Price,
    bid_order_id: Option<OrderId>,
    ask_order_id: Option<OrderId>,
}

impl MarketMaker {
    pub fn new(id: AgentId, name: impl Into<String>, config: MarketMakerConfig) -> Self {
        Self {
            id,
            name: name.into(),
            config,
            inventory: Qty::ZERO,
            pnl: 0.0,
            last_refresh: 0,
            current_bid: Price::ZERO,
            current_ask: Price::ZERO,
            bid_order_id: None,
            ask_order_id: None,
        }
    }

    /// Current bid quote.
    pub fn bid_price(&self) -> Price {
        self.current_bid
    }

    /// Current ask quote.
    pub fn ask_price(&self) -> Price {
        self.current_ask
    }

    /// Recompute both quotes around the mid, skewing when inventory is
    /// more than half the configured bound.
    fn update_quotes(&mut self, mid: Price) {
        let half_spread = Price(self.config.spread.raw() / 2);
        self.current_bid = mid - half_spread;
        self.current_ask = mid + half_spread;

        if self.inventory.abs().raw() > self.config.max_inventory.raw() / 2 {
            let shift = Price(half_spread.raw() / 2);
            if self.inventory > Qty::ZERO {
                // Long: pull the ask in to encourage selling out.
                self.current_ask -= shift;
            } else {
                // Short: lift the bid to buy back.
                self.current_bid += shift;
            }
        }
    }

    fn cancel_stale_quotes(&mut self, now: Timestamp, events: &mut Vec<Event>) {
        if let Some(bid_id) = self.bid_order_id.take() {
            events.push(Event::cancel(bid_id, now, self.id));
        }
        if let Some(ask_id) = self.ask_order_id.take() {
            events.push(Event::cancel(ask_id, now, self.id));
        }
    }

    fn place_quotes(&mut self, now: Timestamp, events: &mut Vec<Event>) {
        let bid_id = OrderId(now as u64 + self.id.0);
        let ask_id = OrderId(now as u64 + self.id.0 + 1);

        events.push(Event::limit(
            bid_id,
            Side::Buy,
            self.current_bid,
            self.config.quantity,
            now,
            self.id,
        ));
        events.push(Event::limit(
            ask_id,
            Side::Sell,
            self.current_ask,
            self.config.quantity,
            now,
            self.id,
        ));

        self.bid_order_id = Some(bid_id);
        self.ask_order_id = Some(ask_id);
    }
}

impl Agent for MarketMaker {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, now: Timestamp, _rng: &mut SimRng) -> Vec<Event> {
        let mut events = Vec::new();

        let mid = REFERENCE_MID;
        if mid.is_valid() {
            self.update_quotes(mid);
        }

        if now - self.last_refresh >= self.config.refresh_interval {
            self.cancel_stale_quotes(now, &mut events);
            if mid.is_valid() {
                self.place_quotes(now, &mut events);
            }
            self.last_refresh = now;
        }

        events
    }

    fn on_trade(&mut self, trade: &Trade) {
        if self.bid_order_id == Some(trade.maker_id) {
            self.inventory -= trade.quantity;
            self.pnl += trade.notional() as f64;
            self.bid_order_id = None;
        } else if self.ask_order_id == Some(trade.maker_id) {
            self.inventory += trade.quantity;
            self.pnl -= trade.notional() as f64;
            self.ask_order_id = None;
        }

        self.pnl -= self.inventory.abs().raw() as f64 * self.config.inventory_penalty;
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
        self.last_refresh = 0;
        self.current_bid = Price::ZERO;
        self.current_ask = Price::ZERO;
        self.bid_order_id = None;
        self.ask_order_id = None;
    }
}
