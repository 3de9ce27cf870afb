//! End-to-end runs of the full simulator.
//!
//! These exercise the whole pipeline: agent event generation, matching,
//! trade distribution, and data collection, with reproducibility checks
//! over the shared seeded stream.

use agents::{Agent, MarketMakerConfig, NoiseTraderConfig, TakerConfig};
use sim_core::SimRng;
use simulation::{RunResult, SimulationConfig, Simulator};
use types::{AgentId, Event, OrderId, Price, Qty, Side, Timestamp, Trade};

fn run_with_seed(seed: u64, n_steps: u64) -> RunResult {
    let config = SimulationConfig::default().with_seed(seed);
    let mut simulator = Simulator::new(config);
    simulator.run(
        n_steps,
        MarketMakerConfig::default(),
        TakerConfig::default(),
        NoiseTraderConfig::default(),
    )
}

#[test]
fn test_default_population_produces_trades() {
    let result = run_with_seed(42, 20_000);

    assert!(result.total_events_processed > 0);
    assert!(result.total_trades > 0, "no trades in 20k steps");
    assert_eq!(result.trades.len() as u64, result.total_trades);
    assert_eq!(result.simulation_duration, 20_000 * 1_000);

    // Trade timestamps never decrease across the tape.
    let timestamps: Vec<Timestamp> = result.trades.iter().map(|t| t.timestamp).collect();
    let mut sorted = timestamps.clone();
    sorted.sort_unstable();
    assert_eq!(timestamps, sorted);
}

#[test]
fn test_same_seed_reproduces_run_exactly() {
    let first = run_with_seed(12_345, 5_000);
    let second = run_with_seed(12_345, 5_000);

    assert_eq!(first.total_events_processed, second.total_events_processed);
    assert_eq!(first.total_trades, second.total_trades);
    assert_eq!(first.trades, second.trades);
    assert_eq!(first.market_snapshots, second.market_snapshots);
    assert_eq!(first.agent_pnl, second.agent_pnl);
}

#[test]
fn test_different_seeds_diverge() {
    let first = run_with_seed(12_345, 5_000);
    let second = run_with_seed(22_222, 5_000);

    let first_last = first.market_snapshots.last().map(|s| s.last_trade_price);
    let second_last = second.market_snapshots.last().map(|s| s.last_trade_price);

    assert!(
        first.total_events_processed != second.total_events_processed
            || first.total_trades != second.total_trades
            || first_last != second_last,
        "distinct seeds produced identical runs"
    );
}

#[test]
fn test_volume_conservation_across_run() {
    let config = SimulationConfig::default();
    let mut simulator = Simulator::new(config);
    let result = simulator.run(
        10_000,
        MarketMakerConfig::default(),
        TakerConfig::default(),
        NoiseTraderConfig::default(),
    );

    let tape_volume: Qty = result.trades.iter().map(|t| t.quantity).sum();
    assert_eq!(simulator.matching_engine().total_volume(), tape_volume);
    assert_eq!(simulator.matching_engine().trade_count(), result.total_trades);
}

/// Pre-scripted agent pair that guarantees a single deterministic cross.
struct OneShot {
    id: AgentId,
    event: Option<Event>,
    fills: Vec<Trade>,
}

impl OneShot {
    fn new(id: u64, event: Event) -> Self {
        Self {
            id: AgentId(id),
            event: Some(event),
            fills: Vec::new(),
        }
    }
}

impl Agent for OneShot {
    fn id(&self) -> AgentId {
        self.id
    }

    fn name(&self) -> &str {
        "OneShot"
    }

    fn step(&mut self, _now: Timestamp, _rng: &mut SimRng) -> Vec<Event> {
        self.event.take().into_iter().collect()
    }

    fn on_trade(&mut self, trade: &Trade) {
        self.fills.push(*trade);
    }

    fn pnl(&self) -> f64 {
        0.0
    }

    fn inventory(&self) -> Qty {
        Qty::ZERO
    }

    fn reset(&mut self) {
        self.fills.clear();
    }
}

#[test]
fn test_run_with_custom_agents() {
    let mut simulator = Simulator::with_defaults();

    let sell = Event::limit(
        OrderId(100),
        Side::Sell,
        Price(10_000),
        Qty(40),
        0,
        AgentId(7),
    );
    let buy = Event::market(OrderId(200), Side::Buy, Qty(25), 0, AgentId(8));

    let result = simulator.run_with_agents(
        3,
        vec![
            Box::new(OneShot::new(7, sell)),
            Box::new(OneShot::new(8, buy)),
        ],
    );

    assert_eq!(result.total_events_processed, 2);
    assert_eq!(result.total_trades, 1);
    assert_eq!(result.trades[0].maker_id, OrderId(100));
    assert_eq!(result.trades[0].taker_id, OrderId(200));
    assert_eq!(result.trades[0].price, 10_000);
    assert_eq!(result.trades[0].quantity, 25);

    let book = simulator.matching_engine().book();
    assert_eq!(book.best_ask_quantity(), Some(Qty(15)));
}

#[test]
fn test_book_invariants_hold_after_run() {
    let config = SimulationConfig::default();
    let mut simulator = Simulator::new(config);
    simulator.run(
        10_000,
        MarketMakerConfig::default(),
        TakerConfig::default(),
        NoiseTraderConfig::default(),
    );

    let book = simulator.matching_engine().book();
    let depth = book.get_depth(10_000);

    // Bid rows strictly descending, ask rows strictly ascending, and every
    // row carries positive aggregate quantity.
    let bids: Vec<_> = depth.iter().filter(|l| l.bid_quantity.raw() > 0).collect();
    let asks: Vec<_> = depth.iter().filter(|l| l.ask_quantity.raw() > 0).collect();
    assert_eq!(bids.len() + asks.len(), depth.len());

    for pair in bids.windows(2) {
        assert!(pair[0].price > pair[1].price);
    }
    for pair in asks.windows(2) {
        assert!(pair[0].price < pair[1].price);
    }
}
