//! Market microstructure simulator - demo binary.
//!
//! Runs one simulation with the default agent population (a market maker,
//! a liquidity taker, and a noise trader sharing one seeded random
//! stream), prints a summary, and exports the collected tape as CSV.

mod config;

use simulation::Simulator;

pub use config::DemoConfig;

fn main() {
    // Edit here or pick a preset:
    // let config = DemoConfig::quick();
    // let config = DemoConfig::high_activity();
    // let config = DemoConfig::low_activity().with_seed(7);
    let config = DemoConfig::default();

    let mut simulator = Simulator::new(config.simulation.clone());
    let result = simulator.run(
        config.n_steps,
        config.maker.clone(),
        config.taker.clone(),
        config.noise.clone(),
    );

    let last_snapshot = result.market_snapshots.last().copied().unwrap_or_default();

    eprintln!("simulation summary");
    eprintln!("  seed:             {}", config.simulation.seed);
    eprintln!("  steps:            {}", config.n_steps);
    eprintln!("  events processed: {}", result.total_events_processed);
    eprintln!("  trades:           {}", result.total_trades);
    eprintln!(
        "  volume:           {}",
        simulator.matching_engine().total_volume()
    );
    eprintln!("  last trade price: {}", last_snapshot.last_trade_price);
    eprintln!(
        "  final top of book: {} / {}",
        last_snapshot.best_bid, last_snapshot.best_ask
    );
    eprintln!(
        "  virtual time:     {} ns  (wall {:.3}s)",
        result.simulation_duration, result.wall_clock_seconds
    );

    for stats in simulator.agent_manager().stats() {
        eprintln!(
            "  {:<12} {}  pnl={:.3}  inventory={}",
            stats.name, stats.id, stats.pnl, stats.inventory
        );
    }

    let output_dir = config.output_dir();
    match simulator.data_collector().save_to_csv(output_dir) {
        Ok(()) => eprintln!("  tape saved to {}/", output_dir.display()),
        Err(e) => {
            eprintln!("  failed to save tape: {}", e);
            std::process::exit(1);
        }
    }
}
