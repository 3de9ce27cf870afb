//! In-memory market data tape with CSV export.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use types::{AgentId, MarketSnapshot, Qty, Timestamp, Trade};

use crate::error::ExportError;

/// One sampled (agent, PnL, inventory) row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentPnlRecord {
    pub agent_id: AgentId,
    pub timestamp: Timestamp,
    pub pnl: f64,
    pub inventory: Qty,
}

/// Collects trades, snapshots, and per-agent PnL over a run.
///
/// The collector only appends; clearing happens when the simulator is
/// reset. Export writes three CSV files with fixed headers and plain
/// unquoted fields:
///
/// - `trades.csv`: `timestamp,maker_id,taker_id,price,quantity`
/// - `market_snapshots.csv`:
///   `timestamp,best_bid,best_ask,best_bid_qty,best_ask_qty,last_trade_price`
/// - `agent_pnl.csv`: `timestamp,agent_id,pnl,inventory`
#[derive(Debug, Clone, Default)]
pub struct MarketDataCollector {
    trades: Vec<Trade>,
    snapshots: Vec<MarketSnapshot>,
    agent_pnl: Vec<AgentPnlRecord>,
}

impl MarketDataCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    pub fn record_snapshot(&mut self, snapshot: MarketSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn record_agent_pnl(&mut self, record: AgentPnlRecord) {
        self.agent_pnl.push(record);
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn snapshots(&self) -> &[MarketSnapshot] {
        &self.snapshots
    }

    pub fn agent_pnl(&self) -> &[AgentPnlRecord] {
        &self.agent_pnl
    }

    pub fn clear(&mut self) {
        self.trades.clear();
        self.snapshots.clear();
        self.agent_pnl.clear();
    }

    /// Write the three CSV files into `output_dir`, creating it if needed.
    pub fn save_to_csv(&self, output_dir: &Path) -> Result<(), ExportError> {
        fs::create_dir_all(output_dir)?;

        self.write_trades(File::create(output_dir.join("trades.csv"))?)?;
        self.write_snapshots(File::create(output_dir.join("market_snapshots.csv"))?)?;
        self.write_agent_pnl(File::create(output_dir.join("agent_pnl.csv"))?)?;
        Ok(())
    }

    fn write_trades<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["timestamp", "maker_id", "taker_id", "price", "quantity"])?;
        for trade in &self.trades {
            csv_writer.write_record([
                trade.timestamp.to_string(),
                trade.maker_id.0.to_string(),
                trade.taker_id.0.to_string(),
                trade.price.raw().to_string(),
                trade.quantity.raw().to_string(),
            ])?;
        }
        csv_writer.flush().map_err(ExportError::Io)?;
        Ok(())
    }

    fn write_snapshots<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record([
            "timestamp",
            "best_bid",
            "best_ask",
            "best_bid_qty",
            "best_ask_qty",
            "last_trade_price",
        ])?;
        for snapshot in &self.snapshots {
            csv_writer.write_record([
                snapshot.timestamp.to_string(),
                snapshot.best_bid.raw().to_string(),
                snapshot.best_ask.raw().to_string(),
                snapshot.best_bid_qty.raw().to_string(),
                snapshot.best_ask_qty.raw().to_string(),
                snapshot.last_trade_price.raw().to_string(),
            ])?;
        }
        csv_writer.flush().map_err(ExportError::Io)?;
        Ok(())
    }

    fn write_agent_pnl<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["timestamp", "agent_id", "pnl", "inventory"])?;
        for record in &self.agent_pnl {
            csv_writer.write_record([
                record.timestamp.to_string(),
                record.agent_id.0.to_string(),
                record.pnl.to_string(),
                record.inventory.raw().to_string(),
            ])?;
        }
        csv_writer.flush().map_err(ExportError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{OrderId, Price};

    fn sample_collector() -> MarketDataCollector {
        let mut collector = MarketDataCollector::new();
        collector.record_trade(Trade::new(
            OrderId(1),
            OrderId(2),
            Price(10002),
            Qty(30),
            1001,
        ));
        collector.record_snapshot(MarketSnapshot {
            best_bid: Price(10000),
            best_ask: Price(10002),
            best_bid_qty: Qty(100),
            best_ask_qty: Qty(20),
            last_trade_price: Price(10002),
            timestamp: 2000,
        });
        collector.record_agent_pnl(AgentPnlRecord {
            agent_id: AgentId(1),
            timestamp: 2000,
            pnl: -1.5,
            inventory: Qty(-10),
        });
        collector
    }

    #[test]
    fn test_trades_csv_format() {
        let collector = sample_collector();
        let mut buffer = Vec::new();
        collector.write_trades(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "timestamp,maker_id,taker_id,price,quantity\n1001,1,2,10002,30\n"
        );
    }

    #[test]
    fn test_snapshots_csv_format() {
        let collector = sample_collector();
        let mut buffer = Vec::new();
        collector.write_snapshots(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "timestamp,best_bid,best_ask,best_bid_qty,best_ask_qty,last_trade_price\n\
             2000,10000,10002,100,20,10002\n"
        );
    }

    #[test]
    fn test_agent_pnl_csv_format() {
        let collector = sample_collector();
        let mut buffer = Vec::new();
        collector.write_agent_pnl(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "timestamp,agent_id,pnl,inventory\n2000,1,-1.5,-10\n");
    }

    #[test]
    fn test_save_to_csv_creates_files() {
        let collector = sample_collector();
        let dir = tempfile::tempdir().unwrap();

        collector.save_to_csv(dir.path()).unwrap();

        for name in ["trades.csv", "market_snapshots.csv", "agent_pnl.csv"] {
            let content = fs::read_to_string(dir.path().join(name)).unwrap();
            assert!(content.lines().count() >= 2, "{} should have rows", name);
        }
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut collector = sample_collector();
        collector.clear();
        assert!(collector.trades().is_empty());
        assert!(collector.snapshots().is_empty());
        assert!(collector.agent_pnl().is_empty());
    }
}
