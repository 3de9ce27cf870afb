//! The agent trait and per-agent reporting row.

use sim_core::SimRng;
use types::{AgentId, Event, Qty, Timestamp, Trade};

/// A trading agent driven by the simulation loop.
///
/// Each step the agent may emit any number of events; the simulator routes
/// them to the matching engine and distributes the resulting trades back
/// through `on_trade`. The random stream is owned by the simulator and
/// lent to the agent for the duration of the call, so every draw lands on
/// the single shared sequence.
pub trait Agent {
    /// Unique identifier of this agent.
    fn id(&self) -> AgentId;

    /// Human-readable name for reporting.
    fn name(&self) -> &str;

    /// Produce this agent's events for the current step.
    fn step(&mut self, now: Timestamp, rng: &mut SimRng) -> Vec<Event>;

    /// Observe a trade. Called for every trade in the simulation, not just
    /// this agent's own fills.
    fn on_trade(&mut self, trade: &Trade);

    /// Realized PnL. Buying decreases cash, selling increases cash.
    fn pnl(&self) -> f64;

    /// Net signed position; positive when long.
    fn inventory(&self) -> Qty;

    /// Restore the agent to its initial state.
    fn reset(&mut self);
}

/// Snapshot of one agent's reportable state.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentStats {
    pub id: AgentId,
    pub name: String,
    pub pnl: f64,
    pub inventory: Qty,
}
