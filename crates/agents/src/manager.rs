//! Agent population bookkeeping.

use std::collections::HashMap;

use sim_core::SimRng;
use types::{AgentId, Event, Timestamp, Trade};

use crate::traits::{Agent, AgentStats};

/// Owns the agent population and fans simulation calls out to it.
///
/// Agents are stepped and notified strictly in registration order, which
/// is part of the determinism contract: event order feeds straight into
/// the matching engine.
#[derive(Default)]
pub struct AgentManager {
    agents: Vec<Box<dyn Agent>>,
    index: HashMap<AgentId, usize>,
}

impl AgentManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent at the back of the step order.
    pub fn add_agent(&mut self, agent: Box<dyn Agent>) {
        self.index.insert(agent.id(), self.agents.len());
        self.agents.push(agent);
    }

    /// Look up an agent by id.
    pub fn get(&self, id: AgentId) -> Option<&dyn Agent> {
        self.index.get(&id).map(|&i| self.agents[i].as_ref())
    }

    /// Collect every agent's events for this step, in registration order.
    pub fn step(&mut self, now: Timestamp, rng: &mut SimRng) -> Vec<Event> {
        let mut all_events = Vec::new();
        for agent in &mut self.agents {
            all_events.extend(agent.step(now, rng));
        }
        all_events
    }

    /// Deliver a trade to every agent, in registration order.
    pub fn notify_trade(&mut self, trade: &Trade) {
        for agent in &mut self.agents {
            agent.on_trade(trade);
        }
    }

    /// Per-agent reporting rows, in registration order.
    pub fn stats(&self) -> Vec<AgentStats> {
        self.agents
            .iter()
            .map(|agent| AgentStats {
                id: agent.id(),
                name: agent.name().to_owned(),
                pnl: agent.pnl(),
                inventory: agent.inventory(),
            })
            .collect()
    }

    /// Reset every agent to its initial state.
    pub fn reset(&mut self) {
        for agent in &mut self.agents {
            agent.reset();
        }
    }

    /// Drop the whole population.
    pub fn clear(&mut self) {
        self.agents.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
