//! Events submitted to the matching engine.

use crate::ids::{AgentId, OrderId, Timestamp};
use crate::money::{Price, Qty};
use crate::order::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of event an agent can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Limit,
    Market,
    Cancel,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Limit => write!(f, "LIMIT"),
            EventType::Market => write!(f, "MARKET"),
            EventType::Cancel => write!(f, "CANCEL"),
        }
    }
}

/// Input record for the matching engine.
///
/// Not every field is meaningful for every kind: a MARKET event ignores
/// `price`, and a CANCEL event only reads `order_id`. The constructors
/// zero the ignored fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Qty,
    pub timestamp: Timestamp,
    /// Agent that generated the event.
    pub agent_id: AgentId,
}

impl Event {
    pub fn limit(
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Qty,
        timestamp: Timestamp,
        agent_id: AgentId,
    ) -> Self {
        Self {
            event_type: EventType::Limit,
            order_id,
            side,
            price,
            quantity,
            timestamp,
            agent_id,
        }
    }

    pub fn market(
        order_id: OrderId,
        side: Side,
        quantity: Qty,
        timestamp: Timestamp,
        agent_id: AgentId,
    ) -> Self {
        Self {
            event_type: EventType::Market,
            order_id,
            side,
            price: Price::ZERO,
            quantity,
            timestamp,
            agent_id,
        }
    }

    pub fn cancel(order_id: OrderId, timestamp: Timestamp, agent_id: AgentId) -> Self {
        Self {
            event_type: EventType::Cancel,
            order_id,
            side: Side::Buy,
            price: Price::ZERO,
            quantity: Qty::ZERO,
            timestamp,
            agent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_event_has_no_price() {
        let event = Event::market(OrderId(7), Side::Sell, Qty(25), 500, AgentId(2));
        assert_eq!(event.event_type, EventType::Market);
        assert_eq!(event.price, Price::ZERO);
        assert_eq!(event.quantity, 25);
    }

    #[test]
    fn test_cancel_event_only_carries_order_id() {
        let event = Event::cancel(OrderId(9), 600, AgentId(3));
        assert_eq!(event.event_type, EventType::Cancel);
        assert_eq!(event.price, Price::ZERO);
        assert_eq!(event.quantity, Qty::ZERO);
        assert_eq!(event.order_id, OrderId(9));
    }
}
