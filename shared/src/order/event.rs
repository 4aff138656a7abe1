//! Order events - facts broadcast to subscribed views after each mutation

use super::record::{Order, OrderStatus};
use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventType {
    OrderPlaced,
    StatusAdvanced,
    StatusRecalled,
    OrderCancelled,
}

impl std::fmt::Display for OrderEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderEventType::OrderPlaced => write!(f, "ORDER_PLACED"),
            OrderEventType::StatusAdvanced => write!(f, "STATUS_ADVANCED"),
            OrderEventType::StatusRecalled => write!(f, "STATUS_RECALLED"),
            OrderEventType::OrderCancelled => write!(f, "ORDER_CANCELLED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    /// Checkout produced a new order; full record for view hydration
    OrderPlaced { order: Order },
    /// Status transition (advance, recall, or cancel)
    StatusChanged {
        from: OrderStatus,
        to: OrderStatus,
    },
}

/// Order event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Order this event belongs to
    pub order_id: String,
    /// Server timestamp, Unix milliseconds UTC
    pub timestamp: i64,
    pub event_type: OrderEventType,
    pub payload: EventPayload,
}

impl OrderEvent {
    pub fn new(order_id: String, event_type: OrderEventType, payload: EventPayload) -> Self {
        Self {
            order_id,
            timestamp: now_millis(),
            event_type,
            payload,
        }
    }
}
