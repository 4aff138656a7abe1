//! Order record - immutable snapshot created at checkout
//!
//! Only `status` and `completed_at` change after creation, and only
//! through the orders manager's transition calls.

use super::types::{CartLine, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Order status
///
/// `PENDING → COOKING → READY → COMPLETED` via bump; one step back via
/// recall; any non-terminal status can be cancelled. `COMPLETED` and
/// `CANCELLED` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Cooking,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Terminal statuses admit no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Active = still on the kitchen board
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Cooking => write!(f, "COOKING"),
            OrderStatus::Ready => write!(f, "READY"),
            OrderStatus::Completed => write!(f, "COMPLETED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Human-scannable order number, unique within a session
    pub id: String,
    /// Line snapshots frozen at checkout; later cart mutations never
    /// reach a placed order
    pub items: Vec<CartLine>,
    /// Computed once at placement, never recomputed
    pub total_amount: i64,
    pub status: OrderStatus,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Creation timestamp, Unix milliseconds UTC
    pub created_at: i64,
    /// Set exactly once, on entry into a terminal status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    /// VIP flag
    #[serde(default)]
    pub priority: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,
}

impl Order {
    /// Total item count across all lines
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}
