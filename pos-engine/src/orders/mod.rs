//! OrdersManager - order list owner and status state machine
//!
//! The single boundary at which cart state becomes order state, and the
//! only writer of `status` / `completed_at`. All mutations go through the
//! `RwLock`-guarded list; readers always receive cloned, fully-formed
//! snapshots. Every mutation broadcasts an [`OrderEvent`] so views can
//! re-render.
//!
//! # State machine
//!
//! ```text
//! PENDING --advance--> COOKING --advance--> READY --advance--> COMPLETED
//! PENDING/COOKING/READY --cancel--> CANCELLED
//! COOKING --recall--> PENDING
//! READY   --recall--> COOKING
//! ```
//!
//! `COMPLETED` and `CANCELLED` are terminal; `completed_at` is stamped
//! exactly once, on entry into either.

mod error;
pub use error::*;


use crate::cart::CartEngine;
use crate::time::business_date_compact;
use chrono_tz::Tz;
use parking_lot::RwLock;
use shared::order::{
    EventPayload, Order, OrderEvent, OrderEventType, OrderStatus, PlaceOrder,
};
use shared::util::now_millis;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 4096;

/// First order number of a session; numbers stay five digits all day
const ORDER_NUMBER_BASE: u64 = 10_000;

/// OrdersManager for checkout and status transitions
pub struct OrdersManager {
    orders: RwLock<Vec<Order>>,
    event_tx: broadcast::Sender<OrderEvent>,
    /// Process-monotonic order counter
    order_seq: AtomicU64,
    /// Business timezone for order-number date prefixes
    tz: Tz,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("orders", &self.orders.read().len())
            .field("order_seq", &self.order_seq.load(Ordering::Relaxed))
            .finish()
    }
}

impl OrdersManager {
    pub fn new(tz: Tz) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            orders: RwLock::new(Vec::new()),
            event_tx,
            order_seq: AtomicU64::new(0),
            tz,
        }
    }

    /// Subscribe to order events (view re-render trigger)
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    /// Generate the next order number: `ORD-YYYYMMDD-NNNNN`
    ///
    /// Business-date prefix plus a process-monotonic counter; unique
    /// within a running session by construction.
    fn next_order_id(&self, now: i64) -> String {
        let count = self.order_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let date_str = business_date_compact(now, self.tz);
        format!("ORD-{date_str}-{}", ORDER_NUMBER_BASE + count)
    }

    /// Checkout: freeze the cart into a new PENDING order
    ///
    /// Rejects an empty cart without touching the order list. On success
    /// the cart is cleared and an `ORDER_PLACED` event is broadcast.
    pub fn place_order(
        &self,
        cart: &mut CartEngine,
        req: PlaceOrder,
    ) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let now = now_millis();
        let order = Order {
            id: self.next_order_id(now),
            items: cart.snapshot_lines(),
            total_amount: cart.total(),
            status: OrderStatus::Pending,
            customer_name: req.customer_name,
            table_number: req.table_number,
            payment_method: req.payment_method,
            created_at: now,
            completed_at: None,
            priority: req.priority,
            allergies: req.allergies,
        };
        cart.clear();

        self.orders.write().insert(0, order.clone());

        tracing::info!(
            order_id = %order.id,
            total = order.total_amount,
            customer = %order.customer_name,
            "Order placed"
        );
        self.broadcast(OrderEvent::new(
            order.id.clone(),
            OrderEventType::OrderPlaced,
            EventPayload::OrderPlaced {
                order: order.clone(),
            },
        ));
        Ok(order)
    }

    /// Bump: one step forward along PENDING → COOKING → READY → COMPLETED
    pub fn advance(&self, order_id: &str) -> Result<Order, OrderError> {
        self.transition(order_id, "advance", |status| match status {
            OrderStatus::Pending => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        })
    }

    /// Recall: one step backward; a no-op on PENDING (nothing to recall to)
    pub fn recall(&self, order_id: &str) -> Result<Order, OrderError> {
        self.transition(order_id, "recall", |status| match status {
            OrderStatus::Ready => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Pending),
            // explicit no-op, the board may send it freely
            OrderStatus::Pending => Some(OrderStatus::Pending),
            OrderStatus::Completed | OrderStatus::Cancelled => None,
        })
    }

    /// Cancel from any non-terminal status; terminal once set
    pub fn cancel(&self, order_id: &str) -> Result<Order, OrderError> {
        self.transition(order_id, "cancel", |status| {
            (!status.is_terminal()).then_some(OrderStatus::Cancelled)
        })
    }

    /// Shared transition plumbing: resolve the order, apply the step
    /// function, stamp `completed_at` on entry into a terminal status,
    /// broadcast. Errors leave the list untouched.
    fn transition(
        &self,
        order_id: &str,
        operation: &'static str,
        step: impl Fn(OrderStatus) -> Option<OrderStatus>,
    ) -> Result<Order, OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;

        let from = order.status;
        let to = step(from).ok_or_else(|| {
            tracing::warn!(order_id, status = %from, operation, "Rejected transition");
            OrderError::InvalidTransition {
                order_id: order_id.to_string(),
                status: from,
                operation,
            }
        })?;

        if to == from {
            return Ok(order.clone());
        }

        order.status = to;
        if to.is_terminal() && order.completed_at.is_none() {
            order.completed_at = Some(now_millis());
        }
        let snapshot = order.clone();
        drop(orders);

        tracing::info!(order_id, from = %from, to = %to, "Order status changed");
        let event_type = match to {
            OrderStatus::Cancelled => OrderEventType::OrderCancelled,
            _ if status_rank(to) < status_rank(from) => OrderEventType::StatusRecalled,
            _ => OrderEventType::StatusAdvanced,
        };
        self.broadcast(OrderEvent::new(
            snapshot.id.clone(),
            event_type,
            EventPayload::StatusChanged { from, to },
        ));
        Ok(snapshot)
    }

    /// Cloned snapshot of the full order list (newest first)
    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    pub fn get(&self, order_id: &str) -> Option<Order> {
        self.orders.read().iter().find(|o| o.id == order_id).cloned()
    }

    pub fn order_count(&self) -> usize {
        self.orders.read().len()
    }

    fn broadcast(&self, event: OrderEvent) {
        // a send error only means no view is subscribed right now
        if self.event_tx.send(event).is_err() {
            tracing::trace!("No subscribers for order event");
        }
    }
}

fn status_rank(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::Pending => 0,
        OrderStatus::Cooking => 1,
        OrderStatus::Ready => 2,
        OrderStatus::Completed => 3,
        OrderStatus::Cancelled => 4,
    }
}
