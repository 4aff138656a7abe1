//! Orders manager errors

use shared::order::OrderStatus;
use thiserror::Error;

/// Manager errors
///
/// All recoverable and local: a rejected call leaves the order list
/// exactly as it was. Callers on the kitchen board treat these as
/// warnings, not failures.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Invalid transition: order {order_id} is {status}, cannot {operation}")]
    InvalidTransition {
        order_id: String,
        status: OrderStatus,
        operation: &'static str,
    },
}
