//! Order domain types
//!
//! - Inputs: what a view sends when adding to the cart or checking out
//! - Records: the immutable order snapshot created at checkout
//! - Events: facts broadcast to subscribed views after each mutation

pub mod event;
pub mod record;
pub mod types;

// Re-exports
pub use event::{EventPayload, OrderEvent, OrderEventType};
pub use record::{Order, OrderStatus};
pub use types::*;
