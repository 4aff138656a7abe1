//! Shared types for the ChefOS point-of-sale demo
//!
//! Common types used across the engine and view crates: catalog entities,
//! cart lines, order records, the status machine, and broadcast events.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
