//! ChefOS order and cart domain engine
//!
//! The rules that turn a shopper's selections into a priced cart, a cart
//! into an immutable order, advance an order through the kitchen workflow,
//! and derive the kitchen board and sales analytics from the live order set.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Static product/modifier lookup, validated at load |
//! | [`cart`] | Single active cart: add/merge by configuration signature |
//! | [`orders`] | Order list owner: checkout and the status state machine |
//! | [`kitchen`] | Pure derivations for the kitchen display |
//! | [`analytics`] | Pure derivations for the manager dashboard |
//! | [`insights`] | Fire-and-forget AI summary collaborator |
//! | [`export`] | CSV rendering of an order snapshot |
//! | [`state`] | [`AppState`](state::AppState): the store views talk to |

pub mod analytics;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod export;
pub mod insights;
pub mod kitchen;
pub mod logger;
pub mod orders;
pub mod state;
pub mod time;

pub use cart::CartEngine;
pub use catalog::Catalog;
pub use config::Config;
pub use orders::OrdersManager;
pub use state::AppState;
