//! Application state - the store every view talks to
//!
//! One shared in-memory state: the catalog, the single active cart, and
//! the order list. All writes are serialized through the owning engines
//! (`Mutex` around the cart, the manager's own lock around orders), so a
//! reader only ever sees a fully-formed snapshot. Cheap to clone and hand
//! to each view.

use crate::analytics::{self, SalesSummary, TimeRange};
use crate::cart::{CartEngine, CartError};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::kitchen::{self, KitchenBoard};
use crate::orders::{OrderError, OrdersManager};
use parking_lot::Mutex;
use shared::order::{CartAdd, CartLine, Order, OrderEvent, PlaceOrder};
use shared::util::now_millis;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
    catalog: Arc<Catalog>,
    cart: Arc<Mutex<CartEngine>>,
    orders: Arc<OrdersManager>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let orders = OrdersManager::new(config.timezone);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            cart: Arc::new(Mutex::new(CartEngine::new())),
            orders: Arc::new(orders),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn orders_manager(&self) -> &OrdersManager {
        &self.orders
    }

    /// Subscribe to order mutations (view re-render trigger)
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.orders.subscribe()
    }

    // ========== Cart surface ==========

    pub fn add_to_cart(&self, req: CartAdd) -> Result<CartLine, CartError> {
        let mut cart = self.cart.lock();
        cart.add(&self.catalog, req).cloned()
    }

    pub fn remove_from_cart(&self, line_id: &str) {
        self.cart.lock().remove(line_id);
    }

    pub fn clear_cart(&self) {
        self.cart.lock().clear();
    }

    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.lock().lines().to_vec()
    }

    pub fn cart_total(&self) -> i64 {
        self.cart.lock().total()
    }

    // ========== Order surface ==========

    /// Checkout the current cart
    pub fn place_order(&self, req: PlaceOrder) -> Result<Order, OrderError> {
        let mut cart = self.cart.lock();
        self.orders.place_order(&mut cart, req)
    }

    pub fn advance_order(&self, order_id: &str) -> Result<Order, OrderError> {
        self.orders.advance(order_id)
    }

    pub fn recall_order(&self, order_id: &str) -> Result<Order, OrderError> {
        self.orders.recall(order_id)
    }

    pub fn cancel_order(&self, order_id: &str) -> Result<Order, OrderError> {
        self.orders.cancel(order_id)
    }

    pub fn order_snapshot(&self) -> Vec<Order> {
        self.orders.orders()
    }

    // ========== Read-only derivations ==========

    /// Kitchen board for the current instant
    pub fn kitchen_board(&self) -> KitchenBoard {
        kitchen::board(&self.orders.orders(), now_millis(), &self.config)
    }

    /// Dashboard summary for a reporting window
    pub fn sales_summary(&self, range: TimeRange) -> SalesSummary {
        analytics::summarize(&self.orders.orders(), range, now_millis(), &self.config)
    }
}
