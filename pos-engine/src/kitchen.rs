//! Kitchen display derivations
//!
//! Pure functions of `(orders, now, config)`: the active ticket queue,
//! per-ticket urgency, and the production aggregate ("make N of item X").
//! Nothing here holds state or mutates an order; bump/recall requests from
//! the board go straight to the orders manager.

use crate::config::Config;
use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderStatus};
use shared::util::elapsed_minutes;

/// How late a ticket is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Normal,
    Warning,
    Critical,
}

/// One card on the kitchen board
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub order: Order,
    pub elapsed_minutes: i64,
    /// Time-based lateness; READY tickets are rendered as "done" by the
    /// view regardless of this value
    pub urgency: Urgency,
}

/// Aggregated production row: make `quantity` of `name`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionItem {
    pub name: String,
    pub category: String,
    pub quantity: i64,
}

/// Per-status counts for the board sidebar
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub cooking: usize,
    pub ready: usize,
}

/// Everything the kitchen display renders
#[derive(Debug, Clone, Serialize)]
pub struct KitchenBoard {
    /// Oldest first - first-in-first-served, independent of status
    pub tickets: Vec<Ticket>,
    pub production: Vec<ProductionItem>,
    pub stats: StatusCounts,
}

/// Active orders (not COMPLETED/CANCELLED), oldest first
pub fn active_queue(orders: &[Order]) -> Vec<Order> {
    let mut active: Vec<Order> = orders
        .iter()
        .filter(|o| o.status.is_active())
        .cloned()
        .collect();
    active.sort_by_key(|o| o.created_at);
    active
}

/// Classify a ticket's lateness from its age in whole minutes
pub fn classify_urgency(created_at: i64, now: i64, config: &Config) -> Urgency {
    let elapsed = elapsed_minutes(created_at, now);
    if elapsed >= config.critical_minutes {
        Urgency::Critical
    } else if elapsed >= config.warning_minutes {
        Urgency::Warning
    } else {
        Urgency::Normal
    }
}

/// Per-product quantities across active orders not yet READY,
/// largest first, ties in first-seen order
///
/// READY orders are excluded: their items are already produced.
pub fn production_aggregate(orders: &[Order]) -> Vec<ProductionItem> {
    let mut items: Vec<ProductionItem> = Vec::new();
    for order in orders
        .iter()
        .filter(|o| o.status.is_active() && o.status != OrderStatus::Ready)
    {
        for line in &order.items {
            match items.iter_mut().find(|i| i.name == line.name) {
                Some(item) => item.quantity += line.quantity as i64,
                None => items.push(ProductionItem {
                    name: line.name.clone(),
                    category: line.category.clone(),
                    quantity: line.quantity as i64,
                }),
            }
        }
    }
    items.sort_by_key(|i| std::cmp::Reverse(i.quantity));
    items
}

/// Derive the full board for one render pass
pub fn board(orders: &[Order], now: i64, config: &Config) -> KitchenBoard {
    let active = active_queue(orders);

    let mut stats = StatusCounts::default();
    for order in &active {
        match order.status {
            OrderStatus::Pending => stats.pending += 1,
            OrderStatus::Cooking => stats.cooking += 1,
            OrderStatus::Ready => stats.ready += 1,
            OrderStatus::Completed | OrderStatus::Cancelled => {}
        }
    }

    let production = production_aggregate(&active);
    let tickets = active
        .into_iter()
        .map(|order| Ticket {
            elapsed_minutes: elapsed_minutes(order.created_at, now),
            urgency: classify_urgency(order.created_at, now, config),
            order,
        })
        .collect();

    KitchenBoard {
        tickets,
        production,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{CartLine, PaymentMethod};

    fn line(name: &str, quantity: i32) -> CartLine {
        CartLine {
            line_id: format!("line-{name}"),
            signature: format!("sig-{name}"),
            product_id: format!("p-{name}"),
            name: name.to_string(),
            category: "Бургеры".to_string(),
            unit_price: 100,
            quantity,
            modifiers: Vec::new(),
            comment: None,
        }
    }

    fn order(id: &str, status: OrderStatus, created_at: i64, items: Vec<CartLine>) -> Order {
        Order {
            id: id.to_string(),
            items,
            total_amount: 0,
            status,
            customer_name: "Тест".to_string(),
            table_number: None,
            payment_method: PaymentMethod::Card,
            created_at,
            completed_at: None,
            priority: false,
            allergies: Vec::new(),
        }
    }

    const MIN: i64 = 60_000;

    #[test]
    fn active_queue_filters_terminals_and_sorts_oldest_first() {
        let orders = vec![
            order("o-new", OrderStatus::Pending, 3 * MIN, vec![]),
            order("o-done", OrderStatus::Completed, 0, vec![]),
            order("o-old", OrderStatus::Ready, MIN, vec![]),
            order("o-void", OrderStatus::Cancelled, 2 * MIN, vec![]),
        ];

        let queue = active_queue(&orders);
        let ids: Vec<&str> = queue.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o-old", "o-new"]);
    }

    #[test]
    fn urgency_boundaries() {
        let config = Config::default();
        let now = 100 * MIN;

        // exactly 15 minutes -> CRITICAL
        assert_eq!(
            classify_urgency(now - 15 * MIN, now, &config),
            Urgency::Critical
        );
        // 14 minutes 59 seconds -> WARNING
        assert_eq!(
            classify_urgency(now - (15 * MIN - 1_000), now, &config),
            Urgency::Warning
        );
        // exactly 10 minutes -> WARNING
        assert_eq!(
            classify_urgency(now - 10 * MIN, now, &config),
            Urgency::Warning
        );
        // 9 minutes 59 seconds -> NORMAL
        assert_eq!(
            classify_urgency(now - (10 * MIN - 1_000), now, &config),
            Urgency::Normal
        );
    }

    #[test]
    fn production_counts_skip_ready_orders() {
        let orders = vec![
            order(
                "o-1",
                OrderStatus::Pending,
                0,
                vec![line("Бургер", 2), line("Фри", 1)],
            ),
            order("o-2", OrderStatus::Cooking, MIN, vec![line("Бургер", 1)]),
            // already produced, must not count
            order("o-3", OrderStatus::Ready, 2 * MIN, vec![line("Бургер", 5)]),
        ];

        let production = production_aggregate(&orders);
        assert_eq!(production.len(), 2);
        assert_eq!(production[0].name, "Бургер");
        assert_eq!(production[0].quantity, 3);
        assert_eq!(production[1].name, "Фри");
        assert_eq!(production[1].quantity, 1);
    }

    #[test]
    fn production_ties_keep_first_seen_order() {
        let orders = vec![order(
            "o-1",
            OrderStatus::Pending,
            0,
            vec![line("Кола", 2), line("Фри", 2)],
        )];

        let production = production_aggregate(&orders);
        assert_eq!(production[0].name, "Кола");
        assert_eq!(production[1].name, "Фри");
    }

    #[test]
    fn aggregation_is_idempotent() {
        let orders = vec![
            order("o-1", OrderStatus::Pending, 0, vec![line("Бургер", 2)]),
            order("o-2", OrderStatus::Cooking, MIN, vec![line("Фри", 4)]),
        ];
        let now = 20 * MIN;
        let config = Config::default();

        let first = board(&orders, now, &config);
        let second = board(&orders, now, &config);

        assert_eq!(first.production, second.production);
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.tickets.len(), second.tickets.len());
    }

    #[test]
    fn board_counts_statuses() {
        let orders = vec![
            order("o-1", OrderStatus::Pending, 0, vec![]),
            order("o-2", OrderStatus::Pending, MIN, vec![]),
            order("o-3", OrderStatus::Cooking, 2 * MIN, vec![]),
            order("o-4", OrderStatus::Ready, 3 * MIN, vec![]),
            order("o-5", OrderStatus::Completed, 4 * MIN, vec![]),
        ];

        let stats = board(&orders, 10 * MIN, &Config::default()).stats;
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.cooking, 1);
        assert_eq!(stats.ready, 1);
    }
}
