//! Manager dashboard derivations
//!
//! Pure functions of `(orders, time_range, now, config)`. Cancelled orders
//! never count as sales. All outputs degrade to empty/zero on an empty
//! input set.

use crate::config::Config;
use crate::time::{day_start_millis_back, hour_of_day};
use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderStatus};

/// Reporting window, anchored to the business timezone
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Since the start of the current day
    #[default]
    Today,
    /// Rolling 7 days (day start, 6 days back)
    Week,
    /// Rolling 30 days (day start, 29 days back)
    Month,
    /// Full order history
    All,
}

impl TimeRange {
    /// Inclusive lower bound in Unix millis; `None` = unbounded
    fn start_millis(self, now: i64, config: &Config) -> Option<i64> {
        let days_back = match self {
            TimeRange::Today => 0,
            TimeRange::Week => 6,
            TimeRange::Month => 29,
            TimeRange::All => return None,
        };
        Some(day_start_millis_back(now, days_back, config.timezone))
    }
}

/// Revenue bucket for one business hour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourlyBucket {
    /// Hour of day, 0..=23
    pub hour: u32,
    /// Chart label, e.g. "9:00"
    pub label: String,
    pub revenue: i64,
}

/// Top product row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopProduct {
    pub name: String,
    pub quantity: i64,
}

/// Full dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesSummary {
    pub revenue: i64,
    pub order_count: usize,
    /// revenue / order_count, rounded; 0 when the window is empty
    pub average_ticket: i64,
    /// Revenue goal and progress toward it, capped at 100
    pub revenue_target: i64,
    pub target_progress_percent: u32,
    /// Mean completion time in minutes over COMPLETED orders; None when
    /// nothing completed in the window
    pub avg_cook_time_minutes: Option<i64>,
    /// One bucket per business hour, ascending, zeros included
    pub hourly: Vec<HourlyBucket>,
    pub top_products: Vec<TopProduct>,
}

/// Orders within the window, cancelled excluded
///
/// Exposed separately because the export collaborator consumes the same
/// filtered snapshot the dashboard shows.
pub fn filter_orders(orders: &[Order], range: TimeRange, now: i64, config: &Config) -> Vec<Order> {
    let start = range.start_millis(now, config);
    orders
        .iter()
        .filter(|o| start.is_none_or(|s| o.created_at >= s))
        .cloned()
        .collect()
}

/// Compute the dashboard summary for a window
pub fn summarize(orders: &[Order], range: TimeRange, now: i64, config: &Config) -> SalesSummary {
    let filtered = filter_orders(orders, range, now, config);
    let valid: Vec<&Order> = filtered
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .collect();

    let revenue: i64 = valid.iter().map(|o| o.total_amount).sum();
    let order_count = valid.len();
    let average_ticket = if order_count == 0 {
        0
    } else {
        // round to nearest whole currency unit
        (revenue as f64 / order_count as f64).round() as i64
    };

    let target_progress_percent = if config.daily_revenue_target <= 0 {
        0
    } else {
        (revenue.saturating_mul(100) / config.daily_revenue_target).clamp(0, 100) as u32
    };

    let cook_times: Vec<i64> = valid
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .filter_map(|o| o.completed_at.map(|done| done - o.created_at))
        .collect();
    let avg_cook_time_minutes = if cook_times.is_empty() {
        None
    } else {
        Some(cook_times.iter().sum::<i64>() / cook_times.len() as i64 / 60_000)
    };

    // pre-seed every business hour so empty ones still render
    let mut hourly: Vec<HourlyBucket> = (config.business_open_hour..=config.business_close_hour)
        .map(|hour| HourlyBucket {
            hour,
            label: format!("{hour}:00"),
            revenue: 0,
        })
        .collect();
    for order in &valid {
        let hour = hour_of_day(order.created_at, config.timezone);
        if let Some(bucket) = hourly.iter_mut().find(|b| b.hour == hour) {
            bucket.revenue += order.total_amount;
        }
    }

    let mut top_products: Vec<TopProduct> = Vec::new();
    for order in &valid {
        for line in &order.items {
            match top_products.iter_mut().find(|p| p.name == line.name) {
                Some(product) => product.quantity += line.quantity as i64,
                None => top_products.push(TopProduct {
                    name: line.name.clone(),
                    quantity: line.quantity as i64,
                }),
            }
        }
    }
    top_products.sort_by_key(|p| std::cmp::Reverse(p.quantity));
    top_products.truncate(config.top_products_limit);

    SalesSummary {
        revenue,
        order_count,
        average_ticket,
        revenue_target: config.daily_revenue_target,
        target_progress_percent,
        avg_cook_time_minutes,
        hourly,
        top_products,
    }
}
