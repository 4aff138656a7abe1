//! Sales report export
//!
//! Renders an immutable snapshot of filtered orders to RFC-4180 CSV.
//! Read-only: consumes clones, touches nothing.

use crate::time::to_business_time;
use chrono_tz::Tz;
use shared::order::Order;

const HEADERS: [&str; 6] = ["Order ID", "Time", "Customer", "Items", "Total", "Status"];

/// Quote a CSV field when it contains a delimiter, quote, or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Items cell: `2x Бургер; 1x Фри`
fn items_cell(order: &Order) -> String {
    order
        .items
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.name))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render orders to CSV, times formatted in the business timezone
pub fn render_csv(orders: &[Order], tz: Tz) -> String {
    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for order in orders {
        let time = to_business_time(order.created_at, tz)
            .format("%H:%M:%S")
            .to_string();
        let row = [
            csv_field(&order.id),
            time,
            csv_field(&order.customer_name),
            csv_field(&items_cell(order)),
            order.total_amount.to_string(),
            order.status.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
