//! Engine configuration
//!
//! # 环境变量
//!
//! All values can be overridden through environment variables; a `.env`
//! file is honored when present.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | BUSINESS_TIMEZONE | Europe/Moscow | Business timezone for day/hour bucketing |
//! | BUSINESS_OPEN_HOUR | 9 | First hour pre-seeded in the sales chart |
//! | BUSINESS_CLOSE_HOUR | 22 | Last hour pre-seeded in the sales chart |
//! | KITCHEN_WARNING_MINUTES | 10 | Elapsed minutes before a ticket turns WARNING |
//! | KITCHEN_CRITICAL_MINUTES | 15 | Elapsed minutes before a ticket turns CRITICAL |
//! | TOP_PRODUCTS_LIMIT | 5 | Rows in the top-products ranking |
//! | DAILY_REVENUE_TARGET | 50000 | Revenue goal for the progress figure |
//! | INSIGHTS_API_URL | (unset) | AI summary endpoint; unset disables the call |
//! | INSIGHTS_API_KEY | (unset) | Bearer token for the endpoint |

use chrono_tz::Tz;

/// Engine configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Business timezone used for day starts and hour buckets
    pub timezone: Tz,
    /// First business hour (inclusive) shown in the hourly chart
    pub business_open_hour: u32,
    /// Last business hour (inclusive) shown in the hourly chart
    pub business_close_hour: u32,
    /// Ticket turns WARNING at this many elapsed minutes
    pub warning_minutes: i64,
    /// Ticket turns CRITICAL at this many elapsed minutes
    pub critical_minutes: i64,
    /// Rows in the top-products ranking
    pub top_products_limit: usize,
    /// Daily revenue goal in currency units
    pub daily_revenue_target: i64,
    /// AI summary endpoint (unset = collaborator disabled)
    pub insights_api_url: Option<String>,
    /// Bearer token for the AI summary endpoint
    pub insights_api_key: Option<String>,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            timezone: std::env::var("BUSINESS_TIMEZONE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::Europe::Moscow),
            business_open_hour: env_parse("BUSINESS_OPEN_HOUR", 9),
            business_close_hour: env_parse("BUSINESS_CLOSE_HOUR", 22),
            warning_minutes: env_parse("KITCHEN_WARNING_MINUTES", 10),
            critical_minutes: env_parse("KITCHEN_CRITICAL_MINUTES", 15),
            top_products_limit: env_parse("TOP_PRODUCTS_LIMIT", 5),
            daily_revenue_target: env_parse("DAILY_REVENUE_TARGET", 50_000),
            insights_api_url: std::env::var("INSIGHTS_API_URL").ok(),
            insights_api_key: std::env::var("INSIGHTS_API_KEY").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Moscow,
            business_open_hour: 9,
            business_close_hour: 22,
            warning_minutes: 10,
            critical_minutes: 15,
            top_products_limit: 5,
            daily_revenue_target: 50_000,
            insights_api_url: None,
            insights_api_key: None,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
