//! Time utilities
//!
//! All timestamps in the system are `i64` Unix milliseconds UTC. Formatting
//! into the business timezone happens only at presentation edges.

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Whole minutes elapsed between two millisecond timestamps (floor)
pub fn elapsed_minutes(from_millis: i64, now_millis: i64) -> i64 {
    (now_millis - from_millis).div_euclid(60_000)
}
