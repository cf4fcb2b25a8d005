//! Calendar and display helpers for timestamps.

use chrono::{DateTime, TimeZone, Utc};

/// Returns true when both instants fall on the same calendar date in `tz`.
pub fn is_same_calendar_day<Tz: TimeZone>(instant: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> bool {
    instant.with_timezone(tz).date_naive() == now.with_timezone(tz).date_naive()
}

/// Formats the distance between `then` and `now` as a short relative phrase
/// ("just now", "10 mins ago", "1 hour ago", "3 days ago").
///
/// Timestamps in the future are treated as "just now".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "min");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    plural(elapsed.num_days(), "day")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
