//! Display labels for notification timestamps.
//!
//! Stored `time` values are either ready-made labels ("Yesterday") or
//! RFC 3339 instants. Instants are turned into the same relative wording
//! the seed labels use; anything else is shown as-is.

use chrono::{DateTime, Utc};

/// Label for a stored `time` value, relative to `now`.
pub fn display_time(raw: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(instant) => relative_label(instant.with_timezone(&Utc), now),
        Err(_) => raw.to_string(),
    }
}

fn relative_label(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(instant);
    if elapsed.num_seconds() < 0 {
        return calendar_date(instant);
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "min")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        plural(days, "day")
    } else if days < 14 {
        "Last week".to_string()
    } else {
        calendar_date(instant)
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

fn calendar_date(instant: DateTime<Utc>) -> String {
    instant.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 20, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn plain_label_passes_through() {
        assert_eq!(display_time("10 mins ago", now()), "10 mins ago");
        assert_eq!(display_time("", now()), "");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(display_time(&ago(Duration::seconds(20)), now()), "Just now");
        assert_eq!(display_time(&ago(Duration::minutes(1)), now()), "1 min ago");
        assert_eq!(display_time(&ago(Duration::minutes(10)), now()), "10 mins ago");
        assert_eq!(display_time(&ago(Duration::hours(1)), now()), "1 hour ago");
        assert_eq!(display_time(&ago(Duration::hours(5)), now()), "5 hours ago");
    }

    #[test]
    fn days_and_weeks() {
        assert_eq!(display_time(&ago(Duration::hours(30)), now()), "Yesterday");
        assert_eq!(display_time(&ago(Duration::days(3)), now()), "3 days ago");
        assert_eq!(display_time(&ago(Duration::days(9)), now()), "Last week");
    }

    #[test]
    fn old_and_future_instants_show_date() {
        assert_eq!(display_time(&ago(Duration::days(30)), now()), "Mar 21, 2025");
        let future = (now() + Duration::days(2)).to_rfc3339();
        assert_eq!(display_time(&future, now()), "Apr 22, 2025");
    }

    #[test]
    fn offset_instants_are_normalized() {
        // 13:30 at +02:00 is 11:30 UTC, thirty minutes before now
        assert_eq!(display_time("2025-04-20T13:30:00+02:00", now()), "30 mins ago");
    }
}
