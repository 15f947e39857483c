//! Relative-time formatting for display timestamps.
//!
//! Renders the distance between two instants as a short human phrase
//! ("just now", "5 minutes ago", "in 2 hours"), falling back to the absolute
//! date once the distance is over a month. Sits beside the range generator
//! because pickers show their persisted selections with the same helper.

use chrono::{DateTime, Utc};

const MINUTE_SECS: i64 = 60;
const HOUR_SECS: i64 = 3600;
const DAY_SECS: i64 = 86_400;
const FALLBACK_DAYS: i64 = 30;

/// Formats `then` relative to `now` as a short phrase.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use timegrid::services::relative::format_relative;
///
/// let now = Utc::now();
/// assert_eq!(format_relative(now - Duration::minutes(5), now), "5 minutes ago");
/// assert_eq!(format_relative(now + Duration::hours(2), now), "in 2 hours");
/// ```
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let past = delta >= 0;
    let magnitude = delta.abs();

    if magnitude < MINUTE_SECS {
        return "just now".to_string();
    }

    if magnitude >= FALLBACK_DAYS * DAY_SECS {
        return then.format("%Y-%m-%d").to_string();
    }

    let (count, unit) = if magnitude < HOUR_SECS {
        (magnitude / MINUTE_SECS, "minute")
    } else if magnitude < DAY_SECS {
        (magnitude / HOUR_SECS, "hour")
    } else {
        let days = magnitude / DAY_SECS;
        if days == 1 {
            return if past {
                "yesterday".to_string()
            } else {
                "tomorrow".to_string()
            };
        }
        (days, "day")
    };

    let plural = if count == 1 { "" } else { "s" };
    if past {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

/// Convenience form of [`format_relative`] against the current instant.
pub fn format_relative_to_now(then: DateTime<Utc>) -> String {
    format_relative(then, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-08-30T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn under_a_minute_is_just_now() {
        let now = now();
        assert_eq!(format_relative(now, now), "just now");
        assert_eq!(format_relative(now - Duration::seconds(59), now), "just now");
        assert_eq!(format_relative(now + Duration::seconds(30), now), "just now");
    }

    #[test]
    fn minutes_and_hours_pluralize() {
        let now = now();
        assert_eq!(format_relative(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_relative(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(format_relative(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_relative(now + Duration::hours(3), now), "in 3 hours");
    }

    #[test]
    fn single_day_uses_yesterday_and_tomorrow() {
        let now = now();
        assert_eq!(format_relative(now - Duration::days(1), now), "yesterday");
        assert_eq!(format_relative(now + Duration::days(1), now), "tomorrow");
        assert_eq!(format_relative(now - Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn over_a_month_falls_back_to_date() {
        let now = now();
        assert_eq!(format_relative(now - Duration::days(40), now), "2026-07-21");
        assert_eq!(format_relative(now + Duration::days(40), now), "2026-10-09");
    }

    #[test]
    fn boundary_at_exactly_thirty_days() {
        let now = now();
        assert_eq!(format_relative(now - Duration::days(29), now), "29 days ago");
        assert_eq!(format_relative(now - Duration::days(30), now), "2026-07-31");
    }
}
