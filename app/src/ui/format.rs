//! Display formatting for durations, money, and timestamps.

use chrono::{DateTime, Utc};

/// `m:ss` for call durations.
pub fn duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// USD with two decimals; sub-cent amounts keep four so they do not
/// render as $0.00.
pub fn cost(usd: f64) -> String {
    if usd > 0.0 && usd < 0.01 {
        format!("${usd:.4}")
    } else {
        format!("${usd:.2}")
    }
}

/// Coarse "time ago" relative to `now`.
pub fn relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts);
    let mins = delta.num_minutes();
    if mins < 1 {
        "just now".to_owned()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if mins < 60 * 24 {
        format!("{}h ago", delta.num_hours())
    } else {
        format!("{}d ago", delta.num_days())
    }
}

/// Total minutes as `Xh Ym` once it crosses an hour.
pub fn minutes(total: u64) -> String {
    if total < 60 {
        format!("{total}m")
    } else {
        format!("{}h {}m", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn duration_pads_seconds() {
        assert_eq!(duration(0), "0:00");
        assert_eq!(duration(65), "1:05");
        assert_eq!(duration(330), "5:30");
    }

    #[test]
    fn cost_keeps_sub_cent_amounts_visible() {
        assert_eq!(cost(0.0), "$0.00");
        assert_eq!(cost(0.0042), "$0.0042");
        assert_eq!(cost(12.5), "$12.50");
    }

    #[test]
    fn relative_buckets() {
        let now = Utc::now();
        assert_eq!(relative(now, now), "just now");
        assert_eq!(relative(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn minutes_rolls_into_hours() {
        assert_eq!(minutes(45), "45m");
        assert_eq!(minutes(150), "2h 30m");
    }
}
