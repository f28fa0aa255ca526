use chrono::{DateTime, Utc};

pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render upstream unix seconds for the header line. `None` for an out-of-range timestamp.
pub fn format_unix_secs(epoch_sec: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_sec, 0)
        .map(|dt| dt.format(STANDARD_TIME_FORMAT).to_string())
}

/// Seconds elapsed since `epoch_sec`, floored at zero.
pub fn secs_since(epoch_sec: i64, now: DateTime<Utc>) -> i64 {
    (now.timestamp() - epoch_sec).max(0)
}

pub fn format_age(secs: i64) -> String {
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch() {
        assert_eq!(
            format_unix_secs(1_700_000_000).as_deref(),
            Some("2023-11-14 22:13:20 UTC")
        );
        assert_eq!(format_unix_secs(i64::MAX), None);
    }

    #[test]
    fn age_buckets() {
        assert_eq!(format_age(5), "5s");
        assert_eq!(format_age(125), "2m");
        assert_eq!(format_age(7200), "2h");
        assert_eq!(format_age(200_000), "2d");
    }

    #[test]
    fn age_never_negative() {
        let now = DateTime::from_timestamp(100, 0).unwrap();
        assert_eq!(secs_since(40, now), 60);
        assert_eq!(secs_since(500, now), 0);
    }
}
