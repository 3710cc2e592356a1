use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse `verified_at` as sent by the service (RFC 3339, or ISO without offset meaning UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn format_local_datetime(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Unix seconds rendered as a local wall-clock time
pub fn format_local_time(unix_seconds: i64) -> Option<String> {
    Utc.timestamp_opt(unix_seconds, 0)
        .single()
        .map(|dt| dt.with_timezone(&Local).format("%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_timestamp_shapes() {
        let with_offset = parse_timestamp("2024-03-01T10:00:00+00:00").unwrap();
        let naive = parse_timestamp("2024-03-01T10:00:00.123456").unwrap();
        assert_eq!(with_offset.timestamp(), naive.timestamp());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn formats_unix_seconds() {
        let formatted = format_local_time(1_700_000_000).unwrap();
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.matches(':').count(), 2);
    }
}
