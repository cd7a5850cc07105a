use chrono::{DateTime, Utc};

/// Display format for record timestamps (`2024.03.01 17:45:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Formats a Unix timestamp (seconds, UTC) for a table cell.
///
/// Out-of-range timestamps produce an empty string so the cell renders blank.
pub fn format_timestamp(unix_seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(unix_seconds, 0)
        .map(|instant| instant.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}
