/// 获取当前 UTC 时间戳（秒）
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Render a unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Out-of-range values render as an empty string.
pub fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
