//! Month bucketing for donation trend queries
//!
//! Buckets are "YYYY-MM" strings so trend aggregation stays a plain
//! GROUP BY over an indexed column.

use chrono::{DateTime, Datelike, Utc};

static MONTH_LABELS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Compute the month bucket string from a Unix timestamp in milliseconds.
pub fn month_bucket(timestamp_ms: i64) -> String {
    let dt = DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_else(Utc::now);
    format!("{:04}-{:02}", dt.year(), dt.month())
}

/// Get the current month bucket.
pub fn current_month_bucket() -> String {
    month_bucket(Utc::now().timestamp_millis())
}

/// Short label for a bucket, e.g. "2026-08" -> "Aug".
///
/// Unparseable buckets fall back to the raw string.
pub fn month_label(bucket: &str) -> String {
    bucket
        .split('-')
        .nth(1)
        .and_then(|m| m.parse::<usize>().ok())
        .filter(|m| (1..=12).contains(m))
        .map(|m| MONTH_LABELS[m - 1].to_string())
        .unwrap_or_else(|| bucket.to_string())
}

/// The `n` month buckets ending at `now_ms`, oldest first.
pub fn last_n_month_buckets(now_ms: i64, n: usize) -> Vec<String> {
    let dt = DateTime::from_timestamp_millis(now_ms).unwrap_or_else(Utc::now);
    let months_total = dt.year() as i64 * 12 + (dt.month() as i64 - 1);

    (0..n as i64)
        .rev()
        .map(|back| {
            let m = months_total - back;
            format!("{:04}-{:02}", m.div_euclid(12), m.rem_euclid(12) + 1)
        })
        .collect()
}
