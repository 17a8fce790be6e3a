use std::sync::Arc;

use summa::SummaryReader;

/// Fixture reader for `case` (`BASE`, `PRED` or `HIST`).
#[must_use]
pub fn fixture(case: &str) -> Arc<dyn SummaryReader> {
    Arc::new(summa_mock::MockSummaryReader::new(case))
}

/// Render seconds since the epoch as a calendar date.
#[must_use]
pub fn date(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map_or_else(|| secs.to_string(), |t| t.format("%Y-%m-%d").to_string())
}

/// Render a value, showing the missing-value sentinel as `-`.
#[must_use]
pub fn value(v: f64) -> String {
    if summa::is_valid_value(v) {
        format!("{v:>10.2}")
    } else {
        format!("{:>10}", "-")
    }
}
