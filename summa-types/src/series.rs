//! Series envelopes and the missing-value sentinel.

use serde::{Deserialize, Serialize};

/// Marker for "no data at this point" in every aligned or derived value vector.
///
/// Compare against this exact constant; NaN never appears in engine outputs.
pub const MISSING_VALUE: f64 = f64::INFINITY;

/// Returns true if `value` is usable data (finite, not the sentinel, not NaN).
#[must_use]
pub const fn is_valid_value(value: f64) -> bool {
    value.is_finite()
}

/// Returns `value` unchanged when valid, otherwise [`MISSING_VALUE`].
#[must_use]
pub const fn normalize_missing(value: f64) -> f64 {
    if is_valid_value(value) {
        value
    } else {
        MISSING_VALUE
    }
}

/// Time-value pairs produced by combining two summary curves.
///
/// `time_steps` are seconds since the Unix epoch, ascending. `values` has the same
/// length and may contain [`MISSING_VALUE`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedSeries {
    /// Ascending time steps in seconds.
    pub time_steps: Vec<i64>,
    /// One value per time step.
    pub values: Vec<f64>,
}

impl DerivedSeries {
    /// Construct a series from parallel vectors.
    #[must_use]
    pub const fn new(time_steps: Vec<i64>, values: Vec<f64>) -> Self {
        Self { time_steps, values }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if at least one value is not the sentinel.
    #[must_use]
    pub fn has_valid_values(&self) -> bool {
        self.values.iter().copied().any(is_valid_value)
    }
}
