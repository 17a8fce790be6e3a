use core::cmp::Ordering;

use summa_types::{InterpolationMethod, MISSING_VALUE, is_valid_value, normalize_missing};

use crate::timeseries::axis::AxisValue;

/// Evaluate the curve `(x_values, y_values)` at `query`.
///
/// Outcome branches:
/// - `query` before the first or after the last sample: [`MISSING_VALUE`].
/// - `query` equal to a sample's x-value (per [`AxisValue::axis_eq`]): that sample's
///   value, or [`MISSING_VALUE`] if the sample itself is not finite.
/// - `query` strictly between two samples: linear (or step) interpolation, or
///   [`MISSING_VALUE`] if either bracketing sample is not finite.
///
/// Empty curves and curves whose vectors differ in length always yield the sentinel.
/// `x_values` must be strictly increasing; lookup is a binary search.
///
/// ```
/// use summa_core::timeseries::interpolate::interpolated_y_value;
/// use summa_core::{InterpolationMethod, MISSING_VALUE};
///
/// let t = [1_i64, 5, 10, 15];
/// let v = [2.0, 3.5, 5.0, 6.0];
/// assert_eq!(interpolated_y_value(3, &t, &v, InterpolationMethod::Linear), 2.75);
/// assert_eq!(interpolated_y_value(0, &t, &v, InterpolationMethod::Linear), MISSING_VALUE);
/// ```
#[must_use]
pub fn interpolated_y_value<X: AxisValue>(
    query: X,
    x_values: &[X],
    y_values: &[f64],
    method: InterpolationMethod,
) -> f64 {
    if x_values.is_empty() || x_values.len() != y_values.len() {
        return MISSING_VALUE;
    }

    // First sample not strictly below the query.
    let upper = x_values.partition_point(|x| x.axis_cmp(&query) == Ordering::Less);

    if upper < x_values.len() && x_values[upper].axis_eq(&query) {
        return normalize_missing(y_values[upper]);
    }
    if upper > 0 && x_values[upper - 1].axis_eq(&query) {
        return normalize_missing(y_values[upper - 1]);
    }
    if upper == 0 || upper == x_values.len() {
        return MISSING_VALUE;
    }

    let lower = upper - 1;
    let (t0, t1) = (x_values[lower], x_values[upper]);
    let (v0, v1) = (y_values[lower], y_values[upper]);
    if !is_valid_value(v0) || !is_valid_value(v1) {
        return MISSING_VALUE;
    }

    if method == InterpolationMethod::Step {
        return v0;
    }

    let width = t0.span_to(&t1);
    if width == 0.0 {
        return v0;
    }
    normalize_missing(v0 + (v1 - v0) * t0.span_to(&query) / width)
}
