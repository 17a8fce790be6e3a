use core::cmp::Ordering;

use crate::SummaError;
use crate::timeseries::axis::AxisValue;

/// One input curve: strictly increasing x-values with a parallel value vector.
///
/// Values may contain non-finite entries; those are treated as missing samples
/// by the interpolator.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<X> {
    x: Vec<X>,
    y: Vec<f64>,
}

impl<X: AxisValue> Curve<X> {
    /// Validate and wrap a curve.
    ///
    /// # Errors
    /// - `LengthMismatch` if `x` and `y` differ in length.
    /// - `InvalidArg` if an x-value cannot be placed on an axis (NaN or infinite).
    /// - `NotAscending` if any x-value is not strictly greater than its predecessor.
    pub fn new(x: Vec<X>, y: Vec<f64>) -> Result<Self, SummaError> {
        if x.len() != y.len() {
            return Err(SummaError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if let Some(index) = x.iter().position(|v| !v.is_valid_axis_value()) {
            return Err(SummaError::InvalidArg(format!(
                "x-value at index {index} is not finite: {:?}",
                x[index]
            )));
        }
        if let Some(index) = first_non_ascending(&x) {
            return Err(SummaError::NotAscending { index });
        }
        Ok(Self { x, y })
    }

    /// X-values in ascending order.
    #[must_use]
    pub fn x_values(&self) -> &[X] {
        &self.x
    }

    /// Values parallel to [`Self::x_values`].
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.y
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(first, last)` x-values, or `None` for an empty curve.
    #[must_use]
    pub fn domain(&self) -> Option<(X, X)> {
        Some((*self.x.first()?, *self.x.last()?))
    }
}

fn first_non_ascending<X: AxisValue>(x: &[X]) -> Option<usize> {
    x.windows(2)
        .position(|w| w[0].axis_cmp(&w[1]) != Ordering::Less || w[0].axis_eq(&w[1]))
        .map(|i| i + 1)
}
