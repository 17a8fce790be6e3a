use summa_types::{InterpolationMethod, is_valid_value};

use crate::SummaError;
use crate::timeseries::axis::{AxisValue, retain_within_domains, union_of_x_values};
use crate::timeseries::curve::Curve;
use crate::timeseries::interpolate::interpolated_y_value;
use crate::timeseries::intervals::{ValidInterval, intervals_from_mask};

/// Merger specialised for summary time steps in seconds.
pub type TimeHistoryCurveMerger = CurveMerger<i64>;

/// Resamples several curves onto their common x-axis.
///
/// Usage: register curves with [`add_curve_data`](Self::add_curve_data), call
/// [`compute`](Self::compute) (or [`compute_interpolated_values`](Self::compute_interpolated_values)),
/// then read the master axis, the aligned values of each curve, and the index
/// intervals where every curve has data.
///
/// Every compute call rebuilds all results from the registered curves; calling it
/// repeatedly without new data yields identical results.
///
/// ```
/// use summa_core::TimeHistoryCurveMerger;
///
/// let mut merger = TimeHistoryCurveMerger::new();
/// merger.add_curve_data(vec![0, 10, 20], vec![1.0, 2.0, 3.0])?;
/// merger.add_curve_data(vec![5, 20], vec![10.0, 40.0])?;
/// merger.compute();
///
/// assert_eq!(merger.all_x_values(), &[0, 5, 10, 20]);
/// assert_eq!(merger.interpolated_y_values_for_all_x_values(0).unwrap()[1], 1.5);
/// assert_eq!(merger.valid_intervals_for_all_x_values().len(), 1);
/// # Ok::<(), summa_core::SummaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CurveMerger<X: AxisValue = i64> {
    method: InterpolationMethod,
    curves: Vec<Curve<X>>,
    all_x: Vec<X>,
    aligned: Vec<Vec<f64>>,
    intervals: Vec<ValidInterval>,
}

impl<X: AxisValue> Default for CurveMerger<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: AxisValue> CurveMerger<X> {
    /// Empty merger using linear interpolation.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_method(InterpolationMethod::Linear)
    }

    /// Empty merger using the given interpolation method.
    #[must_use]
    pub const fn with_method(method: InterpolationMethod) -> Self {
        Self {
            method,
            curves: Vec::new(),
            all_x: Vec::new(),
            aligned: Vec::new(),
            intervals: Vec::new(),
        }
    }

    /// Interpolation method in use.
    #[must_use]
    pub const fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Register a curve. Curves are indexed by registration order.
    ///
    /// # Errors
    /// Returns `LengthMismatch` or `NotAscending` when the input violates the curve
    /// preconditions; the curve is not registered in that case.
    pub fn add_curve_data(&mut self, x_values: Vec<X>, y_values: Vec<f64>) -> Result<(), SummaError> {
        let curve = Curve::new(x_values, y_values)?;
        self.curves.push(curve);
        Ok(())
    }

    /// Register an already validated curve.
    pub fn add_curve(&mut self, curve: Curve<X>) {
        self.curves.push(curve);
    }

    /// Remove all curves and computed results.
    pub fn reset(&mut self) {
        self.curves.clear();
        self.clear_results();
    }

    /// Number of registered curves.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Compute with the full union of x-values as the master axis.
    pub fn compute(&mut self) {
        self.compute_interpolated_values(true);
    }

    /// Build the master axis, resample every curve onto it, and find the index
    /// intervals where all curves have valid values.
    ///
    /// With `extend_if_one_curve_complete` set, the axis is the full union of
    /// x-values, so points supported only by some curves (for example a single
    /// curve spanning the whole range) stay on the axis with sentinel values for
    /// the others. Without it, the axis is clipped to points inside every curve's
    /// `[first, last]` domain.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "summa_core::merge::compute_interpolated_values",
            skip(self),
            fields(curves = self.curves.len()),
        )
    )]
    pub fn compute_interpolated_values(&mut self, extend_if_one_curve_complete: bool) {
        self.clear_results();
        if self.curves.is_empty() {
            return;
        }

        self.all_x = union_of_x_values(self.curves.iter().map(Curve::x_values));
        if !extend_if_one_curve_complete {
            let domains: Option<Vec<(X, X)>> = self.curves.iter().map(Curve::domain).collect();
            match domains {
                Some(d) => retain_within_domains(&mut self.all_x, &d),
                // An empty curve has no domain, so no point lies inside all of them.
                None => self.all_x.clear(),
            }
        }

        let mut all_valid = vec![true; self.all_x.len()];
        let mut aligned: Vec<Vec<f64>> = Vec::with_capacity(self.curves.len());
        for curve in &self.curves {
            let mut values = Vec::with_capacity(self.all_x.len());
            for (&x, valid) in self.all_x.iter().zip(all_valid.iter_mut()) {
                let v = interpolated_y_value(x, curve.x_values(), curve.y_values(), self.method);
                *valid &= is_valid_value(v);
                values.push(v);
            }
            aligned.push(values);
        }

        self.aligned = aligned;
        self.intervals = intervals_from_mask(all_valid);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            axis_len = self.all_x.len(),
            intervals = self.intervals.len(),
            "curves merged"
        );
    }

    /// The master axis: sorted, duplicate-free x-values of the last compute.
    #[must_use]
    pub fn all_x_values(&self) -> &[X] {
        &self.all_x
    }

    /// Aligned values of curve `curve_index`, one per master-axis point.
    ///
    /// Returns `None` if the index is out of range or nothing has been computed.
    #[must_use]
    pub fn interpolated_y_values_for_all_x_values(&self, curve_index: usize) -> Option<&[f64]> {
        self.aligned.get(curve_index).map(Vec::as_slice)
    }

    /// Maximal index runs where every curve has a valid aligned value.
    #[must_use]
    pub fn valid_intervals_for_all_x_values(&self) -> &[ValidInterval] {
        &self.intervals
    }

    /// Registered curves, in registration order.
    #[must_use]
    pub fn curves(&self) -> &[Curve<X>] {
        &self.curves
    }

    fn clear_results(&mut self) {
        self.all_x.clear();
        self.aligned.clear();
        self.intervals.clear();
    }
}
