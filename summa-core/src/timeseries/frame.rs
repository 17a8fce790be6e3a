//! Polars export of merge results.

use polars::prelude::{Column, DataFrame, PolarsResult};
use summa_types::{DerivedSeries, is_valid_value};

use crate::timeseries::merge::CurveMerger;

/// Conversion of computed series into a polars `DataFrame`.
///
/// Missing values become nulls.
pub trait ToDataFrame {
    /// Build the frame.
    ///
    /// # Errors
    /// Propagates polars construction errors.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

fn nullable(values: &[f64]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|&v| is_valid_value(v).then_some(v))
        .collect()
}

impl ToDataFrame for CurveMerger<i64> {
    /// Column `x` holds the master axis, `curve_<n>` the aligned values of curve `n`.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns = Vec::with_capacity(self.curve_count() + 1);
        columns.push(Column::new("x".into(), self.all_x_values()));
        for i in 0..self.curve_count() {
            let values = self.interpolated_y_values_for_all_x_values(i).unwrap_or(&[]);
            columns.push(Column::new(format!("curve_{i}").into(), nullable(values)));
        }
        DataFrame::new(columns)
    }
}

impl ToDataFrame for DerivedSeries {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            Column::new("time".into(), self.time_steps.as_slice()),
            Column::new("value".into(), nullable(&self.values)),
        ])
    }
}
