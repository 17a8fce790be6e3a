//! Pairing of an X curve and a Y curve sampled on different time axes.

use chrono::DateTime;
use summa_core::{
    Curve, InterpolationMethod, SummaError, SummaryAddress, SummaryReader, TimeHistoryCurveMerger,
    ValidInterval, values_by_intervals,
};

/// Paired values of two curves at the time steps where both are valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrossPlot {
    /// Time steps (seconds) of the paired points, ascending.
    pub time_steps: Vec<i64>,
    /// X-curve values, one per time step.
    pub x: Vec<f64>,
    /// Y-curve values, one per time step.
    pub y: Vec<f64>,
    /// Contiguous runs of points, as index ranges into the vectors above.
    ///
    /// A plot should not draw a line between two segments.
    pub segments: Vec<ValidInterval>,
}

impl CrossPlot {
    /// Number of paired points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time_steps.len()
    }

    /// True if no point is paired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time_steps.is_empty()
    }
}

fn format_time(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map_or_else(|| secs.to_string(), |t| t.format("%Y-%m-%d").to_string())
}

fn describe_domain(curve: &Curve<i64>) -> String {
    curve.domain().map_or_else(
        || "no samples".to_string(),
        |(first, last)| format!("{} .. {}", format_time(first), format_time(last)),
    )
}

/// Merge `x` and `y` onto their union axis and pair the aligned values.
///
/// Only points inside a validity interval (both curves valid) are returned.
///
/// # Errors
/// Returns `NoOverlap` with both curves' date ranges when no such point exists.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "summa::crossplot::cross_plot",
        skip(x, y),
        fields(x_len = x.len(), y_len = y.len()),
    )
)]
pub fn cross_plot(
    x: Curve<i64>,
    y: Curve<i64>,
    method: InterpolationMethod,
) -> Result<CrossPlot, SummaError> {
    let x_range = describe_domain(&x);
    let y_range = describe_domain(&y);

    let mut merger = TimeHistoryCurveMerger::with_method(method);
    merger.add_curve(x);
    merger.add_curve(y);
    merger.compute();

    let intervals = merger.valid_intervals_for_all_x_values();
    if intervals.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!(x = %x_range, y = %y_range, "detected no overlapping time steps");
        return Err(SummaError::no_overlap(x_range, y_range));
    }

    let mut segments = Vec::with_capacity(intervals.len());
    let mut offset = 0usize;
    for iv in intervals {
        segments.push(ValidInterval::new(offset, offset + iv.len() - 1));
        offset += iv.len();
    }

    let aligned_x = merger.interpolated_y_values_for_all_x_values(0).unwrap_or(&[]);
    let aligned_y = merger.interpolated_y_values_for_all_x_values(1).unwrap_or(&[]);

    Ok(CrossPlot {
        time_steps: values_by_intervals(merger.all_x_values(), intervals),
        x: values_by_intervals(aligned_x, intervals),
        y: values_by_intervals(aligned_y, intervals),
        segments,
    })
}

/// Read both vectors and pair them with [`cross_plot`].
///
/// # Errors
/// Reader failures and malformed reader output are tagged with the reader name;
/// otherwise as [`cross_plot`].
pub fn cross_plot_from_readers(
    x_reader: &dyn SummaryReader,
    x_address: &SummaryAddress,
    y_reader: &dyn SummaryReader,
    y_address: &SummaryAddress,
    method: InterpolationMethod,
) -> Result<CrossPlot, SummaError> {
    let x = read_curve(x_reader, x_address)?;
    let y = read_curve(y_reader, y_address)?;
    cross_plot(x, y, method)
}

fn read_curve(
    reader: &dyn SummaryReader,
    address: &SummaryAddress,
) -> Result<Curve<i64>, SummaError> {
    let (time_steps, values) = reader
        .series(address)
        .map_err(|e| e.tagged(reader.name()))?;
    Curve::new(time_steps, values).map_err(|e| e.tagged(reader.name()))
}
