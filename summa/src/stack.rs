//! Cumulative stacking of curves for stacked area plots.

use summa_core::{Curve, InterpolationMethod, TimeHistoryCurveMerger, is_valid_value};

/// Stacked layers on a shared time axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackedCurves {
    /// Union of every curve's time steps.
    pub time_steps: Vec<i64>,
    /// `layers[i][j]` is the sum of curves `0..=i` at `time_steps[j]`.
    pub layers: Vec<Vec<f64>>,
}

/// Stack `curves` in order.
///
/// Every curve is resampled onto the union axis. A missing value contributes
/// nothing, so that layer repeats the running total of the layers below it.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "summa::stack::stack_curves", skip(curves))
)]
pub fn stack_curves<I>(curves: I, method: InterpolationMethod) -> StackedCurves
where
    I: IntoIterator<Item = Curve<i64>>,
{
    let mut merger = TimeHistoryCurveMerger::with_method(method);
    for curve in curves {
        merger.add_curve(curve);
    }
    merger.compute_interpolated_values(true);

    let mut running = vec![0.0; merger.all_x_values().len()];
    let mut layers = Vec::with_capacity(merger.curve_count());
    for i in 0..merger.curve_count() {
        let aligned = merger.interpolated_y_values_for_all_x_values(i).unwrap_or(&[]);
        for (total, &v) in running.iter_mut().zip(aligned) {
            if is_valid_value(v) {
                *total += v;
            }
        }
        layers.push(running.clone());
    }

    StackedCurves {
        time_steps: merger.all_x_values().to_vec(),
        layers,
    }
}
