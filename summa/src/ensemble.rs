//! Per-time-step statistics across the realizations of an ensemble.

use summa_core::{
    Curve, MISSING_VALUE, StatisticsConfig, TimeHistoryCurveMerger, is_valid_value,
};

/// Statistics curves on the union of the realizations' time steps.
///
/// Every vector has one entry per time step; a time step where no realization
/// has a valid value holds [`MISSING_VALUE`] in every statistic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnsembleStatistics {
    /// Union of every realization's time steps.
    pub time_steps: Vec<i64>,
    /// Smallest valid value.
    pub min: Vec<f64>,
    /// Largest valid value.
    pub max: Vec<f64>,
    /// Arithmetic mean of the valid values.
    pub mean: Vec<f64>,
    /// P10 under the configured [`PercentileStyle`](summa_core::PercentileStyle).
    pub p10: Vec<f64>,
    /// Median.
    pub p50: Vec<f64>,
    /// P90 under the configured [`PercentileStyle`](summa_core::PercentileStyle).
    pub p90: Vec<f64>,
}

impl EnsembleStatistics {
    fn with_len(time_steps: Vec<i64>) -> Self {
        let n = time_steps.len();
        Self {
            time_steps,
            min: vec![MISSING_VALUE; n],
            max: vec![MISSING_VALUE; n],
            mean: vec![MISSING_VALUE; n],
            p10: vec![MISSING_VALUE; n],
            p50: vec![MISSING_VALUE; n],
            p90: vec![MISSING_VALUE; n],
        }
    }
}

/// Linear interpolation between closest ranks of an ascending sample.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return MISSING_VALUE;
    };
    let pos = p * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Compute ensemble statistics over `realizations`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "summa::ensemble::ensemble_statistics",
        skip(realizations),
        fields(style = ?cfg.percentile_style),
    )
)]
#[allow(clippy::cast_precision_loss)]
pub fn ensemble_statistics<I>(realizations: I, cfg: StatisticsConfig) -> EnsembleStatistics
where
    I: IntoIterator<Item = Curve<i64>>,
{
    let mut merger = TimeHistoryCurveMerger::with_method(cfg.interpolation);
    for curve in realizations {
        merger.add_curve(curve);
    }
    merger.compute();

    let mut stats = EnsembleStatistics::with_len(merger.all_x_values().to_vec());
    let (low_rank, high_rank) = cfg.percentile_style.p10_p90_ranks();

    let mut samples = Vec::with_capacity(merger.curve_count());
    for j in 0..stats.time_steps.len() {
        samples.clear();
        samples.extend(
            (0..merger.curve_count())
                .filter_map(|i| merger.interpolated_y_values_for_all_x_values(i))
                .map(|aligned| aligned[j])
                .filter(|v| is_valid_value(*v)),
        );
        if samples.is_empty() {
            continue;
        }
        samples.sort_by(f64::total_cmp);

        stats.min[j] = samples[0];
        stats.max[j] = samples[samples.len() - 1];
        stats.mean[j] = samples.iter().sum::<f64>() / samples.len() as f64;
        stats.p10[j] = percentile(&samples, low_rank);
        stats.p50[j] = percentile(&samples, 0.5);
        stats.p90[j] = percentile(&samples, high_rank);
    }
    stats
}
