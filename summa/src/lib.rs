//! Summa combines reservoir summary vectors that were sampled on different time axes.
//!
//! Overview
//! - [`DerivedCase`] presents the difference (or sum) of two summary cases as a
//!   summary case of its own, with per-address result caching.
//! - [`cross_plot`] pairs an X and a Y curve at the time steps where both are valid.
//! - [`stack_curves`] accumulates curves into stacked layers.
//! - [`ensemble_statistics`] reduces realizations to min/max/mean/P10/P50/P90 curves.
//!
//! All of them run the same merge pipeline from `summa_core`: build the union of the
//! curves' time steps, resample each curve onto it, and find the index runs where
//! every curve is valid. Missing data is the [`MISSING_VALUE`] sentinel, never an error.
//!
//! Key behaviors and trade-offs
//! - Derived results without a single valid value are not cached; they are recomputed
//!   on the next request so a reader that gains data is picked up.
//! - Changing the operator, the fixed time steps, or the readers of a `DerivedCase`
//!   drops its whole cache.
//! - Cross-plots report `NoOverlap` instead of returning an empty curve.
//!
//! Examples
//! Building a delta case from two readers:
//! ```rust,ignore
//! use std::sync::Arc;
//! use summa::{DerivedCase, DerivedOperator, SummaryReader};
//!
//! let delta = DerivedCase::builder()
//!     .first(pred.clone())
//!     .second(base.clone())
//!     .operator(DerivedOperator::Subtract)
//!     .build()?;
//! let (time_steps, values) = delta.series(&"FOPT".parse()?)?;
//! ```
//!
//! Cross-plotting water cut against cumulative oil:
//! ```rust,ignore
//! use summa::{InterpolationMethod, cross_plot_from_readers};
//!
//! let points = cross_plot_from_readers(
//!     base.as_ref(), &"FOPT".parse()?,
//!     base.as_ref(), &"FWCT".parse()?,
//!     InterpolationMethod::Linear,
//! )?;
//! ```
//!
//! See `summa/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod crossplot;
mod ensemble;
mod stack;

pub use core::{DerivedCase, DerivedCaseBuilder};
pub use crossplot::{CrossPlot, cross_plot, cross_plot_from_readers};
pub use ensemble::{EnsembleStatistics, ensemble_statistics};
pub use stack::{StackedCurves, stack_curves};

// Re-export core types for convenience
pub use summa_core::{
    AxisValue, Curve, CurveMerger, DerivedCaseConfig, DerivedOperand, DerivedOperator,
    DerivedSeries, InterpolationMethod, MISSING_VALUE, PercentileStyle, StatisticsConfig,
    SummaError, SummaryAddress, SummaryReader, TimeHistoryCurveMerger, ValidInterval,
    calculate_derived_values, calculate_intervals_of_valid_values, interpolated_y_value,
    is_valid_value, normalize_missing, values_by_intervals,
};
#[cfg(feature = "dataframe")]
pub use summa_core::ToDataFrame;
