//! summa-core
//!
//! Core types, traits, and numeric routines shared across the summa workspace.
//!
//! - `types`: error, configuration, addresses, and the missing-value sentinel.
//! - `reader`: the `SummaryReader` trait implemented by every vector source.
//! - `timeseries`: merge unevenly sampled curves onto one master axis.
//! - `derived`: combine two readers' vectors by subtraction or addition.
//!
//! Threading
//! ---------
//! Every routine here is synchronous and runs to completion on the calling
//! thread. A `CurveMerger` owns its curves exclusively; share results, not
//! mergers, or serialize access externally.
//!
#![warn(missing_docs)]

/// Derived-series combination of two readers.
pub mod derived;
/// Summary reader abstraction.
pub mod reader;
/// Time-series utilities for merging and resampling.
pub mod timeseries;
pub mod types;

pub use derived::{DerivedOperand, calculate_derived_values};
pub use reader::SummaryReader;
#[cfg(feature = "dataframe")]
pub use timeseries::frame::ToDataFrame;
pub use timeseries::axis::{AxisValue, union_of_x_values};
pub use timeseries::curve::Curve;
pub use timeseries::interpolate::interpolated_y_value;
pub use timeseries::intervals::{
    ValidInterval, calculate_intervals_of_valid_values, values_by_intervals,
};
pub use timeseries::merge::{CurveMerger, TimeHistoryCurveMerger};
pub use types::*;
