//! Curve merging and resampling onto a common x-axis.
//!
//! Modules include:
//! - `axis`: x-value equality rules and the sorted union of x-values
//! - `curve`: validated input curves
//! - `interpolate`: evaluate one curve at an arbitrary x-value
//! - `merge`: resample every curve onto the master axis
//! - `intervals`: maximal index runs of valid values
/// X-axis value trait and master-axis construction.
pub mod axis;
/// Validated curve storage.
pub mod curve;
/// Polars export (feature `dataframe`).
#[cfg(feature = "dataframe")]
pub mod frame;
/// Single-curve interpolation.
pub mod interpolate;
/// Validity interval detection and filtering.
pub mod intervals;
/// The curve merger.
pub mod merge;
