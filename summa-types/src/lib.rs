//! Summa-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod address;
mod config;
mod error;
mod series;

pub use address::SummaryAddress;
pub use config::{
    DerivedCaseConfig, DerivedOperator, InterpolationMethod, PercentileStyle, StatisticsConfig,
};
pub use error::SummaError;
pub use series::{DerivedSeries, MISSING_VALUE, is_valid_value, normalize_missing};
