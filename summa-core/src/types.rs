//! Re-export of foundational types from `summa-types`.
// Consolidated re-exports so downstream crates can depend on `summa-core` only

pub use summa_types::{DerivedSeries, SummaError, SummaryAddress};
pub use summa_types::{
    DerivedCaseConfig, DerivedOperator, InterpolationMethod, PercentileStyle, StatisticsConfig,
};
pub use summa_types::{MISSING_VALUE, is_valid_value, normalize_missing};
