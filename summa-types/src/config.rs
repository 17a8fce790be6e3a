//! Configuration types shared by the merge engine and derived cases.

use serde::{Deserialize, Serialize};

/// How a curve is evaluated between two bracketing samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InterpolationMethod {
    /// Straight line between the bracketing samples.
    #[default]
    Linear,
    /// Hold the left bracketing sample's value until the next sample.
    Step,
}

/// Arithmetic applied by a derived series to its two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DerivedOperator {
    /// First operand minus second operand.
    #[default]
    Subtract,
    /// First operand plus second operand.
    Add,
}

impl DerivedOperator {
    /// Apply the operator to two finite operands.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Subtract => a - b,
            Self::Add => a + b,
        }
    }

    /// Value reported when only the second operand exists.
    ///
    /// The absent first operand counts as zero, so subtraction negates.
    #[must_use]
    pub fn second_only(self, b: f64) -> f64 {
        match self {
            Self::Subtract => -b,
            Self::Add => b,
        }
    }

    /// Infix symbol used in derived case names.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Subtract => '-',
            Self::Add => '+',
        }
    }
}

/// Percentile naming convention used by ensemble statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PercentileStyle {
    /// P10 is the 10th percentile of the ascending distribution (low estimate).
    Regular,
    /// P10 is the value exceeded by 10% of the realizations (high estimate).
    #[default]
    Switched,
}

impl PercentileStyle {
    /// Fractional ranks in the ascending distribution reported as `(P10, P90)`.
    #[must_use]
    pub const fn p10_p90_ranks(self) -> (f64, f64) {
        match self {
            Self::Regular => (0.1, 0.9),
            Self::Switched => (0.9, 0.1),
        }
    }
}

/// Configuration for a derived (delta/sum) summary case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedCaseConfig {
    /// Operator combining the first and second reader.
    pub operator: DerivedOperator,
    /// If set, the first operand is held at this raw sample index for every point.
    pub fixed_time_step_first: Option<usize>,
    /// If set, the second operand is held at this raw sample index for every point.
    pub fixed_time_step_second: Option<usize>,
    /// Maximum number of computed addresses kept in the result cache.
    pub cache_capacity: u64,
}

impl Default for DerivedCaseConfig {
    fn default() -> Self {
        Self {
            operator: DerivedOperator::Subtract,
            fixed_time_step_first: None,
            fixed_time_step_second: None,
            cache_capacity: 1024,
        }
    }
}

/// Configuration for ensemble statistics over merged curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Interpolation used when resampling realizations onto the common axis.
    pub interpolation: InterpolationMethod,
    /// Percentile naming convention.
    pub percentile_style: PercentileStyle,
}
