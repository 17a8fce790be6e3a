//! Mock summary readers for CI-safe tests and examples.
//!
//! [`MockSummaryReader`] serves static fixture cases (`BASE`, `PRED`, `HIST`).
//! [`DynamicMockReader`] defers every answer to a [`DynamicMockController`].
use std::collections::BTreeSet;

use summa_core::{SummaError, SummaryAddress, SummaryReader};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockReader, MockBehavior};

/// Vector name that makes every mock reader fail on read.
pub const FAIL_VECTOR: &str = "FAIL";

/// Mock reader backed by one of the static fixture cases.
///
/// Known cases:
/// - `BASE`: monthly samples Jan..May 2020 with `FOPT`, `FOPR`, `FWCT`, `WOPR:OP_1`
///   (the latter has one missing value).
/// - `PRED`: irregular samples Jan..Jun 2020 with `FOPT`, `FOPR`, `FWCT`, `WGPR:OP_2`.
/// - `HIST`: three samples in late 2019 with `FOPT`, `FOPR`.
///
/// Unknown case names yield an empty reader.
pub struct MockSummaryReader {
    case: String,
}

impl MockSummaryReader {
    /// Reader for the fixture case `case`.
    #[must_use]
    pub fn new(case: impl Into<String>) -> Self {
        Self { case: case.into() }
    }

    fn not_found(&self, address: &SummaryAddress) -> SummaError {
        SummaError::not_found(format!("{address} in {}", self.case))
    }

    fn maybe_fail(&self, address: &SummaryAddress, what: &'static str) -> Result<(), SummaError> {
        if address.vector() == FAIL_VECTOR {
            return Err(SummaError::reader(
                &self.case,
                format!("forced failure: {what}"),
            ));
        }
        Ok(())
    }

    fn key(address: &SummaryAddress) -> String {
        address.to_string()
    }
}

impl SummaryReader for MockSummaryReader {
    fn name(&self) -> &str {
        &self.case
    }

    fn has_address(&self, address: &SummaryAddress) -> bool {
        address.vector() == FAIL_VECTOR
            || fixtures::summary::by_case(&self.case)
                .and_then(|c| c.values(&Self::key(address)))
                .is_some()
    }

    fn time_steps(&self, address: &SummaryAddress) -> Result<Vec<i64>, SummaError> {
        self.maybe_fail(address, "time steps")?;
        let case = fixtures::summary::by_case(&self.case)
            .filter(|c| c.values(&Self::key(address)).is_some())
            .ok_or_else(|| self.not_found(address))?;
        case.time_steps()
    }

    fn values(&self, address: &SummaryAddress) -> Result<Vec<f64>, SummaError> {
        self.maybe_fail(address, "values")?;
        fixtures::summary::by_case(&self.case)
            .and_then(|c| c.values(&Self::key(address)))
            .map(<[f64]>::to_vec)
            .ok_or_else(|| self.not_found(address))
    }

    fn all_addresses(&self) -> BTreeSet<SummaryAddress> {
        fixtures::summary::by_case(&self.case)
            .map(|c| {
                c.vectors
                    .iter()
                    .filter_map(|(name, _)| name.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}
