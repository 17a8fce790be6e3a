use std::collections::BTreeSet;

use crate::{SummaError, SummaryAddress};

/// Source of summary vectors: a simulation case, a derived case, or a mock.
///
/// Time steps are seconds since the Unix epoch, strictly increasing, and
/// `values(address)` has the same length as `time_steps(address)`.
pub trait SummaryReader: Send + Sync {
    /// Human-readable reader name, used for error tagging and logs.
    fn name(&self) -> &str;

    /// True if the reader can serve `address`.
    fn has_address(&self, address: &SummaryAddress) -> bool;

    /// Time steps of the vector at `address`.
    ///
    /// # Errors
    /// Returns `NotFound` if the address is not served, or a reader-specific error.
    fn time_steps(&self, address: &SummaryAddress) -> Result<Vec<i64>, SummaError>;

    /// Values of the vector at `address`, parallel to [`Self::time_steps`].
    ///
    /// # Errors
    /// Returns `NotFound` if the address is not served, or a reader-specific error.
    fn values(&self, address: &SummaryAddress) -> Result<Vec<f64>, SummaError>;

    /// Every address this reader can serve.
    fn all_addresses(&self) -> BTreeSet<SummaryAddress>;

    /// Time steps and values together.
    ///
    /// # Errors
    /// Propagates errors from [`Self::time_steps`] and [`Self::values`].
    fn series(&self, address: &SummaryAddress) -> Result<(Vec<i64>, Vec<f64>), SummaError> {
        Ok((self.time_steps(address)?, self.values(address)?))
    }
}
