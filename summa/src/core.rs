use std::collections::BTreeSet;
use std::sync::Arc;

use moka::sync::Cache;
use summa_core::{
    DerivedCaseConfig, DerivedOperand, DerivedOperator, DerivedSeries, SummaError, SummaryAddress,
    SummaryReader, calculate_derived_values,
};

/// A summary case whose vectors are the difference (or sum) of two other cases.
///
/// Results are computed lazily per address and cached. A result without a single
/// valid value is never cached, so the next request recomputes it.
pub struct DerivedCase {
    name: String,
    first: Option<Arc<dyn SummaryReader>>,
    second: Option<Arc<dyn SummaryReader>>,
    cfg: DerivedCaseConfig,
    cache: Cache<SummaryAddress, Arc<DerivedSeries>>,
}

/// Builder for constructing a [`DerivedCase`].
pub struct DerivedCaseBuilder {
    name: Option<String>,
    first: Option<Arc<dyn SummaryReader>>,
    second: Option<Arc<dyn SummaryReader>>,
    cfg: DerivedCaseConfig,
}

impl Default for DerivedCaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DerivedCaseBuilder {
    /// Create a new builder: no readers, `Subtract`, no fixed time steps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            first: None,
            second: None,
            cfg: DerivedCaseConfig::default(),
        }
    }

    /// Display name of the derived case. Defaults to `"<first> - <second>"`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Reader providing the first operand.
    #[must_use]
    pub fn first(mut self, reader: Arc<dyn SummaryReader>) -> Self {
        self.first = Some(reader);
        self
    }

    /// Reader providing the second operand.
    #[must_use]
    pub fn second(mut self, reader: Arc<dyn SummaryReader>) -> Self {
        self.second = Some(reader);
        self
    }

    /// Operator combining the two operands.
    #[must_use]
    pub const fn operator(mut self, operator: DerivedOperator) -> Self {
        self.cfg.operator = operator;
        self
    }

    /// Hold the first operand at raw sample `index` for every point.
    #[must_use]
    pub const fn fixed_time_step_first(mut self, index: Option<usize>) -> Self {
        self.cfg.fixed_time_step_first = index;
        self
    }

    /// Hold the second operand at raw sample `index` for every point.
    #[must_use]
    pub const fn fixed_time_step_second(mut self, index: Option<usize>) -> Self {
        self.cfg.fixed_time_step_second = index;
        self
    }

    /// Maximum number of addresses kept in the result cache.
    #[must_use]
    pub const fn cache_capacity(mut self, capacity: u64) -> Self {
        self.cfg.cache_capacity = capacity;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: DerivedCaseConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the derived case.
    ///
    /// # Errors
    /// Returns `InvalidArg` if neither operand reader has been set.
    pub fn build(self) -> Result<DerivedCase, SummaError> {
        if self.first.is_none() && self.second.is_none() {
            return Err(SummaError::InvalidArg(
                "no readers registered; set at least one via first(...) or second(...)"
                    .to_string(),
            ));
        }

        let name = self.name.unwrap_or_else(|| {
            default_name(
                self.first.as_deref(),
                self.second.as_deref(),
                self.cfg.operator,
            )
        });

        Ok(DerivedCase {
            name,
            cache: Cache::new(self.cfg.cache_capacity),
            first: self.first,
            second: self.second,
            cfg: self.cfg,
        })
    }
}

fn default_name(
    first: Option<&dyn SummaryReader>,
    second: Option<&dyn SummaryReader>,
    operator: DerivedOperator,
) -> String {
    let symbol = operator.symbol();
    let first = first.map_or("(none)", |r| r.name());
    let second = second.map_or("(none)", |r| r.name());
    format!("{first} {symbol} {second}")
}

impl DerivedCase {
    /// Start building a new `DerivedCase`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use summa::{DerivedCase, DerivedOperator};
    /// use summa_mock::MockSummaryReader;
    ///
    /// let delta = DerivedCase::builder()
    ///     .first(Arc::new(MockSummaryReader::new("PRED")))
    ///     .second(Arc::new(MockSummaryReader::new("BASE")))
    ///     .operator(DerivedOperator::Subtract)
    ///     .build()?;
    /// let fopt = delta.calculate(&"FOPT".parse()?)?;
    /// ```
    #[must_use]
    pub fn builder() -> DerivedCaseBuilder {
        DerivedCaseBuilder::new()
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &DerivedCaseConfig {
        &self.cfg
    }

    /// Operator combining the operands.
    #[must_use]
    pub const fn operator(&self) -> DerivedOperator {
        self.cfg.operator
    }

    /// First operand reader, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Arc<dyn SummaryReader>> {
        self.first.as_ref()
    }

    /// Second operand reader, if any.
    #[must_use]
    pub fn second(&self) -> Option<&Arc<dyn SummaryReader>> {
        self.second.as_ref()
    }

    /// Change the operator. Cached results are dropped if it differs.
    pub fn set_operator(&mut self, operator: DerivedOperator) {
        if self.cfg.operator != operator {
            self.cfg.operator = operator;
            self.clear_cache();
        }
    }

    /// Change the fixed time step overrides. Cached results are dropped if they differ.
    pub fn set_fixed_time_steps(&mut self, first: Option<usize>, second: Option<usize>) {
        if self.cfg.fixed_time_step_first != first || self.cfg.fixed_time_step_second != second {
            self.cfg.fixed_time_step_first = first;
            self.cfg.fixed_time_step_second = second;
            self.clear_cache();
        }
    }

    /// Replace both operand readers and drop every cached result.
    pub fn set_readers(
        &mut self,
        first: Option<Arc<dyn SummaryReader>>,
        second: Option<Arc<dyn SummaryReader>>,
    ) {
        self.first = first;
        self.second = second;
        self.clear_cache();
    }

    /// Drop every cached result.
    pub fn clear_cache(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(case = %self.name, "clearing derived result cache");
        self.cache.invalidate_all();
    }

    /// Cached result for `address`, without computing it.
    #[must_use]
    pub fn cached(&self, address: &SummaryAddress) -> Option<Arc<DerivedSeries>> {
        self.cache.get(address)
    }

    /// Derived series for `address`, from the cache or freshly computed.
    ///
    /// # Errors
    /// Propagates operand reader failures, tagged with the failing reader's name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "summa::core::calculate",
            skip(self, address),
            fields(case = %self.name, address = %address),
        )
    )]
    pub fn calculate(&self, address: &SummaryAddress) -> Result<Arc<DerivedSeries>, SummaError> {
        if let Some(hit) = self.cache.get(address) {
            return Ok(hit);
        }

        let first = DerivedOperand::from_option(self.first.as_deref())
            .fixed_at(self.cfg.fixed_time_step_first);
        let second = DerivedOperand::from_option(self.second.as_deref())
            .fixed_at(self.cfg.fixed_time_step_second);
        let series = Arc::new(calculate_derived_values(
            first,
            second,
            self.cfg.operator,
            address,
        )?);

        if series.has_valid_values() {
            self.cache.insert(address.clone(), Arc::clone(&series));
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("no valid values; result not cached");
            self.cache.invalidate(address);
        }
        Ok(series)
    }
}

impl SummaryReader for DerivedCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_address(&self, address: &SummaryAddress) -> bool {
        self.first.iter().chain(&self.second).any(|r| r.has_address(address))
    }

    fn time_steps(&self, address: &SummaryAddress) -> Result<Vec<i64>, SummaError> {
        self.series(address).map(|(t, _)| t)
    }

    fn values(&self, address: &SummaryAddress) -> Result<Vec<f64>, SummaError> {
        self.series(address).map(|(_, v)| v)
    }

    fn all_addresses(&self) -> BTreeSet<SummaryAddress> {
        self.first
            .iter()
            .chain(&self.second)
            .flat_map(|r| r.all_addresses())
            .collect()
    }

    fn series(&self, address: &SummaryAddress) -> Result<(Vec<i64>, Vec<f64>), SummaError> {
        if !self.has_address(address) {
            return Err(SummaError::not_found(format!("{address} in {}", self.name)));
        }
        let series = self.calculate(address)?;
        Ok((series.time_steps.clone(), series.values.clone()))
    }
}
