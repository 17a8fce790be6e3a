//! Arithmetic combination of two summary vectors on their merged time axis.

use summa_types::{DerivedOperator, DerivedSeries, MISSING_VALUE, is_valid_value, normalize_missing};

use crate::reader::SummaryReader;
use crate::timeseries::merge::TimeHistoryCurveMerger;
use crate::{SummaError, SummaryAddress};

/// One side of a derived calculation.
#[derive(Clone, Copy)]
pub struct DerivedOperand<'a> {
    reader: Option<&'a dyn SummaryReader>,
    fixed_time_step: Option<usize>,
}

impl<'a> DerivedOperand<'a> {
    /// Operand resampled onto the merged axis.
    #[must_use]
    pub const fn new(reader: &'a dyn SummaryReader) -> Self {
        Self {
            reader: Some(reader),
            fixed_time_step: None,
        }
    }

    /// Operand without a reader; behaves like a reader lacking every address.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            reader: None,
            fixed_time_step: None,
        }
    }

    /// Operand from an optional reader.
    #[must_use]
    pub const fn from_option(reader: Option<&'a dyn SummaryReader>) -> Self {
        Self {
            reader,
            fixed_time_step: None,
        }
    }

    /// Hold this operand at raw sample `index` instead of resampling it.
    ///
    /// The index is clamped to the last available sample.
    #[must_use]
    pub const fn fixed_at(mut self, index: Option<usize>) -> Self {
        self.fixed_time_step = index;
        self
    }

    fn reader_with(&self, address: &SummaryAddress) -> Option<&'a dyn SummaryReader> {
        self.reader.filter(|r| r.has_address(address))
    }
}

fn read_series(
    reader: &dyn SummaryReader,
    address: &SummaryAddress,
) -> Result<(Vec<i64>, Vec<f64>), SummaError> {
    reader.series(address).map_err(|e| e.tagged(reader.name()))
}

fn fixed_value(raw: &[f64], index: Option<usize>) -> Option<f64> {
    let last = raw.len().checked_sub(1)?;
    index.map(|i| normalize_missing(raw[i.min(last)]))
}

/// Combine the vector at `address` from two operands.
///
/// Branches:
/// - neither operand serves `address`: empty series;
/// - only the first does: its raw series, unchanged;
/// - only the second does: its raw series, negated for [`DerivedOperator::Subtract`]
///   (missing samples stay [`MISSING_VALUE`]);
/// - both do: both curves are merged onto the union of their time steps and
///   combined point by point. A point is [`MISSING_VALUE`] whenever either operand
///   is missing there.
///
/// # Errors
/// Reader failures and malformed reader output are returned tagged with the
/// reader name.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "summa_core::derived::calculate_derived_values",
        skip(first, second, address),
        fields(address = %address),
    )
)]
pub fn calculate_derived_values(
    first: DerivedOperand<'_>,
    second: DerivedOperand<'_>,
    operator: DerivedOperator,
    address: &SummaryAddress,
) -> Result<DerivedSeries, SummaError> {
    let (r1, r2) = match (first.reader_with(address), second.reader_with(address)) {
        (None, None) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("no operand serves address");
            return Ok(DerivedSeries::default());
        }
        (Some(r1), None) => {
            let (time_steps, values) = read_series(r1, address)?;
            let values = values.into_iter().map(normalize_missing).collect();
            return Ok(DerivedSeries::new(time_steps, values));
        }
        (None, Some(r2)) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(reader = r2.name(), "only the second operand serves address");
            let (time_steps, values) = read_series(r2, address)?;
            let values = values
                .into_iter()
                .map(|v| {
                    if is_valid_value(v) {
                        operator.second_only(v)
                    } else {
                        MISSING_VALUE
                    }
                })
                .collect();
            return Ok(DerivedSeries::new(time_steps, values));
        }
        (Some(r1), Some(r2)) => (r1, r2),
    };

    let (t1, v1) = read_series(r1, address)?;
    let (t2, v2) = read_series(r2, address)?;
    let fixed1 = fixed_value(&v1, first.fixed_time_step);
    let fixed2 = fixed_value(&v2, second.fixed_time_step);

    let mut merger = TimeHistoryCurveMerger::new();
    merger
        .add_curve_data(t1, v1)
        .map_err(|e| e.tagged(r1.name()))?;
    merger
        .add_curve_data(t2, v2)
        .map_err(|e| e.tagged(r2.name()))?;
    merger.compute();

    let aligned1 = merger.interpolated_y_values_for_all_x_values(0).unwrap_or(&[]);
    let aligned2 = merger.interpolated_y_values_for_all_x_values(1).unwrap_or(&[]);

    let values: Vec<f64> = aligned1
        .iter()
        .zip(aligned2)
        .map(|(&a, &b)| {
            let a = fixed1.unwrap_or(a);
            let b = fixed2.unwrap_or(b);
            if is_valid_value(a) && is_valid_value(b) {
                operator.apply(a, b)
            } else {
                MISSING_VALUE
            }
        })
        .collect();

    Ok(DerivedSeries::new(merger.all_x_values().to_vec(), values))
}
