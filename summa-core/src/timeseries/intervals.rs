use serde::{Deserialize, Serialize};

use summa_types::is_valid_value;

/// Inclusive index range `[start, end]` into a master axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidInterval {
    /// First index of the run.
    pub start: usize,
    /// Last index of the run (inclusive).
    pub end: usize,
}

impl ValidInterval {
    /// Construct an interval. An interval with `start > end` covers nothing.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered; zero for an inverted interval.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    /// True only for an inverted interval; the finders never produce one.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// True if `index` lies inside the interval.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Maximal runs of consecutive `true` entries, ascending and non-overlapping.
pub fn intervals_from_mask<I>(mask: I) -> Vec<ValidInterval>
where
    I: IntoIterator<Item = bool>,
{
    let mut out = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut len = 0usize;

    for (i, valid) in mask.into_iter().enumerate() {
        match (valid, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                out.push(ValidInterval::new(start, i - 1));
                run_start = None;
            }
            _ => {}
        }
        len = i + 1;
    }
    if let Some(start) = run_start {
        out.push(ValidInterval::new(start, len - 1));
    }
    out
}

/// Maximal runs of valid values in a single value vector.
///
/// With `positive_only`, values `<= 0` are also treated as missing (used for
/// logarithmic axes).
#[must_use]
pub fn calculate_intervals_of_valid_values(
    values: &[f64],
    positive_only: bool,
) -> Vec<ValidInterval> {
    intervals_from_mask(
        values
            .iter()
            .map(|&v| is_valid_value(v) && (!positive_only || v > 0.0)),
    )
}

/// Concatenate the slices of `values` covered by `intervals`, in interval order.
///
/// Intervals reaching past the end of `values` are truncated; inverted ones are skipped.
#[must_use]
pub fn values_by_intervals<T: Copy>(values: &[T], intervals: &[ValidInterval]) -> Vec<T> {
    let mut out = Vec::new();
    for iv in intervals {
        if iv.is_empty() || iv.start >= values.len() {
            continue;
        }
        let end = iv.end.min(values.len() - 1);
        out.extend_from_slice(&values[iv.start..=end]);
    }
    out
}
