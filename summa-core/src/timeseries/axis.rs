use core::cmp::Ordering;
use core::fmt::Debug;

use chrono::{DateTime, Utc};

/// Relative tolerance used when comparing continuous x-values.
pub const RELATIVE_EPSILON: f64 = 1.0e-12;

/// A value usable on the x-axis of a mergeable curve.
///
/// Discrete representations (integer seconds, timestamps) compare exactly;
/// continuous ones absorb floating round-off through a relative tolerance.
pub trait AxisValue: Copy + Debug + PartialOrd {
    /// Total ordering used for sorting and searching.
    fn axis_cmp(&self, other: &Self) -> Ordering;

    /// Equality rule used for de-duplication and exact-match lookup.
    fn axis_eq(&self, other: &Self) -> bool;

    /// Signed distance `later - self`, in the axis' natural unit.
    fn span_to(&self, later: &Self) -> f64;

    /// False for values that cannot be placed on an axis, such as NaN.
    fn is_valid_axis_value(&self) -> bool {
        true
    }
}

impl AxisValue for i64 {
    fn axis_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn axis_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[allow(clippy::cast_precision_loss)]
    fn span_to(&self, later: &Self) -> f64 {
        // i128 holds the difference of any two i64 values.
        (i128::from(*later) - i128::from(*self)) as f64
    }
}

impl AxisValue for f64 {
    fn axis_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn axis_eq(&self, other: &Self) -> bool {
        // Exact check first so that 0.0 == 0.0 holds despite the zero tolerance band.
        self == other || (self - other).abs() < RELATIVE_EPSILON * self.abs().max(other.abs())
    }

    fn span_to(&self, later: &Self) -> f64 {
        later - self
    }

    fn is_valid_axis_value(&self) -> bool {
        self.is_finite()
    }
}

impl AxisValue for DateTime<Utc> {
    fn axis_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn axis_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[allow(clippy::cast_precision_loss)]
    fn span_to(&self, later: &Self) -> f64 {
        let millis = i128::from(later.timestamp_millis()) - i128::from(self.timestamp_millis());
        millis as f64 / 1000.0
    }
}

/// Sorted, duplicate-free union of every x-value in `series`.
///
/// Duplicates are collapsed using [`AxisValue::axis_eq`]; the first value of a
/// run of tolerance-equal values is kept.
#[must_use]
pub fn union_of_x_values<'a, X, I>(series: I) -> Vec<X>
where
    X: AxisValue + 'a,
    I: IntoIterator<Item = &'a [X]>,
{
    let mut all: Vec<X> = series.into_iter().flatten().copied().collect();
    all.sort_by(X::axis_cmp);

    let mut out: Vec<X> = Vec::with_capacity(all.len());
    for x in all {
        match out.last() {
            Some(last) if last.axis_eq(&x) => {}
            _ => out.push(x),
        }
    }
    out
}

/// Drop every axis value that falls outside any of the `(first, last)` domains.
///
/// An empty `domains` slice leaves the axis untouched.
pub fn retain_within_domains<X: AxisValue>(axis: &mut Vec<X>, domains: &[(X, X)]) {
    axis.retain(|x| {
        domains.iter().all(|(lo, hi)| {
            let above_lo = x.axis_cmp(lo) != Ordering::Less || x.axis_eq(lo);
            let below_hi = x.axis_cmp(hi) != Ordering::Greater || x.axis_eq(hi);
            above_lo && below_hi
        })
    });
}
