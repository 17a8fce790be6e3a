use std::collections::BTreeSet;

use proptest::prelude::*;
use summa_core::{
    MISSING_VALUE, TimeHistoryCurveMerger, calculate_intervals_of_valid_values, is_valid_value,
};

fn arb_curve() -> impl Strategy<Value = (Vec<i64>, Vec<f64>)> {
    (
        proptest::collection::btree_set(-1_000i64..1_000i64, 0..40),
        proptest::collection::vec(prop_oneof![9 => -1.0e6f64..1.0e6f64, 1 => Just(MISSING_VALUE)], 40),
    )
        .prop_map(|(ts, vals)| {
            let ts: Vec<i64> = ts.into_iter().collect();
            let vals = vals.into_iter().take(ts.len()).collect();
            (ts, vals)
        })
}

fn merged(curves: &[(Vec<i64>, Vec<f64>)], extend: bool) -> TimeHistoryCurveMerger {
    let mut m = TimeHistoryCurveMerger::new();
    for (t, v) in curves {
        m.add_curve_data(t.clone(), v.clone()).unwrap();
    }
    m.compute_interpolated_values(extend);
    m
}

proptest! {
    #[test]
    fn axis_is_sorted_union(curves in proptest::collection::vec(arb_curve(), 0..5)) {
        let m = merged(&curves, true);
        let expected: BTreeSet<i64> = curves.iter().flat_map(|(t, _)| t.iter().copied()).collect();
        let expected: Vec<i64> = expected.into_iter().collect();
        prop_assert_eq!(m.all_x_values(), expected.as_slice());
    }

    #[test]
    fn aligned_vectors_match_axis_length(curves in proptest::collection::vec(arb_curve(), 1..5)) {
        let m = merged(&curves, true);
        prop_assert_eq!(m.curve_count(), curves.len());
        for i in 0..curves.len() {
            let aligned = m.interpolated_y_values_for_all_x_values(i).unwrap();
            prop_assert_eq!(aligned.len(), m.all_x_values().len());
        }
    }

    #[test]
    fn own_samples_are_reproduced_exactly(curves in proptest::collection::vec(arb_curve(), 1..5)) {
        let m = merged(&curves, true);
        let axis = m.all_x_values();
        for (ci, (ts, vals)) in curves.iter().enumerate() {
            let aligned = m.interpolated_y_values_for_all_x_values(ci).unwrap();
            for (t, v) in ts.iter().zip(vals) {
                let idx = axis.binary_search(t).unwrap();
                if is_valid_value(*v) {
                    prop_assert_eq!(aligned[idx].to_bits(), v.to_bits());
                } else {
                    prop_assert_eq!(aligned[idx], MISSING_VALUE);
                }
            }
        }
    }

    #[test]
    fn outside_domain_is_missing(curves in proptest::collection::vec(arb_curve(), 1..5)) {
        let m = merged(&curves, true);
        let axis = m.all_x_values();
        for (ci, (ts, _)) in curves.iter().enumerate() {
            let aligned = m.interpolated_y_values_for_all_x_values(ci).unwrap();
            for (i, x) in axis.iter().enumerate() {
                let outside = ts.first().is_none_or(|f| x < f) || ts.last().is_none_or(|l| x > l);
                if outside {
                    prop_assert_eq!(aligned[i], MISSING_VALUE);
                }
            }
        }
    }

    #[test]
    fn intervals_are_maximal_runs_of_joint_validity(curves in proptest::collection::vec(arb_curve(), 1..5)) {
        let m = merged(&curves, true);
        let n = m.all_x_values().len();
        let joint: Vec<f64> = (0..n)
            .map(|i| {
                let all = (0..curves.len())
                    .all(|c| is_valid_value(m.interpolated_y_values_for_all_x_values(c).unwrap()[i]));
                if all { 1.0 } else { MISSING_VALUE }
            })
            .collect();
        let expected = calculate_intervals_of_valid_values(&joint, false);
        prop_assert_eq!(m.valid_intervals_for_all_x_values(), expected.as_slice());

        let mut prev_end: Option<usize> = None;
        for iv in m.valid_intervals_for_all_x_values() {
            prop_assert!(iv.start <= iv.end);
            if let Some(p) = prev_end {
                // A gap of at least one invalid index separates consecutive intervals.
                prop_assert!(iv.start > p + 1);
            }
            prev_end = Some(iv.end);
        }
    }

    #[test]
    fn compute_is_idempotent(curves in proptest::collection::vec(arb_curve(), 0..5), extend in any::<bool>()) {
        let mut m = merged(&curves, extend);
        let axis = m.all_x_values().to_vec();
        let intervals = m.valid_intervals_for_all_x_values().to_vec();
        let aligned: Vec<Vec<u64>> = (0..m.curve_count())
            .map(|i| m.interpolated_y_values_for_all_x_values(i).unwrap().iter().map(|v| v.to_bits()).collect())
            .collect();

        m.compute_interpolated_values(extend);

        prop_assert_eq!(m.all_x_values(), axis.as_slice());
        prop_assert_eq!(m.valid_intervals_for_all_x_values(), intervals.as_slice());
        for (i, a) in aligned.iter().enumerate() {
            let again: Vec<u64> = m.interpolated_y_values_for_all_x_values(i).unwrap().iter().map(|v| v.to_bits()).collect();
            prop_assert_eq!(&again, a);
        }
    }

    #[test]
    fn clipped_axis_is_subset_inside_every_domain(curves in proptest::collection::vec(arb_curve(), 1..5)) {
        let full = merged(&curves, true);
        let clipped = merged(&curves, false);
        for x in clipped.all_x_values() {
            prop_assert!(full.all_x_values().binary_search(x).is_ok());
            for (ts, _) in &curves {
                prop_assert!(ts.first().is_some_and(|f| f <= x));
                prop_assert!(ts.last().is_some_and(|l| x <= l));
            }
        }
    }
}
