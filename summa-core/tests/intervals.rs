use summa_core::{
    MISSING_VALUE, ValidInterval, calculate_intervals_of_valid_values, values_by_intervals,
};

const H: f64 = MISSING_VALUE;

#[test]
fn runs_of_valid_values() {
    let v = [H, 1.0, 2.0, H, H, 3.0, f64::NAN, 4.0, 5.0];
    assert_eq!(
        calculate_intervals_of_valid_values(&v, false),
        vec![
            ValidInterval::new(1, 2),
            ValidInterval::new(5, 5),
            ValidInterval::new(7, 8),
        ]
    );
}

#[test]
fn all_missing_and_empty_inputs_have_no_runs() {
    assert!(calculate_intervals_of_valid_values(&[], false).is_empty());
    assert!(calculate_intervals_of_valid_values(&[H, f64::NAN, f64::NEG_INFINITY], false).is_empty());
}

#[test]
fn fully_valid_input_is_one_run() {
    let v = [0.0, -1.0, 2.0];
    assert_eq!(
        calculate_intervals_of_valid_values(&v, false),
        vec![ValidInterval::new(0, 2)]
    );
}

#[test]
fn positive_only_drops_non_positive_values() {
    let v = [1.0, 0.0, 2.0, 3.0, -4.0, 5.0];
    assert_eq!(
        calculate_intervals_of_valid_values(&v, true),
        vec![
            ValidInterval::new(0, 0),
            ValidInterval::new(2, 3),
            ValidInterval::new(5, 5),
        ]
    );
}

#[test]
fn values_are_gathered_in_interval_order() {
    let v = [10, 11, 12, 13, 14, 15];
    let iv = [ValidInterval::new(0, 1), ValidInterval::new(4, 5)];
    assert_eq!(values_by_intervals(&v, &iv), vec![10, 11, 14, 15]);
}

#[test]
fn intervals_past_the_end_are_truncated() {
    let v = [1.0, 2.0, 3.0];
    let iv = [ValidInterval::new(2, 9), ValidInterval::new(5, 6)];
    assert_eq!(values_by_intervals(&v, &iv), vec![3.0]);
}

#[test]
fn interval_accessors() {
    let iv = ValidInterval::new(3, 5);
    assert_eq!(iv.len(), 3);
    assert!(!iv.is_empty());
    assert!(iv.contains(3));
    assert!(iv.contains(5));
    assert!(!iv.contains(6));
    assert!(!iv.contains(2));
}

#[test]
fn inverted_intervals_cover_nothing() {
    let iv: ValidInterval = serde_json::from_str(r#"{"start":3,"end":1}"#).unwrap();
    assert_eq!(iv.len(), 0);
    assert!(iv.is_empty());
    assert!(!iv.contains(2));

    let v = [1.0, 2.0, 3.0, 4.0, 5.0];
    let picked = values_by_intervals(&v, &[iv, ValidInterval::new(0, 1)]);
    assert_eq!(picked, vec![1.0, 2.0]);
}
