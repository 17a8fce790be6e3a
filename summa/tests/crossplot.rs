use summa::{
    Curve, InterpolationMethod, MISSING_VALUE, SummaError, SummaryAddress, ValidInterval,
    cross_plot, cross_plot_from_readers,
};
use summa_mock::{FAIL_VECTOR, MockSummaryReader};

const LINEAR: InterpolationMethod = InterpolationMethod::Linear;

fn addr(s: &str) -> SummaryAddress {
    s.parse().unwrap()
}

#[test]
fn same_axis_pairs_every_point() {
    let base = MockSummaryReader::new("BASE");
    let cp = cross_plot_from_readers(&base, &addr("FOPT"), &base, &addr("FWCT"), LINEAR).unwrap();
    assert_eq!(cp.len(), 5);
    assert_eq!(cp.x, vec![0.0, 1000.0, 2100.0, 3300.0, 4600.0]);
    assert_eq!(cp.y, vec![0.0, 0.02, 0.05, 0.09, 0.14]);
    assert_eq!(cp.segments, vec![ValidInterval::new(0, 4)]);
}

#[test]
fn missing_sample_splits_the_curve() {
    let base = MockSummaryReader::new("BASE");
    let cp =
        cross_plot_from_readers(&base, &addr("FOPT"), &base, &addr("WOPR:OP_1"), LINEAR).unwrap();
    assert_eq!(cp.len(), 4);
    assert_eq!(cp.x, vec![0.0, 1000.0, 3300.0, 4600.0]);
    assert_eq!(cp.y, vec![10.0, 12.0, 15.0, 14.0]);
    assert_eq!(
        cp.segments,
        vec![ValidInterval::new(0, 1), ValidInterval::new(2, 3)]
    );
}

#[test]
fn differently_sampled_cases_pair_inside_the_common_range() {
    let base = MockSummaryReader::new("BASE");
    let pred = MockSummaryReader::new("PRED");
    let cp = cross_plot_from_readers(&base, &addr("FOPT"), &pred, &addr("FOPT"), LINEAR).unwrap();
    // Union of 5 and 6 time steps sharing Jan 1; PRED's Jun 1 lies past BASE.
    assert_eq!(cp.len(), 9);
    assert!(cp.x.iter().chain(&cp.y).all(|v| *v != MISSING_VALUE));
    assert!(cp.time_steps.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn disjoint_cases_report_their_date_ranges() {
    let base = MockSummaryReader::new("BASE");
    let hist = MockSummaryReader::new("HIST");
    let err =
        cross_plot_from_readers(&hist, &addr("FOPT"), &base, &addr("FOPT"), LINEAR).unwrap_err();
    assert_eq!(
        err,
        SummaError::no_overlap("2019-06-01 .. 2019-12-01", "2020-01-01 .. 2020-05-01")
    );
}

#[test]
fn empty_curve_has_no_overlap() {
    let x = Curve::new(vec![], vec![]).unwrap();
    let y = Curve::new(vec![0, 10], vec![1.0, 2.0]).unwrap();
    let err = cross_plot(x, y, LINEAR).unwrap_err();
    match err {
        SummaError::NoOverlap { x_range, .. } => assert_eq!(x_range, "no samples"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn reader_failure_is_tagged() {
    let base = MockSummaryReader::new("BASE");
    let err = cross_plot_from_readers(
        &base,
        &SummaryAddress::field(FAIL_VECTOR).unwrap(),
        &base,
        &addr("FOPT"),
        LINEAR,
    )
    .unwrap_err();
    assert!(matches!(err, SummaError::Reader { ref reader, .. } if reader == "BASE"));
}
