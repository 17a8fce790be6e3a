use summa_types::{
    DerivedCaseConfig, DerivedOperator, DerivedSeries, InterpolationMethod, PercentileStyle,
    StatisticsConfig, SummaError,
};

#[test]
fn derived_case_config_roundtrip() {
    let cfg = DerivedCaseConfig {
        operator: DerivedOperator::Add,
        fixed_time_step_first: Some(3),
        fixed_time_step_second: None,
        cache_capacity: 16,
    };
    let json = serde_json::to_string(&cfg).expect("serialize config");
    let de: DerivedCaseConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(de, cfg);
}

#[test]
fn defaults_are_subtract_linear_switched() {
    let cfg = DerivedCaseConfig::default();
    assert_eq!(cfg.operator, DerivedOperator::Subtract);
    assert_eq!(cfg.fixed_time_step_first, None);
    assert_eq!(cfg.fixed_time_step_second, None);

    let stats = StatisticsConfig::default();
    assert_eq!(stats.interpolation, InterpolationMethod::Linear);
    assert_eq!(stats.percentile_style, PercentileStyle::Switched);
}

#[test]
fn statistics_config_roundtrip() {
    let cfg = StatisticsConfig {
        interpolation: InterpolationMethod::Step,
        percentile_style: PercentileStyle::Regular,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let de: StatisticsConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(de, cfg);
}

#[test]
fn operator_semantics() {
    assert_eq!(DerivedOperator::Subtract.apply(5.0, 2.0), 3.0);
    assert_eq!(DerivedOperator::Add.apply(5.0, 2.0), 7.0);
    assert_eq!(DerivedOperator::Subtract.second_only(2.0), -2.0);
    assert_eq!(DerivedOperator::Add.second_only(2.0), 2.0);
    assert_eq!(DerivedOperator::Subtract.symbol(), '-');
    assert_eq!(DerivedOperator::Add.symbol(), '+');
}

#[test]
fn percentile_style_ranks() {
    assert_eq!(PercentileStyle::Regular.p10_p90_ranks(), (0.1, 0.9));
    assert_eq!(PercentileStyle::Switched.p10_p90_ranks(), (0.9, 0.1));
    assert_eq!(PercentileStyle::default().p10_p90_ranks(), (0.9, 0.1));
}

#[test]
fn derived_series_roundtrip_and_validity() {
    let s = DerivedSeries::new(vec![1, 2, 3], vec![1.5, -2.0, 0.0]);
    let json = serde_json::to_string(&s).unwrap();
    let de: DerivedSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(de, s);
    assert!(s.has_valid_values());
    assert_eq!(s.len(), 3);

    let missing = DerivedSeries::new(vec![1], vec![summa_types::MISSING_VALUE]);
    assert!(!missing.has_valid_values());
    assert!(!DerivedSeries::default().has_valid_values());
}

#[test]
fn error_roundtrip_and_tagging() {
    let err = SummaError::LengthMismatch { x_len: 3, y_len: 2 };
    let json = serde_json::to_string(&err).unwrap();
    let de: SummaError = serde_json::from_str(&json).unwrap();
    assert_eq!(de, err);
    assert!(err.is_precondition());

    let tagged = SummaError::Data("bad vector".into()).tagged("BASE");
    assert!(matches!(tagged, SummaError::Reader { ref reader, .. } if reader == "BASE"));

    let nf = SummaError::not_found("FOPT").tagged("BASE");
    assert!(matches!(nf, SummaError::NotFound { .. }));
}
