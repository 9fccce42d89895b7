use numerare::{InvalidInput, Sample};
use toml::Value;

fn sample(vals: &[f64]) -> Sample {
    Sample::new(vals.to_vec()).expect("failed to construct sample")
}

#[test]
fn mean_of_simple_samples() {
    assert_eq!(sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).mean(), 3.0);
    assert_eq!(sample(&[10.0, 20.0, 30.0]).mean(), 20.0);
    assert_eq!(sample(&[5.0]).mean(), 5.0);
    assert_eq!(sample(&[-1.0, 0.0, 1.0]).mean(), 0.0);
}

#[test]
fn median_of_odd_and_even_samples() {
    assert_eq!(sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).median(), 3.0);
    assert_eq!(sample(&[1.0, 2.0, 3.0, 4.0]).median(), 2.5);
    assert_eq!(sample(&[5.0]).median(), 5.0);
    assert_eq!(sample(&[3.0, 1.0, 2.0]).median(), 2.0);
}

#[test]
fn median_is_invariant_under_permutation() {
    let permutations = [
        [1.0, 2.0, 3.0, 4.0, 5.0],
        [5.0, 4.0, 3.0, 2.0, 1.0],
        [3.0, 1.0, 5.0, 2.0, 4.0],
        [2.0, 5.0, 1.0, 4.0, 3.0],
    ];
    for vals in &permutations {
        assert_eq!(sample(vals).median(), 3.0);
    }
}

#[test]
fn mode_of_samples_with_and_without_repeats() {
    assert_eq!(sample(&[1.0, 2.0, 2.0, 3.0, 4.0]).mode(), vec![2.0]);
    assert_eq!(sample(&[1.0, 1.0, 2.0, 2.0, 3.0]).mode(), vec![1.0, 2.0]);
    assert_eq!(sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).mode(), Vec::<f64>::new());
    assert_eq!(sample(&[5.0, 5.0, 5.0]).mode(), vec![5.0]);
}

#[test]
fn mode_is_sorted_ascending() {
    assert_eq!(
        sample(&[4.0, 2.0, 4.0, 2.0, 7.0, 7.0]).mode(),
        vec![2.0, 4.0, 7.0]
    );
}

#[test]
fn variance_and_std_dev_of_simple_samples() {
    let vals = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(vals.variance(), 2.0);
    assert!((vals.std_dev() - 2.0_f64.sqrt()).abs() < 1e-12);

    let flat = sample(&[10.0, 10.0, 10.0]);
    assert_eq!(flat.variance(), 0.0);
    assert_eq!(flat.std_dev(), 0.0);
}

#[test]
fn variance_is_non_negative_and_consistent_with_std_dev() {
    let samples = [
        vec![0.5],
        vec![-3.0, 7.5],
        vec![1.0, 1.0, 2.0, 8.0],
        vec![-2.5, -2.5, -2.5, 4.0, 9.25],
    ];
    for vals in &samples {
        let vals = sample(vals);
        assert!(vals.variance() >= 0.0);
        assert!((vals.std_dev().powi(2) - vals.variance()).abs() < 1e-12);
    }
}

#[test]
fn report_matches_individual_statistics() {
    let vals = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let report = vals.report();

    assert_eq!(report.mean, 3.0);
    assert_eq!(report.median, 3.0);
    assert_eq!(report.mode, Vec::<f64>::new());
    assert_eq!(report.variance, 2.0);
    assert_eq!(report.std_dev, vals.std_dev());
    assert_eq!(report.count, 5);
    assert_eq!(report.min, 1.0);
    assert_eq!(report.max, 5.0);
}

#[test]
fn empty_sample_is_rejected() {
    assert_eq!(Sample::new(Vec::new()).unwrap_err(), InvalidInput::Empty);
    assert_eq!(Sample::from_values(&[]).unwrap_err(), InvalidInput::Empty);
}

#[test]
fn non_finite_values_are_rejected() {
    let error = Sample::new(vec![1.0, f64::NAN]).unwrap_err();
    assert!(matches!(error, InvalidInput::NonNumeric(_)));

    let error = Sample::new(vec![f64::INFINITY]).unwrap_err();
    assert!(matches!(error, InvalidInput::NonNumeric(_)));
}

#[test]
fn from_values_converts_and_validates() {
    let vals = Sample::from_values(&[Value::Integer(1), Value::Float(2.5)])
        .expect("failed to convert values");
    assert_eq!(vals.vals(), &[1.0, 2.5]);

    let error =
        Sample::from_values(&[Value::Integer(1), Value::String("three".to_string())]).unwrap_err();
    assert!(matches!(error, InvalidInput::NonNumeric(_)));

    let error = Sample::from_values(&[Value::Boolean(true)]).unwrap_err();
    assert!(matches!(error, InvalidInput::NonNumeric(_)));
}

#[test]
fn integers_and_equal_floats_share_a_mode_key() {
    let vals = Sample::from_values(&[Value::Integer(1), Value::Float(1.0), Value::Integer(2)])
        .expect("failed to convert values");
    assert_eq!(vals.mode(), vec![1.0]);
}
