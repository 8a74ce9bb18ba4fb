//! Integration tests for error handling and invalid input scenarios
//!
//! These tests validate that the bounded unit root test rejects bad inputs
//! with the right error, in the right order, before any computation runs.

use bounded_unit_root::critical_values::compute_critical_values;
use bounded_unit_root::errors::BoundedTestError;
use bounded_unit_root::monte_carlo::MonteCarloConfig;
use bounded_unit_root::noncentrality::{calibrate_kappa, CalibrationConfig};
use bounded_unit_root::prelude::*;
use bounded_unit_root::regulated_process::{ProcessConfig, RegulatedProcessSimulator};

fn walk(length: usize) -> Vec<f64> {
    simulate(length, (-5.0, 5.0), 1.0, 1.0, 42).unwrap()
}

/// Test scenario: reversed bounds
///
/// `(1, 0)` must be reported as a configuration error before detrending or
/// any statistic is computed, whatever else is wrong with the call.
#[test]
fn test_reversed_bounds_rejected_first() {
    let data = walk(100);
    let err = bounded_unit_root_test_str(&data, (1.0, 0.0), "mz_alpha", "gls_bounds", "np").unwrap_err();
    match err {
        BoundedTestError::InvalidBounds { lower, upper } => {
            assert_eq!(lower, 1.0);
            assert_eq!(upper, 0.0);
        }
        other => panic!("Expected InvalidBounds, got {:?}", other),
    }
    assert!(err_is_configuration(&data, (1.0, 0.0)));

    // an unknown selector and unusable data do not mask the bounds error
    let err = bounded_unit_root_test_str(vec![f64::NAN], (1.0, 0.0), "adf", "x", "y").unwrap_err();
    assert!(matches!(err, BoundedTestError::InvalidBounds { .. }));

    // equal and non-finite bounds
    for bounds in [(0.0, 0.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
        let err = bounded_unit_root_test(
            &data,
            bounds,
            StatisticSelector::All,
            DetrendingMethod::Ols,
            LrvMethod::NonParametric,
        )
        .unwrap_err();
        assert!(err.is_configuration_error(), "{:?} for {:?}", err, bounds);
    }
}

fn err_is_configuration(data: &[f64], bounds: (f64, f64)) -> bool {
    bounded_unit_root_test(
        data,
        bounds,
        StatisticSelector::All,
        DetrendingMethod::GlsBounds,
        LrvMethod::NonParametric,
    )
    .map_err(|e| e.is_configuration_error())
    .err()
    .unwrap_or(false)
}

/// Test scenario: unknown selector strings
#[test]
fn test_unknown_selectors() {
    let data = walk(100);
    let cases = [
        ("adf", "ols", "np", "statistic"),
        ("mz_alpha", "gls", "np", "detrending"),
        ("mz_alpha", "ols", "newey_west", "lrv_method"),
    ];
    for (statistic, detrending, lrv, selector_name) in cases {
        match bounded_unit_root_test_str(&data, (-5.0, 5.0), statistic, detrending, lrv) {
            Err(BoundedTestError::UnknownSelector { selector, .. }) => assert_eq!(selector, selector_name),
            other => panic!("Expected UnknownSelector for {}, got {:?}", selector_name, other),
        }
    }
}

/// Test scenario: series too short
///
/// Fewer than 10 observations is fatal; 10 to 29 observations run but are
/// flagged as low reliability.
#[test]
fn test_insufficient_data() {
    let data = walk(9);
    match bounded_unit_root_test_str(&data, (-5.0, 5.0), "mz_alpha", "gls_bounds", "np") {
        Err(BoundedTestError::InsufficientData { required, actual }) => {
            assert_eq!(required, 10);
            assert_eq!(actual, 9);
        }
        other => panic!("Expected InsufficientData, got {:?}", other),
    }

    let empty: Vec<f64> = Vec::new();
    let err = bounded_unit_root_test_str(&empty, (-5.0, 5.0), "mz_alpha", "ols", "np").unwrap_err();
    assert!(err.is_data_error());

    let outcome = bounded_unit_root_test_str(walk(10), (-5.0, 5.0), "all", "gls_bounds", "ar").unwrap();
    for result in outcome.results() {
        assert!(result.diagnostics.low_reliability);
        assert!(result.diagnostics.has_warnings());
    }

    let outcome = bounded_unit_root_test_str(walk(30), (-5.0, 5.0), "mz_alpha", "gls_bounds", "np").unwrap();
    assert!(!outcome.into_single().unwrap().diagnostics.low_reliability);
}

/// Test scenario: NaN and infinite observations
#[test]
fn test_non_finite_values() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut data = walk(100);
        data[37] = bad;
        match bounded_unit_root_test_str(&data, (-5.0, 5.0), "msb", "gls_ers", "np") {
            Err(BoundedTestError::NonFiniteValue { index, .. }) => assert_eq!(index, 37),
            other => panic!("Expected NonFiniteValue, got {:?}", other),
        }
    }
}

/// Test scenario: observations outside the bounds
#[test]
fn test_out_of_bounds() {
    let mut data = walk(100);
    data[50] = 5.5;
    match bounded_unit_root_test_str(&data, (-5.0, 5.0), "mz_alpha", "gls_bounds", "np") {
        Err(BoundedTestError::OutOfBounds { index, value, lower, upper }) => {
            assert_eq!(index, 50);
            assert_eq!(value, 5.5);
            assert_eq!((lower, upper), (-5.0, 5.0));
        }
        other => panic!("Expected OutOfBounds, got {:?}", other),
    }

    // a series entirely outside its bounds
    let shifted: Vec<f64> = walk(100).iter().map(|x| x + 20.0).collect();
    let err = bounded_unit_root_test_str(&shifted, (-5.0, 5.0), "mz_alpha", "ols", "np").unwrap_err();
    assert!(matches!(err, BoundedTestError::OutOfBounds { index: 0, .. }));
    assert!(err.is_data_error());
}

/// Test scenario: invalid configuration values
#[test]
fn test_invalid_configuration() {
    let data = walk(100);

    let mut config = UnitRootTestConfig::standard();
    config.bound_tolerance = -1.0;
    let err = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &config).unwrap_err();
    assert!(matches!(err, BoundedTestError::InvalidParameter { .. }));

    let mut config = UnitRootTestConfig::precise();
    config.monte_carlo.sample_size = 3;
    let err = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &config).unwrap_err();
    assert!(err.is_configuration_error());
}

/// Test scenario: Monte Carlo budget
///
/// Requests that cannot keep 100 replications per simulation inside the
/// path budget fail instead of silently degrading.
#[test]
fn test_budget_exceeded() {
    let config = CalibrationConfig {
        monte_carlo: MonteCarloConfig {
            n_sim: 1000,
            sample_size: 50,
            max_paths: Some(150),
            ..Default::default()
        },
        ..Default::default()
    };
    match calibrate_kappa(-1.0, 1.0, &config) {
        Err(BoundedTestError::BudgetExceeded { required, budget }) => {
            assert_eq!(budget, 150);
            assert!(required > budget);
        }
        other => panic!("Expected BudgetExceeded, got {:?}", other),
    }
}

/// Test scenario: invalid simulation and critical value parameters
#[test]
fn test_invalid_simulation_parameters() {
    let err = RegulatedProcessSimulator::new(ProcessConfig {
        bounds: (2.0, -2.0),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.is_configuration_error());

    assert!(simulate(100, (-1.0, 1.0), 1.0, -1.0, 0).is_err());
    assert!(simulate(100, (-1.0, 1.0), 1.0, f64::NAN, 0).is_err());

    // the null design needs the start strictly inside the bounds
    assert!(compute_critical_values(0.5, 1.0, -7.0, 200, &[0.05]).is_err());
    assert!(compute_critical_values(-1.0, 1.0, -7.0, 200, &[0.7]).is_err());
}
