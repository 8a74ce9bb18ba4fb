//! Integration tests for the complete bounded unit root workflow
//!
//! These tests run the public entry points end to end: simulation, detrending,
//! long-run variance, statistics and critical values, across every selector.

use bounded_unit_root::critical_values::{
    compute_critical_values_with_config, simulated_quantiles, CriticalValueProvider,
};
use bounded_unit_root::detrending::detrend_with_resolver;
use bounded_unit_root::monte_carlo::MonteCarloConfig;
use bounded_unit_root::noncentrality::{
    compute_kappa_table_with_config, CalibrationConfig, NonCentralityResolver, ERS_KAPPA,
};
use bounded_unit_root::prelude::*;
use bounded_unit_root::table_cache::global_table_cache;
use bounded_unit_root::table_grid::BoundGrid;
use bounded_unit_root::TailDirection;
use std::sync::Arc;

fn bounded_random_walk(length: usize, half_width: f64, seed: u64) -> Vec<f64> {
    simulate(length, (-half_width, half_width), 1.0, 1.0, seed).expect("valid simulation settings")
}

/// Test scenario: every detrending method and LRV estimator on one series
///
/// Mirrors a first-use check of the crate: all combinations must produce a
/// complete, internally consistent set of results.
#[test]
fn test_all_method_combinations() {
    let data = bounded_random_walk(250, 6.0, 21);

    for detrending in [DetrendingMethod::Ols, DetrendingMethod::GlsErs, DetrendingMethod::GlsBounds] {
        for lrv_method in [LrvMethod::NonParametric, LrvMethod::Autoregressive] {
            let outcome =
                bounded_unit_root_test(&data, (-6.0, 6.0), StatisticSelector::All, detrending, lrv_method)
                    .unwrap_or_else(|e| panic!("{} / {} failed: {:?}", detrending, lrv_method, e));

            let results = outcome.into_map();
            assert_eq!(results.len(), 4, "all four statistics for {}", detrending);

            for (kind, result) in &results {
                assert_eq!(result.kind, *kind);
                assert_eq!(result.detrending, detrending);
                assert_eq!(result.lrv_method, lrv_method);
                assert_eq!(result.sample_size, 250);
                assert_eq!(result.bounds, (-6.0, 6.0));
                assert!(result.statistic.is_finite());
                assert!(result.lrv.value > 0.0);
                assert!((0.01..=0.99).contains(&result.p_value));

                let cv = result.critical_values;
                match kind.tail() {
                    TailDirection::Left => {
                        assert!(cv.one_pct <= cv.five_pct && cv.five_pct <= cv.ten_pct);
                        assert_eq!(result.reject_5pct, result.statistic < cv.five_pct);
                    }
                    TailDirection::Right => {
                        assert!(cv.one_pct >= cv.five_pct && cv.five_pct >= cv.ten_pct);
                        assert_eq!(result.reject_5pct, result.statistic > cv.five_pct);
                    }
                }
            }

            let kappa = results[&StatisticKind::MzAlpha].kappa;
            match detrending {
                DetrendingMethod::GlsBounds => assert!((-20.0..=-7.0).contains(&kappa)),
                _ => assert_eq!(kappa, ERS_KAPPA),
            }
        }
    }
}

/// Test scenario: strongly mean-reverting bounded series
///
/// A bounded AR(1) with ρ = 0.3 is far from a unit root and must be rejected.
#[test]
fn test_stationary_series_is_rejected() {
    let data = generate_bounded_ar1(500, (-10.0, 10.0), 0.3, 1.0, 100, 4).unwrap();

    for detrending in ["ols", "gls_ers", "gls_bounds"] {
        let outcome = bounded_unit_root_test_str(&data, (-10.0, 10.0), "all", detrending, "np").unwrap();
        for kind in [StatisticKind::MzAlpha, StatisticKind::MzT] {
            let result = outcome.get(kind).unwrap();
            assert!(result.reject_5pct, "{} with {} should reject: {}", kind, detrending, result);
            assert_eq!(result.p_value, 0.01);
        }
    }
}

/// Test scenario: unit root series with wide bounds rarely reject at 1%
///
/// The bounds lie beyond the widest tabulated node, where the tables hold
/// the unbounded values.
#[test]
fn test_unit_root_rarely_rejected() {
    let config = UnitRootTestConfig::fast().with_detrending(DetrendingMethod::GlsErs);
    let rejections = (0..20)
        .filter(|&seed| {
            let data = bounded_random_walk(200, 60.0, 1000 + seed);
            let outcome = bounded_unit_root_test_with_config(&data, (-60.0, 60.0), &config).unwrap();
            outcome.into_single().unwrap().reject_1pct
        })
        .count();
    assert!(rejections <= 5, "{} of 20 unit root series rejected at 1%", rejections);
}

/// Test scenario: identical inputs give identical results
#[test]
fn test_results_are_deterministic() {
    let data = bounded_random_walk(300, 4.0, 77);
    let first = bounded_unit_root_test_str(&data, (-4.0, 4.0), "all", "gls_bounds", "ar").unwrap();
    let second = bounded_unit_root_test_str(&data, (-4.0, 4.0), "all", "gls_bounds", "ar").unwrap();
    assert_eq!(first, second);
}

/// Test scenario: typed and string entry points agree
#[test]
fn test_string_and_typed_entry_points_agree() {
    let data = bounded_random_walk(150, 3.0, 5);
    let typed = bounded_unit_root_test(
        data.clone(),
        (-3.0, 3.0),
        StatisticSelector::Single(StatisticKind::Pt),
        DetrendingMethod::GlsBounds,
        LrvMethod::NonParametric,
    )
    .unwrap();
    let parsed = bounded_unit_root_test_str(data, (-3.0, 3.0), "PT", " gls_bounds ", "NP").unwrap();
    assert_eq!(typed, parsed);
}

/// Test scenario: a user-supplied κ̄ table changes the detrending
#[test]
fn test_custom_kappa_table() {
    let data = bounded_random_walk(200, 5.0, 12);
    let grid = BoundGrid::new(vec![-1.0], vec![1.0]).unwrap();
    let resolver = NonCentralityResolver::from_table(grid, vec![vec![-15.0]]).unwrap();

    let custom = detrend_with_resolver(&data, (-5.0, 5.0), DetrendingMethod::GlsBounds, &resolver).unwrap();
    assert_eq!(custom.kappa, -15.0);

    let ers = detrend_with_resolver(&data, (-5.0, 5.0), DetrendingMethod::GlsErs, &resolver).unwrap();
    assert_eq!(ers.kappa, ERS_KAPPA);
    assert_ne!(custom.mu_hat, ers.mu_hat);
}

/// Test scenario: a custom κ̄ table reaches the full test
///
/// Tabulated critical values assume the embedded table, so the table read is
/// flagged and the default source simulates instead.
#[test]
fn test_custom_kappa_table_drives_the_test() {
    let data = bounded_random_walk(200, 5.0, 12);
    let grid = BoundGrid::new(vec![-1.0], vec![1.0]).unwrap();
    let resolver = NonCentralityResolver::from_table(grid, vec![vec![-15.0]]).unwrap();

    let embedded = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &UnitRootTestConfig::fast())
        .unwrap()
        .into_single()
        .unwrap();
    assert_ne!(embedded.kappa, -15.0);

    let config = UnitRootTestConfig::fast().with_kappa_table(resolver.clone());
    let tabulated = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &config)
        .unwrap()
        .into_single()
        .unwrap();
    assert_eq!(tabulated.kappa, -15.0);
    assert_ne!(tabulated.statistic, embedded.statistic);
    assert_eq!(tabulated.critical_value_source, CriticalValueSource::Tabulated);
    assert!(tabulated.diagnostics.warnings.iter().any(|w| w.contains("custom table")));

    let mut config = UnitRootTestConfig::standard().with_kappa_table(resolver);
    config.monte_carlo.n_sim = 200;
    let simulated = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &config)
        .unwrap()
        .into_single()
        .unwrap();
    assert_eq!(simulated.kappa, -15.0);
    assert_eq!(simulated.statistic, tabulated.statistic);
    assert_eq!(simulated.critical_value_source, CriticalValueSource::Simulated);
}

/// Test scenario: a freshly calibrated κ̄ table is used by the test
#[test]
fn test_calibrated_kappa_table_reaches_the_test() {
    let calibration = CalibrationConfig {
        monte_carlo: MonteCarloConfig {
            n_sim: 100,
            sample_size: 50,
            seed: 77,
            ..Default::default()
        },
        candidates: vec![-7.0, -10.0, -14.0, -20.0],
        ..Default::default()
    };
    let table = compute_kappa_table_with_config(&[0.5, 2.0], &calibration).unwrap();

    let data = bounded_random_walk(200, 5.0, 12);
    let config = UnitRootTestConfig::fast().with_kappa_table(table.clone());
    let result = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &config)
        .unwrap()
        .into_single()
        .unwrap();
    assert_eq!(result.kappa, table.resolve(result.c_lower, result.c_upper).unwrap());
}

/// Test scenario: the default configuration simulates off the grid
///
/// A walk squeezed into a band far narrower than √T standardizes to bounds on
/// the narrow side of the tables, where the default source falls back to
/// Monte Carlo at the observed point.
#[test]
fn test_default_source_simulates_off_the_grid() {
    let data = generate_bounded_ar1(200, (-1.0, 1.0), 1.0, 1.0, 0, 5).unwrap();
    let outcome = bounded_unit_root_test(
        &data,
        (-1.0, 1.0),
        StatisticSelector::Single(StatisticKind::MzAlpha),
        DetrendingMethod::GlsBounds,
        LrvMethod::NonParametric,
    )
    .unwrap();
    let result = outcome.into_single().unwrap();

    let tabulated = CriticalValueProvider::new(DetrendingMethod::GlsBounds)
        .quantiles(StatisticKind::MzAlpha, result.c_lower, result.c_upper)
        .unwrap();
    assert!(tabulated.low_confidence || tabulated.clamped);
    assert_eq!(result.critical_value_source, CriticalValueSource::Simulated);
    assert!(result.diagnostics.low_confidence);
    assert!(result.diagnostics.has_warnings());

    let inside = bounded_random_walk(200, 5.0, 12);
    let result = bounded_unit_root_test_with_config(&inside, (-5.0, 5.0), &UnitRootTestConfig::default())
        .unwrap()
        .into_single()
        .unwrap();
    let tabulated = CriticalValueProvider::new(DetrendingMethod::GlsBounds)
        .quantiles(StatisticKind::MzAlpha, result.c_lower, result.c_upper)
        .unwrap();
    if !tabulated.low_confidence && !tabulated.clamped {
        assert_eq!(result.critical_value_source, CriticalValueSource::Tabulated);
    }
}

/// Test scenario: simulated critical values are computed once
///
/// A repeated request hits the process-wide cache and returns bit-identical
/// values without another Monte Carlo run.
#[test]
fn test_simulated_critical_values_cached() {
    let config = MonteCarloConfig {
        n_sim: 300,
        sample_size: 120,
        seed: 2024,
        ..Default::default()
    };
    let alpha = [0.10, 0.05, 0.01];

    let first = compute_critical_values_with_config(DetrendingMethod::GlsErs, -0.8, 1.3, -7.0, &alpha, &config).unwrap();
    let hits = global_table_cache().stats().hits;
    let second = compute_critical_values_with_config(DetrendingMethod::GlsErs, -0.8, 1.3, -7.0, &alpha, &config).unwrap();

    assert_eq!(first, second);
    assert!(global_table_cache().stats().hits > hits);
    let a = simulated_quantiles(DetrendingMethod::GlsErs, -0.8, 1.3, -7.0, &config).unwrap();
    let b = simulated_quantiles(DetrendingMethod::GlsErs, -0.8, 1.3, -7.0, &config).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let mz_alpha = &first[&StatisticKind::MzAlpha];
    assert!(mz_alpha[2] <= mz_alpha[1] && mz_alpha[1] <= mz_alpha[0]);
    let msb = &first[&StatisticKind::Msb];
    assert!(msb[2] >= msb[1] && msb[1] >= msb[0]);
}

/// Test scenario: configuration presets drive the critical value source
#[test]
fn test_configuration_presets() {
    let data = bounded_random_walk(120, 4.0, 31);

    let tabulated = bounded_unit_root_test_with_config(&data, (-4.0, 4.0), &UnitRootTestConfig::fast()).unwrap();
    let result = tabulated.into_single().unwrap();
    assert_eq!(result.critical_value_source, CriticalValueSource::Tabulated);

    let provider = CriticalValueProvider::new(DetrendingMethod::GlsBounds);
    let expected = provider
        .critical_values(StatisticKind::MzAlpha, result.c_lower, result.c_upper)
        .unwrap();
    assert_eq!(result.critical_values, expected);

    let mut precise = UnitRootTestConfig::precise();
    precise.monte_carlo.n_sim = 200;
    let simulated = bounded_unit_root_test_with_config(&data, (-4.0, 4.0), &precise).unwrap();
    assert_eq!(
        simulated.into_single().unwrap().critical_value_source,
        CriticalValueSource::Simulated
    );
}

/// Test scenario: regulation mechanisms all keep paths inside the bounds
#[test]
fn test_regulation_mechanisms_feed_the_test() {
    use bounded_unit_root::regulated_process::{ProcessConfig, RegulatedProcessSimulator};

    for regulation in [
        RegulationMechanism::Truncation,
        RegulationMechanism::Reflection,
        RegulationMechanism::innovation_regulator(),
    ] {
        let simulator = RegulatedProcessSimulator::new(ProcessConfig {
            length: 200,
            bounds: (0.0, 10.0),
            regulation,
            ..Default::default()
        })
        .unwrap();
        let data = simulator.simulate(8);
        assert!(data.iter().all(|x| (0.0..=10.0).contains(x)), "{:?}", regulation);

        let outcome = bounded_unit_root_test_str(&data, (0.0, 10.0), "mz_t", "gls_bounds", "np").unwrap();
        assert!(outcome.get(StatisticKind::MzT).unwrap().statistic.is_finite());
    }
}
