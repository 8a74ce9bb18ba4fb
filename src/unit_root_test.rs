//! Bounded unit root test orchestration.
//!
//! Validates the inputs, then runs detrending, long-run variance estimation,
//! the M-statistics and the critical value lookup, and assembles one
//! [`TestResult`] per requested statistic.
//!
//! Validation happens in a fixed order and stops at the first failure:
//! bounds, selectors, length, finiteness, containment. Nothing is computed
//! before all checks pass.

use crate::config::{CriticalValueSource, StatisticSelector, UnitRootTestConfig};
use crate::critical_values::{p_value, simulated_quantiles, CriticalValueProvider, CriticalValues, P_VALUE_RANGE};
use crate::detrending::{detrend_with_resolver, DetrendedSeries, DetrendingMethod};
use crate::errors::{validate_all_finite, validate_bounds, validate_data_length, BoundedResult, BoundedTestError};
use crate::long_run_variance::{estimate_with_config, LrvEstimate, LrvMethod};
use crate::monte_carlo::{MonteCarloConfig, NullQuantiles};
use crate::noncentrality::NonCentralityResolver;
use crate::results::{TestDiagnostics, TestOutcome, TestResult};
use crate::statistics::{compute_m_statistics, MStatistics, StatisticKind};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Range of `|c|` and `c̄` used when simulating critical values; the path
/// must start strictly inside finite bounds.
const SIMULATION_BOUND_RANGE: (f64, f64) = (0.01, 10.0);

/// A configured bounded unit root test.
#[derive(Debug, Clone, Default)]
pub struct BoundedUnitRootTest {
    config: UnitRootTestConfig,
}

/// Where a statistic's quantiles came from, with the grid diagnostics of a table read.
struct Quantiles {
    values: [f64; 9],
    source: CriticalValueSource,
    clamped: bool,
    low_confidence: bool,
}

impl BoundedUnitRootTest {
    /// Test with the given configuration.
    pub fn new(config: UnitRootTestConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &UnitRootTestConfig {
        &self.config
    }

    /// Run the test on `data` with bounds `(b, b̄)`.
    pub fn run(&self, data: &[f64], bounds: (f64, f64)) -> BoundedResult<TestOutcome> {
        validate_bounds(bounds)?;
        self.config.validate()?;
        validate_data_length(data, self.config.min_length)?;
        validate_all_finite(data)?;
        let excursions = check_containment(data, bounds, self.config.bound_tolerance)?;

        let t = data.len();
        let config = &self.config;
        debug!(
            "bounded unit root test: T = {}, bounds = ({}, {}), {} detrending, {} LRV",
            t, bounds.0, bounds.1, config.detrending, config.lrv_method
        );

        let resolver = config
            .kappa_table
            .as_ref()
            .unwrap_or(NonCentralityResolver::embedded());
        let detrended = detrend_with_resolver(data, bounds, config.detrending, resolver)?;
        let lrv = estimate_with_config(&detrended.residuals, config.lrv_method, &config.lrv)?;
        let statistics = compute_m_statistics(&detrended.residuals, lrv.value, detrended.kappa)?;
        debug!(
            "c = {:.4}, c_bar = {:.4}, kappa = {:.4}, lrv = {:.6} (lag {}), statistics = {:?}",
            detrended.c_lower, detrended.c_upper, detrended.kappa, lrv.value, lrv.lag, statistics
        );

        let mut base = TestDiagnostics {
            low_reliability: t < config.reliable_length,
            low_confidence: detrended.low_confidence,
            lrv_degraded: lrv.degraded,
            kappa_clamped: detrended.kappa_clamped,
            degenerate: statistics.degenerate,
            tolerance_excursions: excursions,
            warnings: Vec::new(),
        };
        if base.low_reliability {
            warn!("only {} observations; at least {} are recommended", t, config.reliable_length);
            base.warnings.push(format!(
                "sample size {} is below {}; results are of low reliability",
                t, config.reliable_length
            ));
        }
        if excursions > 0 {
            warn!("{} observations lie outside the bounds within tolerance", excursions);
            base.warnings.push(format!(
                "{} observations lie outside the bounds within the containment tolerance",
                excursions
            ));
        }
        if lrv.degraded {
            base.warnings.push(format!(
                "long-run variance was not positive and was floored at {}",
                lrv.value
            ));
        }
        if detrended.kappa_clamped {
            base.warnings.push(format!(
                "standardized bounds ({:.4}, {:.4}) lie outside the kappa grid; kappa clamped to {:.4}",
                detrended.c_lower, detrended.c_upper, detrended.kappa
            ));
        }
        if detrended.low_confidence {
            base.warnings.push(format!(
                "standardized bounds ({:.4}, {:.4}) lie on the narrow side of the kappa grid; kappa is of low confidence",
                detrended.c_lower, detrended.c_upper
            ));
        }
        if statistics.degenerate {
            warn!("detrended residuals have no variation; no rejection reported");
            base.warnings.push(
                "detrended residuals have no variation; the statistics are degenerate and no rejection is reported"
                    .to_string(),
            );
        }
        if self.custom_kappa() && config.critical_values == CriticalValueSource::Tabulated {
            base.warnings.push(format!(
                "kappa {:.4} comes from a custom table; tabulated critical values assume the embedded table",
                detrended.kappa
            ));
        }
        if config.lrv_method == LrvMethod::Autoregressive && config.critical_values != CriticalValueSource::Simulated {
            debug!("tabulated critical values were simulated with the non-parametric estimator");
        }

        let mut simulated: Option<Arc<NullQuantiles>> = None;
        let provider = CriticalValueProvider::new(config.detrending);

        let mut results = BTreeMap::new();
        for kind in config.statistic.kinds() {
            let quantiles = self.quantiles_for(kind, &provider, &detrended, &mut simulated)?;
            let result = assemble(kind, &statistics, &quantiles, &detrended, &lrv, bounds, config, base.clone());
            results.insert(kind, result);
        }

        Ok(match config.statistic {
            StatisticSelector::Single(kind) => match results.remove(&kind) {
                Some(result) => TestOutcome::Single(result),
                None => {
                    return Err(BoundedTestError::NumericalError {
                        reason: format!("no result for {}", kind),
                        operation: Some("bounded unit root test".to_string()),
                    })
                }
            },
            StatisticSelector::All => TestOutcome::All(results),
        })
    }

    fn quantiles_for(
        &self,
        kind: StatisticKind,
        provider: &CriticalValueProvider,
        detrended: &DetrendedSeries,
        simulated: &mut Option<Arc<NullQuantiles>>,
    ) -> BoundedResult<Quantiles> {
        let tabulated = provider.quantiles(kind, detrended.c_lower, detrended.c_upper)?;
        let simulate = match self.config.critical_values {
            CriticalValueSource::Tabulated => false,
            CriticalValueSource::Simulated => true,
            CriticalValueSource::Auto => tabulated.clamped || tabulated.low_confidence || self.custom_kappa(),
        };
        if !simulate {
            return Ok(Quantiles {
                values: tabulated.values,
                source: CriticalValueSource::Tabulated,
                clamped: tabulated.clamped,
                low_confidence: tabulated.low_confidence,
            });
        }

        // one simulation covers all four statistics
        let null = match simulated {
            Some(null) => Arc::clone(null),
            None => {
                let null = self.simulate_null(detrended)?;
                *simulated = Some(Arc::clone(&null));
                null
            }
        };
        Ok(Quantiles {
            values: *null.quantiles(kind),
            source: CriticalValueSource::Simulated,
            clamped: false,
            low_confidence: false,
        })
    }

    /// GLS-bounds detrending with a κ̄ table the embedded critical values were not simulated under.
    fn custom_kappa(&self) -> bool {
        self.config.kappa_table.is_some() && self.config.detrending == DetrendingMethod::GlsBounds
    }

    fn simulate_null(&self, detrended: &DetrendedSeries) -> BoundedResult<Arc<NullQuantiles>> {
        let (lo, hi) = SIMULATION_BOUND_RANGE;
        let c_lower = if detrended.c_lower.is_nan() {
            -hi
        } else {
            detrended.c_lower.clamp(-hi, -lo)
        };
        let c_upper = if detrended.c_upper.is_nan() {
            hi
        } else {
            detrended.c_upper.clamp(lo, hi)
        };
        let config = MonteCarloConfig {
            sample_size: detrended.residuals.len(),
            lrv: self.config.lrv,
            ..self.config.monte_carlo.clone()
        };
        debug!(
            "simulating critical values at c = {:.4}, c_bar = {:.4}, kappa = {:.4}, T = {}",
            c_lower, c_upper, detrended.kappa, config.sample_size
        );
        simulated_quantiles(detrended.method, c_lower, c_upper, detrended.kappa, &config)
    }
}

/// Count observations outside `[b, b̄]`; any beyond `tolerance · (b̄ - b)` is an error.
fn check_containment(data: &[f64], bounds: (f64, f64), tolerance: f64) -> BoundedResult<usize> {
    let (lower, upper) = bounds;
    let slack = tolerance * (upper - lower);
    let mut excursions = 0;
    for (index, &value) in data.iter().enumerate() {
        if value < lower - slack || value > upper + slack {
            return Err(BoundedTestError::OutOfBounds {
                index,
                value,
                lower,
                upper,
            });
        }
        if value < lower || value > upper {
            excursions += 1;
        }
    }
    Ok(excursions)
}

#[allow(clippy::too_many_arguments)]
fn assemble(
    kind: StatisticKind,
    statistics: &MStatistics,
    quantiles: &Quantiles,
    detrended: &DetrendedSeries,
    lrv: &LrvEstimate,
    bounds: (f64, f64),
    config: &UnitRootTestConfig,
    mut diagnostics: TestDiagnostics,
) -> TestResult {
    let statistic = statistics.get(kind);
    let critical_values = CriticalValues::from_quantiles(kind, &quantiles.values);
    let tail = kind.tail();

    if quantiles.low_confidence {
        diagnostics.low_confidence = true;
        diagnostics.warnings.push(format!(
            "standardized bounds ({:.4}, {:.4}) are narrower than the tabulated grid; critical values are approximate",
            detrended.c_lower, detrended.c_upper
        ));
    }
    if quantiles.clamped && !detrended.kappa_clamped {
        diagnostics.kappa_clamped = true;
        diagnostics.warnings.push(format!(
            "standardized bounds ({:.4}, {:.4}) lie outside the critical value grid; boundary values used",
            detrended.c_lower, detrended.c_upper
        ));
    }

    // a floored denominator carries no evidence against the unit root
    let rejects = |critical_value: f64| !statistics.degenerate && tail.rejects(statistic, critical_value);
    let p = if statistics.degenerate {
        P_VALUE_RANGE.1
    } else {
        p_value(kind, statistic, &quantiles.values)
    };

    TestResult {
        kind,
        name: kind.symbol().to_string(),
        statistic,
        critical_values,
        reject_10pct: rejects(critical_values.ten_pct),
        reject_5pct: rejects(critical_values.five_pct),
        reject_1pct: rejects(critical_values.one_pct),
        p_value: p,
        bounds,
        c_lower: detrended.c_lower,
        c_upper: detrended.c_upper,
        kappa: detrended.kappa,
        lrv: *lrv,
        sample_size: detrended.residuals.len(),
        detrending: detrended.method,
        lrv_method: lrv.method,
        critical_value_source: quantiles.source,
        diagnostics,
    }
}

/// Run the bounded unit root test with the standard configuration.
///
/// # Example
/// ```rust
/// use bounded_unit_root::prelude::*;
///
/// let series = generate_bounded_ar1(200, (-5.0, 5.0), 0.5, 1.0, 50, 7).unwrap();
/// let outcome = bounded_unit_root_test(
///     &series,
///     (-5.0, 5.0),
///     StatisticSelector::Single(StatisticKind::MzAlpha),
///     DetrendingMethod::GlsBounds,
///     LrvMethod::NonParametric,
/// )
/// .unwrap();
/// let result = outcome.get(StatisticKind::MzAlpha).unwrap();
/// assert!(result.p_value >= 0.01 && result.p_value <= 0.99);
/// ```
pub fn bounded_unit_root_test<D: AsRef<[f64]>>(
    data: D,
    bounds: (f64, f64),
    statistic: StatisticSelector,
    detrending: DetrendingMethod,
    lrv_method: LrvMethod,
) -> BoundedResult<TestOutcome> {
    let config = UnitRootTestConfig {
        statistic,
        detrending,
        lrv_method,
        ..UnitRootTestConfig::standard()
    };
    bounded_unit_root_test_with_config(data, bounds, &config)
}

/// Run the bounded unit root test with an explicit configuration.
pub fn bounded_unit_root_test_with_config<D: AsRef<[f64]>>(
    data: D,
    bounds: (f64, f64),
    config: &UnitRootTestConfig,
) -> BoundedResult<TestOutcome> {
    BoundedUnitRootTest::new(config.clone()).run(data.as_ref(), bounds)
}

/// Run the bounded unit root test with string selectors.
///
/// `statistic` is one of `mz_alpha`, `msb`, `mz_t`, `pt`, `all`;
/// `detrending` one of `ols`, `gls_ers`, `gls_bounds`; `lrv_method` one of
/// `np`, `ar`. Unknown selectors are rejected before any data is touched.
pub fn bounded_unit_root_test_str<D: AsRef<[f64]>>(
    data: D,
    bounds: (f64, f64),
    statistic: &str,
    detrending: &str,
    lrv_method: &str,
) -> BoundedResult<TestOutcome> {
    validate_bounds(bounds)?;
    let statistic: StatisticSelector = statistic.parse()?;
    let detrending: DetrendingMethod = detrending.parse()?;
    let lrv_method: LrvMethod = lrv_method.parse()?;
    bounded_unit_root_test(data, bounds, statistic, detrending, lrv_method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regulated_process::{generate_bounded_ar1, simulate};
    use crate::statistics::TailDirection;

    fn random_walk(seed: u64) -> Vec<f64> {
        simulate(200, (-5.0, 5.0), 1.0, 1.0, seed).unwrap()
    }

    #[test]
    fn test_single_statistic_result_is_consistent() {
        let data = random_walk(3);
        let outcome = bounded_unit_root_test(
            &data,
            (-5.0, 5.0),
            StatisticSelector::Single(StatisticKind::MzAlpha),
            DetrendingMethod::GlsBounds,
            LrvMethod::NonParametric,
        )
        .unwrap();
        let result = outcome.into_single().unwrap();

        assert_eq!(result.kind, StatisticKind::MzAlpha);
        assert_eq!(result.sample_size, 200);
        assert!(result.kappa <= -7.0 && result.kappa >= -20.0);
        assert!(result.c_lower < 0.0 && result.c_upper > 0.0);
        assert!(result.lrv.value > 0.0);
        let off_grid = result.diagnostics.low_confidence || result.diagnostics.kappa_clamped;
        let expected = if off_grid {
            CriticalValueSource::Simulated
        } else {
            CriticalValueSource::Tabulated
        };
        assert_eq!(result.critical_value_source, expected);

        let cv = result.critical_values;
        assert!(cv.one_pct <= cv.five_pct && cv.five_pct <= cv.ten_pct);
        assert_eq!(result.reject_5pct, result.statistic < cv.five_pct);
        assert!(!result.reject_1pct || result.reject_5pct);
        assert!(!result.reject_5pct || result.reject_10pct);
    }

    #[test]
    fn test_all_statistics_share_estimates() {
        let data = random_walk(11);
        let outcome = bounded_unit_root_test(
            &data,
            (-5.0, 5.0),
            StatisticSelector::All,
            DetrendingMethod::GlsErs,
            LrvMethod::NonParametric,
        )
        .unwrap();
        let results = outcome.into_map();
        assert_eq!(results.len(), 4);

        let mz_alpha = &results[&StatisticKind::MzAlpha];
        let msb = &results[&StatisticKind::Msb];
        let mz_t = &results[&StatisticKind::MzT];
        assert_eq!(mz_alpha.kappa, -7.0);
        assert_eq!(mz_alpha.lrv, msb.lrv);
        assert!((mz_alpha.statistic * msb.statistic - mz_t.statistic).abs() < 1e-10);
        assert_eq!(msb.tail(), TailDirection::Right);
        assert_eq!(msb.reject_5pct, msb.statistic > msb.critical_values.five_pct);
    }

    #[test]
    fn test_validation_order() {
        // reversed bounds win over every other problem
        let err = bounded_unit_root_test_str(vec![f64::NAN; 3], (1.0, 0.0), "bogus", "ols", "np").unwrap_err();
        assert!(matches!(err, BoundedTestError::InvalidBounds { .. }));

        // selectors before data checks
        let err = bounded_unit_root_test_str(vec![0.0; 3], (-1.0, 1.0), "bogus", "ols", "np").unwrap_err();
        assert!(matches!(err, BoundedTestError::UnknownSelector { .. }));

        // length before finiteness
        let err = bounded_unit_root_test_str(vec![f64::NAN; 3], (-1.0, 1.0), "msb", "ols", "np").unwrap_err();
        assert!(matches!(err, BoundedTestError::InsufficientData { .. }));

        // finiteness before containment
        let mut data = vec![5.0; 20];
        data[4] = f64::NAN;
        let err = bounded_unit_root_test_str(&data, (-1.0, 1.0), "msb", "ols", "np").unwrap_err();
        assert!(matches!(err, BoundedTestError::NonFiniteValue { index: 4, .. }));
    }

    #[test]
    fn test_containment_tolerance() {
        let mut data = random_walk(5);
        let n = data.len();
        data[n - 1] = 5.0 + 1e-7;
        let outcome = bounded_unit_root_test_str(&data, (-5.0, 5.0), "mz_alpha", "gls_bounds", "np").unwrap();
        let result = outcome.into_single().unwrap();
        assert_eq!(result.diagnostics.tolerance_excursions, 1);
        assert!(result.diagnostics.has_warnings());

        data[n - 1] = 5.1;
        let err = bounded_unit_root_test_str(&data, (-5.0, 5.0), "mz_alpha", "gls_bounds", "np").unwrap_err();
        assert!(matches!(err, BoundedTestError::OutOfBounds { index, .. } if index == n - 1));
    }

    #[test]
    fn test_short_series_flagged() {
        let data = generate_bounded_ar1(20, (-3.0, 3.0), 0.3, 1.0, 20, 1).unwrap();
        let outcome = bounded_unit_root_test_str(&data, (-3.0, 3.0), "pt", "gls_ers", "np").unwrap();
        let result = outcome.into_single().unwrap();
        assert!(result.diagnostics.low_reliability);
    }

    #[test]
    fn test_auto_source_uses_tables_inside_grid() {
        let data = random_walk(8);
        let config = UnitRootTestConfig::standard().with_critical_values(CriticalValueSource::Auto);
        let outcome = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &config).unwrap();
        let result = outcome.into_single().unwrap();
        if !result.diagnostics.low_confidence && !result.diagnostics.kappa_clamped {
            assert_eq!(result.critical_value_source, CriticalValueSource::Tabulated);
        }
    }

    #[test]
    fn test_simulated_source() {
        let data = random_walk(9);
        let mut config = UnitRootTestConfig::standard()
            .with_statistic(StatisticSelector::All)
            .with_detrending(DetrendingMethod::GlsErs)
            .with_critical_values(CriticalValueSource::Simulated);
        config.monte_carlo.n_sim = 200;
        let outcome = bounded_unit_root_test_with_config(&data, (-5.0, 5.0), &config).unwrap();
        for result in outcome.results() {
            assert_eq!(result.critical_value_source, CriticalValueSource::Simulated);
            let cv = result.critical_values;
            match result.tail() {
                TailDirection::Left => assert!(cv.one_pct <= cv.ten_pct),
                TailDirection::Right => assert!(cv.one_pct >= cv.ten_pct),
            }
        }
    }

    #[test]
    fn test_check_containment() {
        assert_eq!(check_containment(&[0.0, 1.0, -1.0], (-1.0, 1.0), 1e-6).unwrap(), 0);
        assert_eq!(check_containment(&[1.0 + 1e-7], (-1.0, 1.0), 1e-6).unwrap(), 1);
        assert!(check_containment(&[1.01], (-1.0, 1.0), 1e-6).is_err());
        assert!(check_containment(&[3.0, 4.0], (-1.0, 1.0), 1e-6).is_err());
    }
}
