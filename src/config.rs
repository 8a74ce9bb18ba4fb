//! # Test Configuration
//!
//! Configuration for the bounded unit root test: which statistic to report,
//! how to detrend, how to estimate the long-run variance and where critical
//! values come from.

use crate::detrending::DetrendingMethod;
use crate::errors::{validate_parameter, BoundedResult, BoundedTestError};
use crate::long_run_variance::{LrvConfig, LrvMethod};
use crate::monte_carlo::MonteCarloConfig;
use crate::noncentrality::NonCentralityResolver;
use crate::statistics::StatisticKind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest series the test accepts.
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Shortest series whose result is not flagged as low reliability.
pub const RELIABLE_SAMPLE_SIZE: usize = 30;

/// Containment tolerance as a fraction of the bound width.
pub const DEFAULT_BOUND_TOLERANCE: f64 = 1e-6;

/// Which statistic(s) to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatisticSelector {
    /// One statistic
    Single(StatisticKind),
    /// MZα, MSB, MZt and PT together
    All,
}

impl StatisticSelector {
    /// Statistics selected, in reporting order.
    pub fn kinds(&self) -> Vec<StatisticKind> {
        match self {
            StatisticSelector::Single(kind) => vec![*kind],
            StatisticSelector::All => StatisticKind::ALL.to_vec(),
        }
    }
}

impl Default for StatisticSelector {
    fn default() -> Self {
        StatisticSelector::Single(StatisticKind::MzAlpha)
    }
}

impl From<StatisticKind> for StatisticSelector {
    fn from(kind: StatisticKind) -> Self {
        StatisticSelector::Single(kind)
    }
}

impl fmt::Display for StatisticSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticSelector::Single(kind) => write!(f, "{}", kind),
            StatisticSelector::All => f.write_str("all"),
        }
    }
}

impl FromStr for StatisticSelector {
    type Err = BoundedTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatisticSelector::All);
        }
        s.parse::<StatisticKind>()
            .map(StatisticSelector::Single)
            .map_err(|_| BoundedTestError::UnknownSelector {
                selector: "statistic".to_string(),
                value: s.to_string(),
                expected: "mz_alpha, msb, mz_t, pt, all".to_string(),
            })
    }
}

/// Source of critical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CriticalValueSource {
    /// Embedded tables only
    Tabulated,
    /// Monte Carlo at the observed `(c, c̄)` and sample size
    Simulated,
    /// Tables inside the grid, simulation when the point is clamped, on the
    /// narrow side of the grid, or detrended with a custom κ̄ table
    #[default]
    Auto,
}

/// Configuration for [`crate::unit_root_test::bounded_unit_root_test_with_config`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitRootTestConfig {
    /// Statistic(s) to report
    pub statistic: StatisticSelector,
    /// Detrending procedure
    pub detrending: DetrendingMethod,
    /// Long-run variance estimator
    pub lrv_method: LrvMethod,
    /// Long-run variance settings
    pub lrv: LrvConfig,
    /// Where critical values come from
    pub critical_values: CriticalValueSource,
    /// Settings for simulated critical values
    pub monte_carlo: MonteCarloConfig,
    /// Shortest accepted series
    pub min_length: usize,
    /// Series shorter than this are flagged as low reliability
    pub reliable_length: usize,
    /// Containment tolerance as a fraction of the bound width
    pub bound_tolerance: f64,
    /// κ̄ table for GLS-bounds detrending; the embedded table when `None`
    #[cfg_attr(feature = "serde", serde(skip))]
    pub kappa_table: Option<NonCentralityResolver>,
}

impl Default for UnitRootTestConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl UnitRootTestConfig {
    /// Tabulated critical values only, small simulation budget for explicit requests.
    pub fn fast() -> Self {
        Self {
            critical_values: CriticalValueSource::Tabulated,
            monte_carlo: MonteCarloConfig {
                n_sim: 500,
                ..Default::default()
            },
            ..Self::standard()
        }
    }

    /// MZα with GLS-bounds detrending and QS long-run variance. Critical
    /// values are tabulated inside the grid and simulated off it.
    pub fn standard() -> Self {
        Self {
            statistic: StatisticSelector::default(),
            detrending: DetrendingMethod::GlsBounds,
            lrv_method: LrvMethod::NonParametric,
            lrv: LrvConfig::default(),
            critical_values: CriticalValueSource::Auto,
            monte_carlo: MonteCarloConfig::default(),
            min_length: MIN_SAMPLE_SIZE,
            reliable_length: RELIABLE_SAMPLE_SIZE,
            bound_tolerance: DEFAULT_BOUND_TOLERANCE,
            kappa_table: None,
        }
    }

    /// Critical values simulated at the observed bounds and sample size.
    pub fn precise() -> Self {
        Self {
            critical_values: CriticalValueSource::Simulated,
            monte_carlo: MonteCarloConfig {
                n_sim: 10_000,
                ..Default::default()
            },
            ..Self::standard()
        }
    }

    /// Set the statistic selector.
    pub fn with_statistic(mut self, statistic: impl Into<StatisticSelector>) -> Self {
        self.statistic = statistic.into();
        self
    }

    /// Set the detrending method.
    pub fn with_detrending(mut self, detrending: DetrendingMethod) -> Self {
        self.detrending = detrending;
        self
    }

    /// Set the long-run variance estimator.
    pub fn with_lrv_method(mut self, lrv_method: LrvMethod) -> Self {
        self.lrv_method = lrv_method;
        self
    }

    /// Set the critical value source.
    pub fn with_critical_values(mut self, source: CriticalValueSource) -> Self {
        self.critical_values = source;
        self
    }

    /// Resolve κ̄ from `table` instead of the embedded table, e.g. one
    /// returned by [`crate::noncentrality::compute_kappa_table`].
    pub fn with_kappa_table(mut self, table: NonCentralityResolver) -> Self {
        self.kappa_table = Some(table);
        self
    }

    /// Check internal consistency.
    pub fn validate(&self) -> BoundedResult<()> {
        if self.min_length < MIN_SAMPLE_SIZE {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "min_length".to_string(),
                value: self.min_length as f64,
                constraint: format!(">= {}", MIN_SAMPLE_SIZE),
            });
        }
        if self.reliable_length < self.min_length {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "reliable_length".to_string(),
                value: self.reliable_length as f64,
                constraint: "must not be below min_length".to_string(),
            });
        }
        validate_parameter(self.bound_tolerance, 0.0, 0.5, "bound_tolerance")?;
        if !(self.lrv.floor > 0.0 && self.lrv.floor.is_finite()) {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "lrv floor".to_string(),
                value: self.lrv.floor,
                constraint: "positive and finite".to_string(),
            });
        }
        if self.critical_values != CriticalValueSource::Tabulated {
            self.monte_carlo.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let standard = UnitRootTestConfig::default();
        assert_eq!(standard, UnitRootTestConfig::standard());
        assert_eq!(standard.detrending, DetrendingMethod::GlsBounds);
        assert_eq!(standard.critical_values, CriticalValueSource::Auto);
        assert_eq!(CriticalValueSource::default(), CriticalValueSource::Auto);
        assert!(standard.kappa_table.is_none());
        assert!(standard.validate().is_ok());

        let fast = UnitRootTestConfig::fast();
        assert_eq!(fast.critical_values, CriticalValueSource::Tabulated);
        assert!(fast.monte_carlo.n_sim < standard.monte_carlo.n_sim);
        let precise = UnitRootTestConfig::precise();
        assert_eq!(precise.critical_values, CriticalValueSource::Simulated);
        assert!(precise.validate().is_ok());
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("all".parse::<StatisticSelector>().unwrap(), StatisticSelector::All);
        assert_eq!(
            " MSB ".parse::<StatisticSelector>().unwrap(),
            StatisticSelector::Single(StatisticKind::Msb)
        );
        let err = "adf".parse::<StatisticSelector>().unwrap_err();
        assert!(err.is_configuration_error());
        assert_eq!(StatisticSelector::All.kinds().len(), 4);
    }

    #[test]
    fn test_builder_methods() {
        let config = UnitRootTestConfig::standard()
            .with_statistic(StatisticKind::Pt)
            .with_detrending(DetrendingMethod::Ols)
            .with_lrv_method(LrvMethod::Autoregressive)
            .with_critical_values(CriticalValueSource::Simulated);
        assert_eq!(config.statistic, StatisticSelector::Single(StatisticKind::Pt));
        assert_eq!(config.detrending, DetrendingMethod::Ols);
        assert_eq!(config.lrv_method, LrvMethod::Autoregressive);
        assert_eq!(config.critical_values, CriticalValueSource::Simulated);

        let table = NonCentralityResolver::embedded().clone();
        let config = UnitRootTestConfig::fast().with_kappa_table(table.clone());
        assert_eq!(config.kappa_table, Some(table));
    }

    #[test]
    fn test_validation_rejects_inconsistent_settings() {
        let mut config = UnitRootTestConfig::standard();
        config.min_length = 5;
        assert!(config.validate().is_err());

        let mut config = UnitRootTestConfig::standard();
        config.reliable_length = 12;
        config.min_length = 20;
        assert!(config.validate().is_err());

        let mut config = UnitRootTestConfig::standard();
        config.lrv.floor = 0.0;
        assert!(config.validate().is_err());

        let mut config = UnitRootTestConfig::precise();
        config.monte_carlo.n_sim = 1;
        assert!(config.validate().is_err());
    }
}
