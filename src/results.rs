//! # Test Result Structures
//!
//! A [`TestResult`] is the complete record of one statistic: the value, its
//! critical values and decisions, the estimates that produced it and the
//! diagnostics raised on the way. Every field is always populated.

use crate::config::CriticalValueSource;
pub use crate::critical_values::CriticalValues;
use crate::detrending::DetrendingMethod;
use crate::long_run_variance::{LrvEstimate, LrvMethod};
use crate::statistics::{StatisticKind, TailDirection};
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagnostic flags attached to a result.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TestDiagnostics {
    /// Fewer observations than the reliable sample size
    pub low_reliability: bool,
    /// Standardized bounds on the narrow side of the tabulated grid
    pub low_confidence: bool,
    /// Long-run variance was floored
    pub lrv_degraded: bool,
    /// κ̄ or the critical values were read from a clamped grid position
    pub kappa_clamped: bool,
    /// Residuals had no variation; no rejection is reported
    pub degenerate: bool,
    /// Observations outside the bounds but within the containment tolerance
    pub tolerance_excursions: usize,
    /// Human-readable notes for every flag raised
    pub warnings: Vec<String>,
}

impl TestDiagnostics {
    /// True when any flag is raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Outcome of the bounded unit root test for one statistic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TestResult {
    /// Which statistic
    pub kind: StatisticKind,
    /// Statistic symbol, e.g. `MZα`
    pub name: String,
    /// Statistic value
    pub statistic: f64,
    /// Critical values at 10%, 5% and 1%
    pub critical_values: CriticalValues,
    /// Unit root rejected at 10%
    pub reject_10pct: bool,
    /// Unit root rejected at 5%
    pub reject_5pct: bool,
    /// Unit root rejected at 1%
    pub reject_1pct: bool,
    /// Approximate p-value, clamped to [0.01, 0.99]
    pub p_value: f64,
    /// Bounds `(b, b̄)` of the series
    pub bounds: (f64, f64),
    /// Standardized lower bound `c`
    pub c_lower: f64,
    /// Standardized upper bound `c̄`
    pub c_upper: f64,
    /// Non-centrality used for detrending and PT
    pub kappa: f64,
    /// Long-run variance estimate
    pub lrv: LrvEstimate,
    /// Number of observations
    pub sample_size: usize,
    /// Detrending procedure
    pub detrending: DetrendingMethod,
    /// Long-run variance estimator
    pub lrv_method: LrvMethod,
    /// Where the critical values came from
    pub critical_value_source: CriticalValueSource,
    /// Diagnostic flags
    pub diagnostics: TestDiagnostics,
}

impl TestResult {
    /// Rejection tail of the statistic.
    pub fn tail(&self) -> TailDirection {
        self.kind.tail()
    }

    /// Decision at one of the reported levels (0.10, 0.05, 0.01).
    pub fn rejects_at(&self, alpha: f64) -> Option<bool> {
        const EPS: f64 = 1e-9;
        if (alpha - 0.10).abs() < EPS {
            Some(self.reject_10pct)
        } else if (alpha - 0.05).abs() < EPS {
            Some(self.reject_5pct)
        } else if (alpha - 0.01).abs() < EPS {
            Some(self.reject_1pct)
        } else {
            None
        }
    }

    /// Long-run variance value.
    pub fn lrv_estimate(&self) -> f64 {
        self.lrv.value
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = if self.reject_1pct {
            "***"
        } else if self.reject_5pct {
            "**"
        } else if self.reject_10pct {
            "*"
        } else {
            ""
        };
        writeln!(
            f,
            "{} = {:.4}{} (p ≈ {:.3}, {} detrending, {} LRV, T = {})",
            self.name, self.statistic, stars, self.p_value, self.detrending, self.lrv_method, self.sample_size
        )?;
        writeln!(
            f,
            "  critical values: 10% {:.4}, 5% {:.4}, 1% {:.4}",
            self.critical_values.ten_pct, self.critical_values.five_pct, self.critical_values.one_pct
        )?;
        write!(
            f,
            "  c = {:.4}, c̄ = {:.4}, κ̄ = {:.4}, s² = {:.6}",
            self.c_lower, self.c_upper, self.kappa, self.lrv.value
        )?;
        for warning in &self.diagnostics.warnings {
            write!(f, "\n  warning: {}", warning)?;
        }
        Ok(())
    }
}

/// Result of a test call: one statistic, or all of them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TestOutcome {
    /// A single statistic was requested
    Single(TestResult),
    /// Every statistic, keyed by kind
    All(BTreeMap<StatisticKind, TestResult>),
}

impl TestOutcome {
    /// Result for `kind`, if it was computed.
    pub fn get(&self, kind: StatisticKind) -> Option<&TestResult> {
        match self {
            TestOutcome::Single(result) if result.kind == kind => Some(result),
            TestOutcome::Single(_) => None,
            TestOutcome::All(results) => results.get(&kind),
        }
    }

    /// All computed results in reporting order.
    pub fn results(&self) -> Vec<&TestResult> {
        match self {
            TestOutcome::Single(result) => vec![result],
            TestOutcome::All(results) => results.values().collect(),
        }
    }

    /// The single result, if exactly one statistic was requested.
    pub fn into_single(self) -> Option<TestResult> {
        match self {
            TestOutcome::Single(result) => Some(result),
            TestOutcome::All(_) => None,
        }
    }

    /// The map of results, with a single result wrapped into a one-entry map.
    pub fn into_map(self) -> BTreeMap<StatisticKind, TestResult> {
        match self {
            TestOutcome::Single(result) => {
                let mut map = BTreeMap::new();
                map.insert(result.kind, result);
                map
            }
            TestOutcome::All(results) => results,
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.results();
        for (i, result) in results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", result)?;
        }
        Ok(())
    }
}
