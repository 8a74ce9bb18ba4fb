//! Critical values and p-values for the bounded unit root statistics.
//!
//! Null quantiles are tabulated per detrending method and statistic on the
//! standardized bound grid at the levels in [`PROBABILITY_LEVELS`]. Lookups
//! follow the κ̄ table policy: exact nodes, interpolation inside the grid,
//! clamping outside. MSB quantiles are interpolated in `(c, c̄)`, the other
//! statistics in `(1/c, 1/c̄)`. Off-table parameter combinations can be simulated
//! on demand; simulated quantiles are kept in the process-wide cache under a
//! rounded-parameter key, so repeated requests return identical values
//! without another Monte Carlo run.

use crate::detrending::DetrendingMethod;
use crate::errors::{validate_parameter, BoundedResult};
use crate::math_utils::lerp;
use crate::monte_carlo::{null_quantiles, MonteCarloConfig, NullQuantiles, SimulationDesign};
use crate::statistics::{StatisticKind, TailDirection};
use crate::table_cache::{dequantize, global_table_cache, quantize, CriticalValueKey};
use crate::table_grid::{AxisScale, BoundGrid};
use crate::tables::quantile_table;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Probability levels at which null quantiles are tabulated.
pub const PROBABILITY_LEVELS: [f64; 9] = [0.01, 0.025, 0.05, 0.10, 0.50, 0.90, 0.95, 0.975, 0.99];

/// Significance levels reported with every test.
pub const SIGNIFICANCE_LEVELS: [f64; 3] = [0.10, 0.05, 0.01];

/// Smallest and largest p-value reported.
pub const P_VALUE_RANGE: (f64, f64) = (0.01, 0.99);

/// Critical values at the three reported significance levels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CriticalValues {
    /// 10% critical value
    pub ten_pct: f64,
    /// 5% critical value
    pub five_pct: f64,
    /// 1% critical value
    pub one_pct: f64,
}

impl CriticalValues {
    /// Critical values of `kind` from a set of quantiles.
    pub fn from_quantiles(kind: StatisticKind, quantiles: &[f64; 9]) -> Self {
        let tail = kind.tail();
        let at = |alpha: f64| quantile_at_level(quantiles, tail.quantile_level(alpha));
        Self {
            ten_pct: at(0.10),
            five_pct: at(0.05),
            one_pct: at(0.01),
        }
    }

    /// `(alpha, critical value)` pairs from 10% down to 1%.
    pub fn levels(&self) -> [(f64, f64); 3] {
        [(0.10, self.ten_pct), (0.05, self.five_pct), (0.01, self.one_pct)]
    }
}

/// Quantile at probability `p`, interpolating linearly between tabulated levels.
///
/// Probabilities outside the tabulated range are clamped to the extreme levels.
pub fn quantile_at_level(quantiles: &[f64; 9], p: f64) -> f64 {
    let levels = &PROBABILITY_LEVELS;
    if p <= levels[0] {
        return quantiles[0];
    }
    if p >= levels[levels.len() - 1] {
        return quantiles[quantiles.len() - 1];
    }
    let hi = levels.partition_point(|&level| level < p);
    if levels[hi] == p {
        return quantiles[hi];
    }
    lerp(levels[hi - 1], quantiles[hi - 1], levels[hi], quantiles[hi], p)
}

/// P-value of `statistic` by interpolating the empirical CDF through the quantiles.
///
/// The result is clamped to [`P_VALUE_RANGE`].
pub fn p_value(kind: StatisticKind, statistic: f64, quantiles: &[f64; 9]) -> f64 {
    let cdf = if statistic <= quantiles[0] {
        PROBABILITY_LEVELS[0]
    } else if statistic >= quantiles[quantiles.len() - 1] {
        PROBABILITY_LEVELS[PROBABILITY_LEVELS.len() - 1]
    } else {
        let hi = quantiles.partition_point(|&q| q < statistic);
        if quantiles[hi] == statistic || quantiles[hi] == quantiles[hi - 1] {
            PROBABILITY_LEVELS[hi]
        } else {
            lerp(quantiles[hi - 1], PROBABILITY_LEVELS[hi - 1], quantiles[hi], PROBABILITY_LEVELS[hi], statistic)
        }
    };

    let p = match kind.tail() {
        TailDirection::Left => cdf,
        TailDirection::Right => 1.0 - cdf,
    };
    p.clamp(P_VALUE_RANGE.0, P_VALUE_RANGE.1)
}

/// Coordinate in which the quantile tables of `kind` are interpolated.
///
/// MSB quantiles grow roughly linearly with the bound distance; MZα, MZt and
/// PT follow κ̄, which is close to linear in the reciprocal bound distance.
pub fn interpolation_scale(kind: StatisticKind) -> AxisScale {
    match kind {
        StatisticKind::Msb => AxisScale::Linear,
        StatisticKind::MzAlpha | StatisticKind::MzT | StatisticKind::Pt => AxisScale::Reciprocal,
    }
}

/// Tabulated quantiles at a point of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabulatedQuantiles {
    /// Quantiles at [`PROBABILITY_LEVELS`]
    pub values: [f64; 9],
    /// The point was outside the grid and clamped to its boundary
    pub clamped: bool,
    /// The point was on the narrow side of the grid
    pub low_confidence: bool,
}

/// Critical values from the embedded tables for one detrending method.
#[derive(Debug, Clone)]
pub struct CriticalValueProvider {
    method: DetrendingMethod,
    grid: BoundGrid,
}

impl CriticalValueProvider {
    /// Provider for the tables of `method`.
    pub fn new(method: DetrendingMethod) -> Self {
        Self {
            method,
            grid: BoundGrid::standard(),
        }
    }

    /// Detrending method the tables belong to.
    pub fn method(&self) -> DetrendingMethod {
        self.method
    }

    /// Interpolated null quantiles of `kind` at `(c, c̄)`.
    pub fn quantiles(&self, kind: StatisticKind, c: f64, c_bar: f64) -> BoundedResult<TabulatedQuantiles> {
        let table = quantile_table(self.method, kind);
        let location = self
            .grid
            .locate(c, c_bar, interpolation_scale(kind), "critical value table")?;

        let mut values = [0.0; 9];
        for (level, slot) in values.iter_mut().enumerate() {
            *slot = location.interpolate(|i, j| table[i][j][level]);
        }
        // convex mixing keeps each level ordered; rounding can still produce ties
        for level in 1..values.len() {
            if values[level] < values[level - 1] {
                values[level] = values[level - 1];
            }
        }

        Ok(TabulatedQuantiles {
            values,
            clamped: location.clamped,
            low_confidence: location.low_confidence,
        })
    }

    /// Critical value of `kind` at significance `alpha` for `(c, c̄)`.
    ///
    /// Left-tail statistics use the `alpha` quantile, right-tail ones the
    /// `1 - alpha` quantile.
    ///
    /// # Example
    /// ```rust
    /// use bounded_unit_root::critical_values::CriticalValueProvider;
    /// use bounded_unit_root::detrending::DetrendingMethod;
    /// use bounded_unit_root::statistics::StatisticKind;
    ///
    /// let provider = CriticalValueProvider::new(DetrendingMethod::GlsBounds);
    /// let cv = provider.get(StatisticKind::MzAlpha, -1.0, 1.0, 0.05).unwrap();
    /// assert!(cv < 0.0);
    /// ```
    pub fn get(&self, kind: StatisticKind, c: f64, c_bar: f64, alpha: f64) -> BoundedResult<f64> {
        validate_parameter(alpha, 1e-6, 0.5, "alpha")?;
        let quantiles = self.quantiles(kind, c, c_bar)?;
        Ok(quantile_at_level(&quantiles.values, kind.tail().quantile_level(alpha)))
    }

    /// Critical values of `kind` at 10%, 5% and 1%.
    pub fn critical_values(&self, kind: StatisticKind, c: f64, c_bar: f64) -> BoundedResult<CriticalValues> {
        let quantiles = self.quantiles(kind, c, c_bar)?;
        Ok(CriticalValues::from_quantiles(kind, &quantiles.values))
    }
}

/// Simulated null quantiles for a design, computed once per rounded key.
pub fn simulated_quantiles(
    method: DetrendingMethod,
    c_lower: f64,
    c_upper: f64,
    kappa: f64,
    config: &MonteCarloConfig,
) -> BoundedResult<Arc<NullQuantiles>> {
    config.validate()?;
    let replications = config.replications_within_budget(config.n_sim, 1)?;
    let key = CriticalValueKey {
        method,
        c_lower: quantize(c_lower),
        c_upper: quantize(c_upper),
        kappa: quantize(kappa),
        sample_size: config.sample_size,
        n_sim: replications,
        seed: config.seed,
        regulation: config.regulation,
    };

    let cache = global_table_cache();
    if cache.critical_values(&key).is_none() {
        debug!("critical value cache miss for {:?}", key);
    }
    // every input that rounds to the key simulates the same design
    cache.get_or_compute_critical_values(key, || {
        let design = SimulationDesign::null(
            dequantize(key.c_lower),
            dequantize(key.c_upper),
            method,
            dequantize(key.kappa),
        );
        let config = MonteCarloConfig {
            n_sim: replications,
            max_paths: None,
            ..config.clone()
        };
        null_quantiles(&design, &config)
    })
}

/// Simulated critical values for GLS-bounds detrending with a fixed κ̄.
///
/// Returns, for every statistic, one critical value per entry of `alpha`.
pub fn compute_critical_values(
    c_lower: f64,
    c_upper: f64,
    kappa: f64,
    n_sim: usize,
    alpha: &[f64],
) -> BoundedResult<BTreeMap<StatisticKind, Vec<f64>>> {
    let config = MonteCarloConfig {
        n_sim,
        ..Default::default()
    };
    compute_critical_values_with_config(DetrendingMethod::GlsBounds, c_lower, c_upper, kappa, alpha, &config)
}

/// [`compute_critical_values`] for any detrending method and simulation settings.
pub fn compute_critical_values_with_config(
    method: DetrendingMethod,
    c_lower: f64,
    c_upper: f64,
    kappa: f64,
    alpha: &[f64],
    config: &MonteCarloConfig,
) -> BoundedResult<BTreeMap<StatisticKind, Vec<f64>>> {
    for &a in alpha {
        validate_parameter(a, 1e-6, 0.5, "alpha")?;
    }
    let quantiles = simulated_quantiles(method, c_lower, c_upper, kappa, config)?;

    Ok(StatisticKind::ALL
        .iter()
        .map(|&kind| {
            let values = alpha
                .iter()
                .map(|&a| quantile_at_level(quantiles.quantiles(kind), kind.tail().quantile_level(a)))
                .collect();
            (kind, values)
        })
        .collect())
}
