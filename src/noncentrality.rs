//! Bound-specific non-centrality parameter κ̄.
//!
//! κ̄ sets the local alternative `ᾱ = 1 + κ̄/T` used for GLS detrending. The
//! ERS choice κ̄ = -7 is calibrated for unbounded series; tighter bounds
//! call for a more negative value. The resolver maps standardized bounds
//! `(c, c̄)` to κ̄ through a tabulated grid, interpolating in `(1/c, 1/c̄)`, with
//! boundary clamping. Tables can be recalibrated by simulation with
//! [`compute_kappa_table`].

use crate::detrending::DetrendingMethod;
use crate::errors::{BoundedResult, BoundedTestError};
use crate::math_utils::{float_total_cmp, lerp, percentile};
use crate::monte_carlo::{rejection_rate, simulate_statistics, MonteCarloConfig, SimulationDesign};
use crate::rng::derive_seed;
use crate::statistics::TailDirection;
use crate::table_cache::{dequantize, global_table_cache, quantize, KappaKey};
use crate::table_grid::{AxisScale, BoundGrid};
use crate::tables::KAPPA_TABLE;
use log::{debug, info};
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-centrality of the ERS point-optimal test for unbounded series.
pub const ERS_KAPPA: f64 = -7.0;

/// Most negative κ̄ ever resolved or calibrated.
pub const KAPPA_FLOOR: f64 = -20.0;

/// Least negative κ̄ ever resolved or calibrated.
pub const KAPPA_CEILING: f64 = -7.0;

/// Stream offset separating alternative draws from null draws in calibration.
const ALTERNATIVE_STREAM: u64 = 1 << 40;

/// κ̄ together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KappaResolution {
    /// Resolved non-centrality
    pub kappa: f64,
    /// `(c, c̄)` was outside the grid and clamped to its boundary
    pub clamped: bool,
    /// `(c, c̄)` was on the narrow side of the grid
    pub low_confidence: bool,
}

/// Table-driven κ̄ lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct NonCentralityResolver {
    grid: BoundGrid,
    values: Vec<Vec<f64>>,
}

static EMBEDDED_RESOLVER: Lazy<NonCentralityResolver> = Lazy::new(|| NonCentralityResolver {
    grid: BoundGrid::standard(),
    values: KAPPA_TABLE.iter().map(|row| row.to_vec()).collect(),
});

impl NonCentralityResolver {
    /// Resolver over the embedded table.
    pub fn embedded() -> &'static NonCentralityResolver {
        &EMBEDDED_RESOLVER
    }

    /// Resolver over a custom table; `values[i][j]` belongs to
    /// `(grid.lower_axis()[i], grid.upper_axis()[j])`.
    pub fn from_table(grid: BoundGrid, values: Vec<Vec<f64>>) -> BoundedResult<Self> {
        let (rows, cols) = grid.shape();
        if values.len() != rows || values.iter().any(|row| row.len() != cols) {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "kappa table shape".to_string(),
                value: values.len() as f64,
                constraint: format!("{} rows of {} values", rows, cols),
            });
        }
        if let Some(&bad) = values
            .iter()
            .flatten()
            .find(|v| !(KAPPA_FLOOR..=KAPPA_CEILING).contains(*v))
        {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "kappa table value".to_string(),
                value: bad,
                constraint: format!("[{}, {}]", KAPPA_FLOOR, KAPPA_CEILING),
            });
        }
        Ok(Self { grid, values })
    }

    /// Grid the table is tabulated on.
    pub fn grid(&self) -> &BoundGrid {
        &self.grid
    }

    /// Tabulated values, row `i` for lower node `i`.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// κ̄ for standardized bounds `(c, c̄)`.
    pub fn resolve(&self, c: f64, c_bar: f64) -> BoundedResult<f64> {
        Ok(self.resolve_detailed(c, c_bar)?.kappa)
    }

    /// κ̄ for `(c, c̄)` with clamping diagnostics.
    pub fn resolve_detailed(&self, c: f64, c_bar: f64) -> BoundedResult<KappaResolution> {
        let location = self.grid.locate(c, c_bar, AxisScale::Reciprocal, "kappa table")?;
        let kappa = location
            .interpolate(|i, j| self.values[i][j])
            .clamp(KAPPA_FLOOR, KAPPA_CEILING);
        Ok(KappaResolution {
            kappa,
            clamped: location.clamped,
            low_confidence: location.low_confidence,
        })
    }
}

/// κ̄ from the embedded table.
///
/// # Example
/// ```rust
/// use bounded_unit_root::noncentrality::resolve;
///
/// let wide = resolve(-3.0, 3.0).unwrap();
/// let narrow = resolve(-0.25, 0.25).unwrap();
/// assert_eq!(wide, -7.0);
/// assert!(narrow <= wide);
/// ```
pub fn resolve(c: f64, c_bar: f64) -> BoundedResult<f64> {
    NonCentralityResolver::embedded().resolve(c, c_bar)
}

/// κ̄ from the embedded table with clamping diagnostics.
pub fn resolve_detailed(c: f64, c_bar: f64) -> BoundedResult<KappaResolution> {
    NonCentralityResolver::embedded().resolve_detailed(c, c_bar)
}

/// Settings of the power-matching calibration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationConfig {
    /// Simulation settings; `n_sim` paths are drawn per candidate under both hypotheses
    pub monte_carlo: MonteCarloConfig,
    /// Candidate values, tried in order from least to most negative
    pub candidates: Vec<f64>,
    /// Power the selected κ̄ must reach against its own local alternative
    pub target_power: f64,
    /// Nominal size of the MZα test used to measure power
    pub size: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            monte_carlo: MonteCarloConfig::default(),
            candidates: (0..14).map(|i| ERS_KAPPA - i as f64).collect(),
            target_power: 0.5,
            size: 0.05,
        }
    }
}

impl CalibrationConfig {
    fn validate(&self) -> BoundedResult<()> {
        self.monte_carlo.validate()?;
        crate::errors::validate_parameter(self.target_power, 0.0, 1.0, "target_power")?;
        crate::errors::validate_parameter(self.size, 1e-6, 0.5, "size")?;
        if self.candidates.is_empty() {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "candidates".to_string(),
                value: 0.0,
                constraint: "at least one candidate".to_string(),
            });
        }
        if let Some(&bad) = self
            .candidates
            .iter()
            .find(|k| !(KAPPA_FLOOR..=KAPPA_CEILING).contains(*k))
        {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "kappa candidate".to_string(),
                value: bad,
                constraint: format!("[{}, {}]", KAPPA_FLOOR, KAPPA_CEILING),
            });
        }
        Ok(())
    }
}

/// Power of the 5% (or configured size) GLS MZα test using `kappa`, against
/// the local alternative `ρ = 1 + kappa/T`.
fn power_at(c_lower: f64, c_upper: f64, kappa: f64, replications: usize, config: &CalibrationConfig) -> BoundedResult<f64> {
    let mc = &config.monte_carlo;
    let null = SimulationDesign::null(c_lower, c_upper, DetrendingMethod::GlsBounds, kappa);
    let alternative = SimulationDesign::local_alternative(c_lower, c_upper, DetrendingMethod::GlsBounds, kappa, kappa);

    let mut null_stats: Vec<f64> = simulate_statistics(&null, mc, replications, mc.seed)?
        .iter()
        .map(|s| s.mz_alpha)
        .collect();
    null_stats.sort_by(float_total_cmp);
    let critical = percentile(&null_stats, config.size);

    let alt_stats: Vec<f64> = simulate_statistics(&alternative, mc, replications, derive_seed(mc.seed, ALTERNATIVE_STREAM))?
        .iter()
        .map(|s| s.mz_alpha)
        .collect();
    Ok(rejection_rate(&alt_stats, critical, TailDirection::Left))
}

/// Select κ̄ for one pair of standardized bounds by power matching.
///
/// Candidates are tried in order until the measured power reaches the
/// target; the result interpolates linearly between the last two
/// candidates. If no candidate reaches the target the floor is returned.
fn calibrate_node(c_lower: f64, c_upper: f64, replications: usize, config: &CalibrationConfig) -> BoundedResult<f64> {
    let mut previous: Option<(f64, f64)> = None;
    for &candidate in &config.candidates {
        let power = power_at(c_lower, c_upper, candidate, replications, config)?;
        debug!(
            "calibration ({:.3}, {:.3}): kappa {:.2} has power {:.4}",
            c_lower, c_upper, candidate, power
        );
        if power >= config.target_power {
            let kappa = match previous {
                Some((prev_kappa, prev_power)) if power > prev_power => {
                    lerp(prev_power, prev_kappa, power, candidate, config.target_power)
                }
                _ => candidate,
            };
            return Ok(kappa.clamp(KAPPA_FLOOR, KAPPA_CEILING));
        }
        previous = Some((candidate, power));
    }
    Ok(KAPPA_FLOOR)
}

/// Calibrate κ̄ for one pair of standardized bounds, using the process-wide cache.
pub fn calibrate_kappa(c_lower: f64, c_upper: f64, config: &CalibrationConfig) -> BoundedResult<f64> {
    config.validate()?;
    let replications = config
        .monte_carlo
        .replications_within_budget(config.monte_carlo.n_sim, 2 * config.candidates.len())?;
    calibrate_cached(c_lower, c_upper, replications, config)
}

fn calibrate_cached(c_lower: f64, c_upper: f64, replications: usize, config: &CalibrationConfig) -> BoundedResult<f64> {
    // reflecting the process maps (c, c̄) to (-c̄, -c)
    let (c_lower, c_upper) = if -c_lower > c_upper {
        (-c_upper, -c_lower)
    } else {
        (c_lower, c_upper)
    };
    let key = KappaKey {
        c_lower: quantize(c_lower),
        c_upper: quantize(c_upper),
        sample_size: config.monte_carlo.sample_size,
        n_sim: replications,
        seed: config.monte_carlo.seed,
    };
    global_table_cache().get_or_compute_kappa(key, || {
        calibrate_node(dequantize(key.c_lower), dequantize(key.c_upper), replications, config)
    })
}

/// Make a table non-increasing toward narrower bounds.
///
/// Each node becomes the midpoint of the smallest monotone majorant and the
/// largest monotone minorant of the raw values.
fn enforce_monotone(raw: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let rows = raw.len();
    let cols = raw.first().map_or(0, Vec::len);
    let mut smoothed = vec![vec![0.0; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            // narrower nodes: larger row index, smaller column index
            let majorant = (i..rows)
                .flat_map(|r| (0..=j).map(move |c| (r, c)))
                .map(|(r, c)| raw[r][c])
                .fold(f64::NEG_INFINITY, f64::max);
            let minorant = (0..=i)
                .flat_map(|r| (j..cols).map(move |c| (r, c)))
                .map(|(r, c)| raw[r][c])
                .fold(f64::INFINITY, f64::min);
            smoothed[i][j] = 0.5 * (majorant + minorant);
        }
    }
    smoothed
}

/// Calibrate a κ̄ table over all pairs `(-a, b)` with `a, b` in `c_values`.
///
/// Runs `n_sim` replications of paths of length `sample_size` per candidate
/// and hypothesis. Node values are written to the process-wide cache; the
/// returned resolver holds the table smoothed to be monotone in the width.
pub fn compute_kappa_table(c_values: &[f64], sample_size: usize, n_sim: usize) -> BoundedResult<NonCentralityResolver> {
    let config = CalibrationConfig {
        monte_carlo: MonteCarloConfig {
            n_sim,
            sample_size,
            ..Default::default()
        },
        ..Default::default()
    };
    compute_kappa_table_with_config(c_values, &config)
}

/// [`compute_kappa_table`] with full control over the calibration.
pub fn compute_kappa_table_with_config(c_values: &[f64], config: &CalibrationConfig) -> BoundedResult<NonCentralityResolver> {
    config.validate()?;
    if let Some(&bad) = c_values.iter().find(|c| !c.is_finite() || **c <= 0.0) {
        return Err(BoundedTestError::InvalidParameter {
            parameter: "c_values".to_string(),
            value: bad,
            constraint: "finite and positive".to_string(),
        });
    }

    let mut magnitudes = c_values.to_vec();
    magnitudes.sort_by(float_total_cmp);
    magnitudes.dedup();
    if magnitudes.is_empty() {
        return Err(BoundedTestError::TableLookupError {
            table: "kappa calibration grid".to_string(),
        });
    }

    let lower_axis: Vec<f64> = magnitudes.iter().rev().map(|c| -c).collect();
    let upper_axis = magnitudes.clone();
    let grid = BoundGrid::new(lower_axis.clone(), upper_axis.clone())?;

    let n = magnitudes.len();
    let unique_pairs = n * (n + 1) / 2;
    let replications = config
        .monte_carlo
        .replications_within_budget(config.monte_carlo.n_sim, unique_pairs * 2 * config.candidates.len())?;

    info!(
        "calibrating kappa over {} bound pairs with {} replications per candidate",
        unique_pairs, replications
    );

    let mut raw = vec![vec![0.0; n]; n];
    for (i, &c_lower) in lower_axis.iter().enumerate() {
        for (j, &c_upper) in upper_axis.iter().enumerate() {
            raw[i][j] = calibrate_cached(c_lower, c_upper, replications, config)?;
        }
    }

    let values = enforce_monotone(&raw)
        .into_iter()
        .map(|row| row.into_iter().map(|v| v.clamp(KAPPA_FLOOR, KAPPA_CEILING)).collect())
        .collect();
    NonCentralityResolver::from_table(grid, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_grid::{LOWER_AXIS, UPPER_AXIS};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_grid_hits_return_table_values() {
        for (i, &c) in LOWER_AXIS.iter().enumerate() {
            for (j, &c_bar) in UPPER_AXIS.iter().enumerate() {
                assert_eq!(resolve(c, c_bar).unwrap(), KAPPA_TABLE[i][j]);
            }
        }
    }

    #[test]
    fn test_embedded_table_in_range_and_symmetric() {
        let n = LOWER_AXIS.len();
        for i in 0..n {
            for j in 0..n {
                let kappa = KAPPA_TABLE[i][j];
                assert!((KAPPA_FLOOR..=KAPPA_CEILING).contains(&kappa));
                // (c, c̄) and (-c̄, -c) describe mirrored processes
                assert_approx_eq!(kappa, KAPPA_TABLE[n - 1 - j][n - 1 - i]);
            }
        }
    }

    #[test]
    fn test_symmetric_monotonicity() {
        let widths = [0.1, 0.25, 0.4, 0.5, 0.75, 0.9, 1.0, 1.25, 1.5, 2.0, 3.0, 5.0];
        let kappas: Vec<f64> = widths.iter().map(|&c| resolve(-c, c).unwrap()).collect();
        for pair in kappas.windows(2) {
            assert!(pair[0] <= pair[1] + 1e-12, "kappa not monotone: {:?}", kappas);
        }
    }

    #[test]
    fn test_wide_bounds_converge_to_ers() {
        assert_eq!(resolve(-3.0, 3.0).unwrap(), ERS_KAPPA);
        assert_eq!(resolve(-100.0, 100.0).unwrap(), ERS_KAPPA);
        assert_eq!(resolve(f64::NEG_INFINITY, f64::INFINITY).unwrap(), ERS_KAPPA);
    }

    #[test]
    fn test_narrow_bounds_clamped_and_flagged() {
        let resolution = resolve_detailed(-0.05, 0.05).unwrap();
        assert!(resolution.clamped);
        assert!(resolution.low_confidence);
        assert_eq!(resolution.kappa, resolve(-0.25, 0.25).unwrap());
    }

    #[test]
    fn test_interior_point_between_neighbours() {
        let kappa = resolve(-0.9, 1.2).unwrap();
        let corners = [
            resolve(-1.0, 1.0).unwrap(),
            resolve(-1.0, 1.5).unwrap(),
            resolve(-0.75, 1.0).unwrap(),
            resolve(-0.75, 1.5).unwrap(),
        ];
        let lo = corners.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(kappa >= lo - 1e-12 && kappa <= hi + 1e-12);
    }

    #[test]
    fn test_custom_table_validation() {
        let grid = BoundGrid::new(vec![-1.0], vec![1.0]).unwrap();
        assert!(NonCentralityResolver::from_table(grid.clone(), vec![vec![-8.0]]).is_ok());
        assert!(NonCentralityResolver::from_table(grid.clone(), vec![vec![-3.0]]).is_err());
        assert!(NonCentralityResolver::from_table(grid, vec![vec![-8.0, -9.0]]).is_err());
    }

    #[test]
    fn test_empty_table_is_lookup_error() {
        let grid = BoundGrid::new(Vec::new(), Vec::new()).unwrap();
        let resolver = NonCentralityResolver::from_table(grid, Vec::new()).unwrap();
        assert!(matches!(
            resolver.resolve(-1.0, 1.0),
            Err(BoundedTestError::TableLookupError { .. })
        ));
    }

    #[test]
    fn test_enforce_monotone() {
        let raw = vec![vec![-9.0, -7.0], vec![-12.0, -8.0]];
        let smoothed = enforce_monotone(&raw);
        // row 0 is wider than row 1, column 1 wider than column 0
        assert!(smoothed[1][0] <= smoothed[0][0]);
        assert!(smoothed[1][0] <= smoothed[1][1]);
        assert!(smoothed[0][0] <= smoothed[0][1]);

        let noisy = vec![vec![-10.0, -7.5], vec![-11.0, -9.0]];
        let fixed = enforce_monotone(&noisy);
        assert!(fixed[0][0] <= fixed[0][1]);
        assert!(fixed[1][1] <= fixed[0][1]);
    }

    #[test]
    fn test_compute_kappa_table_small() {
        let config = CalibrationConfig {
            monte_carlo: MonteCarloConfig {
                n_sim: 100,
                sample_size: 50,
                seed: 2024,
                ..Default::default()
            },
            candidates: vec![-7.0, -10.0, -14.0, -20.0],
            ..Default::default()
        };
        let resolver = compute_kappa_table_with_config(&[0.5, 2.0], &config).unwrap();
        assert_eq!(resolver.grid().lower_axis(), &[-2.0, -0.5]);
        assert_eq!(resolver.grid().upper_axis(), &[0.5, 2.0]);
        for row in resolver.values() {
            for &kappa in row {
                assert!((KAPPA_FLOOR..=KAPPA_CEILING).contains(&kappa));
            }
        }
        // narrowest node is no less negative than the widest
        assert!(resolver.values()[1][0] <= resolver.values()[0][1]);

        // the node values now live in the process-wide cache
        let key = KappaKey {
            c_lower: quantize(-0.5),
            c_upper: quantize(0.5),
            sample_size: 50,
            n_sim: 100,
            seed: 2024,
        };
        assert!(global_table_cache().kappa(&key).is_some());
    }

    #[test]
    fn test_calibration_rejects_bad_inputs() {
        assert!(compute_kappa_table(&[0.5, -1.0], 100, 100).is_err());
        assert!(compute_kappa_table(&[], 100, 100).is_err());

        let config = CalibrationConfig {
            candidates: vec![-3.0],
            ..Default::default()
        };
        assert!(calibrate_kappa(-1.0, 1.0, &config).is_err());

        let over_budget = CalibrationConfig {
            monte_carlo: MonteCarloConfig {
                max_paths: Some(500),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            calibrate_kappa(-1.0, 1.0, &over_budget),
            Err(BoundedTestError::BudgetExceeded { .. })
        ));
    }
}
