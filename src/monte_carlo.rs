//! Monte Carlo null distributions and power of the bounded unit root tests.
//!
//! A simulation design fixes standardized bounds `(c, c̄)`, a detrending
//! method with its κ̄, and optionally a local alternative. Paths are bounded
//! random walks (or local-to-unity processes `ρ = 1 + κ/T`) with unit
//! innovation variance started at zero, so the path bounds are `(c√T, c̄√T)`.
//! Each replication draws from its own ChaCha stream seeded by
//! `derive_seed(seed, index)`, which makes parallel and sequential runs
//! produce identical samples.

use crate::critical_values::PROBABILITY_LEVELS;
use crate::detrending::{detrend_with_kappa, DetrendingMethod};
use crate::errors::{BoundedResult, BoundedTestError};
use crate::long_run_variance::{estimate_with_config, LrvConfig, LrvMethod};
use crate::math_utils::{float_total_cmp, percentile};
use crate::regulated_process::{ProcessConfig, RegulatedProcessSimulator, RegulationMechanism};
use crate::rng::derive_seed;
use crate::statistics::{compute_m_statistics, MStatistics, StatisticKind, TailDirection};
use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fewest replications a budget reduction may leave per simulation.
pub const MIN_REPLICATIONS: usize = 100;

/// Configuration for Monte Carlo runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonteCarloConfig {
    /// Replications per simulated distribution
    pub n_sim: usize,
    /// Length of each simulated path
    pub sample_size: usize,
    /// Base seed for reproducible results
    pub seed: u64,
    /// Regulation of the simulated paths at the bounds
    pub regulation: RegulationMechanism,
    /// Maximum number of paths a single request may simulate
    pub max_paths: Option<usize>,
    /// Run replications on the rayon pool when the `parallel` feature is on
    pub parallel: bool,
    /// Long-run variance settings applied to simulated residuals
    pub lrv: LrvConfig,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_sim: 2000,
            sample_size: 500,
            seed: 42,
            regulation: RegulationMechanism::Truncation,
            max_paths: None,
            parallel: true,
            lrv: LrvConfig::default(),
        }
    }
}

impl MonteCarloConfig {
    /// Check that the configuration can drive a simulation.
    pub fn validate(&self) -> BoundedResult<()> {
        if self.n_sim < 2 {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "n_sim".to_string(),
                value: self.n_sim as f64,
                constraint: "at least 2".to_string(),
            });
        }
        if self.sample_size < 10 {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "sample_size".to_string(),
                value: self.sample_size as f64,
                constraint: "at least 10".to_string(),
            });
        }
        Ok(())
    }

    /// Replications per simulation once `simulations` distributions of
    /// `requested` paths each are fitted into the path budget.
    ///
    /// Over-budget requests are scaled down as long as every simulation keeps
    /// at least [`MIN_REPLICATIONS`] paths.
    pub fn replications_within_budget(&self, requested: usize, simulations: usize) -> BoundedResult<usize> {
        let simulations = simulations.max(1);
        let budget = match self.max_paths {
            Some(budget) => budget,
            None => return Ok(requested),
        };

        let required = requested.saturating_mul(simulations);
        if required <= budget {
            return Ok(requested);
        }

        let scaled = budget / simulations;
        if scaled >= MIN_REPLICATIONS {
            warn!(
                "Monte Carlo request of {} paths exceeds budget {}; using {} replications per simulation",
                required, budget, scaled
            );
            Ok(scaled)
        } else {
            Err(BoundedTestError::BudgetExceeded {
                required: MIN_REPLICATIONS.saturating_mul(simulations),
                budget,
            })
        }
    }
}

/// What to simulate: bounds, detrending, and the data generating process.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationDesign {
    /// Standardized lower bound, negative
    pub c_lower: f64,
    /// Standardized upper bound, positive
    pub c_upper: f64,
    /// Detrending applied to each path
    pub method: DetrendingMethod,
    /// κ̄ used for GLS detrending and PT
    pub kappa: f64,
    /// Local alternative `ρ = 1 + κ/T`; `None` simulates the unit-root null
    pub local_kappa: Option<f64>,
}

impl SimulationDesign {
    /// Unit-root null design.
    pub fn null(c_lower: f64, c_upper: f64, method: DetrendingMethod, kappa: f64) -> Self {
        Self {
            c_lower,
            c_upper,
            method,
            kappa,
            local_kappa: None,
        }
    }

    /// Local-to-unity alternative reverting to the start value.
    pub fn local_alternative(c_lower: f64, c_upper: f64, method: DetrendingMethod, kappa: f64, local_kappa: f64) -> Self {
        Self {
            local_kappa: Some(local_kappa),
            ..Self::null(c_lower, c_upper, method, kappa)
        }
    }

    fn simulator(&self, config: &MonteCarloConfig) -> BoundedResult<RegulatedProcessSimulator> {
        for (name, value, ok) in [
            ("c_lower", self.c_lower, self.c_lower < 0.0),
            ("c_upper", self.c_upper, self.c_upper > 0.0),
        ] {
            if !value.is_finite() || !ok {
                return Err(BoundedTestError::InvalidParameter {
                    parameter: name.to_string(),
                    value,
                    constraint: "finite, with c_lower < 0 < c_upper".to_string(),
                });
            }
        }
        if !self.kappa.is_finite() {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "kappa".to_string(),
                value: self.kappa,
                constraint: "finite".to_string(),
            });
        }

        let t = config.sample_size as f64;
        let rho = 1.0 + self.local_kappa.unwrap_or(0.0) / t;
        RegulatedProcessSimulator::new(ProcessConfig {
            length: config.sample_size,
            bounds: (self.c_lower * t.sqrt(), self.c_upper * t.sqrt()),
            rho,
            sigma: 1.0,
            initial_value: Some(0.0),
            burn_in: 0,
            regulation: config.regulation,
        })
    }
}

fn replicate(
    simulator: &RegulatedProcessSimulator,
    design: &SimulationDesign,
    lrv: &LrvConfig,
    seed: u64,
) -> BoundedResult<MStatistics> {
    let path = simulator.simulate(seed);
    let residuals = detrend_with_kappa(&path, design.method, design.kappa)?;
    let s2 = estimate_with_config(&residuals, LrvMethod::NonParametric, lrv)?;
    compute_m_statistics(&residuals, s2.value, design.kappa)
}

/// Simulate `replications` sets of statistics for a design.
///
/// Replication `i` is seeded with `derive_seed(seed, i)`.
pub fn simulate_statistics(
    design: &SimulationDesign,
    config: &MonteCarloConfig,
    replications: usize,
    seed: u64,
) -> BoundedResult<Vec<MStatistics>> {
    config.validate()?;
    let simulator = design.simulator(config)?;

    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            use rayon::prelude::*;
            return (0..replications)
                .into_par_iter()
                .map(|i| replicate(&simulator, design, &config.lrv, derive_seed(seed, i as u64)))
                .collect();
        }
    }

    (0..replications)
        .map(|i| replicate(&simulator, design, &config.lrv, derive_seed(seed, i as u64)))
        .collect()
}

/// Empirical quantiles of all four statistics at the tabulated probability levels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NullQuantiles {
    /// Quantiles indexed by statistic (in `StatisticKind::ALL` order) then level
    pub values: [[f64; 9]; 4],
    /// Replications the quantiles were estimated from
    pub replications: usize,
}

impl NullQuantiles {
    /// Estimate quantiles from simulated statistics.
    pub fn from_statistics(statistics: &[MStatistics]) -> BoundedResult<Self> {
        if statistics.len() < 2 {
            return Err(BoundedTestError::SimulationError {
                reason: format!("need at least 2 replications, got {}", statistics.len()),
            });
        }

        let mut values = [[0.0; 9]; 4];
        for (row, kind) in values.iter_mut().zip(StatisticKind::ALL) {
            let mut sample: Vec<f64> = statistics.iter().map(|s| s.get(kind)).collect();
            if let Some(bad) = sample.iter().find(|v| !v.is_finite()) {
                return Err(BoundedTestError::SimulationError {
                    reason: format!("non-finite simulated {} value {}", kind, bad),
                });
            }
            sample.sort_by(float_total_cmp);
            for (slot, &p) in row.iter_mut().zip(PROBABILITY_LEVELS.iter()) {
                *slot = percentile(&sample, p);
            }
        }

        Ok(Self {
            values,
            replications: statistics.len(),
        })
    }

    /// Quantiles of one statistic at the tabulated levels.
    pub fn quantiles(&self, kind: StatisticKind) -> &[f64; 9] {
        let index = StatisticKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        &self.values[index]
    }
}

/// Simulate the null distribution of a design and summarise it by quantiles.
pub fn null_quantiles(design: &SimulationDesign, config: &MonteCarloConfig) -> BoundedResult<NullQuantiles> {
    let replications = config.replications_within_budget(config.n_sim, 1)?;
    info!(
        "simulating {} null paths: c = {:.4}, c_bar = {:.4}, {} with kappa {:.4}, T = {}",
        replications, design.c_lower, design.c_upper, design.method, design.kappa, config.sample_size
    );
    let statistics = simulate_statistics(design, config, replications, config.seed)?;
    NullQuantiles::from_statistics(&statistics)
}

/// Fraction of `statistics` falling in the rejection region of `critical_value`.
pub fn rejection_rate(statistics: &[f64], critical_value: f64, tail: TailDirection) -> f64 {
    if statistics.is_empty() {
        return 0.0;
    }
    let rejections = statistics.iter().filter(|&&s| tail.rejects(s, critical_value)).count();
    rejections as f64 / statistics.len() as f64
}
