//! Bounded autoregressive process simulation.
//!
//! Paths follow `x_t = m + ρ(x_{t-1} - m) + σε_t` with `ε_t ~ N(0, 1)`,
//! started at `x_1 = m`. Whenever a step would leave `[b, b̄]` a regulation
//! mechanism brings it back. With `ρ = 1` the path is a bounded random walk
//! (the unit-root null); with `ρ = 1 + κ/T` it is a bounded local alternative
//! reverting to its start value.
//!
//! Every path is a pure function of the configuration and a `u64` seed.

use crate::errors::{validate_bounds, BoundedResult, BoundedTestError};
use crate::rng::SimulationRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of innovation re-draws before falling back to truncation.
pub const DEFAULT_MAX_RETRIES: usize = 50;

/// How a step that would leave the bounds is brought back inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RegulationMechanism {
    /// Clamp the step to the violated bound.
    Truncation,
    /// Fold the overshoot back into the interval.
    Reflection,
    /// Re-draw the innovation while the step would exit, up to `max_retries`
    /// times, then truncate.
    InnovationRegulator {
        /// Number of re-draws attempted before truncating
        max_retries: usize,
    },
}

impl Default for RegulationMechanism {
    fn default() -> Self {
        RegulationMechanism::Truncation
    }
}

impl RegulationMechanism {
    /// Innovation regulator with the default retry count.
    pub fn innovation_regulator() -> Self {
        RegulationMechanism::InnovationRegulator {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Configuration for a regulated bounded process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessConfig {
    /// Number of observations returned
    pub length: usize,
    /// Lower and upper bound
    pub bounds: (f64, f64),
    /// Autoregressive coefficient
    pub rho: f64,
    /// Innovation standard deviation
    pub sigma: f64,
    /// Start value and reversion level; defaults to the midpoint of the bounds
    pub initial_value: Option<f64>,
    /// Steps simulated and discarded before the first returned observation
    pub burn_in: usize,
    /// Regulation applied at the bounds
    pub regulation: RegulationMechanism,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            length: 500,
            bounds: (-1.0, 1.0),
            rho: 1.0,
            sigma: 1.0,
            initial_value: None,
            burn_in: 0,
            regulation: RegulationMechanism::Truncation,
        }
    }
}

/// Simulator for bounded AR(1) paths under a fixed configuration.
#[derive(Debug, Clone)]
pub struct RegulatedProcessSimulator {
    config: ProcessConfig,
    level: f64,
}

impl RegulatedProcessSimulator {
    /// Validate a configuration and build a simulator for it.
    pub fn new(config: ProcessConfig) -> BoundedResult<Self> {
        validate_bounds(config.bounds)?;
        let (lower, upper) = config.bounds;

        if config.length == 0 {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "length".to_string(),
                value: 0.0,
                constraint: "at least 1".to_string(),
            });
        }
        if !config.rho.is_finite() {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "rho".to_string(),
                value: config.rho,
                constraint: "finite".to_string(),
            });
        }
        if !config.sigma.is_finite() || config.sigma < 0.0 {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "sigma".to_string(),
                value: config.sigma,
                constraint: "finite and non-negative".to_string(),
            });
        }

        let level = config.initial_value.unwrap_or(0.5 * (lower + upper));
        if !level.is_finite() || level < lower || level > upper {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "initial_value".to_string(),
                value: level,
                constraint: format!("within [{}, {}]", lower, upper),
            });
        }

        Ok(Self { config, level })
    }

    /// The configuration this simulator was built from.
    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Simulate one path from a seed.
    pub fn simulate(&self, seed: u64) -> Vec<f64> {
        let mut rng = SimulationRng::with_seed(seed);
        self.simulate_with_rng(&mut rng)
    }

    /// Simulate one path drawing from an existing generator.
    pub fn simulate_with_rng(&self, rng: &mut SimulationRng) -> Vec<f64> {
        let mut state = self.level;
        for _ in 0..self.config.burn_in {
            state = self.step(state, rng);
        }

        let mut path = Vec::with_capacity(self.config.length);
        path.push(state);
        for _ in 1..self.config.length {
            state = self.step(state, rng);
            path.push(state);
        }
        path
    }

    fn step(&self, previous: f64, rng: &mut SimulationRng) -> f64 {
        let (lower, upper) = self.config.bounds;
        let drift = self.level + self.config.rho * (previous - self.level);
        let candidate = drift + self.config.sigma * rng.standard_normal();

        if candidate >= lower && candidate <= upper {
            return candidate;
        }

        match self.config.regulation {
            RegulationMechanism::Truncation => candidate.clamp(lower, upper),
            RegulationMechanism::Reflection => reflect(candidate, lower, upper),
            RegulationMechanism::InnovationRegulator { max_retries } => {
                for _ in 0..max_retries {
                    let retry = drift + self.config.sigma * rng.standard_normal();
                    if retry >= lower && retry <= upper {
                        return retry;
                    }
                }
                candidate.clamp(lower, upper)
            }
        }
    }
}

/// Fold `value` back into `[lower, upper]` by repeated mirroring at the bounds.
fn reflect(value: f64, lower: f64, upper: f64) -> f64 {
    let width = upper - lower;
    if !(width > 0.0) || !value.is_finite() {
        return value.clamp(lower, upper);
    }
    let offset = (value - lower).rem_euclid(2.0 * width);
    let folded = if offset > width { 2.0 * width - offset } else { offset };
    (lower + folded).clamp(lower, upper)
}

/// Simulate a truncated bounded AR(1) path of length `length` started at the midpoint.
///
/// # Example
/// ```rust
/// use bounded_unit_root::regulated_process::simulate;
///
/// let a = simulate(200, (-5.0, 5.0), 1.0, 1.0, 0).unwrap();
/// let b = simulate(200, (-5.0, 5.0), 1.0, 1.0, 0).unwrap();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|x| (-5.0..=5.0).contains(x)));
/// ```
pub fn simulate(
    length: usize,
    bounds: (f64, f64),
    rho: f64,
    sigma: f64,
    seed: u64,
) -> BoundedResult<Vec<f64>> {
    let simulator = RegulatedProcessSimulator::new(ProcessConfig {
        length,
        bounds,
        rho,
        sigma,
        ..Default::default()
    })?;
    Ok(simulator.simulate(seed))
}

/// Bounded AR(1) path with a burn-in period, regulated by truncation.
pub fn generate_bounded_ar1(
    length: usize,
    bounds: (f64, f64),
    rho: f64,
    sigma: f64,
    burn_in: usize,
    seed: u64,
) -> BoundedResult<Vec<f64>> {
    let simulator = RegulatedProcessSimulator::new(ProcessConfig {
        length,
        bounds,
        rho,
        sigma,
        burn_in,
        ..Default::default()
    })?;
    Ok(simulator.simulate(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn config(regulation: RegulationMechanism) -> ProcessConfig {
        ProcessConfig {
            length: 400,
            bounds: (-2.0, 3.0),
            rho: 1.0,
            sigma: 1.0,
            regulation,
            ..Default::default()
        }
    }

    #[test]
    fn test_paths_stay_within_bounds_for_every_mechanism() {
        for regulation in [
            RegulationMechanism::Truncation,
            RegulationMechanism::Reflection,
            RegulationMechanism::innovation_regulator(),
        ] {
            let simulator = RegulatedProcessSimulator::new(config(regulation)).unwrap();
            for seed in 0..5 {
                let path = simulator.simulate(seed);
                assert_eq!(path.len(), 400);
                assert!(
                    path.iter().all(|x| (-2.0..=3.0).contains(x)),
                    "{:?} left the bounds",
                    regulation
                );
            }
        }
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let a = simulate(300, (-5.0, 5.0), 0.95, 0.7, 11).unwrap();
        let b = simulate(300, (-5.0, 5.0), 0.95, 0.7, 11).unwrap();
        let c = simulate(300, (-5.0, 5.0), 0.95, 0.7, 12).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_path_starts_at_midpoint_without_burn_in() {
        let path = simulate(10, (2.0, 6.0), 1.0, 1.0, 3).unwrap();
        assert_approx_eq!(path[0], 4.0);

        let burned = generate_bounded_ar1(10, (2.0, 6.0), 1.0, 1.0, 25, 3).unwrap();
        assert_eq!(burned.len(), 10);
        assert_ne!(burned[0], 4.0);
    }

    #[test]
    fn test_zero_sigma_is_constant() {
        let path = simulate(20, (-1.0, 1.0), 0.5, 0.0, 0).unwrap();
        assert!(path.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_reflection_folds_overshoot() {
        assert_approx_eq!(reflect(1.5, 0.0, 1.0), 0.5);
        assert_approx_eq!(reflect(-0.25, 0.0, 1.0), 0.25);
        assert_approx_eq!(reflect(2.25, 0.0, 1.0), 0.25);
        assert_approx_eq!(reflect(0.4, 0.0, 1.0), 0.4);
    }

    #[test]
    fn test_invalid_configurations_rejected() {
        assert!(matches!(
            simulate(10, (1.0, 0.0), 1.0, 1.0, 0),
            Err(BoundedTestError::InvalidBounds { .. })
        ));
        assert!(simulate(0, (0.0, 1.0), 1.0, 1.0, 0).is_err());
        assert!(simulate(10, (0.0, 1.0), 1.0, -1.0, 0).is_err());
        assert!(simulate(10, (0.0, 1.0), f64::NAN, 1.0, 0).is_err());

        let outside = ProcessConfig {
            initial_value: Some(5.0),
            ..config(RegulationMechanism::Truncation)
        };
        assert!(RegulatedProcessSimulator::new(outside).is_err());
    }

    #[test]
    fn test_narrow_bounds_truncation_hits_both_edges() {
        let path = simulate(500, (-0.5, 0.5), 1.0, 1.0, 9).unwrap();
        assert!(path.iter().any(|x| *x == 0.5));
        assert!(path.iter().any(|x| *x == -0.5));
    }
}
