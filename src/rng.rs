//! Seeded random number generation for simulation.
//!
//! Every simulation owns its generator. There is no process-wide random
//! state: a path is a function of its arguments and its `u64` seed only.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::StandardNormal;

/// Golden-ratio increment used to decorrelate per-replication seeds.
const SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// ChaCha20 generator for reproducible simulation draws.
///
/// `seed_from_u64` expands the 64-bit seed to the full 256-bit ChaCha key,
/// so nearby seeds still produce unrelated streams.
#[derive(Debug, Clone)]
pub struct SimulationRng {
    rng: ChaCha20Rng,
}

impl SimulationRng {
    /// Create a generator from a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draw from N(0, 1).
    pub fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

/// Derive an independent seed for replication `index` from a base seed.
///
/// Replications seeded this way give the same draws whether they run
/// sequentially or on a thread pool.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    (base ^ index.rotate_left(32)).wrapping_add(index).wrapping_mul(SEED_MIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = SimulationRng::with_seed(7);
        let mut b = SimulationRng::with_seed(7);
        for _ in 0..50 {
            assert_eq!(a.standard_normal().to_bits(), b.standard_normal().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = SimulationRng::with_seed(1);
        let mut b = SimulationRng::with_seed(2);
        let xs: Vec<f64> = (0..10).map(|_| a.standard_normal()).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.standard_normal()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = SimulationRng::with_seed(42);
        let draws: Vec<f64> = (0..20_000).map(|_| rng.standard_normal()).collect();

        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.05, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.05, "var = {}", var);
    }

    #[test]
    fn test_derive_seed_distinct_and_stable() {
        let seeds: Vec<u64> = (0..100).map(|i| derive_seed(42, i)).collect();
        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), seeds.len());
        assert_eq!(derive_seed(42, 5), derive_seed(42, 5));
        assert_ne!(derive_seed(0, 0), derive_seed(1, 0));
    }
}
