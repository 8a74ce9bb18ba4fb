//! Process-wide cache for simulated κ̄ values and null quantiles.
//!
//! The embedded tables are compiled in and never change. Simulated entries
//! extend them through a single compute-if-absent path: a missing key is
//! computed under a per-key guard, so concurrent callers asking for the same
//! key wait for one Monte Carlo run instead of repeating it. Entries are
//! append-only; once a key is written its value is never replaced.

use crate::detrending::DetrendingMethod;
use crate::errors::BoundedResult;
use crate::monte_carlo::NullQuantiles;
use crate::regulated_process::RegulationMechanism;
use log::debug;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Resolution of cache keys for real-valued parameters.
const KEY_RESOLUTION: f64 = 1e6;

/// Round a real parameter to the cache key resolution.
pub fn quantize(value: f64) -> i64 {
    (value * KEY_RESOLUTION).round() as i64
}

/// Parameter value a quantized key stands for.
pub fn dequantize(key: i64) -> f64 {
    key as f64 / KEY_RESOLUTION
}

/// Key of a calibrated κ̄ value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KappaKey {
    /// Quantized standardized lower bound
    pub c_lower: i64,
    /// Quantized standardized upper bound
    pub c_upper: i64,
    /// Simulated sample length
    pub sample_size: usize,
    /// Replications per candidate
    pub n_sim: usize,
    /// Base seed
    pub seed: u64,
}

/// Key of a simulated set of null quantiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CriticalValueKey {
    /// Detrending applied to simulated paths
    pub method: DetrendingMethod,
    /// Quantized standardized lower bound
    pub c_lower: i64,
    /// Quantized standardized upper bound
    pub c_upper: i64,
    /// Quantized κ̄ used for GLS detrending
    pub kappa: i64,
    /// Simulated sample length
    pub sample_size: usize,
    /// Number of replications
    pub n_sim: usize,
    /// Base seed
    pub seed: u64,
    /// Regulation of the simulated paths
    pub regulation: RegulationMechanism,
}

/// Cache statistics for monitoring.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that found no entry
    pub misses: u64,
    /// Entries actually computed
    pub computations: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Append-only map with one compute guard per missing key.
struct GuardedMap<K, V> {
    entries: RwLock<HashMap<K, V>>,
    guards: Mutex<HashMap<K, Arc<Mutex<()>>>>,
}

impl<K, V> GuardedMap<K, V>
where
    K: Eq + Hash + Copy,
    V: Clone,
{
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            guards: Mutex::new(HashMap::new()),
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn get_or_try_insert_with<F>(&self, key: K, stats: &Mutex<CacheStats>, compute: F) -> BoundedResult<V>
    where
        F: FnOnce() -> BoundedResult<V>,
    {
        if let Some(value) = self.get(&key) {
            stats.lock().hits += 1;
            return Ok(value);
        }

        let guard = {
            let mut guards = self.guards.lock();
            Arc::clone(guards.entry(key).or_insert_with(|| Arc::new(Mutex::new(()))))
        };
        let _held = guard.lock();

        // another caller may have filled the key while we waited
        if let Some(value) = self.get(&key) {
            stats.lock().hits += 1;
            return Ok(value);
        }
        stats.lock().misses += 1;

        let value = compute()?;
        let stored = self.entries.write().entry(key).or_insert(value).clone();
        self.guards.lock().remove(&key);
        stats.lock().computations += 1;
        Ok(stored)
    }
}

/// Process-wide store of simulated table entries.
pub struct TableCache {
    kappa: GuardedMap<KappaKey, f64>,
    critical_values: GuardedMap<CriticalValueKey, Arc<NullQuantiles>>,
    stats: Mutex<CacheStats>,
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            kappa: GuardedMap::new(),
            critical_values: GuardedMap::new(),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    /// Cached κ̄ for `key`, if any.
    pub fn kappa(&self, key: &KappaKey) -> Option<f64> {
        self.kappa.get(key)
    }

    /// Return the κ̄ stored under `key`, computing and storing it if absent.
    pub fn get_or_compute_kappa<F>(&self, key: KappaKey, compute: F) -> BoundedResult<f64>
    where
        F: FnOnce() -> BoundedResult<f64>,
    {
        let value = self.kappa.get_or_try_insert_with(key, &self.stats, compute)?;
        debug!("kappa cache: ({}, {}) -> {:.4}", key.c_lower, key.c_upper, value);
        Ok(value)
    }

    /// Cached null quantiles for `key`, if any.
    pub fn critical_values(&self, key: &CriticalValueKey) -> Option<Arc<NullQuantiles>> {
        self.critical_values.get(key)
    }

    /// Return the null quantiles stored under `key`, simulating them if absent.
    pub fn get_or_compute_critical_values<F>(
        &self,
        key: CriticalValueKey,
        compute: F,
    ) -> BoundedResult<Arc<NullQuantiles>>
    where
        F: FnOnce() -> BoundedResult<NullQuantiles>,
    {
        self.critical_values
            .get_or_try_insert_with(key, &self.stats, || compute().map(Arc::new))
    }

    /// Number of stored `(κ̄, critical value)` entries.
    pub fn len(&self) -> (usize, usize) {
        (self.kappa.len(), self.critical_values.len())
    }

    /// True when nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == (0, 0)
    }

    /// Snapshot of the hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }
}

static GLOBAL_TABLE_CACHE: Lazy<TableCache> = Lazy::new(TableCache::new);

/// The process-wide table cache.
pub fn global_table_cache() -> &'static TableCache {
    &GLOBAL_TABLE_CACHE
}
