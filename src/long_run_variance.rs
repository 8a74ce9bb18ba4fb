//! Long-run variance (zero-frequency spectral density) estimators.
//!
//! Two estimators are available for detrended residuals `ŷ`:
//!
//! - **Non-parametric**: kernel-weighted autocovariances of the AR(1)
//!   innovations `ê_t = ŷ_t - ρ̂ ŷ_{t-1}` with bandwidth
//!   `l = ⌊4 (T/100)^{2/25}⌋`. Quadratic-Spectral weights by default,
//!   Bartlett as an alternative; the taper argument is `j/(l+1)`.
//! - **Autoregressive**: ADF-form regressions
//!   `Δŷ_t = β₀ ŷ_{t-1} + Σ_{j=1}^{k} b_j Δŷ_{t-j} + e_t` for
//!   `k = 0..=kmax`, `kmax = ⌊12 (T/100)^{1/4}⌋`, on a common sample. The lag
//!   minimising the modified AIC is used and `s² = σ̂²_k / (1 - Σ b̂_j)²`.
//!
//! Estimates are never negative. A raw value that is not strictly positive
//! is replaced by a configurable floor and the estimate is marked degraded.

use crate::errors::{validate_all_finite, validate_data_length, BoundedResult, BoundedTestError};
use crate::linear_algebra::{compute_residuals, multiple_regression};
use crate::math_utils::{ar1_innovations, autocovariance, mean};
use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default lower bound for long-run variance estimates.
pub const DEFAULT_LRV_FLOOR: f64 = 1e-10;

/// Family of long-run variance estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LrvMethod {
    /// Kernel estimator on AR(1) innovations
    NonParametric,
    /// Autoregressive spectral estimator with MAIC lag selection
    Autoregressive,
}

impl LrvMethod {
    /// Selector name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            LrvMethod::NonParametric => "np",
            LrvMethod::Autoregressive => "ar",
        }
    }
}

impl fmt::Display for LrvMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LrvMethod {
    type Err = BoundedTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "np" => Ok(LrvMethod::NonParametric),
            "ar" => Ok(LrvMethod::Autoregressive),
            _ => Err(BoundedTestError::UnknownSelector {
                selector: "lrv_method".to_string(),
                value: s.to_string(),
                expected: "np, ar".to_string(),
            }),
        }
    }
}

/// Kernel used by the non-parametric estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KernelType {
    /// Quadratic-Spectral kernel (infinite support)
    #[default]
    QuadraticSpectral,
    /// Bartlett (Newey-West) triangular kernel
    Bartlett,
}

impl KernelType {
    /// Kernel weight at taper argument `x = j/(l+1)`.
    pub fn weight(&self, x: f64) -> f64 {
        match self {
            KernelType::Bartlett => {
                let abs_x = x.abs();
                if abs_x <= 1.0 {
                    1.0 - abs_x
                } else {
                    0.0
                }
            }
            KernelType::QuadraticSpectral => {
                if x == 0.0 {
                    return 1.0;
                }
                let pi_x = std::f64::consts::PI * x;
                let arg = 6.0 * pi_x / 5.0;
                25.0 / (12.0 * pi_x * pi_x) * (arg.sin() / arg - arg.cos())
            }
        }
    }
}

/// Estimator settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LrvConfig {
    /// Kernel for the non-parametric estimator
    pub kernel: KernelType,
    /// Replacement for non-positive raw estimates
    pub floor: f64,
}

impl Default for LrvConfig {
    fn default() -> Self {
        Self {
            kernel: KernelType::QuadraticSpectral,
            floor: DEFAULT_LRV_FLOOR,
        }
    }
}

/// A long-run variance estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LrvEstimate {
    /// Estimated long-run variance, always positive
    pub value: f64,
    /// The raw estimate was not positive and was replaced by the floor
    pub degraded: bool,
    /// Bandwidth (non-parametric) or selected lag order (autoregressive)
    pub lag: usize,
    /// Estimator that produced the value
    pub method: LrvMethod,
}

/// Bandwidth `⌊4 (T/100)^{2/25}⌋` of the non-parametric estimator.
pub fn np_bandwidth(sample_size: usize) -> usize {
    (4.0 * (sample_size as f64 / 100.0).powf(2.0 / 25.0)).floor() as usize
}

/// Maximum lag `⌊12 (T/100)^{1/4}⌋` searched by the autoregressive estimator.
pub fn maic_max_lag(sample_size: usize) -> usize {
    (12.0 * (sample_size as f64 / 100.0).powf(0.25)).floor() as usize
}

/// Estimate the long-run variance with default settings.
///
/// # Example
/// ```rust
/// use bounded_unit_root::long_run_variance::{estimate, LrvMethod};
///
/// let residuals: Vec<f64> = (0..100).map(|t| ((t * 7919) % 13) as f64 - 6.0).collect();
/// let lrv = estimate(&residuals, LrvMethod::NonParametric).unwrap();
/// assert!(lrv.value > 0.0);
/// ```
pub fn estimate(residuals: &[f64], method: LrvMethod) -> BoundedResult<LrvEstimate> {
    estimate_with_config(residuals, method, &LrvConfig::default())
}

/// Estimate the long-run variance.
pub fn estimate_with_config(
    residuals: &[f64],
    method: LrvMethod,
    config: &LrvConfig,
) -> BoundedResult<LrvEstimate> {
    validate_data_length(residuals, 2)?;
    validate_all_finite(residuals)?;
    if !config.floor.is_finite() || config.floor <= 0.0 {
        return Err(BoundedTestError::InvalidParameter {
            parameter: "lrv floor".to_string(),
            value: config.floor,
            constraint: "finite and positive".to_string(),
        });
    }

    let (raw, lag) = match method {
        LrvMethod::NonParametric => kernel_estimate(residuals, config.kernel),
        LrvMethod::Autoregressive => autoregressive_estimate(residuals),
    };

    let degraded = !(raw > 0.0) || !raw.is_finite();
    let value = if degraded {
        warn!(
            "{} long-run variance estimate {} is not positive, using floor {}",
            method, raw, config.floor
        );
        config.floor
    } else {
        raw.max(config.floor)
    };

    Ok(LrvEstimate {
        value,
        degraded,
        lag,
        method,
    })
}

/// Raw kernel estimate and the bandwidth used.
fn kernel_estimate(residuals: &[f64], kernel: KernelType) -> (f64, usize) {
    let innovations = ar1_innovations(residuals);
    let center = mean(&innovations);
    let demeaned: Vec<f64> = innovations.iter().map(|e| e - center).collect();

    let n = demeaned.len();
    let bandwidth = np_bandwidth(residuals.len()).min(n.saturating_sub(1));

    let mut lrv = autocovariance(&demeaned, 0);
    for j in 1..=bandwidth {
        let w = kernel.weight(j as f64 / (bandwidth as f64 + 1.0));
        lrv += 2.0 * w * autocovariance(&demeaned, j);
    }
    (lrv, bandwidth)
}

/// One ADF-form fit on the common sample.
struct AdfFit {
    lag: usize,
    sigma2: f64,
    maic: f64,
    lag_coefficient_sum: f64,
}

/// Raw autoregressive estimate and the selected lag.
fn autoregressive_estimate(residuals: &[f64]) -> (f64, usize) {
    let t = residuals.len();
    let diffs: Vec<f64> = residuals.windows(2).map(|w| w[1] - w[0]).collect();

    // keep at least kmax + 2 observations in the common sample
    let mut kmax = maic_max_lag(t);
    while kmax > 0 && diffs.len().saturating_sub(kmax) < kmax + 2 {
        kmax -= 1;
    }

    let fits: Vec<AdfFit> = (0..=kmax)
        .filter_map(|k| fit_adf(residuals, &diffs, k, kmax))
        .collect();

    let best = fits
        .iter()
        .filter(|fit| fit.maic.is_finite())
        .min_by(|a, b| a.maic.total_cmp(&b.maic));

    match best {
        Some(fit) => {
            debug!("MAIC selected lag {} of {}", fit.lag, kmax);
            let denominator = 1.0 - fit.lag_coefficient_sum;
            let raw = fit.sigma2 / (denominator * denominator);
            if raw.is_finite() {
                (raw, fit.lag)
            } else {
                (fit.sigma2, fit.lag)
            }
        }
        None => {
            warn!("no usable autoregressive lag, falling back to k = 0");
            let sigma2 = fits
                .iter()
                .find(|fit| fit.lag == 0)
                .map(|fit| fit.sigma2)
                .unwrap_or_else(|| diffs.iter().map(|d| d * d).sum::<f64>() / diffs.len().max(1) as f64);
            (sigma2, 0)
        }
    }
}

/// Fit `Δŷ_t` on `ŷ_{t-1}` and `k` lagged differences over the sample shared by all lags up to `kmax`.
fn fit_adf(levels: &[f64], diffs: &[f64], k: usize, kmax: usize) -> Option<AdfFit> {
    // diffs[i] = ŷ_{i+1} - ŷ_i, so diffs[i] pairs with the lagged level levels[i]
    let rows: Vec<usize> = (kmax..diffs.len()).collect();
    let n = rows.len();
    if n <= k + 1 {
        return None;
    }

    let y: Vec<f64> = rows.iter().map(|&i| diffs[i]).collect();
    let mut x: Vec<Vec<f64>> = Vec::with_capacity(k + 1);
    x.push(rows.iter().map(|&i| levels[i]).collect());
    for j in 1..=k {
        x.push(rows.iter().map(|&i| diffs[i - j]).collect());
    }

    let beta = multiple_regression(&x, &y).ok()?;
    let errors = compute_residuals(&x, &y, &beta);
    let sigma2 = errors.iter().map(|e| e * e).sum::<f64>() / n as f64;
    let lagged_ss: f64 = x[0].iter().map(|v| v * v).sum();

    let maic = if sigma2 > 0.0 {
        let tau = beta[0] * beta[0] * lagged_ss / sigma2;
        sigma2.ln() + 2.0 * (tau + k as f64) / n as f64
    } else {
        f64::NAN
    };

    Some(AdfFit {
        lag: k,
        sigma2,
        maic,
        lag_coefficient_sum: beta[1..].iter().sum(),
    })
}
