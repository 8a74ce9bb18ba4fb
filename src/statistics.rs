//! M-type unit root statistics and the point-optimal statistic.
//!
//! All statistics are pure functions of the detrended residuals `ŷ`, the
//! long-run variance `s²` and, for PT, the non-centrality `κ̄`:
//!
//! - `MZα = (ŷ_T²/T - ŷ_1²/T - s²) / (2 T⁻² Σ_{t=2}^T ŷ_{t-1}²)`
//! - `MSB = sqrt(T⁻² Σ_{t=2}^T ŷ_{t-1}² / s²)`
//! - `MZt = MZα · MSB`
//! - `PT  = (κ̄² T⁻² Σ_{t=2}^T ŷ_{t-1}² - κ̄ ŷ_T²/T) / s²`
//!
//! A vanishing `T⁻² Σ ŷ_{t-1}²` is floored at the smallest positive normal
//! `f64`, so every statistic is finite for any finite input.

use crate::errors::{validate_all_finite, validate_data_length, BoundedResult, BoundedTestError};
use crate::math_utils::sum_squared_lagged;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four test statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatisticKind {
    /// Modified Phillips-Perron normalized bias statistic
    MzAlpha,
    /// Modified Sargan-Bhargava statistic
    Msb,
    /// Modified Phillips-Perron t-statistic
    MzT,
    /// Modified point-optimal statistic
    Pt,
}

/// Which tail of the null distribution leads to rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TailDirection {
    /// Reject for values below the critical value
    Left,
    /// Reject for values above the critical value
    Right,
}

impl TailDirection {
    /// True when `statistic` lies in the rejection region of `critical_value`.
    pub fn rejects(&self, statistic: f64, critical_value: f64) -> bool {
        match self {
            TailDirection::Left => statistic < critical_value,
            TailDirection::Right => statistic > critical_value,
        }
    }

    /// Probability level of the critical value for significance `alpha`.
    pub fn quantile_level(&self, alpha: f64) -> f64 {
        match self {
            TailDirection::Left => alpha,
            TailDirection::Right => 1.0 - alpha,
        }
    }
}

impl StatisticKind {
    /// All statistics in reporting order.
    pub const ALL: [StatisticKind; 4] = [
        StatisticKind::MzAlpha,
        StatisticKind::Msb,
        StatisticKind::MzT,
        StatisticKind::Pt,
    ];

    /// Selector name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            StatisticKind::MzAlpha => "mz_alpha",
            StatisticKind::Msb => "msb",
            StatisticKind::MzT => "mz_t",
            StatisticKind::Pt => "pt",
        }
    }

    /// Conventional symbol used in reports.
    pub fn symbol(&self) -> &'static str {
        match self {
            StatisticKind::MzAlpha => "MZα",
            StatisticKind::Msb => "MSB",
            StatisticKind::MzT => "MZt",
            StatisticKind::Pt => "PT",
        }
    }

    /// Rejection tail of this statistic.
    pub fn tail(&self) -> TailDirection {
        match self {
            StatisticKind::Msb => TailDirection::Right,
            _ => TailDirection::Left,
        }
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatisticKind {
    type Err = BoundedTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mz_alpha" => Ok(StatisticKind::MzAlpha),
            "msb" => Ok(StatisticKind::Msb),
            "mz_t" => Ok(StatisticKind::MzT),
            "pt" => Ok(StatisticKind::Pt),
            _ => Err(BoundedTestError::UnknownSelector {
                selector: "statistic".to_string(),
                value: s.to_string(),
                expected: "mz_alpha, msb, mz_t, pt".to_string(),
            }),
        }
    }
}

/// Values of all four statistics for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MStatistics {
    /// MZα
    pub mz_alpha: f64,
    /// MSB
    pub msb: f64,
    /// MZt
    pub mz_t: f64,
    /// PT
    pub pt: f64,
    /// Lagged residuals had no variation and their sum of squares was floored
    pub degenerate: bool,
}

impl MStatistics {
    /// Value of one statistic.
    pub fn get(&self, kind: StatisticKind) -> f64 {
        match kind {
            StatisticKind::MzAlpha => self.mz_alpha,
            StatisticKind::Msb => self.msb,
            StatisticKind::MzT => self.mz_t,
            StatisticKind::Pt => self.pt,
        }
    }
}

/// Residual moments shared by all statistics.
struct Moments {
    t: f64,
    first_sq: f64,
    last_sq: f64,
    /// T⁻² Σ ŷ_{t-1}², floored
    scaled_lagged: f64,
    degenerate: bool,
}

fn moments(residuals: &[f64], lrv: f64) -> BoundedResult<Moments> {
    validate_data_length(residuals, 2)?;
    validate_all_finite(residuals)?;
    if !lrv.is_finite() || lrv <= 0.0 {
        return Err(BoundedTestError::InvalidParameter {
            parameter: "long-run variance".to_string(),
            value: lrv,
            constraint: "finite and positive".to_string(),
        });
    }

    let t = residuals.len() as f64;
    let raw_lagged = sum_squared_lagged(residuals) / (t * t);
    let degenerate = raw_lagged < f64::MIN_POSITIVE;
    Ok(Moments {
        t,
        first_sq: residuals[0] * residuals[0],
        last_sq: residuals[residuals.len() - 1] * residuals[residuals.len() - 1],
        scaled_lagged: raw_lagged.max(f64::MIN_POSITIVE),
        degenerate,
    })
}

/// Compute all four statistics.
pub fn compute_m_statistics(residuals: &[f64], lrv: f64, kappa: f64) -> BoundedResult<MStatistics> {
    let m = moments(residuals, lrv)?;

    let mz_alpha = (m.last_sq / m.t - m.first_sq / m.t - lrv) / (2.0 * m.scaled_lagged);
    let msb = (m.scaled_lagged / lrv).sqrt();
    let pt = (kappa * kappa * m.scaled_lagged - kappa * m.last_sq / m.t) / lrv;

    Ok(MStatistics {
        mz_alpha,
        msb,
        mz_t: mz_alpha * msb,
        pt,
        degenerate: m.degenerate,
    })
}

/// Compute one statistic.
pub fn compute_statistic(
    kind: StatisticKind,
    residuals: &[f64],
    lrv: f64,
    kappa: f64,
) -> BoundedResult<f64> {
    Ok(compute_m_statistics(residuals, lrv, kappa)?.get(kind))
}
