//! Numerical helpers shared by the detrending, variance and statistic modules.
//!
//! Everything here is a pure function over slices. Degenerate inputs (empty
//! slices, zero denominators) return neutral values instead of errors so that
//! callers can decide how to flag them.

/// Safe comparison for floating point values (handles NaN)
pub fn float_total_cmp(a: &f64, b: &f64) -> std::cmp::Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater, // push NaN to end
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal),
    }
}

/// Calculate percentile from sorted data using linear interpolation.
///
/// The index is `p * (n - 1)`, with linear interpolation between the two
/// neighbouring order statistics.
pub fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return f64::NAN;
    }

    if p <= 0.0 {
        return sorted_data[0];
    }

    if p >= 1.0 {
        return sorted_data[sorted_data.len() - 1];
    }

    let n = sorted_data.len();
    let index = p * (n - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = index - lower as f64;
        sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
    }
}

/// Kahan compensated summation.
pub fn kahan_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut c = 0.0; // lost low-order bits

    for &value in values {
        let y = value - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum
}

/// Arithmetic mean with compensated summation. Empty input gives 0.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    kahan_sum(data) / data.len() as f64
}

/// Sum of squared lagged values `Σ_{t=2}^{T} y_{t-1}²`.
pub fn sum_squared_lagged(y: &[f64]) -> f64 {
    if y.len() < 2 {
        return 0.0;
    }
    y[..y.len() - 1].iter().map(|v| v * v).sum()
}

/// No-intercept AR(1) coefficient `Σ y_t y_{t-1} / Σ y_{t-1}²`.
///
/// Returns 0 when the lagged sum of squares vanishes.
pub fn ar1_coefficient(y: &[f64]) -> f64 {
    if y.len() < 2 {
        return 0.0;
    }
    let mut cross = 0.0;
    let mut lagged = 0.0;
    for t in 1..y.len() {
        cross += y[t] * y[t - 1];
        lagged += y[t - 1] * y[t - 1];
    }
    if lagged > 0.0 {
        cross / lagged
    } else {
        0.0
    }
}

/// Residuals of the no-intercept AR(1) fit, `e_t = y_t - ρ̂ y_{t-1}` for t ≥ 2.
pub fn ar1_innovations(y: &[f64]) -> Vec<f64> {
    if y.len() < 2 {
        return Vec::new();
    }
    let rho = ar1_coefficient(y);
    (1..y.len()).map(|t| y[t] - rho * y[t - 1]).collect()
}

/// Innovation variance `Σe²/(T-1)` of the no-intercept AR(1) fit.
pub fn ar1_innovation_variance(y: &[f64]) -> f64 {
    let innovations = ar1_innovations(y);
    if innovations.is_empty() {
        return 0.0;
    }
    innovations.iter().map(|e| e * e).sum::<f64>() / innovations.len() as f64
}

/// Biased sample autocovariance at `lag` of an already demeaned series.
///
/// Divides by the full length, which keeps kernel-weighted sums positive
/// semi-definite for the Bartlett kernel.
pub fn autocovariance(demeaned: &[f64], lag: usize) -> f64 {
    let n = demeaned.len();
    if n == 0 || lag >= n {
        return 0.0;
    }
    let sum: f64 = (lag..n).map(|t| demeaned[t] * demeaned[t - lag]).sum();
    sum / n as f64
}

/// Linear interpolation of `y` at `x` between `(x0, y0)` and `(x1, y1)`.
pub fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    if (x1 - x0).abs() < f64::EPSILON {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
