//! Least squares routines for the autoregressive spectral estimator.
//!
//! Regressions are solved through a Householder QR factorisation applied
//! directly to the response vector; Q is never formed. Rank deficient
//! columns receive a zero coefficient instead of an error so that lag
//! searches over nearly collinear designs still return a fit.

use crate::errors::{BoundedResult, BoundedTestError};

fn numerical_error(reason: impl Into<String>, operation: &str) -> BoundedTestError {
    BoundedTestError::NumericalError {
        reason: reason.into(),
        operation: Some(operation.to_string()),
    }
}

/// Solve the least squares problem `min ||Ax - b||` for a row-major `A` (m × n, m ≥ n).
pub fn economy_qr_solve(a: &[Vec<f64>], b: &[f64]) -> BoundedResult<Vec<f64>> {
    let m = a.len();
    if m == 0 {
        return Err(numerical_error("Empty design matrix", "economy_qr_solve"));
    }
    let n = a[0].len();
    if a.iter().any(|row| row.len() != n) {
        return Err(numerical_error("Design matrix rows have inconsistent length", "economy_qr_solve"));
    }
    if m != b.len() {
        return Err(numerical_error("Matrix-vector dimension mismatch in QR solve", "economy_qr_solve"));
    }
    if n > m {
        return Err(numerical_error(
            "Underdetermined system (more columns than rows)",
            "economy_qr_solve",
        ));
    }
    if a.iter().flatten().chain(b.iter()).any(|v| !v.is_finite()) {
        return Err(numerical_error("Non-finite value in regression inputs", "economy_qr_solve"));
    }

    let mut r = a.to_vec();
    let mut qtb = b.to_vec();

    // tol = 100 · max(m, n) · eps · ||A||_F
    let frobenius = r.iter().flatten().map(|v| v * v).sum::<f64>().sqrt();
    let rank_tol = 100.0 * f64::EPSILON * (m.max(n) as f64) * frobenius.max(1.0);

    for k in 0..n.min(m.saturating_sub(1)) {
        let mut v: Vec<f64> = (k..m).map(|i| r[i][k]).collect();
        let column_norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if column_norm < rank_tol {
            for row in r.iter_mut().skip(k) {
                row[k] = 0.0;
            }
            continue;
        }

        v[0] += column_norm.copysign(v[0]);
        let v_norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if v_norm < rank_tol {
            continue;
        }
        v.iter_mut().for_each(|x| *x /= v_norm);

        for j in k..n {
            let dot: f64 = (k..m).map(|i| v[i - k] * r[i][j]).sum();
            for i in k..m {
                r[i][j] -= 2.0 * v[i - k] * dot;
            }
        }
        let dot: f64 = (k..m).map(|i| v[i - k] * qtb[i]).sum();
        for i in k..m {
            qtb[i] -= 2.0 * v[i - k] * dot;
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        if r[i][i].abs() < rank_tol {
            // singular direction, least squares solution with x_i = 0
            continue;
        }
        let tail: f64 = (i + 1..n).map(|j| r[i][j] * x[j]).sum();
        x[i] = (qtb[i] - tail) / r[i][i];
    }

    Ok(x)
}

/// Multiple regression with predictors given column-wise: `x[predictor][observation]`.
///
/// No intercept is added; include a column of ones if one is wanted.
pub fn multiple_regression(x: &[Vec<f64>], y: &[f64]) -> BoundedResult<Vec<f64>> {
    let k = x.len();
    let n = y.len();

    if n < k {
        return Err(BoundedTestError::InsufficientData {
            required: k,
            actual: n,
        });
    }
    if k == 0 {
        return Ok(Vec::new());
    }
    if let Some(i) = x.iter().position(|col| col.len() != n) {
        return Err(numerical_error(
            format!("Predictor column {} has inconsistent length", i),
            "multiple_regression",
        ));
    }

    let design: Vec<Vec<f64>> = (0..n).map(|t| x.iter().map(|col| col[t]).collect()).collect();
    economy_qr_solve(&design, y)
}

/// Residuals `y - Xβ` for column-wise predictors.
pub fn compute_residuals(x: &[Vec<f64>], y: &[f64], coeffs: &[f64]) -> Vec<f64> {
    debug_assert_eq!(coeffs.len(), x.len(), "coefficients length must match number of predictors");

    (0..y.len())
        .map(|t| {
            let fitted: f64 = coeffs.iter().zip(x).map(|(c, col)| c * col[t]).sum();
            y[t] - fitted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_exact_fit_recovers_coefficients() {
        let ones = vec![1.0; 6];
        let trend: Vec<f64> = (0..6).map(|t| t as f64).collect();
        let y: Vec<f64> = trend.iter().map(|t| 2.0 - 0.5 * t).collect();

        let beta = multiple_regression(&[ones.clone(), trend.clone()], &y).unwrap();
        assert_approx_eq!(beta[0], 2.0, 1e-10);
        assert_approx_eq!(beta[1], -0.5, 1e-10);

        let residuals = compute_residuals(&[ones, trend], &y, &beta);
        assert!(residuals.iter().all(|r| r.abs() < 1e-10));
    }

    #[test]
    fn test_least_squares_slope_through_origin() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![1.0, 2.0, 2.0];
        let beta = multiple_regression(&[x], &y).unwrap();
        // Σxy / Σx² = 11 / 14
        assert_approx_eq!(beta[0], 11.0 / 14.0, 1e-12);
    }

    #[test]
    fn test_collinear_column_gets_zero_coefficient() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let zeros = vec![0.0; 4];
        let y = vec![2.0, 4.0, 6.0, 8.0];
        let beta = multiple_regression(&[a, zeros], &y).unwrap();
        assert_approx_eq!(beta[0], 2.0, 1e-10);
        assert_eq!(beta[1], 0.0);
    }

    #[test]
    fn test_dimension_errors() {
        assert!(matches!(
            multiple_regression(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]], &[1.0, 2.0]),
            Err(BoundedTestError::InsufficientData { required: 3, actual: 2 })
        ));
        assert!(matches!(
            multiple_regression(&[vec![1.0, 2.0]], &[1.0, 2.0, 3.0]),
            Err(BoundedTestError::NumericalError { .. })
        ));
        assert!(economy_qr_solve(&[vec![1.0], vec![f64::NAN]], &[1.0, 2.0]).is_err());
    }
}
