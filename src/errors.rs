//! Error types and validation functions for bounded unit root testing.
//!
//! Configuration and data problems are reported before any pipeline stage
//! runs. Numerical degeneracies inside the estimators are recovered locally
//! and surfaced as result flags, so only a handful of variants ever reach the
//! caller from a minimally valid input.

use thiserror::Error;

/// Error types for bounded unit root testing operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BoundedTestError {
    /// Bounds are not an ordered pair of finite reals.
    #[error("Invalid bounds: lower = {lower}, upper = {upper}; expected finite lower < upper")]
    InvalidBounds {
        /// Declared lower bound
        lower: f64,
        /// Declared upper bound
        upper: f64,
    },

    /// A method or statistic selector was not recognised.
    #[error("Unknown {selector} '{value}', expected one of: {expected}")]
    UnknownSelector {
        /// Name of the selector (detrending, statistic, lrv_method)
        selector: String,
        /// Value supplied by the caller
        value: String,
        /// Accepted values
        expected: String,
    },

    /// Invalid parameter value for a configuration field.
    #[error("Invalid parameter: {parameter} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value provided
        value: f64,
        /// Valid range or constraint description
        constraint: String,
    },

    /// Not enough observations for the test.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum required data points
        required: usize,
        /// Actual number of data points provided
        actual: usize,
    },

    /// The series contains NaN or an infinity.
    #[error("Series contains non-finite value at index {index}: {value}")]
    NonFiniteValue {
        /// Position of the first offending value
        index: usize,
        /// The offending value
        value: f64,
    },

    /// An observation lies outside the declared bounds beyond the tolerance.
    #[error("Observation {value} at index {index} lies outside bounds [{lower}, {upper}]")]
    OutOfBounds {
        /// Position of the first offending value
        index: usize,
        /// The offending value
        value: f64,
        /// Declared lower bound
        lower: f64,
        /// Declared upper bound
        upper: f64,
    },

    /// Numerical computation failure inside an estimator.
    #[error("Numerical computation failed: {reason}")]
    NumericalError {
        /// Detailed reason for numerical failure
        reason: String,
        /// Operation that failed
        operation: Option<String>,
    },

    /// A lookup table has no nodes to interpolate from.
    #[error("Table lookup failed: {table} is empty or uninitialised")]
    TableLookupError {
        /// Name of the table
        table: String,
    },

    /// Monte Carlo simulation could not produce a usable sample.
    #[error("Simulation failed: {reason}")]
    SimulationError {
        /// Reason for the failure
        reason: String,
    },

    /// A Monte Carlo request cannot fit in the configured path budget.
    #[error("Simulation budget exceeded: {required} paths required, budget is {budget}")]
    BudgetExceeded {
        /// Paths the request needs at the minimum replication count
        required: usize,
        /// Configured maximum number of simulated paths
        budget: usize,
    },
}

impl BoundedTestError {
    /// True for errors caused by malformed bounds, selectors or parameters.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBounds { .. } | Self::UnknownSelector { .. } | Self::InvalidParameter { .. }
        )
    }

    /// True for errors caused by the supplied observations.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::NonFiniteValue { .. } | Self::OutOfBounds { .. }
        )
    }
}

/// Result type for bounded unit root operations.
pub type BoundedResult<T> = Result<T, BoundedTestError>;

/// Validates that data has sufficient length.
///
/// # Example
/// ```rust
/// use bounded_unit_root::errors::validate_data_length;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert!(validate_data_length(&data, 2).is_ok());
/// assert!(validate_data_length(&data, 5).is_err());
/// ```
pub fn validate_data_length(data: &[f64], min_required: usize) -> BoundedResult<()> {
    if data.len() < min_required {
        Err(BoundedTestError::InsufficientData {
            required: min_required,
            actual: data.len(),
        })
    } else {
        Ok(())
    }
}

/// Validates that a parameter is within `[min, max]`.
///
/// # Example
/// ```rust
/// use bounded_unit_root::errors::validate_parameter;
///
/// assert!(validate_parameter(0.05, 0.0, 1.0, "alpha").is_ok());
/// assert!(validate_parameter(1.5, 0.0, 1.0, "alpha").is_err());
/// ```
pub fn validate_parameter(value: f64, min: f64, max: f64, name: &str) -> BoundedResult<()> {
    if value.is_nan() || value < min || value > max {
        Err(BoundedTestError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: format!("[{}, {}]", min, max),
        })
    } else {
        Ok(())
    }
}

/// Validates that all values in a slice are finite.
///
/// Returns on the first non-finite value.
pub fn validate_all_finite(data: &[f64]) -> BoundedResult<()> {
    match data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, &value)) => Err(BoundedTestError::NonFiniteValue { index, value }),
        None => Ok(()),
    }
}

/// Validates that bounds are finite and strictly ordered.
///
/// # Example
/// ```rust
/// use bounded_unit_root::errors::validate_bounds;
///
/// assert!(validate_bounds((-1.0, 1.0)).is_ok());
/// assert!(validate_bounds((1.0, 0.0)).is_err());
/// ```
pub fn validate_bounds(bounds: (f64, f64)) -> BoundedResult<()> {
    let (lower, upper) = bounds;
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(BoundedTestError::InvalidBounds { lower, upper });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_data_length_insufficient() {
        let data = vec![1.0, 2.0];
        match validate_data_length(&data, 5) {
            Err(BoundedTestError::InsufficientData { required, actual }) => {
                assert_eq!(required, 5);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected InsufficientData error, got {:?}", other),
        }
        assert!(validate_data_length(&data, 2).is_ok());
    }

    #[test]
    fn test_validate_parameter_rejects_nan_and_out_of_range() {
        assert!(validate_parameter(0.0, 0.0, 1.0, "alpha").is_ok());
        assert!(validate_parameter(1.0, 0.0, 1.0, "alpha").is_ok());

        match validate_parameter(-0.5, 0.0, 1.0, "alpha") {
            Err(BoundedTestError::InvalidParameter {
                parameter,
                value,
                constraint,
            }) => {
                assert_eq!(parameter, "alpha");
                assert_eq!(value, -0.5);
                assert_eq!(constraint, "[0, 1]");
            }
            other => panic!("Expected InvalidParameter error, got {:?}", other),
        }
        assert!(validate_parameter(f64::NAN, 0.0, 1.0, "alpha").is_err());
    }

    #[test]
    fn test_validate_all_finite_reports_first_index() {
        assert!(validate_all_finite(&[]).is_ok());
        assert!(validate_all_finite(&[1.0, -2.0, 0.0]).is_ok());

        match validate_all_finite(&[1.0, f64::INFINITY, f64::NAN]) {
            Err(BoundedTestError::NonFiniteValue { index, value }) => {
                assert_eq!(index, 1);
                assert!(value.is_infinite());
            }
            other => panic!("Expected NonFiniteValue error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds((-5.0, 5.0)).is_ok());
        assert!(matches!(
            validate_bounds((1.0, 0.0)),
            Err(BoundedTestError::InvalidBounds { .. })
        ));
        assert!(validate_bounds((1.0, 1.0)).is_err());
        assert!(validate_bounds((f64::NEG_INFINITY, 1.0)).is_err());
        assert!(validate_bounds((0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_error_classification() {
        let config_err = BoundedTestError::InvalidBounds {
            lower: 1.0,
            upper: 0.0,
        };
        assert!(config_err.is_configuration_error());
        assert!(!config_err.is_data_error());

        let data_err = BoundedTestError::InsufficientData {
            required: 10,
            actual: 3,
        };
        assert!(data_err.is_data_error());
        assert!(!data_err.is_configuration_error());

        let table_err = BoundedTestError::TableLookupError {
            table: "kappa".to_string(),
        };
        assert!(!table_err.is_data_error());
        assert!(!table_err.is_configuration_error());
    }

    #[test]
    fn test_error_display_formatting() {
        let err = BoundedTestError::UnknownSelector {
            selector: "detrending".to_string(),
            value: "gls_foo".to_string(),
            expected: "ols, gls_ers, gls_bounds".to_string(),
        };
        let message = format!("{}", err);
        assert!(message.contains("detrending"));
        assert!(message.contains("gls_foo"));
        assert!(message.contains("gls_bounds"));

        let err = BoundedTestError::OutOfBounds {
            index: 3,
            value: 7.5,
            lower: -5.0,
            upper: 5.0,
        };
        let message = format!("{}", err);
        assert!(message.contains("7.5"));
        assert!(message.contains("index 3"));
    }
}
