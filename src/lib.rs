//! # Bounded Unit Root Tests
//!
//! GLS-based unit root tests for time series confined to a known interval.
//!
//! Series such as interest rates, unemployment rates or bounded indices
//! cannot wander off like an unbounded random walk, and standard unit root
//! tests applied to them are badly sized. This crate implements the M-type
//! tests (MZα, MSB, MZt) and the point-optimal PT statistic with detrending
//! and critical values that account for the bounds.
//!
//! ## Key Features
//!
//! - **Bound-aware GLS detrending**: the non-centrality κ̄ of the local
//!   alternative is chosen from the standardized bounds `(c, c̄)`
//! - **Long-run variance**: Quadratic-Spectral or Bartlett kernel estimators
//!   on AR(1) innovations, or the autoregressive MAIC estimator
//! - **Critical values**: embedded null quantile tables with interpolation,
//!   or Monte Carlo simulation at the observed bounds and sample size
//! - **Bounded process simulation**: truncation, reflection and innovation
//!   regulation of AR(1) paths
//! - **Deterministic**: all simulation is seeded; repeated requests for the
//!   same critical values are served from a process-wide cache
//!
//! ## Quick Start
//!
//! ```rust
//! use bounded_unit_root::prelude::*;
//!
//! fn main() -> Result<(), BoundedTestError> {
//!     // a bounded random walk on [-5, 5]
//!     let series = simulate(200, (-5.0, 5.0), 1.0, 1.0, 0)?;
//!
//!     let outcome = bounded_unit_root_test(
//!         &series,
//!         (-5.0, 5.0),
//!         StatisticSelector::All,
//!         DetrendingMethod::GlsBounds,
//!         LrvMethod::NonParametric,
//!     )?;
//!
//!     for result in outcome.results() {
//!         println!("{}", result);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! [`unit_root_test`] orchestrates the pipeline:
//! [`detrending`] (resolving κ̄ through [`noncentrality`]) →
//! [`long_run_variance`] → [`statistics`] → [`critical_values`].
//! Simulation lives in [`regulated_process`] and [`monte_carlo`]; simulated
//! tables are kept in [`table_cache`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod linear_algebra;
pub mod math_utils;
pub mod results;
pub mod rng;

// Tables
pub mod table_cache;
pub mod table_grid;
pub mod tables;

// Test pipeline
pub mod critical_values;
pub mod detrending;
pub mod long_run_variance;
pub mod monte_carlo;
pub mod noncentrality;
pub mod regulated_process;
pub mod statistics;
pub mod unit_root_test;

// Re-exports for convenience - main public API
pub use config::{CriticalValueSource, StatisticSelector, UnitRootTestConfig};
pub use critical_values::{compute_critical_values, CriticalValueProvider, CriticalValues};
pub use detrending::{detrend, DetrendedSeries, DetrendingMethod};
pub use errors::{BoundedResult, BoundedTestError};
pub use long_run_variance::{LrvEstimate, LrvMethod};
pub use monte_carlo::MonteCarloConfig;
pub use noncentrality::{compute_kappa_table, NonCentralityResolver};
pub use regulated_process::{RegulatedProcessSimulator, RegulationMechanism};
pub use results::{TestDiagnostics, TestOutcome, TestResult};
pub use statistics::{MStatistics, StatisticKind, TailDirection};
pub use unit_root_test::{
    bounded_unit_root_test, bounded_unit_root_test_str, bounded_unit_root_test_with_config,
    BoundedUnitRootTest,
};

/// Everything needed to run and inspect a test.
pub mod prelude {
    pub use crate::config::{CriticalValueSource, StatisticSelector, UnitRootTestConfig};
    pub use crate::detrending::DetrendingMethod;
    pub use crate::errors::{BoundedResult, BoundedTestError};
    pub use crate::long_run_variance::LrvMethod;
    pub use crate::regulated_process::{generate_bounded_ar1, simulate, RegulationMechanism};
    pub use crate::results::{TestOutcome, TestResult};
    pub use crate::statistics::StatisticKind;
    pub use crate::unit_root_test::{
        bounded_unit_root_test, bounded_unit_root_test_str, bounded_unit_root_test_with_config,
    };
}
