//! Ordinary least squares regression.
//!
//! `Regression` solves the normal equations with [`Matrix`](crate::Matrix)
//! primitives and derives the classical statistics: standard errors,
//! t-statistics, two-tailed p-values, R², adjusted R², multiple R and the F
//! statistic.
//!
//! # Examples
//! ```rust
//! use linreg::Regression;
//!
//! let mut reg = Regression::new();
//! // first column is the intercept
//! reg.set_x(&[[1, 1], [1, 2], [1, 3], [1, 4]]).unwrap();
//! reg.set_y(&[[2.5], [4.0], [5.5], [7.0]]).unwrap();
//! reg.compute().unwrap();
//!
//! let coeffs = reg.coefficients().unwrap();
//! assert!((coeffs[0] - 1.0).abs() < 1e-12);
//! assert!((coeffs[1] - 1.5).abs() < 1e-12);
//! ```

mod regression;

pub use regression::{Regression, RegressionState};
