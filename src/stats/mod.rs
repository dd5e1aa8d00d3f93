//! Probability distributions used for regression inference.
//!
//! - `StudentT`: coefficient t-tests (two-tailed p-values)
//! - `FisherF`: overall significance of the regression
//!
//! Both wrap the `statrs` distributions and add the degrees-of-freedom
//! checks and tail conventions the regression engine relies on.
//!
//! # Examples
//! ```rust
//! use linreg::stats::StudentT;
//!
//! let t = StudentT::new(11.0).unwrap();
//! let p = t.two_tailed_p(2.342281855);
//! assert!((p - 0.039015).abs() < 1e-5);
//! ```

mod fisher_f;
mod student_t;

pub use fisher_f::FisherF;
pub use student_t::StudentT;
