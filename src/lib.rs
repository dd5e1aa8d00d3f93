//! Dense matrix algebra and ordinary least squares regression with
//! inferential statistics.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod matrix;
pub mod metrics;
pub mod stats;

pub use dataset::{CsvLoader, Dataset};
pub use error::{LinregError, LinregResult};
pub use linear_model::{Regression, RegressionState};
pub use matrix::Matrix;

pub type Vector = Array1<f64>;
