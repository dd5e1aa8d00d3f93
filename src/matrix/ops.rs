use ndarray::Array2;

use super::Matrix;
use crate::error::{LinregError, LinregResult};

impl Matrix {
    pub fn add(&self, other: &Matrix) -> LinregResult<Matrix> {
        self.check_same_shape("add", other)?;
        Ok(Matrix::from_raw(&self.data + &other.data))
    }

    pub fn subtract(&self, other: &Matrix) -> LinregResult<Matrix> {
        self.check_same_shape("subtract", other)?;
        Ok(Matrix::from_raw(&self.data - &other.data))
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.ncols() == other.nrows()`; the result is
    /// `self.nrows() x other.ncols()`. Each cell is accumulated left to right
    /// over the shared dimension so integer-valued inputs give exact results.
    pub fn multiply(&self, other: &Matrix) -> LinregResult<Matrix> {
        if self.ncols() != other.nrows() {
            return Err(LinregError::mismatch("multiply", self.shape(), other.shape()));
        }

        let (rows, inner) = self.shape();
        let cols = other.ncols();
        let mut product = Array2::<f64>::zeros((rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = 0.0;
                for k in 0..inner {
                    acc += self.data[(i, k)] * other.data[(k, j)];
                }
                product[(i, j)] = acc;
            }
        }

        Ok(Matrix::from_raw(product))
    }

    pub fn scalar_multiply(&self, scalar: impl Into<f64>) -> Matrix {
        let k = scalar.into();
        Matrix::from_raw(self.data.mapv(|v| v * k))
    }

    /// Divides every cell by `scalar`.
    ///
    /// A zero divisor is not an error: cells become `inf` or `NaN` following
    /// IEEE 754 semantics.
    pub fn scalar_divide(&self, scalar: impl Into<f64>) -> Matrix {
        let k = scalar.into();
        Matrix::from_raw(self.data.mapv(|v| v / k))
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_raw(self.data.t().as_standard_layout().into_owned())
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix) -> LinregResult<()> {
        if self.shape() != other.shape() {
            return Err(LinregError::mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }
}
