use ndarray::Array2;

use super::Matrix;
use crate::error::{LinregError, LinregResult};

impl Matrix {
    /// Minor of the matrix with `exclude_row` and `exclude_col` crossed out.
    ///
    /// Remaining rows and columns keep their relative order. The matrix must
    /// be at least 2x2 so the minor is non-empty.
    pub fn sub_matrix(&self, exclude_row: usize, exclude_col: usize) -> LinregResult<Matrix> {
        if self.nrows() < 2 || self.ncols() < 2 {
            return Err(LinregError::Shape(format!(
                "cannot take a minor of a {}x{} matrix",
                self.nrows(),
                self.ncols()
            )));
        }
        if exclude_row >= self.nrows() || exclude_col >= self.ncols() {
            return Err(LinregError::InvalidArgument(format!(
                "minor ({}, {}) out of range for {}x{} matrix",
                exclude_row,
                exclude_col,
                self.nrows(),
                self.ncols()
            )));
        }
        Ok(self.minor(exclude_row, exclude_col))
    }

    /// Determinant by Laplace expansion along the first row.
    pub fn determinant(&self) -> LinregResult<f64> {
        self.check_square()?;
        Ok(self.expand_determinant())
    }

    /// Inverse as the adjugate divided by the determinant.
    ///
    /// A singular matrix is not rejected: dividing by a zero determinant
    /// leaves `inf`/`NaN` cells, the same as [`Matrix::scalar_divide`].
    pub fn inverse(&self) -> LinregResult<Matrix> {
        self.check_square()?;
        let det = self.expand_determinant();
        if det == 0.0 {
            log::warn!(
                "inverting a singular {}x{} matrix; result will contain non-finite values",
                self.nrows(),
                self.ncols()
            );
        }

        let n = self.nrows();
        if n == 1 {
            // Cofactor of a 1x1 matrix is 1.
            return Ok(Matrix::from_raw(Array2::from_elem((1, 1), 1.0)).scalar_divide(det));
        }

        let mut cofactors = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                let minor_det = self.minor(i, j).expand_determinant();
                cofactors[(i, j)] = if (i + j) % 2 == 0 { minor_det } else { -minor_det };
            }
        }

        Ok(Matrix::from_raw(cofactors).transpose().scalar_divide(det))
    }

    fn check_square(&self) -> LinregResult<()> {
        if !self.is_square() {
            return Err(LinregError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    // Caller guarantees the matrix is square.
    fn expand_determinant(&self) -> f64 {
        let m = &self.data;
        match self.nrows() {
            1 => m[(0, 0)],
            2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
            n => {
                let mut det = 0.0;
                for j in 0..n {
                    let term = m[(0, j)] * self.minor(0, j).expand_determinant();
                    if j % 2 == 0 {
                        det += term;
                    } else {
                        det -= term;
                    }
                }
                det
            }
        }
    }

    // Caller guarantees indices are in range and the matrix is at least 2x2.
    fn minor(&self, exclude_row: usize, exclude_col: usize) -> Matrix {
        let (rows, cols) = self.shape();
        let mut out = Array2::<f64>::zeros((rows - 1, cols - 1));
        let mut p = 0;
        for i in (0..rows).filter(|&i| i != exclude_row) {
            let mut q = 0;
            for j in (0..cols).filter(|&j| j != exclude_col) {
                out[(p, q)] = self.data[(i, j)];
                q += 1;
            }
            p += 1;
        }
        Matrix::from_raw(out)
    }
}
