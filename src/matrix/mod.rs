//! Immutable dense matrices.
//!
//! `Matrix` is a small value type over an `ndarray::Array2<f64>`. Every
//! operation returns a new matrix and leaves both operands untouched:
//! - element-wise `add` / `subtract` and scalar `scalar_multiply` / `scalar_divide`
//! - the textbook `multiply` (triple loop) and `transpose`
//! - `determinant` by cofactor expansion and `inverse` by adjugate
//!
//! Determinant and inverse recurse through minors, so their cost grows
//! factorially with the matrix order. They are meant for the small `p x p`
//! systems that show up in regression, roughly up to 10x10.
//!
//! # Examples
//! ```rust
//! use linreg::Matrix;
//!
//! let m = Matrix::new(&[[4, 3], [3, 2]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -1.0);
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(inv.to_vec(), vec![vec![-2.0, 3.0], vec![3.0, -4.0]]);
//! ```

mod cofactor;
mod ops;

use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::error::{LinregError, LinregResult};
use crate::Vector;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Builds a matrix from a rectangular sequence of rows.
    ///
    /// Fails with [`LinregError::Shape`] when there are no rows, when the
    /// first row is empty, or when any row length differs from the first.
    pub fn new<R, T>(rows: &[R]) -> LinregResult<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let first = rows
            .first()
            .ok_or_else(|| LinregError::Shape("matrix must have at least one row".to_string()))?;
        let columns = first.as_ref().len();
        if columns == 0 {
            return Err(LinregError::Shape(
                "matrix must have at least one column".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(LinregError::Shape(format!(
                    "row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    columns
                )));
            }
            cells.extend(row.iter().map(|&v| v.into()));
        }

        let data = Array2::from_shape_vec((rows.len(), columns), cells)
            .map_err(|e| LinregError::Shape(e.to_string()))?;
        Ok(Self { data })
    }

    /// Wraps an existing array. Zero-sized arrays are rejected.
    pub fn from_array(data: Array2<f64>) -> LinregResult<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(LinregError::Shape(format!(
                "matrix must be at least 1x1, got {}x{}",
                data.nrows(),
                data.ncols()
            )));
        }
        Ok(Self { data })
    }

    pub fn identity(n: usize) -> LinregResult<Self> {
        Self::from_array(Array2::eye(n))
    }

    // Internal constructor for results whose shape is known to be valid.
    pub(crate) fn from_raw(data: Array2<f64>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds, like ndarray indexing.
    pub fn element_at(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    pub fn column(&self, col: usize) -> Option<Vector> {
        (col < self.ncols()).then(|| self.data.column(col).to_owned())
    }

    pub fn diagonal(&self) -> Vector {
        self.data.diag().to_owned()
    }

    /// Read-only view of the backing array.
    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Copies the cells out as nested row vectors.
    pub fn to_vec(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Order of the matrix is ({} rows X {} columns)",
            self.nrows(),
            self.ncols()
        )?;
        for row in self.data.outer_iter() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", cells.join(", "))?;
        }
        Ok(())
    }
}
