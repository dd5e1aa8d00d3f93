use std::path::Path;

use ndarray::Axis;

use crate::dataset::CsvLoader;
use crate::error::{LinregError, LinregResult};
use crate::metrics::{r2_score, sum_of_squares, total_sum_of_squares};
use crate::stats::{FisherF, StudentT};
use crate::{Matrix, Vector};

const NOT_SET: &str = "X and Y not set";
const NOT_COMPUTED: &str = "regression not computed; call compute() first";

/// Lifecycle of a [`Regression`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegressionState {
    /// X, Y or both are missing.
    Uninitialized,
    /// X and Y are set, statistics are not available.
    Ready,
    /// Statistics are cached and readable.
    Computed,
}

#[derive(Clone, Debug)]
struct Fit {
    coefficients: Matrix,
    coefficient_vec: Vector,
    fitted: Vector,
    residuals: Vector,
    sse: f64,
    ssr: f64,
    ssto: f64,
    df_reg: i64,
    df_resid: i64,
    mse: f64,
    covariance: Matrix,
    std_errors: Vector,
    t_stats: Vector,
    p_values: Vector,
    r_squared: f64,
    adjusted_r_squared: f64,
    multiple_r: f64,
    f_statistic: f64,
    f_p_value: f64,
    observations: usize,
}

/// Ordinary least squares with classical inference.
///
/// The design matrix is used verbatim: include a column of ones in X to fit
/// an intercept. Setting X or Y discards any computed statistics, which must
/// be recomputed before they can be read again.
#[derive(Clone, Debug, Default)]
pub struct Regression {
    x: Option<Matrix>,
    y: Option<Matrix>,
    fit: Option<Fit>,
}

impl Regression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RegressionState {
        match (&self.x, &self.y, &self.fit) {
            (_, _, Some(_)) => RegressionState::Computed,
            (Some(_), Some(_), None) => RegressionState::Ready,
            _ => RegressionState::Uninitialized,
        }
    }

    /// Sets the design matrix, one row per observation.
    ///
    /// Empty input is [`LinregError::InvalidArgument`]; jagged input is
    /// [`LinregError::Shape`]. On error the regression is left unchanged.
    pub fn set_x<R, T>(&mut self, rows: &[R]) -> LinregResult<()>
    where
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let x = Self::matrix_from_rows("X", rows)?;
        self.x = Some(x);
        self.fit = None;
        Ok(())
    }

    /// Sets the response column, one single-element row per observation.
    pub fn set_y<R, T>(&mut self, rows: &[R]) -> LinregResult<()>
    where
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let y = Self::matrix_from_rows("Y", rows)?;
        self.y = Some(y);
        self.fit = None;
        Ok(())
    }

    /// Reads X and Y from a delimited file with a header row.
    ///
    /// `y_columns` and `x_columns` are 0-based source column indices, used in
    /// the order given.
    pub fn load_csv<P: AsRef<Path>>(
        &mut self,
        path: P,
        y_columns: &[usize],
        x_columns: &[usize],
    ) -> LinregResult<()> {
        self.load_csv_with(&CsvLoader::new(), path, y_columns, x_columns)
    }

    pub fn load_csv_with<P: AsRef<Path>>(
        &mut self,
        loader: &CsvLoader,
        path: P,
        y_columns: &[usize],
        x_columns: &[usize],
    ) -> LinregResult<()> {
        let data = loader.load(path, y_columns, x_columns)?;
        let y = Self::matrix_from_rows("Y", &data.targets)?;
        let x = Self::matrix_from_rows("X", &data.features)?;
        self.y = Some(y);
        self.x = Some(x);
        self.fit = None;
        Ok(())
    }

    /// Solves the normal equations and caches every derived statistic.
    pub fn compute(&mut self) -> LinregResult<()> {
        let (x, y) = match (&self.x, &self.y) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(LinregError::State(NOT_SET)),
        };
        if x.nrows() != y.nrows() || y.ncols() != 1 {
            return Err(LinregError::mismatch("compute", x.shape(), y.shape()));
        }

        let (n, p) = x.shape();
        log::debug!("computing OLS fit: {} observations, {} coefficients", n, p);

        let xt = x.transpose();
        let xtx = xt.multiply(x)?;
        let xty = xt.multiply(y)?;
        let xtx_inv = xtx.inverse()?;
        let b = xtx_inv.multiply(&xty)?;

        let y_hat = x.multiply(&b)?;
        let e = y.subtract(&y_hat)?;

        let y_vec = first_column(y);
        let fitted = first_column(&y_hat);
        let residuals = first_column(&e);
        let coefficient_vec = first_column(&b);

        let sse = sum_of_squares(&residuals);
        let ssto = total_sum_of_squares(&y_vec);
        let ssr = ssto - sse;

        let df_resid = n as i64 - p as i64;
        let df_reg = p as i64 - 1;
        if df_resid <= 0 {
            log::warn!(
                "{} observations do not leave residual degrees of freedom for {} coefficients",
                n,
                p
            );
        }

        let mse = sse / df_resid as f64;
        let covariance = xtx_inv.scalar_multiply(mse);
        let std_errors = covariance.diagonal().mapv(f64::sqrt);
        let t_stats = &coefficient_vec / &std_errors;
        let p_values = match StudentT::new(df_resid as f64) {
            Ok(dist) => t_stats.mapv(|t| dist.two_tailed_p(t)),
            Err(_) => Vector::from_elem(p, f64::NAN),
        };

        let r_squared = ssr / ssto;
        let adjusted_r_squared =
            1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / (n as f64 - p as f64);
        let multiple_r = r_squared.sqrt();
        let f_statistic = (ssr / df_reg as f64) / (sse / df_resid as f64);
        let f_p_value = FisherF::new(df_reg as f64, df_resid as f64)
            .map(|dist| dist.sf(f_statistic))
            .unwrap_or(f64::NAN);

        log::debug!(
            "OLS fit done: R² = {:.6}, F = {:.6}, SSE = {}",
            r_squared,
            f_statistic,
            sse
        );

        self.fit = Some(Fit {
            coefficients: b,
            coefficient_vec,
            fitted,
            residuals,
            sse,
            ssr,
            ssto,
            df_reg,
            df_resid,
            mse,
            covariance,
            std_errors,
            t_stats,
            p_values,
            r_squared,
            adjusted_r_squared,
            multiple_r,
            f_statistic,
            f_p_value,
            observations: n,
        });
        Ok(())
    }

    /// Applies the fitted coefficients to new design rows.
    pub fn predict(&self, x: &Matrix) -> LinregResult<Vector> {
        let fit = self.fitted()?;
        if x.ncols() != fit.coefficients.nrows() {
            return Err(LinregError::mismatch(
                "predict",
                x.shape(),
                fit.coefficients.shape(),
            ));
        }
        Ok(first_column(&x.multiply(&fit.coefficients)?))
    }

    /// R² of the fitted coefficients on new data.
    pub fn score(&self, x: &Matrix, y: &Vector) -> LinregResult<f64> {
        let y_pred = self.predict(x)?;
        r2_score(y, &y_pred)
    }

    pub fn x(&self) -> LinregResult<&Matrix> {
        self.x.as_ref().ok_or(LinregError::State("X not set"))
    }

    pub fn y(&self) -> LinregResult<&Matrix> {
        self.y.as_ref().ok_or(LinregError::State("Y not set"))
    }

    pub fn coefficients(&self) -> LinregResult<&Vector> {
        Ok(&self.fitted()?.coefficient_vec)
    }

    pub fn std_errors(&self) -> LinregResult<&Vector> {
        Ok(&self.fitted()?.std_errors)
    }

    pub fn t_stats(&self) -> LinregResult<&Vector> {
        Ok(&self.fitted()?.t_stats)
    }

    pub fn p_values(&self) -> LinregResult<&Vector> {
        Ok(&self.fitted()?.p_values)
    }

    pub fn residuals(&self) -> LinregResult<&Vector> {
        Ok(&self.fitted()?.residuals)
    }

    pub fn fitted_values(&self) -> LinregResult<&Vector> {
        Ok(&self.fitted()?.fitted)
    }

    /// Coefficient covariance matrix, `MSE * (XᵗX)⁻¹`.
    pub fn covariance(&self) -> LinregResult<&Matrix> {
        Ok(&self.fitted()?.covariance)
    }

    pub fn r_squared(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.r_squared)
    }

    pub fn adjusted_r_squared(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.adjusted_r_squared)
    }

    pub fn multiple_r(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.multiple_r)
    }

    pub fn f_statistic(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.f_statistic)
    }

    /// Upper-tail probability of the F statistic.
    pub fn f_p_value(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.f_p_value)
    }

    pub fn sse(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.sse)
    }

    pub fn ssr(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.ssr)
    }

    pub fn ssto(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.ssto)
    }

    pub fn mse(&self) -> LinregResult<f64> {
        Ok(self.fitted()?.mse)
    }

    /// `(regression, residual)` degrees of freedom: `(p - 1, n - p)`.
    pub fn degrees_of_freedom(&self) -> LinregResult<(i64, i64)> {
        let fit = self.fitted()?;
        Ok((fit.df_reg, fit.df_resid))
    }

    pub fn observations(&self) -> LinregResult<usize> {
        Ok(self.fitted()?.observations)
    }

    fn fitted(&self) -> LinregResult<&Fit> {
        self.fit.as_ref().ok_or(LinregError::State(NOT_COMPUTED))
    }

    fn matrix_from_rows<R, T>(name: &str, rows: &[R]) -> LinregResult<Matrix>
    where
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        if rows.is_empty() {
            return Err(LinregError::InvalidArgument(format!(
                "{} must contain at least one row",
                name
            )));
        }
        Matrix::new(rows)
    }
}

fn first_column(m: &Matrix) -> Vector {
    m.as_array().index_axis(Axis(1), 0).to_owned()
}
