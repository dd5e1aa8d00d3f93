use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{LinregError, LinregResult};

/// Student's t distribution with ν degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    inner: StudentsT,
}

impl StudentT {
    /// Fails with [`LinregError::InvalidArgument`] unless `nu` is positive and finite.
    pub fn new(nu: f64) -> LinregResult<Self> {
        if !(nu > 0.0 && nu.is_finite()) {
            return Err(LinregError::InvalidArgument(format!(
                "degrees of freedom must be positive and finite, got {}",
                nu
            )));
        }
        let inner = StudentsT::new(0.0, 1.0, nu)
            .map_err(|e| LinregError::InvalidArgument(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn df(&self) -> f64 {
        self.inner.freedom()
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x.is_infinite() {
            return if x > 0.0 { 1.0 } else { 0.0 };
        }
        self.inner.cdf(x)
    }

    pub fn sf(&self, x: f64) -> f64 {
        self.cdf(-x)
    }

    /// Two-tailed p-value for a test statistic: `2 * (1 - CDF(|t|))`.
    pub fn two_tailed_p(&self, t: f64) -> f64 {
        2.0 * (1.0 - self.cdf(t.abs()))
    }
}
