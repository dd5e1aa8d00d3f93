use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::error::{LinregError, LinregResult};

/// Fisher-Snedecor F distribution with (d1, d2) degrees of freedom.
#[derive(Debug, Clone, Copy)]
pub struct FisherF {
    inner: FisherSnedecor,
}

impl FisherF {
    pub fn new(d1: f64, d2: f64) -> LinregResult<Self> {
        for (name, v) in [("d1", d1), ("d2", d2)] {
            if !(v > 0.0 && v.is_finite()) {
                return Err(LinregError::InvalidArgument(format!(
                    "{} must be positive and finite, got {}",
                    name, v
                )));
            }
        }
        let inner = FisherSnedecor::new(d1, d2)
            .map_err(|e| LinregError::InvalidArgument(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        self.inner.cdf(x)
    }

    /// Upper tail P(F > x).
    pub fn sf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 1.0;
        }
        if x == f64::INFINITY {
            return 0.0;
        }
        self.inner.sf(x)
    }
}
