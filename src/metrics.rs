use crate::Vector;
use crate::error::{LinregError, LinregResult};

/// Arithmetic mean, `NaN` for an empty vector.
pub fn mean(values: &Vector) -> f64 {
    values.mean().unwrap_or(f64::NAN)
}

/// Σ vᵢ², the error sum of squares when `values` are residuals.
pub fn sum_of_squares(values: &Vector) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v * v)
}

/// Σ (yᵢ - ȳ)², the total sum of squares.
pub fn total_sum_of_squares(values: &Vector) -> f64 {
    let y_mean = mean(values);
    values.iter().fold(0.0, |acc, v| acc + (v - y_mean) * (v - y_mean))
}

/// Coefficient of determination of `y_pred` against `y_true`.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> LinregResult<f64> {
    check_lengths(y_true, y_pred)?;

    let ss_res = sum_of_squares(&(y_true - y_pred));
    let ss_tot = total_sum_of_squares(y_true);

    if ss_tot == 0.0 {
        return Ok(1.0); // constant target, perfectly predicted
    }

    Ok(1.0 - ss_res / ss_tot)
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> LinregResult<()> {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return Err(LinregError::mismatch(
            "metric",
            (y_true.len(), 1),
            (y_pred.len(), 1),
        ));
    }
    Ok(())
}
