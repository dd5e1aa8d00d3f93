use linreg::{LinregError, Matrix, Regression};

fn main() -> Result<(), LinregError> {
    println!("=== Multiple Linear Regression Example ===\n");

    // First column is the intercept term.
    let x = vec![
        vec![1.0, 1.0, 2.0],
        vec![1.0, 2.0, 1.0],
        vec![1.0, 3.0, 4.0],
        vec![1.0, 4.0, 3.0],
        vec![1.0, 5.0, 6.0],
        vec![1.0, 6.0, 5.0],
        vec![1.0, 7.0, 8.0],
    ];
    // y ≈ 3 + 2*x1 + 0.5*x2 with noise
    let y = vec![
        vec![6.1],
        vec![7.4],
        vec![11.2],
        vec![12.4],
        vec![16.1],
        vec![17.4],
        vec![21.1],
    ];

    let design = Matrix::new(&x)?;
    println!("{}", design);

    let mut reg = Regression::new();
    reg.set_x(&x)?;
    reg.set_y(&y)?;
    reg.compute()?;

    let coefficients = reg.coefficients()?;
    let std_errors = reg.std_errors()?;
    let t_stats = reg.t_stats()?;
    let p_values = reg.p_values()?;

    println!("{:>6} {:>12} {:>12} {:>10} {:>10}", "term", "coef", "std err", "t", "p");
    for k in 0..coefficients.len() {
        println!(
            "{:>6} {:>12.4} {:>12.4} {:>10.4} {:>10.4}",
            format!("b{}", k),
            coefficients[k],
            std_errors[k],
            t_stats[k],
            p_values[k]
        );
    }

    println!("\nR²: {:.4}", reg.r_squared()?);
    println!("Adjusted R²: {:.4}", reg.adjusted_r_squared()?);
    println!("F: {:.4} (p = {:.4})", reg.f_statistic()?, reg.f_p_value()?);
    println!(
        "SSE: {:.4}  SSR: {:.4}  SSTO: {:.4}",
        reg.sse()?,
        reg.ssr()?,
        reg.ssto()?
    );

    let new_x = Matrix::new(&[[1.0, 8.0, 7.0]])?;
    let prediction = reg.predict(&new_x)?;
    println!("\nPrediction at x1=8, x2=7: {:.2}", prediction[0]);

    Ok(())
}
