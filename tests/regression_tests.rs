//! End-to-end regression scenarios checked against spreadsheet output.

use approx::assert_abs_diff_eq;

use linreg::{LinregError, Regression, RegressionState};

fn design_rows() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 1.0, 2.0, 2.0],
        vec![1.0, 2.0, 2.0, 2.0, 2.0],
        vec![1.0, 2.0, 1.0, 2.0, 1.0],
        vec![1.0, 2.0, 2.0, 2.0, 1.0],
        vec![1.0, 2.0, 1.0, 1.0, 2.0],
        vec![1.0, 2.0, 2.0, 1.0, 2.0],
        vec![1.0, 2.0, 1.0, 1.0, 1.0],
        vec![1.0, 2.0, 2.0, 1.0, 1.0],
        vec![1.0, 1.0, 1.0, 2.0, 2.0],
        vec![1.0, 1.0, 2.0, 2.0, 2.0],
        vec![1.0, 1.0, 1.0, 2.0, 1.0],
        vec![1.0, 1.0, 2.0, 2.0, 1.0],
        vec![1.0, 1.0, 1.0, 1.0, 2.0],
        vec![1.0, 1.0, 2.0, 1.0, 2.0],
        vec![1.0, 1.0, 1.0, 1.0, 1.0],
        vec![1.0, 1.0, 2.0, 1.0, 1.0],
    ]
}

fn response_rows() -> Vec<Vec<f64>> {
    [12, 12, 13, 7, 21, 22, 9, 7, 9, 16, 11, 17, 16, 19, 13, 10]
        .iter()
        .map(|&v| vec![v as f64])
        .collect()
}

fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = tol);
    }
}

#[test]
fn test_regression_computation() {
    let mut reg = Regression::new();
    reg.set_x(&design_rows()).unwrap();
    reg.set_y(&response_rows()).unwrap();
    reg.compute().unwrap();

    assert_abs_diff_eq!(reg.r_squared().unwrap(), 0.3956, epsilon = 0.01);
    assert_abs_diff_eq!(reg.f_statistic().unwrap(), 1.800187032, epsilon = 0.01);
    assert_abs_diff_eq!(reg.ssto().unwrap(), 331.75, epsilon = 1e-9);
    assert_abs_diff_eq!(reg.sse().unwrap(), 200.5, epsilon = 1e-9);
    assert_abs_diff_eq!(reg.ssr().unwrap(), 131.25, epsilon = 1e-9);
    assert_abs_diff_eq!(reg.multiple_r().unwrap(), 0.628990651, epsilon = 0.01);
    assert_eq!(reg.observations().unwrap(), 16);
    assert_eq!(reg.degrees_of_freedom().unwrap(), (4, 11));

    let coefficients = reg.coefficients().unwrap().to_vec();
    let std_errors = reg.std_errors().unwrap().to_vec();
    let t_stats = reg.t_stats().unwrap().to_vec();
    let p_values = reg.p_values().unwrap().to_vec();

    assert_all_close(&coefficients, &[10.0, -1.0, 0.75, -2.5, 5.0], 0.01);
    assert_all_close(
        &std_errors,
        &[6.492346893, 2.134670509, 2.134670509, 2.134670509, 2.134670509],
        0.01,
    );
    assert_all_close(
        &t_stats,
        &[1.54027506, -0.468456371, 0.351342278, -1.171140928, 2.342281855],
        0.01,
    );
    assert_all_close(
        &p_values,
        &[0.151751456, 0.648604269, 0.731968834, 0.26628656, 0.039014953],
        0.01,
    );
}

#[test]
fn test_sums_of_squares_partition() {
    let mut reg = Regression::new();
    reg.set_x(&design_rows()).unwrap();
    reg.set_y(&response_rows()).unwrap();
    reg.compute().unwrap();

    let ssto = reg.ssto().unwrap();
    assert_abs_diff_eq!(reg.sse().unwrap() + reg.ssr().unwrap(), ssto, epsilon = 1e-9);
    assert_abs_diff_eq!(
        reg.multiple_r().unwrap().powi(2),
        reg.r_squared().unwrap(),
        epsilon = 1e-12
    );
    let f_p = reg.f_p_value().unwrap();
    assert!(f_p > 0.0 && f_p < 1.0);
}

#[test]
fn test_adjusted_r2() {
    let mut reg = Regression::new();
    reg.set_x(&[
        [1.0, 20347.2, 13518.9, 774.9],
        [1.0, 17226.9, 12199.5, 572.4],
        [1.0, 14396.4, 9296.1, 407.7],
        [1.0, 17297.1, 10042.2, 201.6],
        [1.0, 11938.5, 6837.3, 41.4],
        [1.0, 15332.4, 8842.5, 0.0],
        [1.0, 18465.3, 8179.2, 0.0],
        [1.0, 21401.1, 5913.9, 0.0],
        [1.0, 20084.4, 4113.9, 0.0],
        [1.0, 16814.7, 4357.8, 181.8],
        [1.0, 9895.5, 3204.9, 496.8],
        [1.0, 8372.7, 2953.8, 672.3],
    ])
    .unwrap();
    reg.set_y(&[
        [13966843.97],
        [16892410.56],
        [15235719.15],
        [14595901.15],
        [12652260.53],
        [17793587.49],
        [19617299.18],
        [18120571.55],
        [16401167.76],
        [13402384.85],
        [10635188.42],
        [9775715.679],
    ])
    .unwrap();
    reg.compute().unwrap();

    let coefficients = reg.coefficients().unwrap().to_vec();
    assert_all_close(
        &coefficients,
        &[9330301.2586573, 295.30205309732, 325.9022378502, -5554.493412566],
        1e-5,
    );
    assert_abs_diff_eq!(reg.f_statistic().unwrap(), 8.9207502079429, epsilon = 1e-8);
    assert_abs_diff_eq!(
        reg.adjusted_r_squared().unwrap(),
        0.68356479219272,
        epsilon = 1e-9
    );
}

#[test]
fn test_invalid_set_x_and_y() {
    let empty: Vec<Vec<f64>> = Vec::new();
    let mut reg = Regression::new();
    assert!(matches!(reg.set_x(&empty), Err(LinregError::InvalidArgument(_))));
    assert!(matches!(reg.set_y(&empty), Err(LinregError::InvalidArgument(_))));
    assert_eq!(reg.state(), RegressionState::Uninitialized);
}

#[test]
fn test_compute_and_getters_without_data() {
    let mut reg = Regression::new();
    assert!(matches!(reg.compute(), Err(LinregError::State(_))));
    assert!(matches!(reg.r_squared(), Err(LinregError::State(_))));
    assert!(matches!(reg.x(), Err(LinregError::State(_))));
}

#[test]
fn test_csv_import() {
    let mut contents = String::from("id,vas1,indep1,indep2,indep3,indep4,const\n");
    for (i, (x, y)) in design_rows().iter().zip(response_rows()).enumerate() {
        contents.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            i + 1,
            y[0],
            x[1],
            x[2],
            x[3],
            x[4],
            x[0]
        ));
    }

    let path = std::env::temp_dir().join(format!("linreg_import_{}.csv", std::process::id()));
    std::fs::write(&path, contents).unwrap();

    let mut reg = Regression::new();
    let result = reg.load_csv(&path, &[1], &[6, 2, 3, 4, 5]);
    std::fs::remove_file(&path).ok();
    result.unwrap();

    assert_eq!(reg.x().unwrap().to_vec(), design_rows());
    assert_eq!(reg.y().unwrap().to_vec(), response_rows());
    assert_eq!(reg.state(), RegressionState::Ready);

    reg.compute().unwrap();
    assert_abs_diff_eq!(reg.sse().unwrap(), 200.5, epsilon = 1e-9);
}
