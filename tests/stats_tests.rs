use forecast_blend::numeric::stats::{mean, rmse, sample_std, standardize};

#[test]
fn rmse_of_constant_offset() {
    let y = vec![1.0, 2.0, 3.0];
    let pred = vec![3.0, 4.0, 5.0];
    assert!((rmse(&y, &pred) - 2.0).abs() < 1e-12);
}

#[test]
fn sample_std_uses_bessel_correction() {
    // Population std of {2, 4, 4, 4, 5, 5, 7, 9} is 2; the sample std is
    // sqrt(32/7).
    let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert!((sample_std(&values) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
}

#[test]
fn standardized_columns_have_zero_mean_unit_std() {
    let x = vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0], vec![4.0, 40.0]];
    let (xs, _) = standardize(&x);
    for j in 0..2 {
        let col: Vec<f64> = xs.iter().map(|row| row[j]).collect();
        assert!(mean(&col).abs() < 1e-12);
        assert!((sample_std(&col) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn scaler_applies_training_parameters_to_new_vectors() {
    let x = vec![vec![0.0], vec![2.0], vec![4.0]];
    let (_, scaler) = standardize(&x);
    // New data standardized with training parameters, never refit.
    let z = scaler.apply(&[6.0]);
    assert!((z[0] - 2.0).abs() < 1e-12);
}
