use forecast_blend::ensemble::{clip_to_baseline, compute_weights, residual_sigma, EnsembleWeights};

#[test]
fn weights_sum_to_one_and_stay_non_negative() {
    let cases: Vec<(Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> = vec![
        (
            vec![10.0, 20.0, 30.0],
            vec![11.0, 21.0, 31.0],
            vec![10.0, 20.0, 30.0],
            vec![15.0, 25.0, 35.0],
        ),
        // A predictor with zero error exercises the RMSE floor.
        (vec![5.0], vec![5.0], vec![5.0], vec![5.0]),
        // Wildly wrong members still normalize.
        (
            vec![0.0, 0.0],
            vec![1e6, -1e6],
            vec![0.5, -0.5],
            vec![1e3, 1e3],
        ),
    ];
    for (y, base, ridge, knn) in cases {
        let w = compute_weights(&y, &base, &ridge, &knn);
        assert!((w.baseline + w.ridge + w.knn - 1.0).abs() < 1e-9);
        assert!(w.baseline >= 0.0 && w.ridge >= 0.0 && w.knn >= 0.0);
    }
}

#[test]
fn lowest_calibration_error_gets_the_largest_share() {
    let y = vec![10.0, 12.0, 14.0, 16.0];
    let base = vec![18.0, 20.0, 22.0, 24.0];
    let ridge = vec![10.1, 12.1, 14.1, 16.1];
    let knn = vec![11.0, 13.0, 15.0, 17.0];
    let w = compute_weights(&y, &base, &ridge, &knn);
    assert!(w.ridge > w.knn);
    assert!(w.knn > w.baseline);
}

#[test]
fn blended_value_is_always_inside_the_clip_band() {
    let weights = EnsembleWeights {
        baseline: 0.1,
        ridge: 0.6,
        knn: 0.3,
    };
    let baseline = 20.0;
    let delta = 12.0;
    for ridge_pred in [-500.0, 0.0, 19.0, 700.0] {
        for knn_pred in [-80.0, 22.0, 400.0] {
            let blended = weights.blend(baseline, ridge_pred, knn_pred);
            let clipped = clip_to_baseline(blended, baseline, delta);
            assert!(clipped >= baseline - delta);
            assert!(clipped <= baseline + delta);
        }
    }
}

#[test]
fn residual_sigma_reflects_calibration_dispersion() {
    let w = EnsembleWeights {
        baseline: 1.0,
        ridge: 0.0,
        knn: 0.0,
    };
    // Baseline-only ensemble with residuals {-3, 0, 3}: sample std is 3.
    let y = vec![7.0, 10.0, 13.0];
    let base = vec![10.0, 10.0, 10.0];
    let zeros = vec![0.0, 0.0, 0.0];
    let sigma = residual_sigma(&w, &y, &base, &zeros, &zeros, 1.5);
    assert!((sigma - 3.0).abs() < 1e-12);
}

#[test]
fn residual_sigma_floors_on_tight_residuals() {
    let w = EnsembleWeights::FALLBACK;
    let y = vec![10.0, 10.0];
    let sigma = residual_sigma(&w, &y, &y, &y, &y, 2.25);
    assert_eq!(sigma, 2.25);
}
