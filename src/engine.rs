//! The request → response pipeline: split, fit, calibrate, weight, blend,
//! clip, and estimate uncertainty, with graceful early exits.
//!
//! Nothing here returns an error. Every degenerate condition collapses to
//! a terminal status whose response carries the untouched baseline, so the
//! caller never sees a NaN-based or panicking output.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::dataset;
use crate::ensemble;
use crate::model::record::{coerce_opt, Record, Target};
use crate::model::request::{ForecastRequest, BASELINE_HIGH_KEY, BASELINE_LOW_KEY};
use crate::model::response::{finite, ForecastResponse, ForecastStatus, ModelInfo};
use crate::regressor::knn;
use crate::regressor::ridge::RidgeModel;

pub fn run_forecast(request: &ForecastRequest) -> ForecastResponse {
    let cfg = &request.config;
    let feature_keys = request.feature_keys();

    if request.training_data.len() < cfg.min_samples {
        tracing::warn!(
            samples = request.training_data.len(),
            min_samples = cfg.min_samples,
            "insufficient training data, emitting baseline"
        );
        return baseline_fallback(
            request,
            ForecastStatus::InsufficientTrainingData,
            Some(request.training_data.len()),
        );
    }

    // The generator lives and dies with this computation; the shuffle is
    // its only consumer, so a fixed seed pins the whole result.
    let mut rng = ChaCha20Rng::seed_from_u64(cfg.seed as u64);
    let (train_set, calib_set) =
        dataset::split(&request.training_data, cfg.calibration_fraction(), &mut rng);
    let calib_set: Vec<Record> = if calib_set.is_empty() {
        train_set.clone()
    } else {
        calib_set
    };

    let (x_train, y_high_train) = dataset::prepare_matrix(&train_set, &feature_keys, Target::High);
    let (_, y_low_train) = dataset::prepare_matrix(&train_set, &feature_keys, Target::Low);
    if x_train.is_empty() || y_high_train.len() < cfg.min_samples {
        tracing::warn!(
            surviving = x_train.len(),
            min_samples = cfg.min_samples,
            "too few complete records after filtering, emitting baseline"
        );
        return baseline_fallback(request, ForecastStatus::TrainingFiltered, Some(x_train.len()));
    }

    let model_high = RidgeModel::fit(&x_train, &y_high_train, cfg.ridge_alpha);
    let model_low = RidgeModel::fit(&x_train, &y_low_train, cfg.ridge_alpha);

    let (x_calib, y_high_calib) = dataset::prepare_matrix(&calib_set, &feature_keys, Target::High);
    let (_, y_low_calib) = dataset::prepare_matrix(&calib_set, &feature_keys, Target::Low);

    // One scaler serves both targets (both models fit on the same rows);
    // the standardized calibration matrix doubles as the k-NN pool.
    let x_calib_std = model_high.scaler().apply_matrix(&x_calib);

    let baseline_high = baseline_series(&x_calib, &feature_keys, BASELINE_HIGH_KEY);
    let baseline_low = baseline_series(&x_calib, &feature_keys, BASELINE_LOW_KEY);

    let ridge_high: Vec<f64> = x_calib.iter().map(|x| model_high.predict(x)).collect();
    let ridge_low: Vec<f64> = x_calib.iter().map(|x| model_low.predict(x)).collect();

    let knn_high: Vec<f64> = x_calib
        .iter()
        .map(|x| {
            knn::predict(
                &x_calib_std,
                &y_high_calib,
                &model_high.scaler().apply(x),
                cfg.knn_k,
            )
        })
        .collect();
    let knn_low: Vec<f64> = x_calib
        .iter()
        .map(|x| {
            knn::predict(
                &x_calib_std,
                &y_low_calib,
                &model_low.scaler().apply(x),
                cfg.knn_k,
            )
        })
        .collect();

    let weights_high =
        ensemble::compute_weights(&y_high_calib, &baseline_high, &ridge_high, &knn_high);
    let weights_low = ensemble::compute_weights(&y_low_calib, &baseline_low, &ridge_low, &knn_low);

    let x_current: Option<Vec<f64>> = feature_keys
        .iter()
        .map(|k| coerce_opt(request.features.get(k)))
        .collect();
    let Some(x_current) = x_current else {
        tracing::warn!("current feature vector has missing entries, emitting baseline");
        return baseline_fallback(request, ForecastStatus::InvalidFeatures, None);
    };

    let baseline_current_high =
        coerce_opt(request.features.get(BASELINE_HIGH_KEY)).unwrap_or(f64::NAN);
    let baseline_current_low =
        coerce_opt(request.features.get(BASELINE_LOW_KEY)).unwrap_or(f64::NAN);

    let ridge_pred_high = model_high.predict(&x_current);
    let ridge_pred_low = model_low.predict(&x_current);

    let knn_pred_high = if x_calib_std.is_empty() {
        baseline_current_high
    } else {
        knn::predict(
            &x_calib_std,
            &y_high_calib,
            &model_high.scaler().apply(&x_current),
            cfg.knn_k,
        )
    };
    let knn_pred_low = if x_calib_std.is_empty() {
        baseline_current_low
    } else {
        knn::predict(
            &x_calib_std,
            &y_low_calib,
            &model_low.scaler().apply(&x_current),
            cfg.knn_k,
        )
    };

    let blended_high = ensemble::clip_to_baseline(
        weights_high.blend(baseline_current_high, ridge_pred_high, knn_pred_high),
        baseline_current_high,
        cfg.clip_delta,
    );
    let blended_low = ensemble::clip_to_baseline(
        weights_low.blend(baseline_current_low, ridge_pred_low, knn_pred_low),
        baseline_current_low,
        cfg.clip_delta,
    );

    let sigma_high = ensemble::residual_sigma(
        &weights_high,
        &y_high_calib,
        &baseline_high,
        &ridge_high,
        &knn_high,
        cfg.sigma_floor,
    );
    let sigma_low = ensemble::residual_sigma(
        &weights_low,
        &y_low_calib,
        &baseline_low,
        &ridge_low,
        &knn_low,
        cfg.sigma_floor,
    );

    tracing::info!(
        samples = x_train.len(),
        calibration = x_calib.len(),
        w_baseline_high = weights_high.baseline,
        w_ridge_high = weights_high.ridge,
        w_knn_high = weights_high.knn,
        forecast_high = blended_high,
        forecast_low = blended_low,
        "forecast blended"
    );

    ForecastResponse {
        forecast_high: finite(blended_high),
        forecast_low: finite(blended_low),
        sigma_high: finite(sigma_high),
        sigma_low: finite(sigma_low),
        model_info: ModelInfo {
            status: ForecastStatus::Ok,
            samples: Some(x_train.len()),
            weights_high: Some(weights_high),
            weights_low: Some(weights_low),
            ridge_alpha: Some(cfg.ridge_alpha),
            knn_k: Some(cfg.knn_k),
        },
    }
}

/// The baseline predictor's calibration outputs: the matrix column where
/// the baseline key sits in `feature_keys`. A key absent from the feature
/// list yields an empty series, whose RMSE floors at the minimum and
/// leaves the ensemble leaning on the baseline.
fn baseline_series(x_calib: &[Vec<f64>], feature_keys: &[String], key: &str) -> Vec<f64> {
    match feature_keys.iter().position(|k| k == key) {
        Some(idx) => x_calib.iter().map(|row| row[idx]).collect(),
        None => Vec::new(),
    }
}

/// Terminal fallback: no correction applied, forecast is the supplied
/// baseline and sigma the configured fallback.
fn baseline_fallback(
    request: &ForecastRequest,
    status: ForecastStatus,
    samples: Option<usize>,
) -> ForecastResponse {
    ForecastResponse {
        forecast_high: coerce_opt(request.features.get(BASELINE_HIGH_KEY)),
        forecast_low: coerce_opt(request.features.get(BASELINE_LOW_KEY)),
        sigma_high: request.config.sigma_fallback,
        sigma_low: request.config.sigma_fallback,
        model_info: ModelInfo::fallback(status, samples),
    }
}
