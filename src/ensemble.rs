//! Calibration-driven ensemble weighting, blending, clipping, and the
//! residual-based uncertainty estimate.

use serde::Serialize;

use crate::numeric::stats::{rmse, sample_std};

/// RMSEs below this floor are clamped before inversion.
const RMSE_FLOOR: f64 = 1e-6;

/// Per-predictor share of the blended forecast. Non-negative, sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnsembleWeights {
    pub baseline: f64,
    pub ridge: f64,
    pub knn: f64,
}

impl EnsembleWeights {
    /// Used when the calibration target vector is empty and no error
    /// measurement is possible: lean on the baseline.
    pub const FALLBACK: EnsembleWeights = EnsembleWeights {
        baseline: 0.5,
        ridge: 0.3,
        knn: 0.2,
    };

    pub fn blend(&self, baseline: f64, ridge: f64, knn: f64) -> f64 {
        self.baseline * baseline + self.ridge * ridge + self.knn * knn
    }
}

/// Inverse-RMSE weights from calibration-set performance: the predictor
/// with the lowest held-out error gets the largest share. Empty ground
/// truth falls back to [`EnsembleWeights::FALLBACK`].
pub fn compute_weights(
    y_true: &[f64],
    pred_baseline: &[f64],
    pred_ridge: &[f64],
    pred_knn: &[f64],
) -> EnsembleWeights {
    if y_true.is_empty() {
        return EnsembleWeights::FALLBACK;
    }
    let inv_baseline = 1.0 / rmse(y_true, pred_baseline).max(RMSE_FLOOR);
    let inv_ridge = 1.0 / rmse(y_true, pred_ridge).max(RMSE_FLOOR);
    let inv_knn = 1.0 / rmse(y_true, pred_knn).max(RMSE_FLOOR);
    let total = inv_baseline + inv_ridge + inv_knn;
    EnsembleWeights {
        baseline: inv_baseline / total,
        ridge: inv_ridge / total,
        knn: inv_knn / total,
    }
}

/// Hard safety bound: the corrected forecast never strays more than
/// `clip_delta` from the trusted baseline.
pub fn clip_to_baseline(value: f64, baseline: f64, clip_delta: f64) -> f64 {
    value.max(baseline - clip_delta).min(baseline + clip_delta)
}

/// Uncertainty from held-out performance: blend each calibration record
/// with the already-derived weights, take residuals against ground truth,
/// and report their sample standard deviation floored at `sigma_floor`.
pub fn residual_sigma(
    weights: &EnsembleWeights,
    y_true: &[f64],
    pred_baseline: &[f64],
    pred_ridge: &[f64],
    pred_knn: &[f64],
    sigma_floor: f64,
) -> f64 {
    let blended: Vec<f64> = pred_baseline
        .iter()
        .zip(pred_ridge)
        .zip(pred_knn)
        .map(|((&b, &r), &k)| weights.blend(b, r, k))
        .collect();
    let residuals: Vec<f64> = y_true
        .iter()
        .zip(&blended)
        .map(|(y, p)| y - p)
        .collect();
    sample_std(&residuals).max(sigma_floor)
}
