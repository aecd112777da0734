use serde::Serialize;

use crate::ensemble::EnsembleWeights;

/// Terminal status of one forecast computation. The first three are the
/// early-exit fallbacks; all four produce a structured response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    InsufficientTrainingData,
    TrainingFiltered,
    InvalidFeatures,
    Ok,
}

/// Diagnostics attached to every response. Observational only: nothing
/// downstream consumes these within the computation.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub status: ForecastStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights_high: Option<EnsembleWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights_low: Option<EnsembleWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ridge_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knn_k: Option<usize>,
}

impl ModelInfo {
    pub fn fallback(status: ForecastStatus, samples: Option<usize>) -> Self {
        Self {
            status,
            samples,
            weights_high: None,
            weights_low: None,
            ridge_alpha: None,
            knn_k: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub forecast_high: Option<f64>,
    pub forecast_low: Option<f64>,
    pub sigma_high: Option<f64>,
    pub sigma_low: Option<f64>,
    pub model_info: ModelInfo,
}

/// JSON has no NaN/inf; anything non-finite goes out as null.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
