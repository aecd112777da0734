use serde::Deserialize;

/// Hyperparameters carried inside each request. Every field falls back to
/// its default when omitted, so `{}` (or an absent `config` object) is a
/// fully valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub ridge_alpha: f64,
    pub knn_k: usize,
    pub min_samples: usize,
    pub calibration_split: f64,
    pub clip_delta: f64,
    pub sigma_floor: f64,
    pub seed: i64,
    pub sigma_fallback: Option<f64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ridge_alpha: 1.0,
            knn_k: 7,
            min_samples: 25,
            calibration_split: 0.2,
            clip_delta: 12.0,
            sigma_floor: 1.5,
            seed: 42,
            sigma_fallback: None,
        }
    }
}

impl ModelConfig {
    /// Calibration fraction constrained to a usable range.
    pub fn calibration_fraction(&self) -> f64 {
        self.calibration_split.clamp(0.0, 1.0)
    }
}
