use serde::Deserialize;

use crate::config::ModelConfig;
use crate::error::FrameError;
use crate::model::record::{FeatureMap, Record};

/// Feature names used when the payload supplies none.
pub const DEFAULT_FEATURE_KEYS: [&str; 9] = [
    "baseline_high",
    "baseline_low",
    "spread_high",
    "spread_low",
    "lead_days",
    "day_of_year_sin",
    "day_of_year_cos",
    "lat",
    "lon",
];

/// Feature keys carrying the trusted baseline forecasts. Their columns in
/// the calibration matrix double as the baseline predictor's outputs.
pub const BASELINE_HIGH_KEY: &str = "baseline_high";
pub const BASELINE_LOW_KEY: &str = "baseline_low";

/// One forecast request: hyperparameters, historical records, and the
/// current-time feature map to correct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub config: ModelConfig,
    #[serde(default)]
    pub training_data: Vec<Record>,
    #[serde(default)]
    pub features: FeatureMap,
    #[serde(default)]
    pub feature_keys: Vec<String>,
}

impl ForecastRequest {
    /// Decode a raw request body. Whitespace-only input and JSON parse
    /// failures are classified separately so the caller can emit the
    /// matching wire tag.
    pub fn from_json(raw: &str) -> Result<Self, FrameError> {
        if raw.trim().is_empty() {
            return Err(FrameError::NoInput);
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Ordered feature names for this request, falling back to
    /// [`DEFAULT_FEATURE_KEYS`] when the payload omits them.
    pub fn feature_keys(&self) -> Vec<String> {
        if self.feature_keys.is_empty() {
            DEFAULT_FEATURE_KEYS.iter().map(|k| k.to_string()).collect()
        } else {
            self.feature_keys.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_no_input() {
        assert_eq!(ForecastRequest::from_json("  \n").unwrap_err().tag(), "no_input");
    }

    #[test]
    fn malformed_body_is_invalid_json() {
        assert_eq!(
            ForecastRequest::from_json("{not json").unwrap_err().tag(),
            "invalid_json"
        );
    }

    #[test]
    fn missing_sections_default() {
        let req = ForecastRequest::from_json("{}").unwrap();
        assert!(req.training_data.is_empty());
        assert_eq!(req.config.min_samples, 25);
        assert_eq!(req.feature_keys().len(), 9);
        assert_eq!(req.feature_keys()[0], BASELINE_HIGH_KEY);
    }

    #[test]
    fn explicit_feature_keys_win() {
        let req =
            ForecastRequest::from_json(r#"{"feature_keys": ["a", "b"]}"#).unwrap();
        assert_eq!(req.feature_keys(), vec!["a".to_string(), "b".to_string()]);
    }
}
