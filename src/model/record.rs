use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Named feature values as they arrive on the wire. Values stay as raw JSON
/// so that missing, null, and unparseable entries all funnel through the
/// same coercion path.
pub type FeatureMap = HashMap<String, Value>;

/// One historical observation: named features plus the realized high/low
/// temperatures. Immutable once deserialized.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub features: FeatureMap,
    #[serde(default)]
    pub target_high: Value,
    #[serde(default)]
    pub target_low: Value,
}

/// Which realized temperature a preparation or fit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    High,
    Low,
}

impl Record {
    pub fn feature(&self, key: &str) -> Option<f64> {
        self.features.get(key).and_then(coerce_numeric)
    }

    pub fn target(&self, target: Target) -> Option<f64> {
        let value = match target {
            Target::High => &self.target_high,
            Target::Low => &self.target_low,
        };
        coerce_numeric(value)
    }
}

/// Permissive numeric coercion: numbers pass through, numeric strings are
/// parsed, booleans map to 0/1, everything else (null, objects, arrays,
/// absent keys) is missing. A parse failure is equivalent to missing, and
/// so is a string spelling of NaN — downstream filtering treats NaN as a
/// missing value, so it must never leak past this boundary. Infinities
/// parse through unchanged.
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Coercion applied to a lookup that may not have found the key.
pub fn coerce_opt(value: Option<&Value>) -> Option<f64> {
    value.and_then(coerce_numeric)
}
