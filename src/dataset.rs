//! Record filtering and the seeded train/calibration split.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::model::record::{Record, Target};

/// Build parallel feature-matrix / target-vector pairs in `feature_keys`
/// order. A record is dropped entirely if any named feature or the target
/// is missing or unparseable; relative order of survivors is preserved.
pub fn prepare_matrix(
    records: &[Record],
    feature_keys: &[String],
    target: Target,
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in records {
        let row: Option<Vec<f64>> = feature_keys.iter().map(|k| record.feature(k)).collect();
        let (Some(row), Some(target_value)) = (row, record.target(target)) else {
            continue;
        };
        x.push(row);
        y.push(target_value);
    }
    (x, y)
}

/// Shuffle a clone of `records` with the caller-owned generator, then cut
/// at `max(1, floor(n * (1 - calibration_fraction)))`: the head is the
/// training subset, the tail the calibration subset. The tail may come
/// back empty; the engine then reuses the training subset for calibration.
pub fn split(
    records: &[Record],
    calibration_fraction: f64,
    rng: &mut ChaCha20Rng,
) -> (Vec<Record>, Vec<Record>) {
    if records.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let mut shuffled = records.to_vec();
    shuffled.shuffle(rng);
    let cut = ((shuffled.len() as f64) * (1.0 - calibration_fraction)).floor() as usize;
    let cut = cut.max(1).min(shuffled.len());
    let calibration = shuffled.split_off(cut);
    (shuffled, calibration)
}
