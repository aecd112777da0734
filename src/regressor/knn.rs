//! k-nearest-neighbor mean prediction in standardized feature space.
//!
//! There is no fitting step: the reference pool is passed per query. The
//! caller standardizes both the pool and the query with the ridge model's
//! parameters so distances are comparable across ensemble members.

use crate::numeric::stats::mean;

/// Average the targets of the `k` pool points closest to `query` in
/// Euclidean distance. Ties keep the pool's original order (stable sort),
/// `k` is clamped to `[1, pool size]`, and an empty pool yields NaN.
pub fn predict(pool_x: &[Vec<f64>], pool_y: &[f64], query: &[f64], k: usize) -> f64 {
    if pool_x.is_empty() {
        return f64::NAN;
    }
    let mut distances: Vec<(f64, f64)> = pool_x
        .iter()
        .zip(pool_y)
        .map(|(point, &target)| (euclidean(point, query), target))
        .collect();
    distances.sort_by(|a, b| a.0.total_cmp(&b.0));

    let k = k.clamp(1, distances.len());
    let neighbors: Vec<f64> = distances[..k].iter().map(|&(_, target)| target).collect();
    mean(&neighbors)
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
