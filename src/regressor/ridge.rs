//! L2-regularized linear regression on standardized features.

use crate::numeric::linalg::{matmul, matvec, solve, transpose};
use crate::numeric::stats::{standardize, Standardization};

/// A fitted ridge model: bias plus one weight per feature key, with the
/// standardization parameters derived from the training matrix. Read-only
/// after fitting; one instance per target.
#[derive(Debug, Clone)]
pub struct RidgeModel {
    bias: f64,
    weights: Vec<f64>,
    scaler: Standardization,
}

impl RidgeModel {
    /// Fit on raw (unstandardized) features. The normal equations
    /// `(XᵗX + αI)θ = Xᵗy` are formed on the bias-augmented standardized
    /// matrix; α lands on every diagonal entry, including the bias row, so
    /// large α shrinks the intercept toward zero as well. An empty matrix
    /// yields an unfit model.
    pub fn fit(x: &[Vec<f64>], y: &[f64], alpha: f64) -> Self {
        if x.is_empty() {
            return Self {
                bias: 0.0,
                weights: Vec::new(),
                scaler: Standardization {
                    means: Vec::new(),
                    stds: Vec::new(),
                },
            };
        }

        let (xs, scaler) = standardize(x);
        let xb: Vec<Vec<f64>> = xs
            .into_iter()
            .map(|row| {
                let mut aug = Vec::with_capacity(row.len() + 1);
                aug.push(1.0);
                aug.extend(row);
                aug
            })
            .collect();

        let xt = transpose(&xb);
        let mut xtx = matmul(&xt, &xb);
        for (i, row) in xtx.iter_mut().enumerate() {
            row[i] += alpha;
        }
        let xty = matvec(&xt, y);
        let mut coeffs = solve(&xtx, &xty);

        let bias = coeffs.remove(0);
        Self {
            bias,
            weights: coeffs,
            scaler,
        }
    }

    /// Standardize `x` with the fit-time parameters and evaluate
    /// `bias + w · xs`. An unfit model predicts NaN rather than panicking.
    pub fn predict(&self, x: &[f64]) -> f64 {
        if self.weights.is_empty() {
            return f64::NAN;
        }
        let xs = self.scaler.apply(x);
        self.bias
            + self
                .weights
                .iter()
                .zip(&xs)
                .map(|(w, v)| w * v)
                .sum::<f64>()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn is_fit(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Standardization parameters derived from the training matrix, shared
    /// with the k-NN pool so both ensemble members see the same space.
    pub fn scaler(&self) -> &Standardization {
        &self.scaler
    }
}
