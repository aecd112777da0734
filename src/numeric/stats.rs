//! Summary statistics and column standardization.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bessel-corrected sample standard deviation. Returns 0 for fewer than
/// two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mu = mean(values);
    let var = values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Root-mean-square error over paired entries. Unpaired tail entries on
/// either side are ignored; empty truth yields 0.
pub fn rmse(y_true: &[f64], y_pred: &[f64]) -> f64 {
    if y_true.is_empty() {
        return 0.0;
    }
    let sq_sum: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    (sq_sum / y_true.len() as f64).sqrt()
}

/// Per-column mean/std fit on a training matrix, reapplied unchanged to
/// calibration and live vectors. A zero std is replaced by 1.0 so the
/// column centers to a constant zero instead of dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardization {
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
}

impl Standardization {
    pub fn fit(x: &[Vec<f64>]) -> Self {
        if x.is_empty() {
            return Self {
                means: Vec::new(),
                stds: Vec::new(),
            };
        }
        let cols = x[0].len();
        let mut means = Vec::with_capacity(cols);
        let mut stds = Vec::with_capacity(cols);
        for j in 0..cols {
            let col: Vec<f64> = x.iter().map(|row| row[j]).collect();
            let sigma = sample_std(&col);
            means.push(mean(&col));
            stds.push(if sigma == 0.0 { 1.0 } else { sigma });
        }
        Self { means, stds }
    }

    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(v, (mu, sigma))| (v - mu) / sigma)
            .collect()
    }

    pub fn apply_matrix(&self, x: &[Vec<f64>]) -> Vec<Vec<f64>> {
        x.iter().map(|row| self.apply(row)).collect()
    }
}

/// Fit standardization on `x` and return the standardized matrix together
/// with the parameters used.
pub fn standardize(x: &[Vec<f64>]) -> (Vec<Vec<f64>>, Standardization) {
    let scaler = Standardization::fit(x);
    let xs = scaler.apply_matrix(x);
    (xs, scaler)
}
