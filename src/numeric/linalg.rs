//! Dense matrix routines for the ridge normal equations.
//!
//! Matrices are row-major `Vec<Vec<f64>>`. Dimension conformance is the
//! caller's responsibility; these routines are only ever fed the small
//! (features+1)-square systems built by the ridge fitter.

/// Pivot magnitudes below this are treated as a singular system.
pub const PIVOT_EPSILON: f64 = 1e-12;

pub fn transpose(m: &[Vec<f64>]) -> Vec<Vec<f64>> {
    if m.is_empty() {
        return Vec::new();
    }
    let rows = m.len();
    let cols = m[0].len();
    let mut out = vec![vec![0.0; rows]; cols];
    for (i, row) in m.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[j][i] = v;
        }
    }
    out
}

pub fn matmul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let bt = transpose(b);
    a.iter()
        .map(|row| {
            bt.iter()
                .map(|col| row.iter().zip(col).map(|(x, y)| x * y).sum())
                .collect()
        })
        .collect()
}

pub fn matvec(a: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    a.iter()
        .map(|row| row.iter().zip(v).map(|(x, y)| x * y).sum())
        .collect()
}

/// Solve `A x = b` for square `A` by Gaussian elimination with partial
/// pivoting. A pivot below [`PIVOT_EPSILON`] means the system is singular;
/// the all-zero vector is returned instead of an error so the caller
/// degrades to a zero-coefficient model.
pub fn solve(a: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = a.len();
    let mut m: Vec<Vec<f64>> = a
        .iter()
        .zip(b)
        .map(|(row, &rhs)| {
            let mut aug = row.clone();
            aug.push(rhs);
            aug
        })
        .collect();

    for i in 0..n {
        let mut pivot = i;
        for r in (i + 1)..n {
            if m[r][i].abs() > m[pivot][i].abs() {
                pivot = r;
            }
        }
        if m[pivot][i].abs() < PIVOT_EPSILON {
            return vec![0.0; n];
        }
        m.swap(i, pivot);

        let div = m[i][i];
        for v in m[i].iter_mut() {
            *v /= div;
        }
        for r in 0..n {
            if r == i {
                continue;
            }
            let factor = m[r][i];
            for c in 0..=n {
                m[r][c] -= factor * m[i][c];
            }
        }
    }

    m.iter().map(|row| row[n]).collect()
}
