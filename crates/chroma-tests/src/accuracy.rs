//! Accuracy measurement
//!
//! Absolute and relative error statistics between our output and a
//! reference, summarized the same way for every comparison.

/// Statistics from an element-wise comparison
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean absolute difference
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// 95th percentile absolute difference
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// True when every difference is below `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max < tolerance
    }
}

/// Compare two equally long buffers element by element
pub fn compare_values(ours: &[f64], reference: &[f64]) -> ErrorStats {
    assert_eq!(ours.len(), reference.len(), "buffer lengths differ");

    let mut diffs: Vec<f64> = ours
        .iter()
        .zip(reference)
        .map(|(a, b)| (a - b).abs())
        .collect();

    if diffs.is_empty() {
        return ErrorStats {
            mean: 0.0,
            max: 0.0,
            p95: 0.0,
            count: 0,
        };
    }

    diffs.sort_by(|a, b| a.total_cmp(b));
    let count = diffs.len();
    let mean = diffs.iter().sum::<f64>() / count as f64;
    let max = diffs[count - 1];
    let p95 = diffs[((count as f64 * 0.95) as usize).min(count - 1)];

    ErrorStats {
        mean,
        max,
        p95,
        count,
    }
}

/// |a - b| / |b|, or |a - b| when `b` is zero
pub fn relative_error(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        (a - b).abs()
    } else {
        ((a - b) / b).abs()
    }
}
