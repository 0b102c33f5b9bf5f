//! Interpolation over 1D tables
//!
//! This module provides:
//! - Linear interpolation between two values
//! - Uniform-grid table lookup with edge clamping
//! - Non-uniform-grid table lookup by sequential search

use super::Real;

/// Linear interpolation between two values
///
/// Returns (1 - t) * a + t * b. At t = 0 the result is exactly `a`.
#[inline]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// Lookup in a table uniformly spaced over [start, end]
///
/// Positions outside the range clamp to the first or last entry. An empty
/// table yields zero.
pub fn uniform_lookup<T: Real>(table: &[T], start: T, end: T, position: T) -> T {
    let Some((&first, &last)) = table.first().zip(table.last()) else {
        return T::zero();
    };
    if position <= start {
        return first;
    }
    if position >= end {
        return last;
    }

    let n = table.len();
    let x = (position - start) / (end - start) * T::from_usize(n - 1);
    let i0 = x.floor().to_usize().unwrap_or(0).min(n - 1);
    let i1 = (i0 + 1).min(n - 1);
    let dx = x - T::from_usize(i0);

    lerp(table[i0], table[i1], dx)
}

/// Lookup in a table with explicit, non-decreasing sample positions
///
/// Searches forward from the start for the first position above `position`;
/// tables here are small (tens of entries) and the sequential search keeps
/// results bit-for-bit reproducible. Positions outside the table clamp to the
/// edge values.
pub fn nonuniform_lookup<T: Real>(positions: &[T], values: &[T], position: T) -> T {
    let n = positions.len().min(values.len());
    if n == 0 {
        return T::zero();
    }
    if n == 1 || position <= positions[0] {
        return values[0];
    }
    if position >= positions[n - 1] {
        return values[n - 1];
    }

    let mut i = 1;
    while i < n - 1 && positions[i] <= position {
        i += 1;
    }

    let dx = (position - positions[i - 1]) / (positions[i] - positions[i - 1]);
    lerp(values[i - 1], values[i], dx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0f64, 4.0, 0.0), 2.0);
        assert!((lerp(0.0f64, 1.0, 1.0) - 1.0).abs() < EPSILON);
        assert!((lerp(0.0f64, 1.0, 0.5) - 0.5).abs() < EPSILON);
        assert!((lerp(2.0f64, 4.0, 0.25) - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_uniform_lookup() {
        let table = vec![0.0f64, 0.5, 1.0];

        assert_eq!(uniform_lookup(&table, 0.0, 1.0, 0.0), 0.0);
        assert_eq!(uniform_lookup(&table, 0.0, 1.0, 1.0), 1.0);
        assert!((uniform_lookup(&table, 0.0, 1.0, 0.5) - 0.5).abs() < EPSILON);
        assert!((uniform_lookup(&table, 0.0, 1.0, 0.25) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_uniform_lookup_edges() {
        let table = [3.0f32, 5.0];
        assert_eq!(uniform_lookup(&table, 10.0, 20.0, -1.0), 3.0);
        assert_eq!(uniform_lookup(&table, 10.0, 20.0, 25.0), 5.0);
        assert_eq!(uniform_lookup::<f32>(&[], 10.0, 20.0, 15.0), 0.0);
        assert_eq!(uniform_lookup(&[7.0f32], 10.0, 20.0, 15.0), 7.0);
    }

    #[test]
    fn test_nonuniform_lookup() {
        let positions = [400.0f64, 450.0, 600.0, 700.0];
        let values = [1.0, 2.0, 5.0, 3.0];

        assert_eq!(nonuniform_lookup(&positions, &values, 300.0), 1.0);
        assert_eq!(nonuniform_lookup(&positions, &values, 800.0), 3.0);
        assert_eq!(nonuniform_lookup(&positions, &values, 450.0), 2.0);
        assert_eq!(nonuniform_lookup(&positions, &values, 600.0), 5.0);
        assert!((nonuniform_lookup(&positions, &values, 525.0) - 3.5).abs() < EPSILON);
        assert!((nonuniform_lookup(&positions, &values, 650.0) - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_nonuniform_lookup_degenerate() {
        assert_eq!(nonuniform_lookup::<f64>(&[], &[], 500.0), 0.0);
        assert_eq!(nonuniform_lookup(&[500.0f64], &[0.7], 100.0), 0.7);
        assert_eq!(nonuniform_lookup(&[500.0f64], &[0.7], 900.0), 0.7);
    }
}
