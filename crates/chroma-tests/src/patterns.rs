//! Test pattern generation
//!
//! Deterministic color and chromaticity sets for property tests.

use oxchroma_core::Color3;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Neutral ramp from black to white
    Grayscale(usize),
    /// Uniform random colors in the unit cube
    Random { seed: u64, count: usize },
    /// Saturated colors near gamut boundary
    GamutBoundary,
}

/// Generate a pattern as double precision colors in [0, 1]
pub fn generate_colors(pattern: TestPattern) -> Vec<Color3<f64>> {
    match pattern {
        TestPattern::ColorCube => (0..8)
            .map(|i| {
                Color3::new(
                    (i & 1) as f64,
                    ((i >> 1) & 1) as f64,
                    ((i >> 2) & 1) as f64,
                )
            })
            .collect(),
        TestPattern::Grayscale(steps) => {
            let denom = steps.saturating_sub(1).max(1) as f64;
            (0..steps)
                .map(|i| {
                    let v = i as f64 / denom;
                    Color3::new(v, v, v)
                })
                .collect()
        }
        TestPattern::Random { seed, count } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Color3::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
        TestPattern::GamutBoundary => [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [1.0, 0.5, 0.0],
            [0.5, 0.0, 1.0],
        ]
        .into_iter()
        .map(Color3::from)
        .collect(),
    }
}

/// Single precision copy of a pattern
pub fn to_f32(colors: &[Color3<f64>]) -> Vec<Color3<f32>> {
    colors.iter().map(|c| Color3(c.0.map(|v| v as f32))).collect()
}

/// Random chromaticities close to the CIE daylight locus
///
/// x is drawn from [0.25, 0.38] (roughly 4000 K to 25000 K); y follows the
/// locus `y = -3x² + 2.87x - 0.275` with a small perturbation.
pub fn daylight_chromaticities(seed: u64, count: usize) -> Vec<(f64, f64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x: f64 = rng.gen_range(0.25..0.38);
            let y = -3.0 * x * x + 2.87 * x - 0.275 + rng.gen_range(-0.002..0.002);
            (x, y)
        })
        .collect()
}
