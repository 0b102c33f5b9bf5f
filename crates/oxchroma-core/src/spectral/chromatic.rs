//! Daylight spectrum synthesized from a chromaticity
//!
//! The CIE daylight model expresses any daylight phase as the mean curve S0
//! plus two weighted characteristic vectors, with weights that depend only
//! on the target (x, y).

use super::SpectralTables;
use crate::color::Color3;
use crate::math::Real;

/// Daylight curve for a chromaticity (x, y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaticSpectralCurve<T> {
    m1: T,
    m2: T,
}

/// Daylight weights (m1, m2) for a chromaticity
///
/// Not validated: (x, y) on the line where the shared denominator vanishes
/// yields infinite or NaN weights.
pub fn daylight_weights<T: Real>(x: T, y: T) -> (T, T) {
    let c = |v: f64| T::lit(v);
    let denom = c(0.0241) + c(0.2562) * x - c(0.7341) * y;
    let m1 = (c(-1.3515) - c(1.7703) * x + c(5.9114) * y) / denom;
    let m2 = (c(0.03) - c(31.4424) * x + c(30.0717) * y) / denom;
    (m1, m2)
}

impl<T: Real> ChromaticSpectralCurve<T> {
    /// Derive the daylight weights once from (x, y)
    pub fn new(x: T, y: T) -> Self {
        let (m1, m2) = daylight_weights(x, y);
        Self { m1, m2 }
    }

    #[inline]
    pub fn m1(&self) -> T {
        self.m1
    }

    #[inline]
    pub fn m2(&self) -> T {
        self.m2
    }
}

impl<T: SpectralTables> ChromaticSpectralCurve<T> {
    #[inline]
    pub fn sample(&self, lambda: T) -> T {
        T::daylight().sample(self.m1, self.m2, lambda)
    }

    /// XYZ of the daylight curve for (x, y) under the CIE 1931 observer
    ///
    /// Uses the precomputed basis integrals; agrees with integrating the
    /// curve directly.
    pub fn color_xyz(x: T, y: T) -> Color3<T> {
        let (m1, m2) = daylight_weights(x, y);
        T::daylight().xyz(m1, m2)
    }
}
