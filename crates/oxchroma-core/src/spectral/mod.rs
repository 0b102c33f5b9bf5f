//! Spectral power distributions
//!
//! This module provides:
//! - Regular (uniform grid) and irregular (explicit wavelength) curves
//! - Daylight curves synthesized from a chromaticity
//! - Constant curves
//! - Tristimulus integration against color matching functions
//!
//! Wavelengths are in nanometers. Sampling outside a table clamps to the
//! nearest end; there is no extrapolation.

pub mod chromatic;
pub mod constant;
pub mod daylight;
pub mod irregular;
pub mod observer;
pub mod regular;

pub use chromatic::{ChromaticSpectralCurve, daylight_weights};
pub use constant::ConstantSpectralCurve;
pub use daylight::DaylightBasis;
pub use irregular::IrregularSpectralCurve;
pub use observer::ColorMatchingFunctions;
pub use regular::RegularSpectralCurve;

use crate::color::Color3;
use crate::math::Real;
use once_cell::sync::Lazy;

// ============================================================================
// Shared tables
// ============================================================================

static OBSERVER_F32: Lazy<ColorMatchingFunctions<f32>> = Lazy::new(|| {
    tracing::trace!("initializing f32 CIE 1931 observer");
    ColorMatchingFunctions::cie_1931()
});
static OBSERVER_F64: Lazy<ColorMatchingFunctions<f64>> = Lazy::new(|| {
    tracing::trace!("initializing f64 CIE 1931 observer");
    ColorMatchingFunctions::cie_1931()
});
static DAYLIGHT_F32: Lazy<DaylightBasis<f32>> = Lazy::new(|| {
    tracing::trace!("initializing f32 daylight basis");
    DaylightBasis::new(&OBSERVER_F32)
});
static DAYLIGHT_F64: Lazy<DaylightBasis<f64>> = Lazy::new(|| {
    tracing::trace!("initializing f64 daylight basis");
    DaylightBasis::new(&OBSERVER_F64)
});

/// Precisions with shared, lazily built spectral tables
pub trait SpectralTables: Real {
    /// CIE 1931 2° observer
    fn observer() -> &'static ColorMatchingFunctions<Self>;

    /// Daylight basis integrated against [`observer`](Self::observer)
    fn daylight() -> &'static DaylightBasis<Self>;
}

impl SpectralTables for f32 {
    fn observer() -> &'static ColorMatchingFunctions<f32> {
        &OBSERVER_F32
    }

    fn daylight() -> &'static DaylightBasis<f32> {
        &DAYLIGHT_F32
    }
}

impl SpectralTables for f64 {
    fn observer() -> &'static ColorMatchingFunctions<f64> {
        &OBSERVER_F64
    }

    fn daylight() -> &'static DaylightBasis<f64> {
        &DAYLIGHT_F64
    }
}

// ============================================================================
// Curve dispatch
// ============================================================================

/// Any spectral curve
#[derive(Debug, Clone, PartialEq)]
pub enum SpectralCurve<T> {
    Regular(RegularSpectralCurve<T>),
    Irregular(IrregularSpectralCurve<T>),
    Chromatic(ChromaticSpectralCurve<T>),
    Constant(ConstantSpectralCurve<T>),
}

impl<T: SpectralTables> SpectralCurve<T> {
    /// Amplitude at wavelength `lambda`
    pub fn sample(&self, lambda: T) -> T {
        match self {
            SpectralCurve::Regular(c) => c.sample(lambda),
            SpectralCurve::Irregular(c) => c.sample(lambda),
            SpectralCurve::Chromatic(c) => c.sample(lambda),
            SpectralCurve::Constant(c) => c.sample(lambda),
        }
    }

    /// Tristimulus XYZ under the CIE 1931 observer
    pub fn to_xyz(&self) -> Color3<T> {
        self.to_xyz_with(T::observer())
    }

    /// Tristimulus XYZ under a caller-supplied observer
    pub fn to_xyz_with(&self, observer: &ColorMatchingFunctions<T>) -> Color3<T> {
        observer.integrate(|lambda| self.sample(lambda))
    }
}

impl<T> From<RegularSpectralCurve<T>> for SpectralCurve<T> {
    fn from(c: RegularSpectralCurve<T>) -> Self {
        SpectralCurve::Regular(c)
    }
}

impl<T> From<IrregularSpectralCurve<T>> for SpectralCurve<T> {
    fn from(c: IrregularSpectralCurve<T>) -> Self {
        SpectralCurve::Irregular(c)
    }
}

impl<T> From<ChromaticSpectralCurve<T>> for SpectralCurve<T> {
    fn from(c: ChromaticSpectralCurve<T>) -> Self {
        SpectralCurve::Chromatic(c)
    }
}

impl<T> From<ConstantSpectralCurve<T>> for SpectralCurve<T> {
    fn from(c: ConstantSpectralCurve<T>) -> Self {
        SpectralCurve::Constant(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let curves: Vec<SpectralCurve<f64>> = vec![
            RegularSpectralCurve::new(&[0.0, 1.0], 300.0, 830.0).into(),
            IrregularSpectralCurve::new(&[300.0, 830.0], &[0.0, 1.0]).into(),
            ConstantSpectralCurve::new(0.5).into(),
        ];
        for c in &curves {
            assert!((c.sample(565.0) - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_chromatic_to_xyz_matches_color_xyz() {
        let (x, y) = (0.31271f64, 0.32902);
        let curve = SpectralCurve::from(ChromaticSpectralCurve::new(x, y));
        let integrated = curve.to_xyz();
        let direct = ChromaticSpectralCurve::<f64>::color_xyz(x, y);
        for i in 0..3 {
            let rel = (integrated.0[i] - direct.0[i]).abs() / direct.0[i].abs();
            assert!(rel < 1e-9, "channel {}: {} vs {}", i, integrated.0[i], direct.0[i]);
        }
    }

    #[test]
    fn test_constant_is_equal_energy() {
        let xy = SpectralCurve::Constant(ConstantSpectralCurve::new(2.0f32))
            .to_xyz()
            .chromaticity();
        assert!((xy.x - 1.0 / 3.0).abs() < 1e-3);
        assert!((xy.y - 1.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_custom_observer() {
        let flat = ColorMatchingFunctions::try_new(
            400.0f64,
            700.0,
            &[1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0],
        )
        .unwrap();
        let curve = SpectralCurve::Constant(ConstantSpectralCurve::new(1.0));
        assert_eq!(curve.to_xyz_with(&flat).to_array(), [400.0, 400.0, 400.0]);
    }

    #[test]
    fn test_shared_tables() {
        assert!(std::ptr::eq(f64::observer(), f64::observer()));
        assert_eq!(f32::daylight().curves()[0].amplitudes().len(), 54);
    }
}
