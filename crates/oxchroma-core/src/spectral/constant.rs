//! Flat spectral curve

use crate::math::Real;

/// The same amplitude at every wavelength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSpectralCurve<T> {
    amplitude: T,
}

impl<T: Real> ConstantSpectralCurve<T> {
    #[inline]
    pub fn new(amplitude: T) -> Self {
        Self { amplitude }
    }

    #[inline]
    pub fn sample(&self, _lambda: T) -> T {
        self.amplitude
    }

    #[inline]
    pub fn amplitude(&self) -> T {
        self.amplitude
    }
}
