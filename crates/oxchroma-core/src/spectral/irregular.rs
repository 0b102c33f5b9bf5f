//! Spectral curve with explicit sample wavelengths

use crate::math::{Real, nonuniform_lookup};
use crate::{Error, Result};

/// Amplitudes at non-decreasing wavelengths
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularSpectralCurve<T> {
    wavelengths: Vec<T>,
    amplitudes: Vec<T>,
}

impl<T: Real> IrregularSpectralCurve<T> {
    /// Copy both tables
    ///
    /// Ordering is never checked. Mismatched lengths are caught by
    /// [`try_new`](Self::try_new); here the shorter table wins.
    pub fn new(wavelengths: &[T], amplitudes: &[T]) -> Self {
        Self {
            wavelengths: wavelengths.to_vec(),
            amplitudes: amplitudes.to_vec(),
        }
    }

    /// Like [`new`](Self::new), rejecting tables of different lengths
    pub fn try_new(wavelengths: &[T], amplitudes: &[T]) -> Result<Self> {
        if wavelengths.len() != amplitudes.len() {
            return Err(Error::LengthMismatch {
                wavelengths: wavelengths.len(),
                amplitudes: amplitudes.len(),
            });
        }
        Ok(Self::new(wavelengths, amplitudes))
    }

    /// Amplitude at `lambda`, linearly interpolated and clamped to the ends
    #[inline]
    pub fn sample(&self, lambda: T) -> T {
        nonuniform_lookup(&self.wavelengths, &self.amplitudes, lambda)
    }

    #[inline]
    pub fn wavelengths(&self) -> &[T] {
        &self.wavelengths
    }

    #[inline]
    pub fn amplitudes(&self) -> &[T] {
        &self.amplitudes
    }
}
