//! Spectral curve sampled on a uniform wavelength grid

use crate::math::{Real, uniform_lookup};
use crate::{Error, Result};

/// Amplitudes spaced uniformly over [start, end]
#[derive(Debug, Clone, PartialEq)]
pub struct RegularSpectralCurve<T> {
    start: T,
    end: T,
    amplitudes: Vec<T>,
}

impl<T: Real> RegularSpectralCurve<T> {
    /// Copy `amplitudes`; the first sits at `start` and the last at `end`
    ///
    /// The range is not checked, see [`try_new`](Self::try_new).
    pub fn new(amplitudes: &[T], start: T, end: T) -> Self {
        Self {
            start,
            end,
            amplitudes: amplitudes.to_vec(),
        }
    }

    /// Like [`new`](Self::new), rejecting ranges where `start` is not below `end`
    pub fn try_new(amplitudes: &[T], start: T, end: T) -> Result<Self> {
        if start.is_nan() || end.is_nan() || start >= end {
            return Err(Error::InvalidRange {
                start: start.as_f64(),
                end: end.as_f64(),
            });
        }
        Ok(Self::new(amplitudes, start, end))
    }

    /// Amplitude at `lambda`, linearly interpolated and clamped to the ends
    #[inline]
    pub fn sample(&self, lambda: T) -> T {
        uniform_lookup(&self.amplitudes, self.start, self.end, lambda)
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    #[inline]
    pub fn amplitudes(&self) -> &[T] {
        &self.amplitudes
    }
}
