//! CIE Standard Illuminant White Points
//!
//! White points are given as CIE 1931 (x, y) chromaticities, the form the
//! primaries derivation consumes. XYZ with Y = 1 is derived on demand.

use crate::math::{Chromaticity, Real};

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// Chromaticity x
    pub x: f64,
    /// Chromaticity y
    pub y: f64,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64) -> Self {
        Self { name, x, y }
    }

    /// Chromaticity in the requested precision
    #[inline]
    pub fn chromaticity<T: Real>(&self) -> Chromaticity<T> {
        Chromaticity::new(T::lit(self.x), T::lit(self.y))
    }

    /// CIE XYZ coordinates with Y normalized to 1.0
    pub fn xyz(&self) -> [f64; 3] {
        [self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y]
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// CIE Standard Illuminant D50 (Horizon Light)
///
/// Correlated Color Temperature: ~5003K
pub const D50: WhitePoint = WhitePoint::new("D50", 0.3457, 0.3585);

/// CIE Standard Illuminant D55 (Mid-morning/Mid-afternoon Daylight)
///
/// Correlated Color Temperature: ~5500K
pub const D55: WhitePoint = WhitePoint::new("D55", 0.3324, 0.3474);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Correlated Color Temperature: ~6504K
/// Standard white point for sRGB, Rec. 709 and most display color spaces.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.31271, 0.32902);

/// CIE Standard Illuminant D75 (North Sky Daylight)
///
/// Correlated Color Temperature: ~7500K
pub const D75: WhitePoint = WhitePoint::new("D75", 0.29902, 0.31485);

/// CIE Standard Illuminant C (Average Daylight, NTSC 1953)
pub const C: WhitePoint = WhitePoint::new("C", 0.3101, 0.3162);

/// CIE Standard Illuminant E (Equal Energy)
///
/// Theoretical illuminant with equal power at all wavelengths.
pub const E: WhitePoint = WhitePoint::new("E", 1.0 / 3.0, 1.0 / 3.0);

/// Get a standard white point by name
pub fn from_name(name: &str) -> Option<WhitePoint> {
    match name.to_uppercase().as_str() {
        "D50" => Some(D50),
        "D55" => Some(D55),
        "D65" => Some(D65),
        "D75" => Some(D75),
        "C" => Some(C),
        "E" => Some(E),
        _ => None,
    }
}
