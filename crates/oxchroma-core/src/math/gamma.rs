//! Gamma transfer function
//!
//! A linear segment below the break point joined to a power law above it.
//! The slope, slope match and segment offset are derived from the break point
//! and gamma so that the curve is continuous and its derivative matches at the
//! break point (the construction behind sRGB, Rec. 709 and friends).

use super::Real;

/// Input clamping policy applied before the piecewise formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GammaClamp {
    /// Values ≤ 0 map to 0 and values ≥ 1 map to 1
    #[default]
    Unit,
    /// The piecewise formula is applied verbatim, out-of-range values included
    None,
}

/// Piecewise linear + power transfer function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferFunction<T> {
    break_point: T,
    gamma: T,
    slope: T,
    slope_match: T,
    segment_offset: T,
    clamp: GammaClamp,
}

impl<T: Real> TransferFunction<T> {
    /// Derive the transfer function for a break point and gamma exponent
    ///
    /// A break point of zero yields a pure power law.
    pub fn new(break_point: T, gamma: T, clamp: GammaClamp) -> Self {
        let (slope, slope_match, segment_offset) = if break_point > T::zero() {
            let inv_gamma = T::one() / gamma;
            let knee = break_point.powf(inv_gamma - T::one());
            let slope = T::one() / (gamma / knee - gamma * break_point + break_point);
            let slope_match = gamma * slope / knee;
            let segment_offset = slope_match * break_point.powf(inv_gamma) - slope * break_point;
            (slope, slope_match, segment_offset)
        } else {
            (T::one(), T::one(), T::zero())
        };

        Self {
            break_point,
            gamma,
            slope,
            slope_match,
            segment_offset,
            clamp,
        }
    }

    /// Encode a linear value (apply gamma)
    #[inline]
    pub fn redo(&self, value: T) -> T {
        if self.clamp == GammaClamp::Unit {
            if value <= T::zero() {
                return T::zero();
            }
            if value >= T::one() {
                return T::one();
            }
        }
        if value <= self.break_point {
            value * self.slope
        } else {
            self.slope_match * value.powf(T::one() / self.gamma) - self.segment_offset
        }
    }

    /// Decode an encoded value back to linear (undo gamma)
    #[inline]
    pub fn undo(&self, value: T) -> T {
        if self.clamp == GammaClamp::Unit {
            if value <= T::zero() {
                return T::zero();
            }
            if value >= T::one() {
                return T::one();
            }
        }
        if value <= self.break_point * self.slope {
            value / self.slope
        } else {
            ((value + self.segment_offset) / self.slope_match).powf(self.gamma)
        }
    }

    /// Linear segment upper bound (linear domain)
    #[inline]
    pub fn break_point(&self) -> T {
        self.break_point
    }

    /// Power law exponent
    #[inline]
    pub fn gamma(&self) -> T {
        self.gamma
    }

    /// Slope of the linear segment
    #[inline]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// Scale of the power segment
    #[inline]
    pub fn slope_match(&self) -> T {
        self.slope_match
    }

    /// Offset subtracted from the power segment
    #[inline]
    pub fn segment_offset(&self) -> T {
        self.segment_offset
    }

    /// Clamping policy in effect
    #[inline]
    pub fn clamp(&self) -> GammaClamp {
        self.clamp
    }
}
