//! RGB color spaces
//!
//! A [`ColorSpace`] couples a gamma transfer function with the RGB↔XYZ
//! matrices derived from its primaries. It is built once and never mutated,
//! so a single instance can be shared freely across threads.

use crate::color::{Channels, Color3};
use crate::math::{GammaClamp, Matrix3, Real, RgbPrimaries, TransferFunction};
use crate::simd::BatchReal;
use crate::{Error, Result};
use bytemuck::TransparentWrapper;
use std::fmt;

/// Options for color space creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorSpaceOptions {
    /// Input clamping for gamma redo/undo
    pub clamp: GammaClamp,
}

/// The scalars that define a color space
///
/// Plain data, convenient for declaring color spaces in configuration files.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSpaceParams<T> {
    pub name: String,
    /// Upper end of the linear segment; zero for a pure power law
    pub break_point: T,
    pub gamma: T,
    pub primaries: RgbPrimaries<T>,
}

/// Luminance below which a white chromaticity is rejected
const MIN_WHITE_Y: f64 = 1e-9;

impl<T: Real> ColorSpaceParams<T> {
    /// Check the parameters a color space cannot be sensibly derived from
    ///
    /// Collinear primaries are not detected.
    pub fn validate(&self) -> Result<()> {
        let gamma = self.gamma.as_f64();
        let break_point = self.break_point.as_f64();
        let gamma_ok = gamma.is_finite() && gamma > 0.0;
        let break_ok = break_point.is_finite() && break_point >= 0.0;
        if !(gamma_ok && break_ok) {
            tracing::warn!(name = %self.name, gamma, break_point, "rejected transfer parameters");
            return Err(Error::InvalidTransfer { gamma, break_point });
        }

        let x = self.primaries.white.x.as_f64();
        let y = self.primaries.white.y.as_f64();
        if !(x.is_finite() && y.is_finite()) || y.abs() < MIN_WHITE_Y {
            tracing::warn!(name = %self.name, x, y, "rejected white point");
            return Err(Error::DegenerateWhitePoint { x, y });
        }

        Ok(())
    }
}

/// An RGB color space: transfer function plus conversion matrices
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpace<T> {
    name: String,
    transfer: TransferFunction<T>,
    primaries: RgbPrimaries<T>,
    rgb_to_xyz: Matrix3<T>,
    xyz_to_rgb: Matrix3<T>,
    white: [T; 3],
    options: ColorSpaceOptions,
}

impl<T: Real> ColorSpace<T> {
    /// Create a color space with default options
    ///
    /// Performs no validation; degenerate input yields NaN or infinite
    /// matrix entries. See [`try_from_params`](Self::try_from_params).
    pub fn new(
        name: impl Into<String>,
        break_point: T,
        gamma: T,
        primaries: RgbPrimaries<T>,
    ) -> Self {
        Self::with_options(
            name,
            break_point,
            gamma,
            primaries,
            ColorSpaceOptions::default(),
        )
    }

    /// Create a color space with explicit options
    pub fn with_options(
        name: impl Into<String>,
        break_point: T,
        gamma: T,
        primaries: RgbPrimaries<T>,
        options: ColorSpaceOptions,
    ) -> Self {
        let name = name.into();
        let transfer = TransferFunction::new(break_point, gamma, options.clamp);
        let matrices = primaries.build();

        tracing::debug!(
            name = %name,
            gamma = gamma.as_f64(),
            break_point = break_point.as_f64(),
            slope = transfer.slope().as_f64(),
            slope_match = transfer.slope_match().as_f64(),
            segment_offset = transfer.segment_offset().as_f64(),
            "derived color space"
        );

        Self {
            name,
            transfer,
            primaries,
            rgb_to_xyz: matrices.rgb_to_xyz,
            xyz_to_rgb: matrices.xyz_to_rgb,
            white: matrices.white,
            options,
        }
    }

    /// Create from parameters without validation
    pub fn from_params(params: &ColorSpaceParams<T>, options: ColorSpaceOptions) -> Self {
        Self::with_options(
            params.name.clone(),
            params.break_point,
            params.gamma,
            params.primaries,
            options,
        )
    }

    /// Create from parameters after [`validate`](ColorSpaceParams::validate)
    pub fn try_from_params(
        params: &ColorSpaceParams<T>,
        options: ColorSpaceOptions,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_params(params, options))
    }

    /// The parameters this color space was built from
    pub fn params(&self) -> ColorSpaceParams<T> {
        ColorSpaceParams {
            name: self.name.clone(),
            break_point: self.transfer.break_point(),
            gamma: self.transfer.gamma(),
            primaries: self.primaries,
        }
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Linear RGB → XYZ; alpha passes through
    #[inline]
    pub fn convert_rgb_to_xyz<C: Channels<T>>(&self, color: &C) -> C {
        color.with_rgb(self.rgb_to_xyz.multiply_vec(color.rgb()))
    }

    /// XYZ → linear RGB; alpha passes through
    #[inline]
    pub fn convert_xyz_to_rgb<C: Channels<T>>(&self, color: &C) -> C {
        color.with_rgb(self.xyz_to_rgb.multiply_vec(color.rgb()))
    }

    /// Apply gamma encoding to each color channel; alpha passes through
    #[inline]
    pub fn redo_gamma_correction<C: Channels<T>>(&self, color: &C) -> C {
        color.with_rgb(color.rgb().map(|v| self.transfer.redo(v)))
    }

    /// Remove gamma encoding from each color channel; alpha passes through
    #[inline]
    pub fn undo_gamma_correction<C: Channels<T>>(&self, color: &C) -> C {
        color.with_rgb(color.rgb().map(|v| self.transfer.undo(v)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn break_point(&self) -> T {
        self.transfer.break_point()
    }

    #[inline]
    pub fn gamma(&self) -> T {
        self.transfer.gamma()
    }

    #[inline]
    pub fn slope(&self) -> T {
        self.transfer.slope()
    }

    #[inline]
    pub fn slope_match(&self) -> T {
        self.transfer.slope_match()
    }

    #[inline]
    pub fn segment_offset(&self) -> T {
        self.transfer.segment_offset()
    }

    #[inline]
    pub fn transfer(&self) -> &TransferFunction<T> {
        &self.transfer
    }

    #[inline]
    pub fn primaries(&self) -> &RgbPrimaries<T> {
        &self.primaries
    }

    #[inline]
    pub fn matrix_rgb_to_xyz(&self) -> &Matrix3<T> {
        &self.rgb_to_xyz
    }

    #[inline]
    pub fn matrix_xyz_to_rgb(&self) -> &Matrix3<T> {
        &self.xyz_to_rgb
    }

    /// White point XYZ with Y = 1
    #[inline]
    pub fn white(&self) -> [T; 3] {
        self.white
    }

    #[inline]
    pub fn options(&self) -> ColorSpaceOptions {
        self.options
    }
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::BufferSize { expected, actual });
    }
    Ok(())
}

impl<T: BatchReal> ColorSpace<T> {
    /// Linear RGB → XYZ over a buffer
    pub fn convert_rgb_to_xyz_slice(
        &self,
        input: &[Color3<T>],
        output: &mut [Color3<T>],
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        T::matrix_batch(
            &self.rgb_to_xyz,
            Color3::peel_slice(input),
            Color3::peel_slice_mut(output),
        );
        Ok(())
    }

    /// XYZ → linear RGB over a buffer
    pub fn convert_xyz_to_rgb_slice(
        &self,
        input: &[Color3<T>],
        output: &mut [Color3<T>],
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        T::matrix_batch(
            &self.xyz_to_rgb,
            Color3::peel_slice(input),
            Color3::peel_slice_mut(output),
        );
        Ok(())
    }

    /// Gamma encode a buffer
    pub fn redo_gamma_correction_slice(
        &self,
        input: &[Color3<T>],
        output: &mut [Color3<T>],
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        T::redo_batch(
            &self.transfer,
            Color3::peel_slice(input).as_flattened(),
            Color3::peel_slice_mut(output).as_flattened_mut(),
        );
        Ok(())
    }

    /// Gamma decode a buffer
    pub fn undo_gamma_correction_slice(
        &self,
        input: &[Color3<T>],
        output: &mut [Color3<T>],
    ) -> Result<()> {
        check_len(input.len(), output.len())?;
        T::undo_batch(
            &self.transfer,
            Color3::peel_slice(input).as_flattened(),
            Color3::peel_slice_mut(output).as_flattened_mut(),
        );
        Ok(())
    }
}

impl<T: Real> fmt::Display for ColorSpace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: gamma {:?}, break point {:?}",
            self.name,
            self.gamma(),
            self.break_point()
        )?;
        writeln!(f, "  rgb -> xyz {:?}", self.rgb_to_xyz.m)?;
        write!(f, "  xyz -> rgb {:?}", self.xyz_to_rgb.m)
    }
}
