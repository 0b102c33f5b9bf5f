//! Numeric building blocks
//!
//! This module provides:
//! - The [`Real`] scalar abstraction over `f32` and `f64`
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - Piecewise gamma transfer functions
//! - Matrix derivation from primaries and white point
//! - Interpolation for spectral table lookup

pub mod gamma;
pub mod interpolation;
pub mod matrix;
pub mod primaries;
pub mod real;

pub use gamma::{GammaClamp, TransferFunction};
pub use interpolation::{lerp, nonuniform_lookup, uniform_lookup};
pub use matrix::Matrix3;
pub use primaries::{Chromaticity, PrimaryMatrices, RgbPrimaries};
pub use real::Real;
