//! # oxchroma-core
//!
//! Colorimetric conversion and spectral-to-tristimulus synthesis.
//!
//! - RGB↔XYZ matrices derived from a color space's primaries and white point
//! - Piecewise linear + power transfer functions (gamma redo/undo)
//! - Spectral curves on regular and irregular grids, daylight curves
//!   synthesized from a chromaticity, and tristimulus integration
//! - Batch conversions with runtime SIMD dispatch
//!
//! Everything is generic over [`Real`] (`f32` or `f64`) and immutable after
//! construction.
//!
//! ## Quick Start
//!
//! ```
//! use oxchroma_core::{Color3, Preset};
//!
//! let srgb = Preset::Srgb.color_space::<f64>();
//!
//! let encoded = Color3::new(1.0, 0.5, 0.25);
//! let linear = srgb.undo_gamma_correction(&encoded);
//! let xyz = srgb.convert_rgb_to_xyz(&linear);
//!
//! let back = srgb.redo_gamma_correction(&srgb.convert_xyz_to_rgb(&xyz));
//! assert!((back.g() - 0.5).abs() < 1e-9);
//! ```
//!
//! Spectral curves integrate to XYZ under the CIE 1931 observer:
//!
//! ```
//! use oxchroma_core::spectral::{ChromaticSpectralCurve, SpectralCurve};
//!
//! let d65 = SpectralCurve::from(ChromaticSpectralCurve::<f64>::new(0.3127, 0.3290));
//! let xy = d65.to_xyz().chromaticity();
//! assert!((xy.x - 0.3127).abs() < 1e-3);
//! ```

pub mod color;
pub mod colorspace;
pub mod error;
pub mod math;
pub mod presets;
pub mod simd;
pub mod spectral;

pub use color::{Channels, Color3, Color4, WhitePoint};
pub use colorspace::{ColorSpace, ColorSpaceOptions, ColorSpaceParams};
pub use error::{Error, Result};
pub use math::{Chromaticity, GammaClamp, Matrix3, Real, RgbPrimaries, TransferFunction};
pub use presets::{Preset, PresetSpaces};
pub use spectral::{SpectralCurve, SpectralTables};

/// Version of oxchroma
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
