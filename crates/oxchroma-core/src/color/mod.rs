//! Color values and reference whites
//!
//! This module provides:
//! - `Color3` / `Color4` value types shared by RGB and XYZ
//! - Standard illuminant white points

pub mod value;
pub mod white_point;

pub use value::{Channels, Color3, Color4};
pub use white_point::{C, D50, D55, D65, D75, E, WhitePoint};
