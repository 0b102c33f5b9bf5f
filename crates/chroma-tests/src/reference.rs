//! Reference implementation wrappers
//!
//! Thin adapters over `palette` so tests compare plain arrays.

use palette::white_point::D65;
use palette::{FromColor, LinSrgb, Srgb, Xyz};

/// sRGB decode (encoded → linear), IEC 61966-2-1 via palette
pub fn srgb_decode(value: f64) -> f64 {
    Srgb::new(value, value, value).into_linear().red
}

/// sRGB encode (linear → encoded) via palette
pub fn srgb_encode(value: f64) -> f64 {
    Srgb::from_linear(LinSrgb::new(value, value, value)).red
}

/// Linear sRGB → XYZ (D65) via palette
pub fn linear_srgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let xyz: Xyz<D65, f64> = Xyz::from_color(LinSrgb::new(rgb[0], rgb[1], rgb[2]));
    [xyz.x, xyz.y, xyz.z]
}

/// XYZ (D65) → linear sRGB via palette
pub fn xyz_to_linear_srgb(xyz: [f64; 3]) -> [f64; 3] {
    let rgb = LinSrgb::from_color(Xyz::<D65, f64>::new(xyz[0], xyz[1], xyz[2]));
    [rgb.red, rgb.green, rgb.blue]
}
