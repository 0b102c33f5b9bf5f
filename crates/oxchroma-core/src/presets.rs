//! Named color space presets
//!
//! Each preset is a fixed set of primaries, white point and transfer curve.
//! The color spaces are derived lazily, once per precision, and shared
//! read-only for the rest of the process.

use crate::color::white_point::{C, D50, D65, E, WhitePoint};
use crate::colorspace::{ColorSpace, ColorSpaceOptions, ColorSpaceParams};
use crate::math::{Chromaticity, Real, RgbPrimaries};
use crate::Error;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// A named, standard RGB color space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Adobe RGB (1998)
    Adobe,
    /// Apple RGB
    Apple,
    /// NTSC (1953)
    Ntsc,
    /// HDTV, ITU-R BT.709
    Hdtv,
    /// sRGB, IEC 61966-2-1
    Srgb,
    /// CIE RGB with the equal-energy white
    Cie,
    /// EBU Tech. 3213 (PAL/SECAM)
    Ebu,
    /// SMPTE-C (SMPTE RP 145)
    SmpteC,
    /// SMPTE 240M, same primaries as SMPTE-C
    Smpte240M,
    /// Adobe Wide Gamut RGB, D50 white
    WideGamut,
}

/// Primaries (r, g, b), white, gamma, break point
struct PresetDef {
    name: &'static str,
    red: (f64, f64),
    green: (f64, f64),
    blue: (f64, f64),
    white: WhitePoint,
    gamma: f64,
    break_point: f64,
}

const REC709_GAMMA: f64 = 20.0 / 9.0;
const REC709_BREAK: f64 = 0.018;

impl Preset {
    /// Every preset, in declaration order
    pub const ALL: [Preset; 10] = [
        Preset::Adobe,
        Preset::Apple,
        Preset::Ntsc,
        Preset::Hdtv,
        Preset::Srgb,
        Preset::Cie,
        Preset::Ebu,
        Preset::SmpteC,
        Preset::Smpte240M,
        Preset::WideGamut,
    ];

    fn def(self) -> PresetDef {
        let (name, red, green, blue, white, gamma, break_point) = match self {
            Preset::Adobe => ("Adobe", (0.64, 0.33), (0.21, 0.71), (0.15, 0.06), D65, 2.2, 0.0),
            Preset::Apple => ("Apple", (0.625, 0.34), (0.28, 0.595), (0.155, 0.07), D65, 1.8, 0.0),
            Preset::Ntsc => (
                "NTSC",
                (0.67, 0.33),
                (0.21, 0.71),
                (0.14, 0.08),
                C,
                REC709_GAMMA,
                REC709_BREAK,
            ),
            Preset::Hdtv => (
                "HDTV",
                (0.64, 0.33),
                (0.30, 0.60),
                (0.15, 0.06),
                D65,
                REC709_GAMMA,
                REC709_BREAK,
            ),
            Preset::Srgb => ("sRGB", (0.64, 0.33), (0.30, 0.60), (0.15, 0.06), D65, 2.4, 0.00304),
            Preset::Cie => ("CIE", (0.735, 0.265), (0.274, 0.717), (0.167, 0.009), E, 2.2, 0.0),
            Preset::Ebu => (
                "EBU",
                (0.64, 0.33),
                (0.29, 0.60),
                (0.15, 0.06),
                D65,
                REC709_GAMMA,
                REC709_BREAK,
            ),
            Preset::SmpteC => (
                "SMPTE-C",
                (0.63, 0.34),
                (0.31, 0.595),
                (0.155, 0.07),
                D65,
                REC709_GAMMA,
                REC709_BREAK,
            ),
            Preset::Smpte240M => (
                "SMPTE-240M",
                (0.63, 0.34),
                (0.31, 0.595),
                (0.155, 0.07),
                D65,
                REC709_GAMMA,
                REC709_BREAK,
            ),
            Preset::WideGamut => (
                "Wide Gamut",
                (0.7347, 0.2653),
                (0.1152, 0.8264),
                (0.1566, 0.0177),
                D50,
                2.2,
                0.0,
            ),
        };
        PresetDef {
            name,
            red,
            green,
            blue,
            white,
            gamma,
            break_point,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Defining parameters in the requested precision
    pub fn params<T: Real>(self) -> ColorSpaceParams<T> {
        let def = self.def();
        let xy = |(x, y): (f64, f64)| Chromaticity::new(T::lit(x), T::lit(y));
        ColorSpaceParams {
            name: def.name.to_string(),
            break_point: T::lit(def.break_point),
            gamma: T::lit(def.gamma),
            primaries: RgbPrimaries::new(
                xy(def.red),
                xy(def.green),
                xy(def.blue),
                def.white.chromaticity(),
            ),
        }
    }

    /// The shared color space for this preset
    ///
    /// Built with default options on first use.
    pub fn color_space<T: PresetSpaces>(self) -> &'static ColorSpace<T> {
        &T::presets()[self as usize]
    }
}

fn build_all<T: Real>() -> Vec<ColorSpace<T>> {
    tracing::trace!(
        precision = std::any::type_name::<T>(),
        "building preset color spaces"
    );
    Preset::ALL
        .iter()
        .map(|p| ColorSpace::from_params(&p.params(), ColorSpaceOptions::default()))
        .collect()
}

static PRESETS_F32: Lazy<Vec<ColorSpace<f32>>> = Lazy::new(build_all::<f32>);
static PRESETS_F64: Lazy<Vec<ColorSpace<f64>>> = Lazy::new(build_all::<f64>);

/// Precisions with a shared preset table
pub trait PresetSpaces: Real {
    /// All preset color spaces, indexed in [`Preset::ALL`] order
    fn presets() -> &'static [ColorSpace<Self>];
}

impl PresetSpaces for f32 {
    fn presets() -> &'static [ColorSpace<f32>] {
        &PRESETS_F32
    }
}

impl PresetSpaces for f64 {
    fn presets() -> &'static [ColorSpace<f64>] {
        &PRESETS_F64
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Preset {
    type Err = Error;

    /// Case-insensitive; spaces, dashes and underscores are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Preset::ALL
            .into_iter()
            .find(|p| normalize(p.name()) == wanted)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Preset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Preset {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
