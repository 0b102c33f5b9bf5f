//! RGB↔XYZ matrices from primaries and white point
//!
//! The XYZ→RGB rows are the cross products of the primary chromaticity
//! vectors, scaled so that the white point maps to RGB (1, 1, 1). The RGB→XYZ
//! matrix is then obtained by explicit cofactor expansion of that matrix.
//!
//! References:
//! - John Walker, "Colour Rendering of Spectra"
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html

use super::{Matrix3, Real};

/// A chromaticity pair (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity<T> {
    pub x: T,
    pub y: T,
}

impl<T: Real> Chromaticity<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The implied third coordinate, 1 - x - y
    #[inline]
    pub fn z(&self) -> T {
        T::one() - self.x - self.y
    }

    /// (x, y, z) as an array
    #[inline]
    pub fn xyz(&self) -> [T; 3] {
        [self.x, self.y, self.z()]
    }
}

/// Red, green and blue primaries plus the reference white
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbPrimaries<T> {
    pub red: Chromaticity<T>,
    pub green: Chromaticity<T>,
    pub blue: Chromaticity<T>,
    pub white: Chromaticity<T>,
}

/// Matrices derived from a set of primaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryMatrices<T> {
    /// Linear RGB → XYZ
    pub rgb_to_xyz: Matrix3<T>,
    /// XYZ → linear RGB
    pub xyz_to_rgb: Matrix3<T>,
    /// White point XYZ with Y = 1. Informational only.
    pub white: [T; 3],
}

impl<T: Real> RgbPrimaries<T> {
    pub const fn new(
        red: Chromaticity<T>,
        green: Chromaticity<T>,
        blue: Chromaticity<T>,
        white: Chromaticity<T>,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Derive both conversion matrices
    ///
    /// No validation: a white point with y = 0 or collinear primaries produce
    /// infinite or NaN entries.
    pub fn build(&self) -> PrimaryMatrices<T> {
        let [xr, yr, zr] = self.red.xyz();
        let [xg, yg, zg] = self.green.xyz();
        let [xb, yb, zb] = self.blue.xyz();
        let [xw, yw, zw] = self.white.xyz();

        // xyz -> rgb rows before white scaling: g×b, b×r, r×g
        let rx = yg * zb - yb * zg;
        let ry = xb * zg - xg * zb;
        let rz = xg * yb - xb * yg;
        let gx = yb * zr - yr * zb;
        let gy = xr * zb - xb * zr;
        let gz = xb * yr - xr * yb;
        let bx = yr * zg - yg * zr;
        let by = xg * zr - xr * zg;
        let bz = xr * yg - xg * yr;

        // white scaling, dividing by yw normalizes white luminance to 1
        let rw = (rx * xw + ry * yw + rz * zw) / yw;
        let gw = (gx * xw + gy * yw + gz * zw) / yw;
        let bw = (bx * xw + by * yw + bz * zw) / yw;

        let (rx, ry, rz) = (rx / rw, ry / rw, rz / rw);
        let (gx, gy, gz) = (gx / gw, gy / gw, gz / gw);
        let (bx, by, bz) = (bx / bw, by / bw, bz / bw);

        let xyz_to_rgb = Matrix3::new([[rx, ry, rz], [gx, gy, gz], [bx, by, bz]]);

        // adjugate over determinant
        let s = T::one()
            / (rx * (gy * bz - by * gz) - ry * (gx * bz - bx * gz) + rz * (gx * by - bx * gy));
        let rgb_to_xyz = Matrix3::new([
            [
                s * (gy * bz - gz * by),
                s * (rz * by - ry * bz),
                s * (ry * gz - rz * gy),
            ],
            [
                s * (gz * bx - gx * bz),
                s * (rx * bz - rz * bx),
                s * (rz * gx - rx * gz),
            ],
            [
                s * (gx * by - gy * bx),
                s * (ry * bx - rx * by),
                s * (rx * gy - ry * gx),
            ],
        ]);

        if !(rgb_to_xyz.is_finite() && xyz_to_rgb.is_finite()) {
            tracing::warn!(
                white_x = self.white.x.as_f64(),
                white_y = self.white.y.as_f64(),
                "degenerate primaries, derived matrices are not finite"
            );
        }

        PrimaryMatrices {
            rgb_to_xyz,
            xyz_to_rgb,
            white: [xw / yw, T::one(), zw / yw],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// sRGB to XYZ matrix (D65 white point), IEC 61966-2-1:1999
    const SRGB_TO_XYZ: [[f64; 3]; 3] = [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ];

    fn srgb_primaries() -> RgbPrimaries<f64> {
        RgbPrimaries::new(
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
            Chromaticity::new(0.3127, 0.3290),
        )
    }

    #[test]
    fn test_srgb_matrix_matches_standard() {
        // The tabulated matrix is normalized to white XYZ (0.95047, 1, 1.08883)
        let [x, y, z] = [0.95047, 1.0, 1.08883];
        let sum = x + y + z;
        let mut prims = srgb_primaries();
        prims.white = Chromaticity::new(x / sum, y / sum);

        let mats = prims.build();
        let reference = Matrix3::new(SRGB_TO_XYZ);
        assert!(
            mats.rgb_to_xyz.approx_eq(&reference, 1e-6),
            "got {:?}",
            mats.rgb_to_xyz
        );
    }

    #[test]
    fn test_white_chromaticity_moves_blue_row() {
        // (0.3127, 0.3290) differs from the tabulated white in the fourth
        // decimal, which shows up mostly in Z of blue
        let mats = srgb_primaries().build();
        let reference = Matrix3::new(SRGB_TO_XYZ);
        assert!(mats.rgb_to_xyz.approx_eq(&reference, 5e-4));
        assert!((mats.rgb_to_xyz.m[2][2] - 0.9505322).abs() < 1e-6);
    }

    #[test]
    fn test_matrices_are_inverses() {
        let mats = srgb_primaries().build();
        let product = mats.rgb_to_xyz.multiply(&mats.xyz_to_rgb);
        assert!(product.is_identity(1e-12));
        let product = mats.xyz_to_rgb.multiply(&mats.rgb_to_xyz);
        assert!(product.is_identity(1e-12));
    }

    #[test]
    fn test_white_maps_to_unit_rgb() {
        let mats = srgb_primaries().build();
        let rgb = mats.xyz_to_rgb.multiply_vec(mats.white);
        for c in rgb {
            assert!((c - 1.0).abs() < 1e-12);
        }
        assert_eq!(mats.white[1], 1.0);
        assert!((mats.white[0] - 0.3127 / 0.3290).abs() < 1e-15);
    }

    #[test]
    fn test_primaries_map_to_their_chromaticity() {
        let prims = srgb_primaries();
        let mats = prims.build();
        for (rgb, chroma) in [
            ([1.0, 0.0, 0.0], prims.red),
            ([0.0, 1.0, 0.0], prims.green),
            ([0.0, 0.0, 1.0], prims.blue),
        ] {
            let xyz = mats.rgb_to_xyz.multiply_vec(rgb);
            let sum = xyz[0] + xyz[1] + xyz[2];
            assert!((xyz[0] / sum - chroma.x).abs() < 1e-12);
            assert!((xyz[1] / sum - chroma.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_white_is_not_finite() {
        let mut prims = srgb_primaries();
        prims.white = Chromaticity::new(0.3, 0.0);
        let mats = prims.build();
        assert!(!mats.rgb_to_xyz.is_finite() || !mats.xyz_to_rgb.is_finite());
    }

    #[test]
    fn test_single_precision() {
        let prims = RgbPrimaries::<f32>::new(
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
            Chromaticity::new(0.3127, 0.3290),
        );
        let mats = prims.build();
        assert!(mats.rgb_to_xyz.multiply(&mats.xyz_to_rgb).is_identity(1e-5));
    }
}
