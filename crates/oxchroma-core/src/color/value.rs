//! Plain 3- and 4-component color values
//!
//! The same storage holds RGB, linear RGB or XYZ; the meaning is decided by
//! the [`ColorSpace`](crate::ColorSpace) call that consumes it. Both types are
//! `#[repr(transparent)]` over an array, so buffers of colors and buffers of
//! channel arrays convert into each other without copying
//! ([`TransparentWrapper::peel_slice`] and friends).

use crate::error::Result;
use crate::math::{Chromaticity, Real};
use bytemuck::{Pod, TransparentWrapper};
use std::io::{Read, Write};

/// Three-channel color: (r, g, b) or (x, y, z)
#[derive(Debug, Clone, Copy, PartialEq, Default, TransparentWrapper)]
#[repr(transparent)]
pub struct Color3<T>(pub [T; 3]);

/// Three channels plus alpha
#[derive(Debug, Clone, Copy, PartialEq, Default, TransparentWrapper)]
#[repr(transparent)]
pub struct Color4<T>(pub [T; 4]);

/// Access to the color channels a [`ColorSpace`](crate::ColorSpace) transforms
///
/// Anything beyond the first three channels passes through untouched.
pub trait Channels<T>: Copy {
    /// The first three channels
    fn rgb(&self) -> [T; 3];

    /// A copy with the first three channels replaced
    fn with_rgb(&self, rgb: [T; 3]) -> Self;
}

impl<T: Real> Color3<T> {
    /// Create a new color
    #[inline]
    pub const fn new(c0: T, c1: T, c2: T) -> Self {
        Self([c0, c1, c2])
    }

    #[inline]
    pub fn r(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [T; 3] {
        self.0
    }

    /// Add an alpha channel
    #[inline]
    pub fn with_alpha(&self, alpha: T) -> Color4<T> {
        Color4([self.0[0], self.0[1], self.0[2], alpha])
    }

    /// Chromaticity (x, y) of a color holding XYZ
    ///
    /// Black (X + Y + Z = 0) yields (0, 0).
    pub fn chromaticity(&self) -> Chromaticity<T> {
        let sum = self.0[0] + self.0[1] + self.0[2];
        if sum == T::zero() {
            Chromaticity::new(T::zero(), T::zero())
        } else {
            Chromaticity::new(self.0[0] / sum, self.0[1] / sum)
        }
    }
}

impl<T: Real> Color4<T> {
    /// Create a new color
    #[inline]
    pub const fn new(c0: T, c1: T, c2: T, alpha: T) -> Self {
        Self([c0, c1, c2, alpha])
    }

    #[inline]
    pub fn r(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    #[inline]
    pub fn alpha(&self) -> T {
        self.0[3]
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [T; 4] {
        self.0
    }

    /// Drop the alpha channel
    #[inline]
    pub fn to_color3(&self) -> Color3<T> {
        Color3([self.0[0], self.0[1], self.0[2]])
    }
}

impl<T: Real + Pod> Color3<T> {
    /// Write the channels in order, native endian
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(bytemuck::bytes_of(&self.0))?;
        Ok(())
    }

    /// Read channels written by [`write_to`](Self::write_to)
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut channels = [T::zero(); 3];
        reader.read_exact(bytemuck::bytes_of_mut(&mut channels))?;
        Ok(Self(channels))
    }
}

impl<T: Real + Pod> Color4<T> {
    /// Write the channels then alpha, native endian
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(bytemuck::bytes_of(&self.0))?;
        Ok(())
    }

    /// Read channels written by [`write_to`](Self::write_to)
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut channels = [T::zero(); 4];
        reader.read_exact(bytemuck::bytes_of_mut(&mut channels))?;
        Ok(Self(channels))
    }
}

impl<T: Copy> Channels<T> for Color3<T> {
    #[inline]
    fn rgb(&self) -> [T; 3] {
        self.0
    }

    #[inline]
    fn with_rgb(&self, rgb: [T; 3]) -> Self {
        Self(rgb)
    }
}

impl<T: Copy> Channels<T> for Color4<T> {
    #[inline]
    fn rgb(&self) -> [T; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    #[inline]
    fn with_rgb(&self, rgb: [T; 3]) -> Self {
        Self([rgb[0], rgb[1], rgb[2], self.0[3]])
    }
}

impl<T: Copy> Channels<T> for [T; 3] {
    #[inline]
    fn rgb(&self) -> [T; 3] {
        *self
    }

    #[inline]
    fn with_rgb(&self, rgb: [T; 3]) -> Self {
        rgb
    }
}

impl<T> From<[T; 3]> for Color3<T> {
    fn from(arr: [T; 3]) -> Self {
        Self(arr)
    }
}

impl<T> From<Color3<T>> for [T; 3] {
    fn from(c: Color3<T>) -> Self {
        c.0
    }
}

impl<T> From<[T; 4]> for Color4<T> {
    fn from(arr: [T; 4]) -> Self {
        Self(arr)
    }
}

impl<T> From<Color4<T>> for [T; 4] {
    fn from(c: Color4<T>) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_accessors() {
        let c = Color4::new(0.1f32, 0.2, 0.3, 0.4);
        assert_eq!((c.r(), c.g(), c.b(), c.alpha()), (0.1, 0.2, 0.3, 0.4));
        assert_eq!((c.x(), c.y(), c.z()), (0.1, 0.2, 0.3));
        assert_eq!(c.to_color3(), Color3::new(0.1, 0.2, 0.3));
        assert_eq!(c.to_color3().with_alpha(0.4), c);
    }

    #[test]
    fn test_chromaticity() {
        let d65 = Color3::<f64>::new(0.9505, 1.0, 1.0890);
        let xy = d65.chromaticity();
        assert!((xy.x - 0.3127).abs() < 0.001);
        assert!((xy.y - 0.3290).abs() < 0.001);

        let black = Color3::<f64>::default().chromaticity();
        assert_eq!((black.x, black.y), (0.0, 0.0));
    }

    #[test]
    fn test_channels_keep_alpha() {
        let c = Color4::new(1.0, 2.0, 3.0, 0.5);
        let d = c.with_rgb([4.0, 5.0, 6.0]);
        assert_eq!(d.to_array(), [4.0, 5.0, 6.0, 0.5]);
        assert_eq!(d.rgb(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_binary_layout() {
        let c = Color3::new(1.0f32, 2.0, 3.0);
        let mut buf = Vec::new();
        c.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 12);
        assert_eq!(&buf[4..8], &2.0f32.to_ne_bytes());

        let back = Color3::<f32>::read_from(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_binary_alpha_last() {
        let c = Color4::new(0.25f64, 0.5, 0.75, 1.0);
        let mut buf = Vec::new();
        c.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 32);
        assert_eq!(&buf[24..], &1.0f64.to_ne_bytes());
        assert_eq!(Color4::<f64>::read_from(&mut buf.as_slice()).unwrap(), c);
    }

    #[test]
    fn test_short_read_is_io_error() {
        let buf = [0u8; 5];
        let err = Color3::<f32>::read_from(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_wrap_channel_arrays() {
        let arrays = [[0.0f32, 0.1, 0.2], [1.0, 1.1, 1.2]];
        let colors = Color3::wrap_slice(&arrays);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].g(), 1.1);

        let mut buf = [Color4::new(0.0f64, 0.0, 0.0, 1.0); 2];
        Color4::peel_slice_mut(&mut buf)[1][2] = 0.5;
        assert_eq!(buf[1].b(), 0.5);
        assert_eq!(Color4::peel_slice(&buf).as_flattened().len(), 8);
    }
}
