//! CIE daylight basis functions
//!
//! Mean (S0) and first two characteristic vectors (S1, S2) of daylight,
//! 300-830 nm at 10 nm. Any CIE daylight illuminant is
//! `S0 + m1·S1 + m2·S2` for weights derived from its chromaticity.

use super::observer::ColorMatchingFunctions;
use super::regular::RegularSpectralCurve;
use crate::color::Color3;
use crate::math::Real;

/// First basis wavelength, in nanometers
pub const DAYLIGHT_START: f64 = 300.0;
/// Last basis wavelength, in nanometers
pub const DAYLIGHT_END: f64 = 830.0;

#[rustfmt::skip]
const S0: [f64; 54] = [
    0.04, 6.0, 29.6, 55.3, 57.3, 61.8, 61.5, 68.8, 63.4, 65.8,
    94.8, 104.8, 105.9, 96.8, 113.9, 125.6, 125.5, 121.3, 121.3, 113.5,
    113.1, 110.8, 106.5, 108.8, 105.3, 104.4, 100.0, 96.0, 95.1, 89.1,
    90.5, 90.3, 88.4, 84.0, 85.1, 81.9, 82.6, 84.9, 81.3, 71.9,
    74.3, 76.4, 63.3, 71.7, 77.0, 65.2, 47.7, 68.6, 65.0, 66.0,
    61.0, 53.3, 58.9, 61.9,
];

#[rustfmt::skip]
const S1: [f64; 54] = [
    0.02, 4.5, 22.4, 42.0, 40.6, 41.6, 38.0, 42.4, 38.5, 35.0,
    43.4, 46.3, 43.9, 37.1, 36.7, 35.9, 32.6, 27.9, 24.3, 20.1,
    16.2, 13.2, 8.6, 6.1, 4.2, 1.9, 0.0, -1.6, -3.5, -3.5,
    -5.8, -7.2, -8.6, -9.5, -10.9, -10.7, -12.0, -14.0, -13.6, -12.0,
    -13.3, -12.9, -10.6, -11.6, -12.2, -10.2, -7.8, -11.2, -10.4, -10.6,
    -9.7, -8.3, -9.3, -9.8,
];

#[rustfmt::skip]
const S2: [f64; 54] = [
    0.0, 2.0, 4.0, 8.5, 7.8, 6.7, 5.3, 6.1, 2.0, 1.2,
    -1.1, -0.5, -0.7, -1.2, -2.6, -2.9, -2.8, -2.6, -2.6, -1.8,
    -1.5, -1.3, -1.2, -1.0, -0.5, -0.3, 0.0, 0.2, 0.5, 2.1,
    3.2, 4.1, 4.7, 5.1, 6.7, 7.3, 8.6, 9.8, 10.2, 8.3,
    9.6, 8.5, 7.0, 7.6, 8.0, 6.7, 5.2, 7.4, 6.8, 7.0,
    6.4, 5.5, 6.1, 6.5,
];

/// The three basis curves and their tristimulus integrals
#[derive(Debug, Clone, PartialEq)]
pub struct DaylightBasis<T> {
    s0: RegularSpectralCurve<T>,
    s1: RegularSpectralCurve<T>,
    s2: RegularSpectralCurve<T>,
    xyz: [Color3<T>; 3],
}

impl<T: Real> DaylightBasis<T> {
    /// Build the curves and integrate each against `observer`
    pub fn new(observer: &ColorMatchingFunctions<T>) -> Self {
        let curve = |table: &[f64; 54]| {
            let amplitudes: Vec<T> = table.iter().map(|&v| T::lit(v)).collect();
            RegularSpectralCurve::new(
                &amplitudes,
                T::lit(DAYLIGHT_START),
                T::lit(DAYLIGHT_END),
            )
        };
        let (s0, s1, s2) = (curve(&S0), curve(&S1), curve(&S2));
        let xyz = [
            observer.integrate(|l| s0.sample(l)),
            observer.integrate(|l| s1.sample(l)),
            observer.integrate(|l| s2.sample(l)),
        ];
        Self { s0, s1, s2, xyz }
    }

    /// `S0(λ) + m1·S1(λ) + m2·S2(λ)`
    #[inline]
    pub fn sample(&self, m1: T, m2: T, lambda: T) -> T {
        self.s0.sample(lambda) + m1 * self.s1.sample(lambda) + m2 * self.s2.sample(lambda)
    }

    /// XYZ of the weighted sum, from the precomputed integrals
    pub fn xyz(&self, m1: T, m2: T) -> Color3<T> {
        let [x0, x1, x2] = self.xyz;
        Color3(std::array::from_fn(|i| x0.0[i] + m1 * x1.0[i] + m2 * x2.0[i]))
    }

    /// S0, S1, S2
    pub fn curves(&self) -> [&RegularSpectralCurve<T>; 3] {
        [&self.s0, &self.s1, &self.s2]
    }
}
