//! Floating-point abstraction
//!
//! Every component is written once over [`Real`], which is implemented for
//! `f32` and `f64` only.

use num_traits::Float;
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar type used by color spaces and spectral curves
pub trait Real: Float + Debug + Default + Send + Sync + 'static + sealed::Sealed {
    /// Convert an `f64` constant to this precision
    fn lit(v: f64) -> Self;

    /// Widen to `f64`
    fn as_f64(self) -> f64;

    /// Convert an `usize` index or count
    #[inline]
    fn from_usize(n: usize) -> Self {
        Self::lit(n as f64)
    }
}

impl Real for f32 {
    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    #[inline]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
