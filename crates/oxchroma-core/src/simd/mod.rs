//! Batch kernels with runtime CPU dispatch
//!
//! Slice versions of the per-color conversions, compiled for AVX2 and SSE4.1
//! on x86-64 and NEON on ARM64 with a portable fallback. Generic code reaches
//! the kernel of matching precision through [`BatchReal`].

mod gamma;
mod matrix;

use crate::math::{Matrix3, Real, TransferFunction};

pub use gamma::{redo_gamma_batch, redo_gamma_batch_f32, undo_gamma_batch, undo_gamma_batch_f32};
pub use matrix::{matrix_multiply_vec3_batch, matrix_multiply_vec3_batch_f32};

/// Routes generic slice conversions to the kernel of matching precision
pub trait BatchReal: Real {
    fn matrix_batch(matrix: &Matrix3<Self>, input: &[[Self; 3]], output: &mut [[Self; 3]]);
    fn redo_batch(transfer: &TransferFunction<Self>, input: &[Self], output: &mut [Self]);
    fn undo_batch(transfer: &TransferFunction<Self>, input: &[Self], output: &mut [Self]);
}

impl BatchReal for f32 {
    #[inline]
    fn matrix_batch(matrix: &Matrix3<f32>, input: &[[f32; 3]], output: &mut [[f32; 3]]) {
        matrix_multiply_vec3_batch_f32(matrix, input, output);
    }

    #[inline]
    fn redo_batch(transfer: &TransferFunction<f32>, input: &[f32], output: &mut [f32]) {
        redo_gamma_batch_f32(transfer, input, output);
    }

    #[inline]
    fn undo_batch(transfer: &TransferFunction<f32>, input: &[f32], output: &mut [f32]) {
        undo_gamma_batch_f32(transfer, input, output);
    }
}

impl BatchReal for f64 {
    #[inline]
    fn matrix_batch(matrix: &Matrix3<f64>, input: &[[f64; 3]], output: &mut [[f64; 3]]) {
        matrix_multiply_vec3_batch(matrix, input, output);
    }

    #[inline]
    fn redo_batch(transfer: &TransferFunction<f64>, input: &[f64], output: &mut [f64]) {
        redo_gamma_batch(transfer, input, output);
    }

    #[inline]
    fn undo_batch(transfer: &TransferFunction<f64>, input: &[f64], output: &mut [f64]) {
        undo_gamma_batch(transfer, input, output);
    }
}
