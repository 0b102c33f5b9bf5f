//! Transfer function over flat channel buffers
//!
//! Gamma acts on each channel independently, so buffers are plain scalar
//! slices. Same dispatch scheme as the matrix kernels.

use crate::math::{Real, TransferFunction};
use multiversion::multiversion;

#[inline(always)]
fn apply<T: Real>(input: &[T], output: &mut [T], curve: impl Fn(T) -> T) {
    for (src, dst) in input.iter().zip(output.iter_mut()) {
        *dst = curve(*src);
    }
}

/// Gamma encode (linear → encoded) f64 channels
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn redo_gamma_batch(transfer: &TransferFunction<f64>, input: &[f64], output: &mut [f64]) {
    apply(input, output, |v| transfer.redo(v));
}

/// Gamma decode (encoded → linear) f64 channels
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn undo_gamma_batch(transfer: &TransferFunction<f64>, input: &[f64], output: &mut [f64]) {
    apply(input, output, |v| transfer.undo(v));
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn redo_gamma_batch_f32(transfer: &TransferFunction<f32>, input: &[f32], output: &mut [f32]) {
    apply(input, output, |v| transfer.redo(v));
}

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn undo_gamma_batch_f32(transfer: &TransferFunction<f32>, input: &[f32], output: &mut [f32]) {
    apply(input, output, |v| transfer.undo(v));
}
