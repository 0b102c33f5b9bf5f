//! Matrix transform over color buffers
//!
//! One generic loop, stamped out per precision. Each entry point is compiled
//! once per target below and picked at runtime; the loop body is inlined into
//! every copy so it sees that target's instruction set.

use crate::math::{Matrix3, Real};
use multiversion::multiversion;

#[inline(always)]
fn transform<T: Real>(matrix: &Matrix3<T>, input: &[[T; 3]], output: &mut [[T; 3]]) {
    for (src, dst) in input.iter().zip(output.iter_mut()) {
        *dst = matrix.multiply_vec(*src);
    }
}

/// `output[i] = matrix × input[i]` for f64 triples
///
/// Stops at the shorter of the two buffers.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn matrix_multiply_vec3_batch(
    matrix: &Matrix3<f64>,
    input: &[[f64; 3]],
    output: &mut [[f64; 3]],
) {
    transform(matrix, input, output);
}

/// `output[i] = matrix × input[i]` for f32 triples
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn matrix_multiply_vec3_batch_f32(
    matrix: &Matrix3<f32>,
    input: &[[f32; 3]],
    output: &mut [[f32; 3]],
) {
    transform(matrix, input, output);
}
