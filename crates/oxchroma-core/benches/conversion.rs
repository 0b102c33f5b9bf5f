//! Conversion Benchmarks
//!
//! Per-color API against the batch kernels, plus spectral integration.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxchroma_core::spectral::{ChromaticSpectralCurve, IrregularSpectralCurve, SpectralCurve};
use oxchroma_core::{Color3, Preset};

/// Generate test data for benchmarks
fn generate_rgb_data(count: usize) -> Vec<Color3<f64>> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Color3::new(t, (t * 2.0) % 1.0, (t * 3.0) % 1.0)
        })
        .collect()
}

// ============================================================================
// Matrix Benchmarks
// ============================================================================

fn bench_rgb_to_xyz(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb_to_xyz");
    let cs = Preset::Srgb.color_space::<f64>();

    for size in [100, 1000, 10000, 100000].iter() {
        let input = generate_rgb_data(*size);
        let mut output = vec![Color3::default(); *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("slice", size), size, |b, _| {
            b.iter(|| cs.convert_rgb_to_xyz_slice(black_box(&input), black_box(&mut output)))
        });

        // Per-color baseline
        group.bench_with_input(BenchmarkId::new("per_color", size), size, |b, _| {
            b.iter(|| {
                for (inp, out) in input.iter().zip(output.iter_mut()) {
                    *out = cs.convert_rgb_to_xyz(black_box(inp));
                }
            })
        });
    }

    group.finish();
}

// ============================================================================
// Gamma Benchmarks
// ============================================================================

fn bench_redo_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("redo_gamma");

    for preset in [Preset::Srgb, Preset::Adobe] {
        let cs = preset.color_space::<f32>();
        let input: Vec<Color3<f32>> = generate_rgb_data(10000)
            .iter()
            .map(|c| Color3(c.0.map(|v| v as f32)))
            .collect();
        let mut output = vec![Color3::default(); input.len()];

        group.throughput(Throughput::Elements(input.len() as u64));

        group.bench_function(BenchmarkId::new("slice", preset.name()), |b| {
            b.iter(|| cs.redo_gamma_correction_slice(black_box(&input), black_box(&mut output)))
        });

        group.bench_function(BenchmarkId::new("per_color", preset.name()), |b| {
            b.iter(|| {
                for (inp, out) in input.iter().zip(output.iter_mut()) {
                    *out = cs.redo_gamma_correction(black_box(inp));
                }
            })
        });
    }

    group.finish();
}

// ============================================================================
// Spectral Benchmarks
// ============================================================================

fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral");

    let daylight = SpectralCurve::from(ChromaticSpectralCurve::<f64>::new(0.3127, 0.3290));
    group.bench_function("chromatic_to_xyz", |b| b.iter(|| black_box(&daylight).to_xyz()));

    group.bench_function("chromatic_color_xyz", |b| {
        b.iter(|| ChromaticSpectralCurve::<f64>::color_xyz(black_box(0.3127), black_box(0.3290)))
    });

    let wavelengths: Vec<f64> = (0..64).map(|i| 380.0 + (i * i) as f64 / 10.0).collect();
    let amplitudes: Vec<f64> = (0..64).map(|i| (i as f64 * 0.1).sin().abs()).collect();
    let irregular = SpectralCurve::from(IrregularSpectralCurve::new(&wavelengths, &amplitudes));
    group.bench_function("irregular_to_xyz", |b| b.iter(|| black_box(&irregular).to_xyz()));

    group.finish();
}

criterion_group!(benches, bench_rgb_to_xyz, bench_redo_gamma, bench_spectral);
criterion_main!(benches);
