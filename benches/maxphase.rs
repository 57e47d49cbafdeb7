use criterion::{criterion_group, criterion_main, Criterion};
use maxphase::{ImageGeometry, MaxPhaseOptimizer, OptimizerConfig, PeakInterpolation, SurfaceView};
use std::hint::black_box;

fn make_surface(size: &[usize], peak: &[f64]) -> Vec<f64> {
    let len: usize = size.iter().product();
    let mut data = Vec::with_capacity(len);
    let mut position = vec![0usize; size.len()];
    for _ in 0..len {
        let r2: f64 = position
            .iter()
            .zip(peak)
            .map(|(&p, &c)| (p as f64 - c).powi(2))
            .sum();
        let ripple = ((position[0] * 13) ^ (position[1] * 7)) as f64 * 1e-4;
        data.push((-r2 / 2.0).exp() + ripple);

        for axis in 0..size.len() {
            position[axis] += 1;
            if position[axis] < size[axis] {
                break;
            }
            position[axis] = 0;
        }
    }
    data
}

fn bench_optimizer(c: &mut Criterion) {
    let cfg = OptimizerConfig {
        interpolation: PeakInterpolation::Parabolic,
        offset_count: 4,
        ..OptimizerConfig::default()
    };
    let optimizer = MaxPhaseOptimizer::new().with_config(cfg).unwrap();

    let size_2d = [256usize, 256];
    let data_2d = make_surface(&size_2d, &[100.3, 37.8]);
    let view_2d = SurfaceView::from_slice(&data_2d, &size_2d).unwrap();
    let zero_2d = ImageGeometry::zero(2);
    c.bench_function("offsets_2d_256", |b| {
        b.iter(|| {
            black_box(
                optimizer
                    .compute_offsets(Some(&view_2d), &zero_2d, &zero_2d)
                    .unwrap(),
            )
        });
    });

    let size_3d = [64usize, 64, 32];
    let data_3d = make_surface(&size_3d, &[20.4, 50.1, 9.7]);
    let view_3d = SurfaceView::from_slice(&data_3d, &size_3d).unwrap();
    let zero_3d = ImageGeometry::zero(3);
    c.bench_function("offsets_3d_64", |b| {
        b.iter(|| {
            black_box(
                optimizer
                    .compute_offsets(Some(&view_3d), &zero_3d, &zero_3d)
                    .unwrap(),
            )
        });
    });

    #[cfg(feature = "rayon")]
    {
        let parallel = MaxPhaseOptimizer::with_finder(maxphase::ParallelMaxFinder)
            .with_config(cfg)
            .unwrap();
        c.bench_function("offsets_3d_64_parallel", |b| {
            b.iter(|| {
                black_box(
                    parallel
                        .compute_offsets(Some(&view_3d), &zero_3d, &zero_3d)
                        .unwrap(),
                )
            });
        });
    }
}

criterion_group!(benches, bench_optimizer);
criterion_main!(benches);
