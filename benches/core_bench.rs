use bezier_curve_editor::core::{bezier, curve_chain};
use bezier_curve_editor::CurveChain;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_synthetic_chain(segment_count: usize) -> CurveChain {
    let point_count = 3 * segment_count + 1;
    let points = (0..point_count)
        .map(|i| {
            let x = i as f32 * 25.0;
            let y = 100.0 + 50.0 * ((i % 3) as f32 - 1.0);
            Vec2::new(x, y)
        })
        .collect();
    CurveChain::new(points).expect("synthetische Kette ist 3k+1")
}

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");

    for &segment_count in &[1usize, 8, 64] {
        let chain = build_synthetic_chain(segment_count);

        group.bench_with_input(
            BenchmarkId::new("sample_chain_200", segment_count),
            &chain,
            |b, chain| {
                b.iter(|| {
                    let mut total = 0usize;
                    for segment in curve_chain::segments(black_box(chain.points())) {
                        total += bezier::sample_segment(segment, 200).len();
                    }
                    black_box(total)
                })
            },
        );
    }

    group.finish();
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 400) as f32 + 0.37;
            let y = ((i * 7) % 200) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");

    for &segment_count in &[1usize, 8, 64] {
        let chain = build_synthetic_chain(segment_count);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("hit_batch", segment_count),
            &chain,
            |b, chain| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if chain.hit_test(black_box(*point), 8.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_curve_sampling, bench_hit_test);
criterion_main!(benches);
