//! Benchmark für die Kurven-Hotpaths.
//!
//! Misst die drei Geometrie-Transformationen auf synthetischen
//! Freihand-Kurven sowie den Undo/Redo-Durchlauf des Invokers.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use std::hint::black_box;
use vr_sketch_engine::shared::curve_geometry::{attract_to_stroke, fill_gaps, simplify_polyline};
use vr_sketch_engine::{AddControlPointCommand, CommandInvoker, SketchCurve};

/// Synthetische Freihand-Kurve: Sinus-Welle entlang Z mit leichtem Jitter.
fn build_sketch_curve(point_count: usize) -> Vec<Vec3> {
    (0..point_count)
        .map(|i| {
            let t = i as f32 * 0.01;
            Vec3::new(
                (t * 3.1).sin() * 0.5,
                1.0 + (t * 1.7).cos() * 0.25,
                t + (i as f32 * 0.0013).fract() * 0.002,
            )
        })
        .collect()
}

fn bench_attract_to_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("attract_to_stroke");

    for &point_count in &[1_000usize, 10_000usize] {
        let points = build_sketch_curve(point_count);
        let stroke: Vec<Vec3> = build_sketch_curve(64)
            .iter()
            .map(|&p| p + Vec3::new(0.0, 0.5, 0.0))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(point_count),
            &points,
            |b, points| {
                b.iter(|| black_box(attract_to_stroke(black_box(points), &stroke, 2.0, 1.0)))
            },
        );
    }

    group.finish();
}

fn bench_fill_gaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_gaps");

    for &point_count in &[1_000usize, 10_000usize] {
        let points = build_sketch_curve(point_count);

        // Spacing unter dem Sampling-Abstand erzwingt Einfügungen pro Paar
        group.bench_with_input(
            BenchmarkId::from_parameter(point_count),
            &points,
            |b, points| b.iter(|| black_box(fill_gaps(black_box(points), 0.002))),
        );
    }

    group.finish();
}

fn bench_simplify_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify_polyline");

    for &point_count in &[1_000usize, 10_000usize] {
        let points = build_sketch_curve(point_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(point_count),
            &points,
            |b, points| b.iter(|| black_box(simplify_polyline(black_box(points), 0.05))),
        );
    }

    group.finish();
}

fn bench_invoker_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("invoker_walk");

    for &command_count in &[100usize, 1_000usize] {
        group.bench_with_input(
            BenchmarkId::from_parameter(command_count),
            &command_count,
            |b, &count| {
                b.iter(|| {
                    let curve = SketchCurve::shared();
                    let mut invoker = CommandInvoker::new();
                    for i in 0..count {
                        invoker.execute_command(AddControlPointCommand::new(
                            curve.clone(),
                            Vec3::new(0.0, 0.0, i as f32 * 0.01),
                        ));
                    }
                    for _ in 0..count {
                        invoker.undo();
                    }
                    for _ in 0..count {
                        invoker.redo();
                    }
                    let point_count = curve.borrow().points().len();
                    black_box(point_count)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    curve_benches,
    bench_attract_to_stroke,
    bench_fill_gaps,
    bench_simplify_polyline,
    bench_invoker_walk
);
criterion_main!(curve_benches);
