//! Benchmarks for pattern enumeration and evaluation.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lode::geometry::{DigRange, Dimensions};
use lode::ore::generate_samples;
use lode::search::{GenerationConstraints, PatternGenerator};
use lode::stats::PatternEvaluator;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for max_dug in [4, 5, 6] {
        let dims = Arc::new(Dimensions::new(16, 5, 16));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_blocks", max_dug)),
            &max_dug,
            |b, &max_dug| {
                b.iter(|| {
                    let generator = PatternGenerator::central(
                        Arc::clone(&dims),
                        DigRange::Strict,
                        GenerationConstraints::new(max_dug, None),
                    );
                    black_box(generator.into_iter().count())
                });
            },
        );
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for sample_count in [10, 50, 100] {
        let dims = Arc::new(Dimensions::new(16, 5, 16));
        let samples = Arc::new(generate_samples(sample_count, &dims, 5, Some(42)));
        let pattern = PatternGenerator::central(
            Arc::clone(&dims),
            DigRange::Strict,
            GenerationConstraints::new(10, None),
        )
        .into_iter()
        .nth(100)
        .expect("generator must produce at least 100 patterns");
        let mut evaluator = PatternEvaluator::new(samples);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_samples", sample_count)),
            &sample_count,
            |b, _| {
                b.iter(|| evaluator.evaluate(black_box(&pattern)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_evaluation);
criterion_main!(benches);
