//! Benchmarks for the scoring engine.
//!
//! Run with: cargo bench --bench scoring_benchmark

use compliance_assessment::{
    model::{Category, Question},
    AnswerSet, Assessment, Catalog, RegionSelection,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Answer every question with the option at `index % option_count`.
fn answers_at(catalog: &Catalog, index: usize) -> AnswerSet {
    catalog
        .questions
        .iter()
        .filter_map(|q| {
            let option = q.options.get(index % q.options.len().max(1))?;
            Some((q.id.clone(), option.clone()))
        })
        .collect()
}

/// Generate a catalog with `count` questions spread over ten categories.
fn generate_catalog(count: usize) -> Catalog {
    let categories = (0..10)
        .map(|i| Category::new(format!("c{i}"), format!("Category {i}"), "", ""))
        .collect();
    let questions = (0..count)
        .map(|i| {
            let question = Question::new(
                format!("q{i}"),
                "Generated question?",
                format!("c{}", i % 10),
                ["Yes", "Mostly", "Partially", "No"],
            );
            match i % 3 {
                0 => question.with_regions(["EU"]),
                1 => question.with_last_option_trigger("R"),
                _ => question,
            }
        })
        .collect();
    Catalog::new(categories, questions, vec![])
}

fn bench_builtin(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let answers = answers_at(&catalog, 1);

    c.bench_function("builtin_snapshot_eu", |b| {
        b.iter(|| {
            let assessment =
                Assessment::new(black_box(&catalog), black_box(&answers), RegionSelection::from_id("EU"));
            black_box(assessment.snapshot(3))
        });
    });

    c.bench_function("builtin_recommendations", |b| {
        let assessment = Assessment::new(&catalog, &answers, RegionSelection::All);
        b.iter(|| black_box(assessment.recommendations(black_box(3))));
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("overall_progress");
    for size in [100, 1_000, 10_000] {
        let catalog = generate_catalog(size);
        let answers = answers_at(&catalog, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let assessment = Assessment::new(&catalog, &answers, RegionSelection::from_id("EU"));
                black_box((assessment.overall_progress(), assessment.insights()))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_builtin, bench_scaling);
criterion_main!(benches);
