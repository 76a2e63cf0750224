// ============================================================================
// Numeric Field Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Sanitizer - Single proposed edits across policies
// 2. Parsing - Complete numerals to f64 and Decimal
// 3. Typing - A whole entry typed keystroke by keystroke through a form
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_field::prelude::*;
use std::sync::Arc;

// ============================================================================
// Sanitizer Benchmarks
// ============================================================================

fn benchmark_sanitizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitizer");

    let proposals = ["", ".", "0700", "-12.5", "12.5.1", "123456789.123456789"];

    for policy in FieldPolicy::ALL {
        let sanitizer = Sanitizer::new(policy);
        group.bench_with_input(
            BenchmarkId::from_parameter(policy),
            &proposals,
            |b, proposals| {
                b.iter(|| {
                    for proposed in proposals.iter() {
                        black_box(sanitizer.apply("1", proposed));
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for raw in ["7", "-12.5", "1234567.891011"] {
        group.bench_with_input(BenchmarkId::new("f64", raw), raw, |b, raw| {
            b.iter(|| black_box(parse_value(raw)));
        });
        group.bench_with_input(BenchmarkId::new("decimal", raw), raw, |b, raw| {
            b.iter(|| black_box(parse_decimal(raw)));
        });
    }

    group.finish();
}

// ============================================================================
// Typing Benchmarks
// ============================================================================

fn benchmark_typing(c: &mut Criterion) {
    let entry = "-1234.5678";
    let prefixes: Vec<&str> = (1..=entry.len()).map(|n| &entry[..n]).collect();

    c.bench_function("form_typing", |b| {
        b.iter(|| {
            let mut form = CalculatorFormBuilder::new(FnFormula::new("double", |x: &[f64]| {
                Ok(x[0] * 2.0)
            }))
            .field(FieldConfig::temperature("Input"))
            .build(Arc::new(NoOpObserver))
            .unwrap();
            let id = form.fields()[0].id();

            for prefix in &prefixes {
                form.handle_change(id, prefix);
            }
            black_box(form.result().clone())
        });
    });
}

criterion_group!(
    benches,
    benchmark_sanitizer,
    benchmark_parsing,
    benchmark_typing
);
criterion_main!(benches);
