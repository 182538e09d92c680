//! Criterion benchmarks for schedule generation.
//!
//! Measures rule compilation and occurrence generation across window spans
//! to characterise scaling with the number of anchors walked.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use obligation_core::types::Date;
use obligation_schedule::{generate, DueRule, Frequency, ObligationDescriptor, RelativeTo};

fn descriptors() -> Vec<ObligationDescriptor> {
    vec![
        ObligationDescriptor::new(
            "bench/monthly",
            Frequency::Monthly,
            DueRule::FixedDayRelative {
                day: 15,
                relative_to: RelativeTo::CalendarMonthEnd,
            },
        ),
        ObligationDescriptor::new(
            "bench/quarterly",
            Frequency::Quarterly,
            DueRule::Legacy("last day of quarter".to_string()),
        ),
        ObligationDescriptor::new(
            "bench/annual",
            Frequency::Annual,
            DueRule::FiscalYearEnd { month: 4, day: 15 },
        ),
    ]
}

/// Benchmark compiling structured and legacy rules.
fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_due_rule");

    for descriptor in descriptors() {
        group.bench_with_input(
            BenchmarkId::from_parameter(descriptor.id()),
            &descriptor,
            |b, descriptor| {
                b.iter(|| black_box(descriptor.due_rule().compile(descriptor.frequency())))
            },
        );
    }

    group.finish();
}

/// Benchmark generation over windows of increasing length.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let start = Date::from_ymd(2000, 1, 1).unwrap();

    for years in [1u64, 10, 100] {
        let end = start.checked_add_days(years * 365).unwrap();
        for descriptor in descriptors() {
            group.bench_with_input(
                BenchmarkId::new(descriptor.id().to_string(), years),
                &descriptor,
                |b, descriptor| b.iter(|| generate(black_box(descriptor), start, end)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compile, bench_generate);
criterion_main!(benches);
