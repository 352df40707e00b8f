use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmp_trace::{search, FailureTable};

/// Benchmark failure table construction on a self-similar pattern
fn bench_failure_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("failure_table");

    for len in [16usize, 256, 4096] {
        let pattern = "abaabaab".repeat(len / 8).into_bytes();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &pattern, |b, pattern| {
            b.iter(|| FailureTable::build(black_box(pattern)))
        });
    }

    group.finish();
}

/// Benchmark the traced scan; cost is dominated by snapshot copies
fn bench_traced_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("traced_search");

    for len in [64usize, 256, 1000] {
        let text = "ABABDABACD".repeat(len / 10);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| search(black_box(text), black_box("ABACD")))
        });
    }

    group.finish();
}

/// Benchmark JSON encoding of a trace, as the HTTP layer does per request
fn bench_trace_serialization(c: &mut Criterion) {
    let text = "ABABDABACD".repeat(50);
    let result = search(&text, "ABACD");

    c.bench_function("trace_to_json_500", |b| {
        b.iter(|| serde_json::to_vec(black_box(&result)).expect("serialize"))
    });
}

criterion_group!(
    benches,
    bench_failure_table,
    bench_traced_search,
    bench_trace_serialization
);
criterion_main!(benches);
