//! Benchmarks for version parsing, formatting and precedence checks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sem::Version;
use std::hint::black_box;

const INPUTS: &[(&str, &str)] = &[
    ("release", "1.0.41"),
    ("prerelease", "2.0.0-beta.11.x-y"),
    ("full", "10.20.30-rc.1.alpha-7+build.exp.sha-5114f85"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| Version::parse(black_box(input)))
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    for (name, input) in INPUTS {
        let Ok(version) = Version::parse(input) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &version, |b, v| {
            b.iter(|| black_box(v).to_string())
        });
    }
    group.finish();
}

fn bench_is_at_least(c: &mut Criterion) {
    let pairs = [
        ("normal", "1.2.3", "1.2.4"),
        ("release_vs_pre", "1.2.3", "1.2.3-rc.1"),
        ("deep_prerelease", "1.0.0-alpha.1.2.3.beta.9", "1.0.0-alpha.1.2.3.beta.10"),
    ];

    let mut group = c.benchmark_group("is_at_least");
    for (name, v, min) in pairs {
        let (Ok(v), Ok(min)) = (Version::parse(v), Version::parse(min)) else {
            continue;
        };
        group.bench_function(name, |b| {
            b.iter(|| black_box(&v).is_at_least(black_box(&min)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_format, bench_is_at_least);
criterion_main!(benches);
