//! Benchmarks for the course stdlib

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use introcs::stdlib::{
    gcd_euclidean, gcd_subtractive, is_prime, sieve_of_eratosthenes, validate_cpf,
    validate_cpf_cumulative,
};

/// Benchmark the sieve for growing sizes
fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    for &len in &[100usize, 1_000, 10_000, 100_000] {
        let zeros = vec![0i64; len];
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &zeros, |b, zeros| {
            b.iter(|| black_box(sieve_of_eratosthenes(zeros)))
        });
    }

    group.finish();
}

/// Benchmark trial division on a prime and a composite
fn bench_is_prime(c: &mut Criterion) {
    c.bench_function("is_prime_7919", |b| b.iter(|| is_prime(black_box(7919))));
    c.bench_function("is_prime_7917", |b| b.iter(|| is_prime(black_box(7917))));
}

/// Compare the two GCD methods
fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcd");
    group.bench_function("euclidean", |b| {
        b.iter(|| gcd_euclidean(black_box(1_071), black_box(462)))
    });
    group.bench_function("subtractive", |b| {
        b.iter(|| gcd_subtractive(black_box(1_071), black_box(462)))
    });
    group.finish();
}

/// Compare the two CPF algorithms
fn bench_cpf(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpf");
    group.bench_function("weighted", |b| b.iter(|| validate_cpf(black_box("11144477735"))));
    group.bench_function("cumulative", |b| {
        b.iter(|| validate_cpf_cumulative(black_box("11144477735")))
    });
    group.finish();
}

criterion_group!(benches, bench_sieve, bench_is_prime, bench_gcd, bench_cpf);
criterion_main!(benches);
