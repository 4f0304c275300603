//! Typeability counting benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use brokenkeys_bench::synthetic_text;
use brokenkeys_core::{BrokenKeys, count_typeable};

fn bench_count_typeable_sizes(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024, 4096, 65536];
    let mut group = c.benchmark_group("count_typeable");

    for &size in sizes {
        let text = synthetic_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("blocking_set", size), &text, |b, text| {
            b.iter(|| {
                let count = count_typeable(black_box(text), black_box("lt"));
                black_box(count);
            });
        });

        group.bench_with_input(BenchmarkId::new("empty_set", size), &text, |b, text| {
            b.iter(|| {
                let count = count_typeable(black_box(text), black_box(""));
                black_box(count);
            });
        });
    }
    group.finish();
}

fn bench_keyset_build(c: &mut Criterion) {
    let alphabets: &[&str] = &["", "e", "lt", "abcdefghijklm", "abcdefghijklmnopqrstuvwxyz"];
    let mut group = c.benchmark_group("keyset_build");

    for &letters in alphabets {
        group.bench_with_input(
            BenchmarkId::new("from_str", letters.len()),
            &letters,
            |b, &letters| {
                b.iter(|| {
                    let keys = BrokenKeys::new(black_box(letters));
                    black_box(keys);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_count_typeable_sizes, bench_keyset_build);
criterion_main!(benches);
