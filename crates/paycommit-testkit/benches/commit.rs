//! Encoding and Merkle construction benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use paycommit::{
    encode_inputs_set, merkle_root, pay_period_hash, Committer, Hash32, PeriodKind, PeriodRange,
};
use paycommit_testkit::fixtures::{golden_pay_period, PayrollFixture};

fn bench_pay_period(c: &mut Criterion) {
    let doc = golden_pay_period();
    let committer = Committer::default();

    c.bench_function("pay_period_hash", |b| {
        b.iter(|| pay_period_hash(black_box(&doc)))
    });
    c.bench_function("commit_pay_period", |b| {
        b.iter(|| committer.commit_pay_period(black_box(&doc)))
    });
}

fn bench_inputs_set(c: &mut Criterion) {
    let fixture = PayrollFixture::new();
    let mut group = c.benchmark_group("encode_inputs_set");
    for count in [1u32, 13, 52, 250] {
        let set = fixture.make_inputs(PeriodRange::new(PeriodKind::Ytd, 1, 52), count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &set, |b, set| {
            b.iter(|| encode_inputs_set(black_box(set)))
        });
    }
    group.finish();
}

fn bench_merkle(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_root");
    for count in [3usize, 64, 1024] {
        let leaves: Vec<Hash32> = (0..count)
            .map(|i| Hash32::from_bytes([(i % 251) as u8; 32]))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &leaves, |b, leaves| {
            b.iter(|| merkle_root(black_box(leaves)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pay_period, bench_inputs_set, bench_merkle);
criterion_main!(benches);
