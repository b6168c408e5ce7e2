use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use keccrypt::sha3::{cshake256, kmac_xof256, sha3_hash};

const INPUT: usize = 100 * 1024;

fn hash_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("sha3");
    g.throughput(Throughput::Bytes(INPUT as u64));

    g.bench_with_input("SHA3-256", &[0u8; INPUT], |b, block| {
        b.iter(|| sha3_hash(block, 256).unwrap())
    });
    g.bench_with_input("SHA3-512", &[0u8; INPUT], |b, block| {
        b.iter(|| sha3_hash(block, 512).unwrap())
    });
    g.bench_with_input("cSHAKE256", &[0u8; INPUT], |b, block| {
        b.iter(|| cshake256(block, 512, b"bench", b"").unwrap())
    });
    g.bench_with_input("KMACXOF256", &[0u8; INPUT], |b, block| {
        b.iter(|| kmac_xof256(b"benchmark key", block, 512, "bench").unwrap())
    });
    g.finish();
}

criterion_group!(benches, hash_benchmarks);
criterion_main!(benches);
