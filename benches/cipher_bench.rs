use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use psoserv::network::bb_crypt::BbCipher;
use psoserv::network::crypt::{Cipher, PcCipher};
use std::hint::black_box;

fn bench_cipher<C: Cipher>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for size in [64usize, 1024, 0x6800] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("encrypt_{size}b"), |b| {
            let mut cipher = C::random();
            b.iter_batched(
                || vec![0xA5u8; size],
                |mut buf| {
                    cipher.encrypt(&mut buf);
                    black_box(buf)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_key_setup(c: &mut Criterion) {
    c.bench_function("bb_key_setup", |b| b.iter(|| black_box(BbCipher::random())));
    c.bench_function("pc_key_setup", |b| b.iter(|| black_box(PcCipher::random())));
}

fn bench_pc(c: &mut Criterion) {
    bench_cipher::<PcCipher>(c, "pc_cipher");
}

fn bench_bb(c: &mut Criterion) {
    bench_cipher::<BbCipher>(c, "bb_cipher");
}

criterion_group!(benches, bench_pc, bench_bb, bench_key_setup);
criterion_main!(benches);
