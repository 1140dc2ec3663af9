//! ECIES and key derivation throughput.
//!
//! Run with: cargo bench --bench ecies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seedseal::{decrypt, encrypt, generate_keypair, Keypair};

const MNEMONIC: &str = "digital radio analyst fine casino have mass blood potato \
                        hat web capital prefer debate fee differ spray cloud";

fn keypair() -> Keypair {
    generate_keypair(MNEMONIC, None).unwrap()
}

fn bench_encrypt_decrypt(c: &mut Criterion) {
    let kp = keypair();
    let mut group = c.benchmark_group("ecies");

    for size in [0usize, 64, 1024, 64 * 1024] {
        let plaintext = vec![0xa5u8; size];
        let ciphertext = encrypt(&kp.public_key, &plaintext).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &plaintext, |b, pt| {
            b.iter(|| encrypt(black_box(&kp.public_key), black_box(pt)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &ciphertext, |b, ct| {
            b.iter(|| decrypt(black_box(&kp.private_key), black_box(ct)).unwrap())
        });
    }

    group.finish();
}

fn bench_derivation(c: &mut Criterion) {
    c.bench_function("generate_keypair", |b| {
        b.iter(|| generate_keypair(black_box(MNEMONIC), None).unwrap())
    });
}

criterion_group!(benches, bench_encrypt_decrypt, bench_derivation);
criterion_main!(benches);
