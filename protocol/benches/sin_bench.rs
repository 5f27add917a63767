// SIN derivation benchmarks: the digest chain, base58 encoding, and parsing.

use criterion::{criterion_group, criterion_main, Criterion};

use bitauth_protocol::crypto::base58;
use bitauth_protocol::crypto::hash::ByteEncoding;
use bitauth_protocol::crypto::keys::BitAuthKeypair;
use bitauth_protocol::identity::digest_chain;
use bitauth_protocol::identity::{derive_sin, Sin};

fn bench_derive_sin(c: &mut Criterion) {
    let public_key = BitAuthKeypair::generate().public_key_hex();

    c.bench_function("sin/derive_from_hex", |b| {
        b.iter(|| derive_sin(&public_key).unwrap());
    });
}

fn bench_digest_chain(c: &mut Criterion) {
    let public_key = BitAuthKeypair::generate().public_key();

    c.bench_function("sin/digest_chain", |b| {
        b.iter(|| digest_chain::trace(&public_key, ByteEncoding::Minimal));
    });
}

fn bench_base58_encode(c: &mut Criterion) {
    let payload = [0x0Fu8; 26];

    c.bench_function("base58/encode_26_bytes", |b| {
        b.iter(|| base58::encode(&payload));
    });
}

fn bench_parse_sin(c: &mut Criterion) {
    let sin = Sin::from_keypair(&BitAuthKeypair::generate()).to_string();

    c.bench_function("sin/parse", |b| {
        b.iter(|| Sin::parse(&sin).unwrap());
    });
}

criterion_group!(
    benches,
    bench_derive_sin,
    bench_digest_chain,
    bench_base58_encode,
    bench_parse_sin,
);
criterion_main!(benches);
