use std::fmt::Display;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use primitives_address::{decode, encode, Address, Network, Protocol, BLS_PUBLIC_KEY_BYTES};

#[derive(Debug, Clone, Copy)]
struct Params {
    protocol: Protocol,
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "protocol: {:?}", self.protocol)
    }
}

/// Get one address per protocol that has a string encoding.
fn get_addresses() -> Vec<(Params, Address)> {
    vec![
        (
            Params {
                protocol: Protocol::Secp256k1,
            },
            Address::new_secp256k1(&rand::random::<[u8; 32]>()),
        ),
        (
            Params {
                protocol: Protocol::Actor,
            },
            Address::new_actor(&rand::random::<[u8; 32]>()),
        ),
        (
            Params {
                protocol: Protocol::Bls,
            },
            Address::new_bls(&[0x42; BLS_PUBLIC_KEY_BYTES]).unwrap(),
        ),
    ]
}

fn encoding(c: &mut Criterion) {
    for (param, address) in get_addresses() {
        c.bench_with_input(BenchmarkId::new("encode", param), &address, |b, address| {
            b.iter(|| encode(address, Network::Mainnet).unwrap());
        });
    }
}

fn decoding(c: &mut Criterion) {
    for (param, address) in get_addresses() {
        let encoded = encode(&address, Network::Mainnet).unwrap();
        c.bench_with_input(BenchmarkId::new("decode", param), &encoded, |b, encoded| {
            b.iter(|| decode(encoded).unwrap());
        });
    }

    c.bench_function("decode/protocol: Id", |b| {
        b.iter(|| decode("f09223372036854775807").unwrap());
    });
}

criterion_group!(bench_encoding, encoding);
criterion_group!(bench_decoding, decoding);
criterion_main!(bench_encoding, bench_decoding);
