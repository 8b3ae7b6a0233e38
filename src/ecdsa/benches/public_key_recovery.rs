use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use std::hint::black_box;
use weierstrass_ecdsa::{Curve, PrivateKey, PublicKey, Secp256k1, Secp256r1, Secp384r1, Sha256};

fn benchmark_curve<C: Curve>(c: &mut Criterion) {
    let mut msg = [0u8; 32];
    thread_rng().fill(&mut msg);
    c.bench_function(
        &format!(
            "{}/curve={} msg_len={}",
            module_path!(),
            C::NAME,
            msg.len()
        ),
        |b| {
            b.iter_batched(
                || {
                    let signer = PrivateKey::<C>::from_rng(&mut thread_rng());
                    let signature = signer.sign::<Sha256>(None, &msg).unwrap();
                    let id = signer.public_key().recovery_id::<Sha256>(&msg, &signature);
                    (signature, id)
                },
                |(signature, id)| {
                    black_box(PublicKey::<C>::recover::<Sha256>(&msg, &signature, id).unwrap());
                },
                BatchSize::SmallInput,
            );
        },
    );
}

fn benchmark_public_key_recovery(c: &mut Criterion) {
    benchmark_curve::<Secp256k1>(c);
    benchmark_curve::<Secp256r1>(c);
    benchmark_curve::<Secp384r1>(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_public_key_recovery
}
