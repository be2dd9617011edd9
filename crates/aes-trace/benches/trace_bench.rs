use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_trace::{encrypt_block, expand_key, trace_key_expansion, Aes128Key, TracingCipher};

fn bench_schedule(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let mut group = c.benchmark_group("schedule");
    group.bench_function("expand_key", |b| b.iter(|| expand_key(&key)));
    group.bench_function("trace_key_expansion", |b| b.iter(|| trace_key_expansion(&key)));
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let round_keys = expand_key(&key);
    let cipher = TracingCipher::from_key(key);
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("encrypt");
    group.bench_function("untraced", |b| b.iter(|| encrypt_block(&block, &round_keys)));
    group.bench_function("traced", |b| b.iter(|| cipher.encrypt(&block)));
    group.bench_function("traced_and_rendered", |b| {
        b.iter(|| cipher.encrypt(&block).map(|enc| enc.lines()))
    });
    group.finish();
}

criterion_group!(benches, bench_schedule, bench_encrypt);
criterion_main!(benches);
