use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_encode_32(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_32");
    let bytes: &[u8; 32] = &[
        225, 1, 118, 57, 196, 60, 117, 207, 131, 118, 39, 114, 43, 183, 110, 103, 209, 162, 104,
        207, 202, 190, 194, 24, 165, 53, 95, 24, 51, 245, 133, 119,
    ];
    let string = "G9L2SYsfcuFt3eQKHQwG7JVNztdv1bwLaPFAnm1v3Pre";
    let mut buf = [0u8; fixed58::BASE58_ENCODED_32_MAX_LEN];

    group.bench_function("encode_bs58", |b| {
        b.iter(|| bs58::encode(black_box(bytes)).into_string())
    });
    group.bench_function("encode_bs58_noalloc", |b| {
        let mut output = String::with_capacity(string.len());
        b.iter(|| bs58::encode(black_box(bytes)).onto(&mut output));
    });
    group.bench_function("encode_fixed58", |b| {
        b.iter(|| fixed58::encode_32(black_box(bytes), black_box(&mut buf)))
    });
    group.bench_function("encode_fixed58_string", |b| {
        b.iter(|| fixed58::encode_32_to_string(black_box(bytes)))
    });
    group.finish();
}

fn bench_encode_64(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_64");
    let bytes: &[u8; 64] = &[
        28, 123, 237, 119, 222, 241, 46, 210, 51, 192, 180, 7, 20, 50, 209, 32, 208, 94, 170, 188,
        192, 98, 202, 12, 14, 242, 63, 118, 142, 225, 147, 147, 174, 253, 6, 142, 12, 172, 66, 207,
        254, 29, 84, 35, 22, 161, 190, 154, 109, 12, 191, 23, 95, 120, 140, 44, 51, 57, 123, 40,
        61, 186, 225, 5,
    ];
    let string =
        "a2kzMdVRfi2Q6oGKFC3ewWdpZfmGwNACGh3HJK4hsp8DeENS7wz4ZiwM4nJ4xr21EwVoa2TtHE87if7Paiv1aha";
    let mut buf = [0u8; fixed58::BASE58_ENCODED_64_MAX_LEN];

    group.bench_function("encode_bs58", |b| {
        b.iter(|| bs58::encode(black_box(bytes)).into_string())
    });
    group.bench_function("encode_bs58_noalloc", |b| {
        let mut output = String::with_capacity(string.len());
        b.iter(|| bs58::encode(black_box(bytes)).onto(&mut output));
    });
    group.bench_function("encode_fixed58", |b| {
        b.iter(|| fixed58::encode_64(black_box(bytes), black_box(&mut buf)))
    });
    group.finish();
}

criterion_group!(benches, bench_encode_32, bench_encode_64);
criterion_main!(benches);
