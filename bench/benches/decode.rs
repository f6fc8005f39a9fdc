use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_decode_32(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_32");
    let string = "G9L2SYsfcuFt3eQKHQwG7JVNztdv1bwLaPFAnm1v3Pre";

    group.bench_function("decode_bs58_noalloc", |b| {
        let mut output = [0; 32];
        b.iter(|| bs58::decode(black_box(string)).onto(&mut output).unwrap());
    });
    group.bench_function("decode_fixed58", |b| {
        let mut output = [0; 32];
        b.iter(|| fixed58::decode_32(black_box(string), &mut output).unwrap())
    });
    group.bench_function("decode_fixed58_reject_non_canonical", |b| {
        let padded = "111111111111111111111111111111111";
        b.iter(|| fixed58::decode_32_to_array(black_box(padded)).unwrap_err())
    });
    group.finish();
}

fn bench_decode_64(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_64");
    let string =
        "a2kzMdVRfi2Q6oGKFC3ewWdpZfmGwNACGh3HJK4hsp8DeENS7wz4ZiwM4nJ4xr21EwVoa2TtHE87if7Paiv1aha";

    group.bench_function("decode_bs58_noalloc", |b| {
        let mut output = [0; 64];
        b.iter(|| bs58::decode(black_box(string)).onto(&mut output).unwrap());
    });
    group.bench_function("decode_fixed58", |b| {
        let mut output = [0; 64];
        b.iter(|| fixed58::decode_64(black_box(string), &mut output).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_decode_32, bench_decode_64);
criterion_main!(benches);
