use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taylorjet::{canonical_indices, Series64};

fn fixture<const N: usize, const K: usize>(seed: f64) -> Series64<N, K> {
    let mut s = Series64::<N, K>::zeros();
    for (i, (_, index)) in canonical_indices::<N, K>().enumerate() {
        s.set(index.active(), seed + 0.01 * i as f64);
    }
    s
}

fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_product");

    let a = fixture::<3, 3>(1.0);
    let b = fixture::<3, 3>(2.0);
    group.bench_function("mul_n3_k3", |bench| {
        bench.iter(|| black_box(black_box(&a) * black_box(&b)))
    });

    let a = fixture::<4, 4>(1.0);
    let b = fixture::<4, 4>(2.0);
    group.bench_function("mul_n4_k4", |bench| {
        bench.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
    group.finish();
}

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_composition");

    let a = fixture::<3, 3>(1.0);
    group.bench_function("exp_n3_k3", |b| b.iter(|| black_box(black_box(&a).exp())));
    group.bench_function("sin_cos_n3_k3", |b| {
        b.iter(|| black_box(black_box(&a).sin_cos()))
    });

    let a = fixture::<4, 4>(1.0);
    group.bench_function("exp_n4_k4", |b| b.iter(|| black_box(black_box(&a).exp())));
    group.bench_function("recip_n4_k4", |b| {
        b.iter(|| black_box(black_box(&a).recip()))
    });
    group.finish();
}

criterion_group!(benches, bench_product, bench_composition);
criterion_main!(benches);
