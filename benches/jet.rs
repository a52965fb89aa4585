use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taylorjet::Jet64;

fn fixture<const K: usize>() -> Jet64<K> {
    let mut y = Jet64::<K>::variable(0.7);
    for n in 2..K {
        y.set(n, 0.1 * n as f64);
    }
    y
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("jet_arithmetic");
    let a = fixture::<8>();
    let b = fixture::<8>().sin();

    group.bench_function("mul_k8", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
    group.bench_function("div_k8", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });
    group.finish();
}

fn bench_elementary(c: &mut Criterion) {
    let mut group = c.benchmark_group("jet_elementary");
    let a = fixture::<8>();

    group.bench_function("exp_k8", |b| b.iter(|| black_box(black_box(a).exp())));
    group.bench_function("ln_k8", |b| b.iter(|| black_box(black_box(a).ln())));
    group.bench_function("sin_cos_k8", |b| {
        b.iter(|| black_box(black_box(a).sin_cos()))
    });
    group.bench_function("tan_k8", |b| b.iter(|| black_box(black_box(a).tan())));
    group.bench_function("powf_k8", |b| {
        b.iter(|| black_box(black_box(a).powf(black_box(1.4))))
    });
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_elementary);
criterion_main!(benches);
