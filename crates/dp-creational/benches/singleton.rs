use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dp_creational::singleton::get_instance;

fn bench_add_one(c: &mut Criterion) {
    c.bench_function("global add_one", |b| {
        b.iter(|| black_box(get_instance().add_one()))
    });

    let counter = get_instance();
    c.bench_function("held reference add_one", |b| {
        b.iter(|| black_box(counter.add_one()))
    });
}

fn bench_get_instance(c: &mut Criterion) {
    get_instance();
    c.bench_function("get_instance after init", |b| {
        b.iter(|| black_box(get_instance()))
    });
}

criterion_group!(benches, bench_add_one, bench_get_instance);
criterion_main!(benches);
