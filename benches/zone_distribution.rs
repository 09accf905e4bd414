use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mountain_zones::{distribute, distribute_batch, LatitudeBand, ZoneQuery};

fn bench_single(c: &mut Criterion) {
    c.bench_function("distribute subtropical 15C 7800m", |b| {
        b.iter(|| distribute(black_box(LatitudeBand::Subtropical), black_box(15.0), black_box(7800.0)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let queries: Vec<ZoneQuery> = LatitudeBand::all()
        .iter()
        .flat_map(|&latitude| {
            (0..200).map(move |i| ZoneQuery::new(latitude, -10.0 + i as f64 * 0.25, 500.0 + i as f64 * 40.0))
        })
        .collect();

    c.bench_function("distribute_batch 1000 queries", |b| {
        b.iter(|| distribute_batch(black_box(&queries)))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
