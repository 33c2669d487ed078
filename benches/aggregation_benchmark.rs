use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tropomi_mapper::models::Observation;
use tropomi_mapper::processors::Aggregator;

// Deterministic pseudo-random scatter over the globe
fn create_observations(count: usize) -> Vec<Observation> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..count)
        .map(|_| {
            let latitude = next() * 180.0 - 90.0;
            let longitude = next() * 360.0 - 180.0;
            let value = 1750.0 + next() * 200.0;
            Observation::new(latitude, longitude, value)
        })
        .collect()
}

fn benchmark_aggregation(c: &mut Criterion) {
    let observations = create_observations(100_000);

    c.bench_function("aggregate_100k_one_degree", |b| {
        b.iter(|| {
            let aggregator = Aggregator::new(1.0);
            black_box(aggregator.aggregate(black_box(&observations)))
        })
    });

    c.bench_function("aggregate_100k_half_degree", |b| {
        b.iter(|| {
            let aggregator = Aggregator::new(0.5);
            black_box(aggregator.aggregate(black_box(&observations)))
        })
    });
}

criterion_group!(benches, benchmark_aggregation);
criterion_main!(benches);
