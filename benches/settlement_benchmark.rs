use criterion::{black_box, criterion_group, criterion_main, Criterion};
use debt_simplifier::optimization::balances;
use debt_simplifier::optimization::settlement::SettlementEngine;
use debt_simplifier::simulation::random_group::{generate_random_group, GroupConfig};

fn bench_settle_10_participants(c: &mut Criterion) {
    let config = GroupConfig {
        participant_count: 10,
        transaction_count: 50,
        ..Default::default()
    };
    let ledger = generate_random_group(&config);

    c.bench_function("settle_10_participants", |b| {
        b.iter(|| SettlementEngine::settle(black_box(ledger.transactions())))
    });
}

fn bench_settle_100_participants(c: &mut Criterion) {
    let config = GroupConfig {
        participant_count: 100,
        transaction_count: 1_000,
        ..Default::default()
    };
    let ledger = generate_random_group(&config);

    c.bench_function("settle_100_participants", |b| {
        b.iter(|| SettlementEngine::settle(black_box(ledger.transactions())))
    });
}

fn bench_minimize_1000_participants(c: &mut Criterion) {
    let config = GroupConfig {
        participant_count: 1_000,
        transaction_count: 10_000,
        ..Default::default()
    };
    let ledger = generate_random_group(&config);
    let working = balances::non_zero(&balances::aggregate(ledger.transactions()));

    c.bench_function("minimize_1000_participants", |b| {
        b.iter(|| {
            let mut scratch = working.clone();
            SettlementEngine::minimize(black_box(&mut scratch))
        })
    });
}

criterion_group!(
    benches,
    bench_settle_10_participants,
    bench_settle_100_participants,
    bench_minimize_1000_participants
);
criterion_main!(benches);
