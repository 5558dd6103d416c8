use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chameleon_chess::game_state::game_state::GameState;
use chameleon_chess::game_state::limits::{recalc_limits, FULL_BOARD_LIMITS};
use chameleon_chess::search::max_n::{search_value, NO_PRUNING_BOUND};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_successor_enumeration(c: &mut Criterion) {
    let state = GameState::begin_game([true; 4]).expect("game should start");

    c.bench_function("enumerate_successors_startpos", |b| {
        b.iter(|| {
            let successors = black_box(&state).enumerate_successors();
            black_box(successors.len())
        })
    });
}

fn bench_limit_recalc(c: &mut Criterion) {
    let state = GameState::begin_game([true; 4]).expect("game should start");

    c.bench_function("recalc_limits_startpos", |b| {
        b.iter(|| black_box(recalc_limits(black_box(&state.pieces), FULL_BOARD_LIMITS)))
    });
}

fn bench_max_n_search(c: &mut Criterion) {
    let state = GameState::begin_game([true; 4]).expect("game should start");

    let mut group = c.benchmark_group("max_n_search");
    group.measurement_time(Duration::from_secs(12));
    group.sample_size(10);
    group.bench_function("depth_2_startpos", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(11);
            let mut nodes = 0u64;
            let value = search_value(
                black_box(&state),
                2,
                NO_PRUNING_BOUND,
                &mut rng,
                &mut nodes,
            );
            black_box((value, nodes))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_successor_enumeration,
    bench_limit_recalc,
    bench_max_n_search
);
criterion_main!(benches);
