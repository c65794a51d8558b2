use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hex_chess::game_state::chess_types::GameState;
use hex_chess::game_state::config::RulesConfig;
use hex_chess::game_state::turn_cycle::start_turn;
use hex_chess::move_generation::perft::perft;

const STARTING_MOVES: usize = 51;

fn bench_start_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("start_turn");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(30);

    for (name, config) in [
        ("filtered", RulesConfig::default()),
        ("geometry_only", RulesConfig::geometry_only()),
    ] {
        let game = GameState::with_config(config);
        group.throughput(Throughput::Elements(STARTING_MOVES as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &game, |b, game| {
            b.iter(|| {
                let mut state = game.clone();
                start_turn(black_box(&mut state));
                black_box(state.turn)
            });
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(10);

    let game = GameState::new_game();

    // Correctness guard before benchmarking.
    let warmup = perft(&game, 1);
    assert_eq!(warmup.nodes, STARTING_MOVES, "node mismatch at depth 1");

    for depth in 1..=2u8 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft(black_box(&game), depth).nodes));
        });
    }

    group.finish();
}

criterion_group!(start_turn_benches, bench_start_turn, bench_perft);
criterion_main!(start_turn_benches);
