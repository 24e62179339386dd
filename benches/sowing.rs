use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mancala::core::{Board, GameRng, Pit, Player};
use mancala::games::kalah::{apply_move, Kalah};
use mancala::session::{play_random_game, simulate, SimulationReport};

fn bench_single_move(c: &mut Criterion) {
    let opening = Board::default();
    let lap = Board::from_slots([13, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0]);

    c.bench_function("apply_move/opening", |b| {
        b.iter(|| {
            let mut board = black_box(opening);
            apply_move(&mut board, Player::One, Pit::new(3).unwrap())
        })
    });

    c.bench_function("apply_move/lap_capture", |b| {
        b.iter(|| {
            let mut board = black_box(lap);
            apply_move(&mut board, Player::One, Pit::new(1).unwrap())
        })
    });
}

fn bench_playouts(c: &mut Criterion) {
    let rules = Kalah::default();

    c.bench_function("random_playout", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| {
            let mut report = SimulationReport::default();
            play_random_game(&rules, &mut rng, 0, &mut report)
        })
    });

    c.bench_function("simulate/100", |b| {
        b.iter(|| simulate(&rules, black_box(100), 42))
    });
}

criterion_group!(benches, bench_single_move, bench_playouts);
criterion_main!(benches);
