use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{merge_line, Board, GameState};
use tui_2048::types::Direction;

fn bench_merge_line(c: &mut Criterion) {
    c.bench_function("merge_line", |b| {
        b.iter(|| merge_line(black_box([2, 2, 4, 4])))
    });
}

fn bench_moves(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("apply_move_cycle", |b| {
        let mut i = 0;
        b.iter(|| {
            if !state.status().is_playing() {
                state.restart();
            }
            state.apply_move(black_box(Direction::ALL[i % 4]));
            i += 1;
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_random_tile", |b| {
        b.iter(|| {
            if state.spawn_random_tile().is_none() {
                state.start();
            }
        })
    });
}

fn bench_has_valid_moves(c: &mut Criterion) {
    let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    c.bench_function("has_adjacent_pair_full", |b| {
        b.iter(|| black_box(&board).has_adjacent_pair())
    });
}

criterion_group!(
    benches,
    bench_merge_line,
    bench_moves,
    bench_spawn,
    bench_has_valid_moves
);
criterion_main!(benches);
