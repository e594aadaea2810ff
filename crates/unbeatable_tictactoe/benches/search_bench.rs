use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unbeatable_tictactoe::search::{ALPHA_MIN, BETA_MAX};
use unbeatable_tictactoe::{Board, Game, Player, Pruning, Searcher, best_move};

fn bench_best_move_empty_board() {
    let board = Board::new();
    black_box(best_move(black_box(&board), Player::X));
}

fn bench_best_move_after_opening() {
    let board: Board = "X........".parse().unwrap();
    black_box(best_move(black_box(&board), Player::O));
}

fn bench_full_game() {
    let mut game = Game::new(Player::X);
    while let Ok(Some(_)) = game.engine_move() {}
    black_box(game.status());
}

fn bench_full_width_empty_board() {
    let mut board = Board::new();
    let mut searcher = Searcher::new(Player::X).with_pruning(Pruning::Disabled);
    black_box(searcher.search(&mut board, 0, true, ALPHA_MIN, BETA_MAX));
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    group.sample_size(20);

    group.bench_function("best_move_empty", |b| b.iter(bench_best_move_empty_board));

    group.bench_function("best_move_after_opening", |b| {
        b.iter(bench_best_move_after_opening)
    });

    group.bench_function("engine_self_play", |b| b.iter(bench_full_game));

    group.bench_function("full_width_empty", |b| b.iter(bench_full_width_empty_board));

    group.finish();
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
