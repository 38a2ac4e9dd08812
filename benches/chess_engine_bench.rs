//! Chess Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use chess_engine::api::new_game;
use chess_engine::evaluation::{evaluate_composite, evaluate_material};
use chess_engine::move_gen::{is_in_checkmate, legal_moves_for};
use chess_engine::{Color, SearchConfig, Searcher};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(new_game())));
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let mut position = new_game();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(legal_moves_for(&mut position, Color::White)))
    });
}

fn bench_legal_moves_both_colors(c: &mut Criterion) {
    let mut position = new_game();

    c.bench_function("legal_moves_both_colors", |b| {
        b.iter(|| {
            let white = legal_moves_for(&mut position, Color::White);
            let black = legal_moves_for(&mut position, Color::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_checkmate_test(c: &mut Criterion) {
    let mut position = new_game();

    c.bench_function("checkmate_test_starting", |b| {
        b.iter(|| black_box(is_in_checkmate(&mut position, Color::White)))
    });
}

fn bench_evaluate_material_starting(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("evaluate_material_starting", |b| {
        b.iter(|| black_box(evaluate_material(&position, Color::White)))
    });
}

fn bench_evaluate_composite_starting(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("evaluate_composite_starting", |b| {
        b.iter(|| black_box(evaluate_composite(&position, Color::White)))
    });
}

fn bench_sampled_search(c: &mut Criterion) {
    let position = new_game();
    let mut searcher = Searcher::new(SearchConfig::default().with_seed(1));

    c.bench_function("sampled_search_depth_3", |b| {
        b.iter(|| black_box(searcher.search(&position, Color::White)))
    });
}

fn bench_deep_copy(c: &mut Criterion) {
    let position = new_game();

    c.bench_function("deep_copy", |b| b.iter(|| black_box(position.deep_copy())));
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves_starting,
    bench_legal_moves_both_colors,
    bench_checkmate_test,
    bench_evaluate_material_starting,
    bench_evaluate_composite_starting,
    bench_sampled_search,
    bench_deep_copy,
);
criterion_main!(benches);
