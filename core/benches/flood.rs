use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minefold_core::{
    Action, Board, BoardConfig, Minefield, MinefieldGenerator, RandomMinefieldGenerator,
};

fn flood_uncover(c: &mut Criterion) {
    // Worst case: an empty expert-size grid, one uncover floods all 480 cells.
    let board = Board::new(Minefield::from_mine_coords((30, 16), &[]).unwrap());
    c.bench_function("flood_uncover_empty_expert_grid", |b| {
        b.iter(|| black_box(&board).apply(Action::uncover(0, 0)).unwrap())
    });
}

fn generate_minefield(c: &mut Criterion) {
    c.bench_function("generate_expert_minefield", |b| {
        b.iter(|| RandomMinefieldGenerator::new(black_box(42)).generate(BoardConfig::expert()))
    });
}

criterion_group!(benches, flood_uncover, generate_minefield);
criterion_main!(benches);
