use slide_2048::engine::{self, Board, Move};
use slide_2048::game::Game;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut boards = Vec::new();
    // Empty and two-tile starts
    boards.push(Board::EMPTY);
    let mut b = Board::EMPTY.with_random_tile(&mut rng, 0.5).with_random_tile(&mut rng, 0.5);
    boards.push(b);
    // Derive a variety of densities deterministically
    let seq = [Move::Left, Move::Up, Move::Right, Move::Down];
    for i in 0..20 {
        let dir = seq[i % seq.len()];
        let nb = b.shift(dir).board;
        if nb != b { b = nb.with_random_tile(&mut rng, 0.5); }
        boards.push(b);
    }
    boards
}

fn bench_shift(c: &mut Criterion) {
    for (name, dir) in [
        ("shift/left", Move::Left),
        ("shift/right", Move::Right),
        ("shift/up", Move::Up),
        ("shift/down", Move::Down),
    ] {
        let boards = corpus();
        c.bench_function(name, |bch| {
            bch.iter(|| {
                let mut acc = 0u64;
                for &bd in &boards { acc = acc.wrapping_add(bd.shift(dir).gained); }
                black_box(acc)
            })
        });
    }
    c.bench_function("line/slide_left", |bch| {
        let lines = [[2, 2, 2, 2], [0, 4, 0, 4], [8, 16, 8, 16], [0, 0, 0, 2]];
        bch.iter(|| {
            for &l in &lines { black_box(engine::slide_left(l)); }
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("board/with_random_tile", |bch| {
        bch.iter_batched(
            || (Board::EMPTY, StdRng::seed_from_u64(7)),
            |(mut bd, mut rng)| {
                for _ in 0..16 { bd = bd.with_random_tile(&mut rng, 0.5); }
                black_box(bd)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/apply_move_cycle", |bch| {
        bch.iter_batched(
            || Game::new(StdRng::seed_from_u64(9), 0),
            |mut game| {
                for i in 0..64 { game.apply_move(Move::ALL[i % 4]); }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    c.bench_function("query/is_game_over", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut acc = 0u32;
            for &bd in &boards { acc += bd.is_game_over() as u32; }
            black_box(acc)
        })
    });
    c.bench_function("query/count_empty", |bch| {
        let boards = corpus();
        bch.iter(|| {
            let mut acc = 0usize;
            for &bd in &boards { acc ^= engine::count_empty(bd); }
            black_box(acc)
        })
    });
    c.bench_function("query/transpose", |bch| {
        let boards = corpus();
        bch.iter(|| {
            for &bd in &boards { black_box(engine::transpose(bd)); }
        })
    });
}

criterion_group!(engine_ops, bench_shift, bench_apply_move, bench_queries);
criterion_main!(engine_ops);
