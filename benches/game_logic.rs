use criterion::{black_box, criterion_group, criterion_main, Criterion};
use arcade::core::{Board, PuzzleGame, PuzzleSnapshot, SimpleRng, SnakeGame};
use arcade::term::{FrameBuffer, PuzzleView, Viewport};
use arcade::types::{Direction, Phase, PieceKind};

fn bench_puzzle_frame(c: &mut Criterion) {
    let mut game = PuzzleGame::new(SimpleRng::new(12345));
    game.start();
    let mut now = 0.0;

    c.bench_function("puzzle_advance_16ms", |b| {
        b.iter(|| {
            now += 0.016;
            game.advance(black_box(now));
            if game.phase() != Phase::Running {
                game.reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = PuzzleGame::new(SimpleRng::new(12345));
    game.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.hard_drop().is_none() {
                game.reset();
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = PuzzleGame::new(SimpleRng::new(12345));
    game.start();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            game.rotate_cw();
        })
    });
}

fn bench_snake_tick(c: &mut Criterion) {
    let mut game = SnakeGame::default();
    game.start();
    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
    let mut i = 0;

    c.bench_function("snake_tick", |b| {
        b.iter(|| {
            // Circle a 2x2 square; restart if the game ever ends.
            game.set_direction(turns[i % 4]);
            i += 1;
            if game.tick().is_none() {
                game.restart();
            }
        })
    });
}

fn bench_render_puzzle(c: &mut Criterion) {
    let mut game = PuzzleGame::new(SimpleRng::new(7));
    game.start();
    let view = PuzzleView::default();
    let mut snap = PuzzleSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_puzzle_80x24", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_puzzle_frame,
    bench_line_clear,
    bench_hard_drop,
    bench_rotate,
    bench_snake_tick,
    bench_render_puzzle
);
criterion_main!(benches);
