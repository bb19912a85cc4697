use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tick_tetris::core::{can_place, clear_full_rows, Board, Engine, Frame, RedrawTracker};
use tick_tetris::types::{Intent, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.is_game_over() {
                engine.reset();
            }
            engine.tick(black_box(Intent::SoftDrop));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, PieceKind::I);
                }
            }
            clear_full_rows(black_box(&mut board))
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("reset_and_spawn", |b| {
        b.iter(|| {
            engine.reset();
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("can_place", |b| {
        b.iter(|| can_place(black_box(&board), PieceKind::T, 1, black_box(4), black_box(10)))
    });
}

fn bench_redraw(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    let mut tracker = RedrawTracker::new();

    c.bench_function("capture_and_diff", |b| {
        b.iter(|| {
            engine.tick(Intent::None);
            let frame = Frame::capture(&engine);
            tracker.changes(&frame).len()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_reset,
    bench_can_place,
    bench_redraw
);
criterion_main!(benches);
