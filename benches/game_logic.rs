use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tui_cascade::core::{Board, GameSnapshot, RepeatSource};
use tui_cascade::term::{FrameBuffer, GameView, Viewport};
use tui_cascade::types::{BlockColor, PieceKind};

fn bench_step(c: &mut Criterion) {
    let mut board = Board::with_seed(12345);

    c.bench_function("board_step", |b| {
        b.iter(|| {
            if !board.step() {
                board = Board::with_seed(12345);
            }
            black_box(board.score());
        })
    });
}

fn bench_clear_and_cascade(c: &mut Criterion) {
    c.bench_function("clear_2_rows", |b| {
        b.iter_batched(
            || Board::new(4, 20, RepeatSource::of_kind(PieceKind::O, BlockColor::Yellow)),
            |mut board| {
                for dx in [-1, 1] {
                    board.step();
                    if dx < 0 {
                        board.move_left();
                    } else {
                        board.move_right();
                    }
                    board.move_down();
                    board.step();
                }
                black_box(board.score())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::with_seed(12345);
    board.step();

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !board.move_right() {
                while board.move_left() {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::with_seed(12345);
    board.step();
    board.step();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            board.rotate(black_box(true));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut board = Board::with_seed(12345);
    for _ in 0..200 {
        board.step();
    }
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            board.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(fb.cells().len());
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_clear_and_cascade,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
