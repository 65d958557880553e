use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bitris::core::{rotation::rotate, Board, BoardSnapshot, GameState, SHAPES};
use bitris::engine::{resolve, CommandSource, Renderer, Session, TickScheduler};
use bitris::types::{Command, PlayResult, RotateDir};

struct Idle;

impl CommandSource for Idle {
    fn poll(&mut self) -> Result<Command> {
        Ok(Command::None)
    }
}

struct Discard;

impl Renderer for Discard {
    fn render(&mut self, snapshot: &BoardSnapshot) -> Result<()> {
        black_box(snapshot);
        Ok(())
    }
}

struct NoWait;

impl TickScheduler for NoWait {
    fn sleep_ms(&mut self, _ms: u32) {}
}

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(GameState::new(12345), Idle, Discard, NoWait);

    c.bench_function("session_step", |b| {
        b.iter(|| {
            if let Ok(PlayResult::GameOver) = session.step() {
                session.state_mut().reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("collapse_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            for row in 0..4 {
                board.set_row(row, board.full_mask());
            }
            board.set_row(4, 0b101);
            black_box(board.scan_and_collapse());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    c.bench_function("rotate_box", |b| {
        b.iter(|| {
            for shape in SHAPES.iter() {
                let mut bits = shape.box_bits();
                rotate(&mut bits, shape.box_size, RotateDir::Cw);
                rotate(&mut bits, shape.box_size, RotateDir::Ccw);
                black_box(bits);
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate(black_box(RotateDir::Cw));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            resolve(&mut state, Command::HardDrop);
            if state.spawn_blocked() {
                state.reset();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate,
    bench_try_rotate,
    bench_hard_drop
);
criterion_main!(benches);
