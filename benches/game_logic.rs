use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_klondike::core::{rules, GameState, Pile};
use tui_klondike::engine::{moves, Cursor, GameSession};
use tui_klondike::term::{FrameBuffer, GameView, Highlight, Viewport};
use tui_klondike::types::{Card, CursorAction};

fn bench_deal(c: &mut Criterion) {
    let mut seed = 0u32;
    c.bench_function("deal", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            GameState::new(black_box(seed))
        })
    });
}

fn bench_draw_cycle(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("draw_or_recycle", |b| {
        b.iter(|| {
            let _ = moves::draw(black_box(&mut state));
        })
    });
}

fn bench_rules(c: &mut Criterion) {
    let column: Pile = ["KS", "QH", "JC", "TD", "9S"]
        .iter()
        .filter_map(|l| Card::parse(l))
        .collect();
    let eight = Card::parse("8H").unwrap();

    c.bench_function("can_place", |b| {
        b.iter(|| rules::can_place(black_box(eight), black_box(&column)))
    });
    c.bench_function("is_movable_run", |b| {
        b.iter(|| rules::is_movable_run(black_box(column.cards())))
    });
}

fn bench_cursor_step(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    let mut cursor = Cursor::new(session.state());

    c.bench_function("cursor_right", |b| {
        b.iter(|| cursor.handle(&mut session, black_box(CursorAction::Right)))
    });
}

fn bench_render(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 60);
    let mut fb = FrameBuffer::new(80, 60);

    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(&session, Highlight::none(), black_box(viewport), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_draw_cycle,
    bench_rules,
    bench_cursor_step,
    bench_render
);
criterion_main!(benches);
