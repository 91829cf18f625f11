use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_flappy::core::{GameState, Obstacle, ObstacleStream};
use tui_flappy::term::{FrameBuffer, GameView, SpriteSheet, Viewport};
use tui_flappy::types::{GameAction, Screen};

fn playing() -> GameState {
    let mut state = GameState::new(12345, 0);
    state.apply_action(GameAction::Flap, 0);
    state
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut state = playing();
        let mut now = 0u64;
        b.iter(|| {
            now += 16;
            if state.screen() == Screen::Over {
                state.apply_action(GameAction::Restart, now);
            }
            state.bird_mut().y = 300.0;
            state.bird_mut().velocity = 0.0;
            state.tick(black_box(now));
        })
    });
}

fn bench_stream_advance(c: &mut Criterion) {
    c.bench_function("stream_advance_prune", |b| {
        b.iter(|| {
            let mut stream = ObstacleStream::new(0);
            for gap in [100, 150, 200, 250] {
                stream.push(Obstacle::with_gap(gap));
            }
            for _ in 0..150 {
                stream.advance(black_box(50.0));
                stream.prune();
            }
            stream.len()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let view = GameView::new(SpriteSheet::load().unwrap());
    let mut state = playing();
    for x in [120.0, 300.0] {
        let mut o = Obstacle::with_gap(180);
        o.x = x;
        state.obstacles_mut().push(o);
    }
    let snap = state.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_into_120x40", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(120, 40), &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_stream_advance, bench_render);
criterion_main!(benches);
