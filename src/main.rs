//! Terminal Flappy Bird (default binary).
//!
//! The frame driver: each iteration drains input, ticks the simulation
//! once, renders once, then sleeps out the rest of the 60 Hz frame.

use anyhow::{Context, Result};

use tui_flappy::config::Config;
use tui_flappy::core::{GameSnapshot, GameState};
use tui_flappy::frame::FrameClock;
use tui_flappy::input::{poll_frame_input, FrameInput};
use tui_flappy::logging;
use tui_flappy::term::{FrameBuffer, GameView, SpriteSheet, TerminalRenderer, Viewport};
use tui_flappy::types::{Flow, FPS};

/// Everything the loop needs, built once at startup.
struct App {
    clock: FrameClock,
    game: GameState,
    view: GameView,
    input: FrameInput,
    snap: GameSnapshot,
    fb: FrameBuffer,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let sprites = SpriteSheet::load().context("loading sprites")?;
        let clock = FrameClock::new(FPS);
        let game = GameState::new(config.seed, clock.now_ms());
        Ok(Self {
            clock,
            game,
            view: GameView::new(sprites),
            input: FrameInput::default(),
            snap: GameSnapshot::default(),
            fb: FrameBuffer::new(0, 0),
        })
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        loop {
            poll_frame_input(&mut self.input)?;
            if self.input.resized {
                term.invalidate();
            }

            let now_ms = self.clock.now_ms();
            for &action in self.input.actions.iter() {
                if self.game.apply_action(action, now_ms) == Flow::Quit {
                    return Ok(());
                }
            }

            self.game.tick(now_ms);

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            self.game.snapshot_into(&mut self.snap);
            self.view
                .render_into(&self.snap, Viewport::new(w, h), &mut self.fb);
            term.present(&mut self.fb)?;

            self.clock.wait_for_next_frame();
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    log::info!("starting, seed {}", config.seed);

    let mut app = App::new(&config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| app.run(&mut term));

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    log::info!(
        "exiting after {} sessions, last score {}",
        app.game.session_id() + 1,
        app.game.score()
    );
    result.and(restored)
}
