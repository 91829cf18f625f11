//! Game state module - the game controller
//!
//! Owns the bird, the obstacle stream and the session state, and runs the
//! Home / Playing / Over state machine. Every input is dispatched to exactly
//! one per-screen handler; each handler matches all actions explicitly.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bird::Bird;
use crate::snapshot::{GameSnapshot, ObstacleSnapshot};
use crate::stream::ObstacleStream;
use crate::types::{Flow, GameAction, Screen};

/// Why a Playing session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Obstacle,
    Boundary,
}

#[derive(Debug, Clone)]
pub struct GameState {
    screen: Screen,
    bird: Bird,
    stream: ObstacleStream,
    score: u32,
    /// Increments on every session reset (restart or return home).
    session_id: u32,
    /// Simulation ticks run in the current session.
    ticks: u64,
    last_crash: Option<Crash>,
    rng: StdRng,
}

impl GameState {
    /// Create a game on the Home screen. `now_ms` starts the spawn timer.
    pub fn new(seed: u64, now_ms: u64) -> Self {
        Self {
            screen: Screen::Home,
            bird: Bird::new(),
            stream: ObstacleStream::new(now_ms),
            score: 0,
            session_id: 0,
            ticks: 0,
            last_crash: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn obstacles(&self) -> &ObstacleStream {
        &self.stream
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Cause of the most recent game over, cleared on reset.
    pub fn last_crash(&self) -> Option<Crash> {
        self.last_crash
    }

    /// Direct access for scripted scenarios (tests, benches).
    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    /// Direct access for scripted scenarios (tests, benches).
    pub fn obstacles_mut(&mut self) -> &mut ObstacleStream {
        &mut self.stream
    }

    /// Dispatch one input action. `Quit` is honoured on every screen.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> Flow {
        if action == GameAction::Quit {
            log::info!("quit requested on {} screen", self.screen.as_str());
            return Flow::Quit;
        }

        log::debug!("{} on {} screen", action.as_str(), self.screen.as_str());
        let next = match self.screen {
            Screen::Home => self.on_home(action),
            Screen::Playing => self.on_playing(action),
            Screen::Over => self.on_over(action, now_ms),
        };
        self.set_screen(next);
        Flow::Continue
    }

    fn on_home(&mut self, action: GameAction) -> Screen {
        match action {
            GameAction::Flap => Screen::Playing,
            GameAction::Restart | GameAction::Home | GameAction::Quit => Screen::Home,
        }
    }

    fn on_playing(&mut self, action: GameAction) -> Screen {
        match action {
            GameAction::Flap => {
                self.bird.jump();
                Screen::Playing
            }
            GameAction::Restart | GameAction::Home | GameAction::Quit => Screen::Playing,
        }
    }

    fn on_over(&mut self, action: GameAction, now_ms: u64) -> Screen {
        match action {
            GameAction::Restart => {
                self.reset_session(now_ms);
                Screen::Playing
            }
            GameAction::Home => {
                self.reset_session(now_ms);
                Screen::Home
            }
            GameAction::Flap | GameAction::Quit => Screen::Over,
        }
    }

    /// Run one simulation tick. Only the Playing screen simulates; the Over
    /// screen keeps the session exactly as it was at the crash.
    pub fn tick(&mut self, now_ms: u64) {
        match self.screen {
            Screen::Playing => self.step(now_ms),
            Screen::Home | Screen::Over => {}
        }
    }

    fn step(&mut self, now_ms: u64) {
        self.ticks += 1;
        self.bird.update();

        if let Some(gap_top) = self.stream.maybe_spawn(now_ms, &mut self.rng) {
            log::debug!("spawned obstacle gap_top={gap_top} at {now_ms}ms");
        }

        let points = self.stream.advance(self.bird.x);
        if points > 0 {
            self.score += points;
            log::debug!("score {}", self.score);
        }

        let hit_obstacle = self.stream.any_collision(&self.bird);
        self.stream.prune();

        let crash = if hit_obstacle {
            Some(Crash::Obstacle)
        } else if self.bird.touches_boundary() {
            Some(Crash::Boundary)
        } else {
            None
        };

        if let Some(crash) = crash {
            log::info!(
                "crashed into {:?} after {} ticks, score {}",
                crash,
                self.ticks,
                self.score
            );
            self.last_crash = Some(crash);
            self.set_screen(Screen::Over);
        }
    }

    fn reset_session(&mut self, now_ms: u64) {
        self.bird = Bird::new();
        self.stream.reset(now_ms);
        self.score = 0;
        self.ticks = 0;
        self.last_crash = None;
        self.session_id = self.session_id.wrapping_add(1);
    }

    fn set_screen(&mut self, next: Screen) {
        if next != self.screen {
            log::info!("screen {} -> {}", self.screen.as_str(), next.as_str());
            self.screen = next;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.screen = self.screen;
        out.bird = self.bird.bounding_box();
        out.score = self.score;
        out.session_id = self.session_id;
        out.obstacles.clear();
        out.obstacles
            .extend(self.stream.iter().map(ObstacleSnapshot::from));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
