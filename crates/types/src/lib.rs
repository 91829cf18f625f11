//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # World Dimensions
//!
//! The simulation runs in a fixed logical coordinate space ("world units"),
//! independent of the terminal size:
//!
//! - **Width**: 400 units
//! - **Height**: 600 units
//! - Origin is the top-left corner, y grows downward
//!
//! # Physics Constants
//!
//! All physics is per tick (one frame at 60 FPS), not per second:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.25 | Added to the bird's velocity every tick |
//! | `BIRD_JUMP` | -5.0 | Velocity set by a flap |
//! | `PIPE_SPEED` | 3.0 | Leftward obstacle movement per tick |
//! | `PIPE_INTERVAL_MS` | 1500 | Wall-clock time between obstacle spawns |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{GameAction, Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
//!
//! assert_eq!(GameAction::Flap.as_str(), "flap");
//! assert_eq!(Screen::default(), Screen::Home);
//! assert_eq!((SCREEN_WIDTH, SCREEN_HEIGHT), (400.0, 600.0));
//! ```

/// World width in logical units.
pub const SCREEN_WIDTH: f32 = 400.0;

/// World height in logical units.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Target frame rate of the frame driver.
pub const FPS: u32 = 60;

/// Velocity added to the bird every tick.
pub const GRAVITY: f32 = 0.25;

/// Velocity set by a flap (negative is up).
pub const BIRD_JUMP: f32 = -5.0;

/// Fixed horizontal position of the bird.
pub const BIRD_X: f32 = 50.0;

/// Bird sprite width.
pub const BIRD_WIDTH: f32 = 30.0;

/// Bird sprite height.
pub const BIRD_HEIGHT: f32 = 30.0;

/// Obstacle width.
pub const PIPE_WIDTH: f32 = 50.0;

/// Vertical opening between the top and bottom pipe.
pub const PIPE_GAP: f32 = 150.0;

/// Leftward obstacle movement per tick.
pub const PIPE_SPEED: f32 = 3.0;

/// Minimum time between two obstacle spawns (strictly exceeded).
pub const PIPE_INTERVAL_MS: u64 = 1500;

/// Smallest gap-top height (inclusive).
pub const GAP_TOP_MIN: u32 = 100;

/// Largest gap-top height (exclusive).
pub const GAP_TOP_MAX: u32 = 300;

/// Duration of one frame in milliseconds (rounded down).
pub const fn frame_ms() -> u64 {
    1000 / FPS as u64
}


/// The three screens of the game.
///
/// The cycle is Home -> Playing -> Over, and from Over either back to
/// Playing (restart) or to Home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Playing,
    Over,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Playing => "playing",
            Screen::Over => "over",
        }
    }
}

/// Abstract player actions.
///
/// What an action does depends on the current [`Screen`]; actions with no
/// meaning on a screen are ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Space: start from Home, jump while Playing.
    Flap,
    /// R: start a fresh session from the Over screen.
    Restart,
    /// H: return to Home from the Over screen.
    Home,
    /// Leave the game from any screen.
    Quit,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Flap => "flap",
            GameAction::Restart => "restart",
            GameAction::Home => "home",
            GameAction::Quit => "quit",
        }
    }
}

/// Result of dispatching an action to the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
