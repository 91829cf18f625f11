//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: physics, obstacles, scoring and
//! the screen state machine. It has **no dependencies** on terminals, input
//! devices or clocks; time is passed in as milliseconds, which makes it:
//!
//! - **Deterministic**: same seed and same clock readings give the same game
//! - **Testable**: every rule is exercised without a display
//!
//! # Module Structure
//!
//! - [`geometry`]: axis-aligned rectangles and the overlap test
//! - [`bird`]: gravity, jump impulse, vertical clamp
//! - [`obstacle`]: a pipe pair and its collision rectangles
//! - [`stream`]: spawn timer, scrolling, scoring and pruning of obstacles
//! - [`game_state`]: the Home / Playing / Over controller
//! - [`snapshot`]: plain-data frame description for renderers
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//! use tui_flappy_types::{GameAction, Screen};
//!
//! let mut game = GameState::new(12345, 0);
//! game.apply_action(GameAction::Flap, 0);
//! assert_eq!(game.screen(), Screen::Playing);
//!
//! game.apply_action(GameAction::Flap, 0);
//! game.tick(16);
//! assert!(game.bird().y < 300.0);
//! ```
//!
//! # Timing
//!
//! Physics is per tick and assumes the frame driver ticks at a fixed
//! 60 Hz. Obstacle spawning alone uses the wall clock (`now_ms`), so spawn
//! cadence does not depend on the frame rate while scroll speed does.

pub mod bird;
pub mod game_state;
pub mod geometry;
pub mod obstacle;
pub mod snapshot;
pub mod stream;

pub use tui_flappy_types as types;

pub use bird::Bird;
pub use game_state::{Crash, GameState};
pub use geometry::Rect;
pub use obstacle::Obstacle;
pub use snapshot::{GameSnapshot, ObstacleSnapshot};
pub use stream::ObstacleStream;
