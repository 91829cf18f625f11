//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and drains
//! the terminal's event queue once per frame without blocking.

pub mod map;
pub mod poll;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, should_quit};
pub use poll::{poll_frame_input, FrameInput, MAX_ACTIONS_PER_FRAME};
