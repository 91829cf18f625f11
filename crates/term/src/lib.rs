//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and instead renders into a plain framebuffer that is
//! flushed to the terminal with crossterm.
//!
//! - [`fb`]: styled character framebuffer (the drawing surface)
//! - [`sprites`]: built-in art, scaled per entity at draw time
//! - [`game_view`]: pure mapping from a game snapshot to a framebuffer
//! - [`renderer`]: terminal setup/teardown and diffed presentation

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprites;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Projection, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{Sprite, SpriteSheet};
