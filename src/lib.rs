//! TUI Flappy (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and holds the pieces the
//! binary needs around them: configuration, logging and frame pacing.

pub mod config;
pub mod frame;
pub mod logging;

pub use tui_flappy_core as core;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;
