//! Per-frame input drain.
//!
//! The frame driver polls once per frame and must not block, so this
//! collects whatever the terminal has queued into a fixed-capacity buffer.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Upper bound on actions taken from the queue in one frame. Anything
/// beyond it stays queued for the next frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

/// Input gathered during one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub actions: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
    /// The terminal was resized since the last frame.
    pub resized: bool,
}

impl FrameInput {
    pub fn clear(&mut self) {
        self.actions.clear();
        self.resized = false;
    }

    pub fn is_full(&self) -> bool {
        self.actions.is_full()
    }

    /// Fold one terminal event into this frame's input.
    pub fn push_event(&mut self, ev: &Event) {
        match ev {
            Event::Key(key) => {
                if let Some(action) = handle_key_event(*key) {
                    let _ = self.actions.try_push(action);
                }
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }
}

/// Drain pending terminal events without blocking.
pub fn poll_frame_input(out: &mut FrameInput) -> Result<()> {
    out.clear();
    while !out.is_full() && event::poll(Duration::ZERO)? {
        let ev = event::read()?;
        out.push_event(&ev);
    }
    Ok(())
}
