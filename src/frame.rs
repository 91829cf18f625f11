//! Fixed-rate frame pacing and the game clock.

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed frame rate and hands out elapsed milliseconds
/// since start, which is the clock the simulation sees.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    started: Instant,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            started: now,
            last_frame: now,
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Time left in a frame that has already taken `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame.saturating_sub(elapsed)
    }

    /// Sleep until one frame has passed since the previous call. Frames that
    /// overran do not sleep and are not made up for.
    pub fn wait_for_next_frame(&mut self) {
        let rest = self.remaining(self.last_frame.elapsed());
        if !rest.is_zero() {
            thread::sleep(rest);
        }
        self.last_frame = Instant::now();
    }
}
