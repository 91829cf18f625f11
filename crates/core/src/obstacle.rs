//! A pipe pair: a top pipe hanging from the ceiling and a bottom pipe
//! standing on the floor, separated by a fixed-size gap.

use rand::Rng;

use crate::bird::Bird;
use crate::geometry::Rect;
use crate::types::{
    GAP_TOP_MAX, GAP_TOP_MIN, PIPE_GAP, PIPE_SPEED, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    /// Height of the top pipe; the gap starts here.
    pub gap_top: u32,
    pub width: f32,
    pub speed: f32,
    /// Set once the bird has flown past; each obstacle scores at most once.
    pub passed: bool,
}

impl Obstacle {
    /// New obstacle at the right edge of the world with a fixed gap.
    pub fn with_gap(gap_top: u32) -> Self {
        Self {
            x: SCREEN_WIDTH,
            gap_top,
            width: PIPE_WIDTH,
            speed: PIPE_SPEED,
            passed: false,
        }
    }

    /// New obstacle with a gap top drawn uniformly from
    /// `GAP_TOP_MIN..GAP_TOP_MAX`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::with_gap(rng.gen_range(GAP_TOP_MIN..GAP_TOP_MAX))
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top as f32)
    }

    pub fn bottom_rect(&self) -> Rect {
        let y = self.gap_top as f32 + PIPE_GAP;
        Rect::new(self.x, y, self.width, SCREEN_HEIGHT - y)
    }

    /// Right edge; the bird has passed once this is behind it.
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn collides_with(&self, bird: &Bird) -> bool {
        let bb = bird.bounding_box();
        bb.intersects(&self.top_rect()) || bb.intersects(&self.bottom_rect())
    }

    pub fn is_offscreen(&self) -> bool {
        self.x <= -self.width
    }
}
