//! The player's bird: constant gravity, an instant upward impulse, and a
//! vertical clamp to the world bounds.

use crate::geometry::Rect;
use crate::types::{BIRD_HEIGHT, BIRD_JUMP, BIRD_WIDTH, BIRD_X, GRAVITY, SCREEN_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    /// Bird at its spawn point, halfway down the screen, at rest.
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: (SCREEN_HEIGHT / 2.0).floor(),
            velocity: 0.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }

    /// Largest valid `y`.
    pub fn max_y(&self) -> f32 {
        SCREEN_HEIGHT - self.height
    }

    pub fn jump(&mut self) {
        self.velocity = BIRD_JUMP;
    }

    /// Advance one tick. Returns `true` when the bird was clamped to the
    /// top or bottom of the world (velocity is zeroed in that case).
    pub fn update(&mut self) -> bool {
        self.velocity += GRAVITY;
        self.y += self.velocity;

        let max_y = self.max_y();
        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
            true
        } else if self.y > max_y {
            self.y = max_y;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }

    /// Ceiling or floor contact, inclusive. A bird resting exactly on a
    /// boundary counts as a hit.
    pub fn touches_boundary(&self) -> bool {
        self.y <= 0.0 || self.y >= self.max_y()
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bird_spawns_mid_screen_at_rest() {
        let bird = Bird::new();
        assert_eq!((bird.x, bird.y), (50.0, 300.0));
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.bounding_box(), Rect::new(50.0, 300.0, 30.0, 30.0));
    }

    #[test]
    fn gravity_accumulates() {
        let mut bird = Bird::new();
        assert!(!bird.update());
        assert_eq!(bird.velocity, 0.25);
        assert_eq!(bird.y, 300.25);
        assert!(!bird.update());
        assert_eq!(bird.velocity, 0.5);
        assert_eq!(bird.y, 300.75);
    }

    #[test]
    fn jump_sets_velocity_regardless_of_current() {
        let mut bird = Bird::new();
        bird.velocity = 7.0;
        bird.jump();
        assert_eq!(bird.velocity, -5.0);
        bird.update();
        assert_eq!(bird.velocity, -4.75);
        assert_eq!(bird.y, 295.25);
    }

    #[test]
    fn falling_from_ceiling_is_not_a_clamp() {
        let mut bird = Bird {
            y: 0.0,
            ..Bird::new()
        };
        assert!(!bird.update());
        assert_eq!(bird.velocity, 0.25);
        assert_eq!(bird.y, 0.25);
    }

    #[test]
    fn clamps_at_ceiling_and_zeroes_velocity() {
        let mut bird = Bird {
            y: 2.0,
            ..Bird::new()
        };
        bird.jump();
        assert!(bird.update());
        assert_eq!(bird.y, 0.0);
        assert_eq!(bird.velocity, 0.0);
        assert!(bird.touches_boundary());
    }

    #[test]
    fn clamps_at_floor_and_zeroes_velocity() {
        let mut bird = Bird {
            y: 569.0,
            velocity: 4.0,
            ..Bird::new()
        };
        assert!(bird.update());
        assert_eq!(bird.y, 570.0);
        assert_eq!(bird.velocity, 0.0);
        assert!(bird.touches_boundary());
    }

    #[test]
    fn y_stays_in_bounds_over_long_fall() {
        let mut bird = Bird::new();
        for _ in 0..1000 {
            let clamped = bird.update();
            assert!(bird.y >= 0.0 && bird.y <= bird.max_y());
            if clamped {
                assert_eq!(bird.velocity, 0.0);
            }
        }
    }
}
