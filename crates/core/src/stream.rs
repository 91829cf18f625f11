//! Obstacle stream - spawns, scrolls, scores and prunes pipes.
//!
//! Spawning is paced by wall-clock time supplied by the caller, while
//! movement is per tick. The stream never owns the clock so it stays
//! deterministic under test.

use rand::Rng;

use crate::bird::Bird;
use crate::obstacle::Obstacle;
use crate::types::PIPE_INTERVAL_MS;

#[derive(Debug, Clone)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
    last_spawn_ms: u64,
}

impl ObstacleStream {
    /// Empty stream whose spawn timer starts at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            obstacles: Vec::with_capacity(8),
            last_spawn_ms: now_ms,
        }
    }

    /// Drop every obstacle and restart the spawn timer.
    pub fn reset(&mut self, now_ms: u64) {
        self.obstacles.clear();
        self.last_spawn_ms = now_ms;
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Append an obstacle directly, bypassing the spawn timer.
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Spawn a random obstacle if more than `PIPE_INTERVAL_MS` elapsed since
    /// the last spawn. Returns the spawned obstacle's gap top.
    pub fn maybe_spawn<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> Option<u32> {
        if now_ms.saturating_sub(self.last_spawn_ms) <= PIPE_INTERVAL_MS {
            return None;
        }
        let obstacle = Obstacle::random(rng);
        self.obstacles.push(obstacle);
        self.last_spawn_ms = now_ms;
        Some(obstacle.gap_top)
    }

    /// Scroll every obstacle one tick and mark those whose trailing edge is
    /// now behind `bird_x`. Returns the points earned this tick.
    pub fn advance(&mut self, bird_x: f32) -> u32 {
        let mut points = 0;
        for obstacle in &mut self.obstacles {
            obstacle.update();
            if !obstacle.passed && obstacle.trailing_edge() < bird_x {
                obstacle.passed = true;
                points += 1;
            }
        }
        points
    }

    pub fn any_collision(&self, bird: &Bird) -> bool {
        self.obstacles.iter().any(|o| o.collides_with(bird))
    }

    /// Remove off-screen obstacles, keeping spawn order. Returns how many
    /// were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        before - self.obstacles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_waits_for_strictly_more_than_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut stream = ObstacleStream::new(1000);

        assert_eq!(stream.maybe_spawn(2000, &mut rng), None);
        assert_eq!(stream.maybe_spawn(2500, &mut rng), None);
        assert!(stream.maybe_spawn(2501, &mut rng).is_some());
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.last_spawn_ms(), 2501);

        // Timer restarts from the spawn time.
        assert_eq!(stream.maybe_spawn(4001, &mut rng), None);
        assert!(stream.maybe_spawn(4002, &mut rng).is_some());
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn long_stall_spawns_only_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut stream = ObstacleStream::new(0);
        assert!(stream.maybe_spawn(60_000, &mut rng).is_some());
        assert_eq!(stream.maybe_spawn(60_000, &mut rng), None);
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn clock_before_last_spawn_does_not_spawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut stream = ObstacleStream::new(5000);
        assert_eq!(stream.maybe_spawn(10, &mut rng), None);
    }

    #[test]
    fn scores_once_when_trailing_edge_passes_bird() {
        let mut stream = ObstacleStream::new(0);
        let mut o = Obstacle::with_gap(150);
        // Trailing edge at 53; bird at 50.
        o.x = 3.0;
        stream.push(o);

        // Trailing edge moves to 50: not strictly behind yet.
        assert_eq!(stream.advance(50.0), 0);
        // 47 < 50.
        assert_eq!(stream.advance(50.0), 1);
        assert!(stream.as_slice()[0].passed);
        for _ in 0..5 {
            assert_eq!(stream.advance(50.0), 0);
        }
    }

    #[test]
    fn multiple_obstacles_score_independently() {
        let mut stream = ObstacleStream::new(0);
        let mut a = Obstacle::with_gap(120);
        a.x = -2.0;
        let mut b = Obstacle::with_gap(200);
        b.x = 0.0;
        stream.push(a);
        stream.push(b);
        assert_eq!(stream.advance(50.0), 2);
        assert_eq!(stream.advance(50.0), 0);
    }

    #[test]
    fn prune_removes_offscreen_and_keeps_order() {
        let mut stream = ObstacleStream::new(0);
        for (x, gap) in [(-60.0, 100), (10.0, 110), (-50.0, 120), (200.0, 130)] {
            let mut o = Obstacle::with_gap(gap);
            o.x = x;
            stream.push(o);
        }
        assert_eq!(stream.prune(), 2);
        let gaps: Vec<u32> = stream.iter().map(|o| o.gap_top).collect();
        assert_eq!(gaps, vec![110, 130]);
    }

    #[test]
    fn reset_clears_and_restarts_timer() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut stream = ObstacleStream::new(0);
        stream.maybe_spawn(2000, &mut rng);
        stream.reset(9000);
        assert!(stream.is_empty());
        assert_eq!(stream.last_spawn_ms(), 9000);
        assert_eq!(stream.maybe_spawn(10_000, &mut rng), None);
    }

    #[test]
    fn any_collision_checks_every_obstacle() {
        let mut stream = ObstacleStream::new(0);
        let clear = Obstacle::with_gap(150);
        let mut hit = Obstacle::with_gap(100);
        hit.x = 40.0;
        stream.push(clear);
        assert!(!stream.any_collision(&Bird::new()));
        stream.push(hit);
        // Bird box [300, 330) overlaps the bottom pipe starting at 250.
        assert!(stream.any_collision(&Bird::new()));
    }
}
