//! Plain-data view of the game for renderers.

use crate::geometry::Rect;
use crate::obstacle::Obstacle;
use crate::types::Screen;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub top: Rect,
    pub bottom: Rect,
}

impl From<&Obstacle> for ObstacleSnapshot {
    fn from(value: &Obstacle) -> Self {
        Self {
            top: value.top_rect(),
            bottom: value.bottom_rect(),
        }
    }
}

/// Everything the view needs to draw one frame.
///
/// Reuse one instance across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into); the
/// obstacle buffer keeps its allocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub screen: Screen,
    pub bird: Rect,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub session_id: u32,
}
