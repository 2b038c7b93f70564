//! Collision detection
//!
//! Everything is an axis-aligned box: the flyer, and each obstacle's top and
//! bottom segments. Touching edges count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Flyer, GameEvent, GameState, Obstacle};

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    /// Standard 2D overlap test, inclusive on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Check if the flyer touches either segment of an obstacle
pub fn flyer_hits_obstacle(flyer: &Flyer, obstacle: &Obstacle, screen_height: f32) -> bool {
    let bounds = flyer.aabb();
    bounds.overlaps(&obstacle.top_segment()) || bounds.overlaps(&obstacle.bottom_segment(screen_height))
}

/// Check if the flyer left the play area through the top or bottom edge
#[inline]
pub fn out_of_bounds(flyer: &Flyer, screen_height: f32) -> bool {
    flyer.pos.y < 0.0 || flyer.bottom() > screen_height
}

/// Test a single obstacle and end the run on a hit. Returns whether it hit.
pub fn check_obstacle(state: &mut GameState, index: usize) -> bool {
    let Some(obstacle) = state.obstacles.get(index) else {
        return false;
    };
    if !flyer_hits_obstacle(&state.flyer, obstacle, state.tuning.screen_height) {
        return false;
    }
    let id = obstacle.id;
    state.end_run(GameEvent::Collided { id });
    true
}

/// Test the screen edges and end the run if the flyer left. Returns whether it did.
pub fn check_bounds(state: &mut GameState) -> bool {
    if !out_of_bounds(&state.flyer, state.tuning.screen_height) {
        return false;
    }
    state.end_run(GameEvent::OutOfBounds);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    fn flyer_at(x: f32, y: f32, size: f32) -> Flyer {
        Flyer {
            pos: Vec2::new(x, y),
            size: Vec2::splat(size),
            vel: 0.0,
        }
    }

    #[test]
    fn test_flyer_overlaps_top_segment() {
        // Obstacle x=50, width=50, gap=100, top=80 -> bottom starts at 180
        let obstacle = Obstacle::new(1, 50.0, 50.0, 80, 100);
        assert_eq!(obstacle.bottom_y, 180);

        let flyer = flyer_at(50.0, 50.0, 20.0);
        assert!(flyer_hits_obstacle(&flyer, &obstacle, 600.0));
    }

    #[test]
    fn test_flyer_in_gap_misses() {
        let obstacle = Obstacle::new(1, 50.0, 50.0, 80, 100);
        let flyer = flyer_at(60.0, 100.0, 20.0);
        assert!(!flyer_hits_obstacle(&flyer, &obstacle, 600.0));
    }

    #[test]
    fn test_flyer_overlaps_bottom_segment() {
        let obstacle = Obstacle::new(1, 50.0, 50.0, 80, 100);
        let flyer = flyer_at(60.0, 170.0, 20.0);
        assert!(flyer_hits_obstacle(&flyer, &obstacle, 600.0));
    }

    #[test]
    fn test_touching_edges_count() {
        let obstacle = Obstacle::new(1, 50.0, 50.0, 80, 100);

        // Flyer top exactly on the top segment's lower edge
        assert!(flyer_hits_obstacle(&flyer_at(60.0, 80.0, 20.0), &obstacle, 600.0));
        // Flyer bottom exactly on the bottom segment's upper edge
        assert!(flyer_hits_obstacle(&flyer_at(60.0, 160.0, 20.0), &obstacle, 600.0));
        // Flyer right edge exactly on the obstacle's left edge, level with the top segment
        assert!(flyer_hits_obstacle(&flyer_at(30.0, 40.0, 20.0), &obstacle, 600.0));

        // One pixel clear on each side
        assert!(!flyer_hits_obstacle(&flyer_at(60.0, 81.0, 20.0), &obstacle, 600.0));
        assert!(!flyer_hits_obstacle(&flyer_at(60.0, 159.0, 20.0), &obstacle, 600.0));
        assert!(!flyer_hits_obstacle(&flyer_at(29.0, 40.0, 20.0), &obstacle, 600.0));
    }

    #[test]
    fn test_horizontally_clear_misses_any_height() {
        let obstacle = Obstacle::new(1, 200.0, 52.0, 80, 170);
        for y in [0.0, 40.0, 300.0, 500.0] {
            assert!(!flyer_hits_obstacle(&flyer_at(50.0, y, 34.0), &obstacle, 600.0));
        }
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(!out_of_bounds(&flyer_at(50.0, 0.0, 34.0), 600.0));
        assert!(!out_of_bounds(&flyer_at(50.0, 566.0, 34.0), 600.0));
        assert!(out_of_bounds(&flyer_at(50.0, -0.5, 34.0), 600.0));
        assert!(out_of_bounds(&flyer_at(50.0, 566.5, 34.0), 600.0));
    }

    #[test]
    fn test_check_obstacle_ends_run_once() {
        let mut state = GameState::new(1);
        state.flyer = flyer_at(50.0, 50.0, 20.0);
        state.obstacles.push(Obstacle::new(4, 50.0, 50.0, 80, 100));

        assert!(check_obstacle(&mut state, 0));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(check_obstacle(&mut state, 0));
        assert_eq!(state.drain_events(), vec![GameEvent::Collided { id: 4 }]);
    }

    #[test]
    fn test_check_obstacle_out_of_range_index() {
        let mut state = GameState::new(1);
        assert!(!check_obstacle(&mut state, 3));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_check_bounds() {
        let mut state = GameState::new(1);
        assert!(!check_bounds(&mut state));
        state.flyer.pos.y = -1.0;
        assert!(check_bounds(&mut state));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.events, vec![GameEvent::OutOfBounds]);
    }
}
