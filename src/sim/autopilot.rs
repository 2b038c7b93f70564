//! Demo controller
//!
//! Flies toward the gap of the next obstacle by jumping whenever the flyer is
//! about to sink below the bottom segment (minus a safety margin).

use super::physics::predicted_bottom;
use super::state::{GameState, Obstacle};

/// The obstacle the flyer has to clear next, if any is on screen
pub fn next_obstacle(state: &GameState) -> Option<&Obstacle> {
    let flyer_x = state.flyer.pos.x;
    state.obstacles.iter().find(|o| o.right() >= flyer_x)
}

/// Lowest y the flyer's bottom edge should reach this frame
pub fn target_bottom(state: &GameState) -> f32 {
    let tuning = &state.tuning;
    match next_obstacle(state) {
        Some(obstacle) => obstacle.bottom_y as f32 - tuning.autopilot_margin,
        // Hover a little below center while waiting for the first obstacle
        None => tuning.screen_height / 2.0 + tuning.flyer_size,
    }
}

/// Whether the autopilot would jump on this frame
pub fn wants_jump(state: &GameState) -> bool {
    if state.is_game_over() {
        return false;
    }
    predicted_bottom(&state.flyer, state.tuning.gravity) > target_bottom(state)
}
