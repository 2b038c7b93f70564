//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame:
//! input, integrator, obstacle manager, collision, bounds.

use super::autopilot;
use super::collision::{check_bounds, check_obstacle};
use super::obstacles::update_obstacles;
use super::physics::integrate;
use super::state::GameState;

/// Input commands gathered since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (click/tap/space). Several presses in one frame act as one.
    pub jump: bool,
    /// Restart the run before stepping this frame
    pub reset: bool,
    /// Idle/demo mode - the autopilot decides when to jump
    pub autopilot: bool,
}

/// Advance the game state by one frame
///
/// Afterwards `state.events` holds this frame's events, preceded by any
/// `jump()`/`reset()` events from between frames.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.begin_tick_events();
    step(state, input);
    state.end_tick_events();
}

fn step(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
    }

    // Nothing moves after game over
    if state.is_game_over() {
        return;
    }

    if input.jump || (input.autopilot && autopilot::wants_jump(state)) {
        state.jump();
    }

    state.time_ticks += 1;

    let gravity = state.tuning.gravity;
    integrate(&mut state.flyer, gravity);

    update_obstacles(state);

    for index in 0..state.obstacles.len() {
        if check_obstacle(state, index) {
            break;
        }
    }

    check_bounds(state);
}
