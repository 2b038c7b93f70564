//! Obstacle stream: scrolling, despawn, scoring and spawning
//!
//! Obstacles are kept in spawn order, which is also the order they cross the
//! screen, so every pass below walks oldest first.

use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle};

/// Run one frame of the obstacle manager
pub fn update_obstacles(state: &mut GameState) {
    scroll(state);
    despawn_offscreen(state);
    award_passed(state);
    advance_spawn_timer(state);
}

/// Move every obstacle left by the scroll speed
fn scroll(state: &mut GameState) {
    let speed = state.tuning.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }
}

/// Drop obstacles whose right edge is past the left screen edge
fn despawn_offscreen(state: &mut GameState) {
    let events = &mut state.events;
    state.obstacles.retain(|obstacle| {
        if obstacle.is_offscreen() {
            log::debug!("Despawn obstacle {} at x={}", obstacle.id, obstacle.x);
            events.push(GameEvent::ObstacleDespawned { id: obstacle.id });
            false
        } else {
            true
        }
    });
}

/// Score each obstacle once, when its right edge passes the flyer's x
fn award_passed(state: &mut GameState) {
    let flyer_x = state.flyer.pos.x;
    for obstacle in &mut state.obstacles {
        if !obstacle.passed && obstacle.right() < flyer_x {
            obstacle.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored {
                id: obstacle.id,
                score: state.score,
            });
        }
    }
}

/// Count the frame and spawn when the interval is reached
fn advance_spawn_timer(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer >= state.tuning.spawn_interval {
        let x = state.tuning.spawn_x();
        spawn_obstacle(state, x);
        state.spawn_timer = 0;
    }
}

/// Append a new obstacle at `x` with a random gap position
pub fn spawn_obstacle(state: &mut GameState, x: f32) -> u32 {
    let range = state.tuning.top_height_range();
    let top_height = state.rng_mut().random_range(range);
    let id = state.next_entity_id();
    let obstacle = Obstacle::new(
        id,
        x,
        state.tuning.obstacle_width,
        top_height,
        state.tuning.gap,
    );
    log::debug!(
        "Spawn obstacle {} at x={} (top={}, bottom={})",
        id,
        x,
        obstacle.top_height,
        obstacle.bottom_y
    );
    state.obstacles.push(obstacle);
    state.events.push(GameEvent::ObstacleSpawned { id, top_height });
    id
}
