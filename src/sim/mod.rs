//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_bounds, check_obstacle, flyer_hits_obstacle, out_of_bounds};
pub use snapshot::{ObstacleView, Snapshot};
pub use state::{Flyer, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{TickInput, tick};
