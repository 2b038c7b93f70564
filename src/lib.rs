//! Gap Flyer - A side-scrolling obstacle-avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Leaderboard of finished runs
//! - `runner`: Headless autopilot runs

pub mod highscores;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Default game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Flyer defaults - x never changes after spawn
    pub const FLYER_X: f32 = 50.0;
    pub const FLYER_SIZE: f32 = 34.0;

    /// Downward acceleration, pixels/frame²
    pub const GRAVITY: f32 = 0.5;
    /// Velocity after a jump (overwrites, not additive)
    pub const JUMP_VELOCITY: f32 = -8.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const OBSTACLE_GAP: u32 = 170;
    pub const OBSTACLE_SPEED: f32 = 2.0;

    /// Frames between obstacle spawns
    pub const SPAWN_INTERVAL: u32 = 90;
    /// New obstacles appear this far past the right edge
    pub const SPAWN_OFFSET: f32 = 20.0;

    /// Top segment height is drawn from [TOP_HEIGHT_MIN, TOP_HEIGHT_MAX)
    pub const TOP_HEIGHT_MIN: u32 = 40;
    pub const TOP_HEIGHT_MAX: u32 = 160;

    pub const AUTOPILOT_MARGIN: f32 = 12.0;
}
