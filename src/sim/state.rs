//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]; there are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; nothing moves until reset
    GameOver,
}

/// Something that happened during simulation, for audio/UI glue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    ObstacleSpawned { id: u32, top_height: u32 },
    ObstacleDespawned { id: u32 },
    Scored { id: u32, score: u64 },
    /// Flyer hit obstacle `id`; ends the run
    Collided { id: u32 },
    /// Flyer left the play area vertically; ends the run
    OutOfBounds,
    Reset,
}

/// The player-controlled flyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flyer {
    /// Top-left corner. x is fixed after spawn.
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = down)
    pub vel: f32,
}

impl Flyer {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.flyer_x, tuning.flyer_start_y()),
            size: Vec2::splat(tuning.flyer_size),
            vel: 0.0,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A top/bottom barrier pair with a vertical gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top segment spans y in [0, top_height]
    pub top_height: u32,
    /// Bottom segment spans y in [bottom_y, screen_height]. Always top_height + gap.
    pub bottom_y: u32,
    /// Set once the flyer has been awarded this obstacle
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, width: f32, top_height: u32, gap: u32) -> Self {
        Self {
            id,
            x,
            width,
            top_height,
            bottom_y: top_height + gap,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Fully past the left screen edge
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn top_segment(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.right(), self.top_height as f32),
        )
    }

    pub fn bottom_segment(&self, screen_height: f32) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.bottom_y as f32),
            Vec2::new(self.right(), screen_height),
        )
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Constants this run was started with, validated on construction
    pub(crate) tuning: Tuning,
    /// Gap height RNG; keeps advancing across resets
    rng: Pcg32,
    /// Obstacles passed this run
    pub score: u64,
    pub phase: GamePhase,
    /// Frames simulated while running
    pub time_ticks: u64,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    pub flyer: Flyer,
    /// Active obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    /// Events from the last tick, plus any input events since then
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// How many leading `events` belong to the last tick
    #[serde(skip)]
    tick_events: usize,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::from_valid_tuning(seed, Tuning::default())
    }

    /// Create a game state with custom constants, rejecting unplayable ones
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::from_valid_tuning(seed, tuning))
    }

    fn from_valid_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            spawn_timer: 0,
            flyer: Flyer::new(&tuning),
            obstacles: Vec::new(),
            events: Vec::new(),
            tick_events: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Overwrite vertical velocity with the jump velocity. Ignored after game over.
    pub fn jump(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.flyer.vel = self.tuning.jump_velocity;
        self.events.push(GameEvent::Jumped);
    }

    /// Reinitialize flyer, obstacles and session counters for a new run
    pub fn reset(&mut self) {
        log::info!(
            "Reset after {} frames (score {}, phase {:?})",
            self.time_ticks,
            self.score,
            self.phase
        );
        self.score = 0;
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
        self.spawn_timer = 0;
        self.flyer = Flyer::new(&self.tuning);
        self.obstacles.clear();
        self.next_id = 1;
        self.events.push(GameEvent::Reset);
    }

    /// Enter game over. Only the first call has any effect; returns whether it did.
    pub fn end_run(&mut self, cause: GameEvent) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(cause);
        log::info!(
            "Game over at frame {} with score {} ({:?})",
            self.time_ticks,
            self.score,
            cause
        );
        true
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.tick_events = 0;
        std::mem::take(&mut self.events)
    }

    /// Drop the previous tick's events, keeping input events pushed since
    pub(crate) fn begin_tick_events(&mut self) {
        let stale = self.tick_events.min(self.events.len());
        self.events.drain(..stale);
        self.tick_events = 0;
    }

    /// Mark everything currently in `events` as belonging to this tick
    pub(crate) fn end_tick_events(&mut self) {
        self.tick_events = self.events.len();
    }
}
