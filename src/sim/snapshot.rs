//! Render snapshot
//!
//! A flat copy of everything a renderer needs for one frame, so drawing code
//! never holds on to the live `GameState`.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    pub top_height: u32,
    pub bottom_y: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    pub flyer_x: f32,
    pub flyer_y: f32,
    pub flyer_width: f32,
    pub flyer_height: f32,
    /// Spawn order, oldest first
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.time_ticks,
            screen_width: self.tuning.screen_width,
            screen_height: self.tuning.screen_height,
            flyer_x: self.flyer.pos.x,
            flyer_y: self.flyer.pos.y,
            flyer_width: self.flyer.size.x,
            flyer_height: self.flyer.size.y,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: o.x,
                    width: o.width,
                    top_height: o.top_height,
                    bottom_y: o.bottom_y,
                })
                .collect(),
            score: self.score,
            game_over: self.phase == GamePhase::GameOver,
        }
    }
}
