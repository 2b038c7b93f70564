//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. The defaults reproduce the
//! classic feel; a JSON file can override any subset of fields.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a tuning set was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// JSON could not be parsed into a `Tuning`
    Parse(String),
    /// A field that must be strictly positive was not
    NotPositive { field: &'static str, value: f32 },
    /// `top_height_min..top_height_max` is empty
    EmptyTopRange { min: u32, max: u32 },
    /// The tallest obstacle would leave no bottom segment on screen.
    /// `bottom_y` is `None` when it does not even fit in a `u32`.
    GapOffScreen {
        bottom_y: Option<u32>,
        screen_height: f32,
    },
    /// The flyer does not fit inside the play area
    FlyerTooLarge { size: f32, screen_height: f32 },
    /// Jump velocity must point upward
    JumpNotUpward { jump_velocity: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid tuning json: {msg}"),
            Self::NotPositive { field, value } => {
                write!(f, "{field} must be > 0, got {value}")
            }
            Self::EmptyTopRange { min, max } => {
                write!(f, "top height range is empty: {min}..{max}")
            }
            Self::GapOffScreen {
                bottom_y: Some(bottom_y),
                screen_height,
            } => write!(
                f,
                "bottom segment starts at {bottom_y}, below screen height {screen_height}"
            ),
            Self::GapOffScreen {
                bottom_y: None,
                screen_height,
            } => write!(
                f,
                "bottom segment start overflows, screen height is {screen_height}"
            ),
            Self::FlyerTooLarge {
                size,
                screen_height,
            } => write!(
                f,
                "flyer size {size} does not fit in screen height {screen_height}"
            ),
            Self::JumpNotUpward { jump_velocity } => {
                write!(f, "jump velocity must be negative (upward), got {jump_velocity}")
            }
        }
    }
}

impl std::error::Error for TuningError {}

/// Gameplay constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Fixed horizontal position of the flyer's left edge
    pub flyer_x: f32,
    /// Flyer is a square of this side length
    pub flyer_size: f32,
    /// Added to vertical velocity every frame (positive = down)
    pub gravity: f32,
    /// Velocity set by a jump (negative = up)
    pub jump_velocity: f32,
    pub obstacle_width: f32,
    /// Vertical gap between top and bottom segments
    pub gap: u32,
    /// Pixels per frame the obstacles scroll left
    pub obstacle_speed: f32,
    /// Frames between spawns
    pub spawn_interval: u32,
    /// Spawn x = screen_width + spawn_offset
    pub spawn_offset: f32,
    /// Inclusive lower bound for the top segment height
    pub top_height_min: u32,
    /// Exclusive upper bound for the top segment height
    pub top_height_max: u32,
    /// Clearance the autopilot keeps above the bottom segment
    pub autopilot_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            flyer_x: FLYER_X,
            flyer_size: FLYER_SIZE,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            obstacle_width: OBSTACLE_WIDTH,
            gap: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_offset: SPAWN_OFFSET,
            top_height_min: TOP_HEIGHT_MIN,
            top_height_max: TOP_HEIGHT_MAX,
            autopilot_margin: AUTOPILOT_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning set from JSON. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check the constants describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("flyer_size", self.flyer_size),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("gap", self.gap as f32),
            ("spawn_interval", self.spawn_interval as f32),
        ];
        for (field, value) in positive {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.top_height_min >= self.top_height_max {
            return Err(TuningError::EmptyTopRange {
                min: self.top_height_min,
                max: self.top_height_max,
            });
        }

        // Range is non-empty here, so top_height_max >= 1
        let deepest_bottom = self
            .top_height_max
            .checked_sub(1)
            .and_then(|tallest| tallest.checked_add(self.gap));
        match deepest_bottom {
            Some(bottom_y) if (bottom_y as f32) < self.screen_height => {}
            bottom_y => {
                return Err(TuningError::GapOffScreen {
                    bottom_y,
                    screen_height: self.screen_height,
                });
            }
        }

        if self.flyer_size >= self.screen_height {
            return Err(TuningError::FlyerTooLarge {
                size: self.flyer_size,
                screen_height: self.screen_height,
            });
        }

        if !(self.jump_velocity < 0.0) {
            return Err(TuningError::JumpNotUpward {
                jump_velocity: self.jump_velocity,
            });
        }

        Ok(())
    }

    /// Range the top segment height is drawn from
    #[inline]
    pub fn top_height_range(&self) -> Range<u32> {
        self.top_height_min..self.top_height_max
    }

    /// Initial flyer y: vertically centered
    #[inline]
    pub fn flyer_start_y(&self) -> f32 {
        self.screen_height / 2.0 - self.flyer_size / 2.0
    }

    /// x at which new obstacles appear
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.screen_width + self.spawn_offset
    }
}
