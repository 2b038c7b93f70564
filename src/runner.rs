//! Headless autopilot runs
//!
//! Drives the simulation without a renderer, one frame per loop iteration,
//! until the run ends or the frame cap is hit.

use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

#[derive(Clone, Debug, Serialize)]
pub struct RunMetrics {
    pub seed: u64,
    pub max_frames: u64,
    pub frame_count: u64,
    pub final_score: u64,
    pub game_over: bool,
    pub jumps: u64,
    pub obstacles_spawned: u64,
}

#[derive(Clone, Debug)]
pub struct RunArtifact {
    pub metrics: RunMetrics,
    pub final_snapshot: Snapshot,
}

/// Play one autopilot run from a fresh state
pub fn run_autopilot(tuning: &Tuning, seed: u64, max_frames: u64) -> Result<RunArtifact> {
    if max_frames == 0 {
        return Err(anyhow!("max_frames must be > 0"));
    }
    let mut state = GameState::with_tuning(seed, tuning.clone())
        .map_err(|err| anyhow!("refusing to run with invalid tuning: {err}"))?;
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut jumps = 0u64;
    let mut obstacles_spawned = 0u64;

    while state.time_ticks < max_frames && !state.is_game_over() {
        tick(&mut state, &input);
        for event in state.drain_events() {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::ObstacleSpawned { .. } => obstacles_spawned += 1,
                _ => {}
            }
        }
    }

    log::info!(
        "Run seed={} finished: score={} frames={} game_over={}",
        seed,
        state.score,
        state.time_ticks,
        state.is_game_over()
    );

    Ok(RunArtifact {
        metrics: RunMetrics {
            seed,
            max_frames,
            frame_count: state.time_ticks,
            final_score: state.score,
            game_over: state.is_game_over(),
            jumps,
            obstacles_spawned,
        },
        final_snapshot: state.snapshot(),
    })
}
