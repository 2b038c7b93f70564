//! Gap Flyer entry point
//!
//! Native headless runner: plays autopilot games without a window and
//! prints the resulting leaderboard.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use gap_flyer::runner::run_autopilot;
use gap_flyer::{HighScores, Tuning};

#[derive(Parser)]
#[command(name = "gap-flyer")]
#[command(about = "Play headless autopilot runs of Gap Flyer")]
struct Args {
    /// Seed of the first run; later runs use seed + 1, seed + 2, ...
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of runs to play
    #[arg(long, default_value_t = 5)]
    runs: u64,
    /// Frame cap per run (60 frames ~ one second)
    #[arg(long, default_value_t = 18_000)]
    max_frames: u64,
    /// JSON file overriding gameplay constants
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Leaderboard JSON file, loaded if present and rewritten afterwards
    #[arg(long)]
    scores: Option<PathBuf>,
    /// Print the last frame of each run as JSON
    #[arg(long)]
    snapshot: bool,
}

fn load_tuning(path: Option<&Path>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed reading tuning {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("invalid tuning {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn load_scores(path: Option<&Path>) -> Result<HighScores> {
    match path {
        Some(path) if path.exists() => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed reading scores {}", path.display()))?;
            HighScores::from_json(&json)
                .with_context(|| format!("invalid scores file {}", path.display()))
        }
        _ => {
            log::info!("No high scores found, starting fresh");
            Ok(HighScores::new())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let tuning = load_tuning(args.tuning.as_deref())?;
    let mut scores = load_scores(args.scores.as_deref())?;

    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run);
        let artifact = run_autopilot(&tuning, seed, args.max_frames)?;
        let metrics = &artifact.metrics;

        let rank = scores.record_run(metrics);
        println!(
            "run {:>3}  seed {:>6}  score {:>5}  frames {:>6}  jumps {:>5}{}{}",
            run + 1,
            seed,
            metrics.final_score,
            metrics.frame_count,
            metrics.jumps,
            if metrics.game_over { "  (crashed)" } else { "" },
            rank.map(|r| format!("  new #{r}")).unwrap_or_default(),
        );

        if args.snapshot {
            println!("{}", serde_json::to_string(&artifact.final_snapshot)?);
        }
    }

    println!();
    println!("High scores:");
    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "{:>3}. {:>5}  ({} frames, seed {})",
            i + 1,
            entry.score,
            entry.frames,
            entry.seed
        );
    }

    if let Some(path) = &args.scores {
        let json = scores.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("failed writing scores {}", path.display()))?;
        log::info!("High scores saved ({} entries)", scores.entries.len());
    }

    Ok(())
}
