//! High score leaderboard system
//!
//! Tracks the top 10 finished runs. Serializes to JSON so a host can keep it
//! between sessions; the simulation itself never touches storage.

use serde::{Deserialize, Serialize};

use crate::runner::RunMetrics;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Obstacles passed
    pub score: u64,
    /// Frames survived
    pub frames: u64,
    /// Seed the run was started from
    pub seed: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, frames: u64, seed: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            frames,
            seed,
        };

        // Ties keep the older entry ahead
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Record a finished headless run
    pub fn record_run(&mut self, metrics: &RunMetrics) -> Option<usize> {
        self.add_score(metrics.final_score, metrics.frame_count, metrics.seed)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut scores: HighScores = serde_json::from_str(json)?;
        // Hand-edited files may be unsorted or too long
        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.retain(|e| e.score > 0);
        scores.entries.truncate(MAX_HIGH_SCORES);
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.add_score(0, 100, 1), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sorted_descending_with_ranks() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(5, 600, 1), Some(1));
        assert_eq!(scores.add_score(9, 900, 2), Some(1));
        assert_eq!(scores.add_score(7, 700, 3), Some(2));
        assert_eq!(scores.add_score(7, 710, 4), Some(3));

        let order: Vec<u64> = scores.entries.iter().map(|e| e.seed).collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
        assert_eq!(scores.top_score(), Some(9));
    }

    #[test]
    fn test_trims_to_max() {
        let mut scores = HighScores::new();
        for score in 1..=MAX_HIGH_SCORES as u64 {
            scores.add_score(score, score * 90, score);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);

        // Equal to the lowest does not qualify once full
        assert!(!scores.qualifies(1));

        assert_eq!(scores.add_score(4, 400, 99), Some(8));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(2));
    }

    #[test]
    fn test_record_run() {
        let metrics = RunMetrics {
            seed: 77,
            max_frames: 1000,
            frame_count: 480,
            final_score: 3,
            game_over: true,
            jumps: 40,
            obstacles_spawned: 5,
        };
        let mut scores = HighScores::new();
        assert_eq!(scores.record_run(&metrics), Some(1));
        assert_eq!(
            scores.entries[0],
            HighScoreEntry {
                score: 3,
                frames: 480,
                seed: 77
            }
        );
    }

    #[test]
    fn test_from_json_normalizes() {
        let json = r#"{ "entries": [
            { "score": 2, "frames": 10, "seed": 1 },
            { "score": 0, "frames": 10, "seed": 2 },
            { "score": 8, "frames": 10, "seed": 3 }
        ] }"#;
        let scores = HighScores::from_json(json).unwrap();
        let order: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![8, 2]);

        let again = HighScores::from_json(&scores.to_json().unwrap()).unwrap();
        assert_eq!(again.entries, scores.entries);
    }
}
