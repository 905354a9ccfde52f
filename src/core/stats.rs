//! Per-session statistics.

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;

/// Moves, matches and timing for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Completed two-card selections.
    pub moves: u32,
    /// Pairs found so far.
    pub matched_pairs: u32,
    /// Time of the first accepted reveal.
    pub started_at: Option<Timestamp>,
    /// Time the last pair was found.
    pub completed_at: Option<Timestamp>,
}

impl SessionStats {
    /// Fresh stats for a new game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole seconds from start to completion, floored.
    ///
    /// Zero if the game never started or has not been completed.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => end.millis_since(start) / 1000,
            _ => 0,
        }
    }

    /// Whole seconds played as of `now`, for a running timer display.
    ///
    /// Stops counting once the game is completed.
    #[must_use]
    pub fn elapsed_secs_at(&self, now: Timestamp) -> u64 {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => end.millis_since(start) / 1000,
            (Some(start), None) => now.millis_since(start) / 1000,
            _ => 0,
        }
    }

    /// Game completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}
