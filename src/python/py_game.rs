//! Game session bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{CardIndex, GameRng, ManualClock, MatchConfig};
use crate::engine::{MemoryGame, Phase, ResolveOutcome, RevealOutcome};

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::OneRevealed => "one_revealed",
        Phase::Resolving => "resolving",
        Phase::Won => "won",
    }
}

/// Python wrapper for a memory match session.
///
/// Time only moves when `advance` is called, so games are reproducible.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    game: MemoryGame<ManualClock>,
    clock: ManualClock,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new session.
    ///
    /// # Arguments
    /// - pair_count: Number of symbol pairs on the board
    /// - resolution_delay_ms: Pause before a selected pair is checked
    /// - seed: RNG seed for deterministic deals
    #[new]
    #[pyo3(signature = (pair_count = 8, resolution_delay_ms = 1000, seed = 42))]
    fn new(pair_count: usize, resolution_delay_ms: u64, seed: u64) -> PyResult<Self> {
        let config = MatchConfig::new()
            .with_pair_count(pair_count)
            .with_resolution_delay_ms(resolution_delay_ms);
        let clock = ManualClock::new();
        let game = MemoryGame::new(config, GameRng::new(seed), clock.clone())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game, clock })
    }

    /// Deal a new board, discarding any pending resolution.
    fn new_game(&mut self) {
        self.game.new_game();
    }

    /// Reveal a card.
    ///
    /// Returns "revealed", "pair_selected" or "rejected".
    /// Raises IndexError for indices off the board.
    fn reveal(&mut self, index: u8) -> PyResult<&'static str> {
        let outcome = self
            .game
            .reveal(CardIndex::new(index))
            .map_err(|e| PyIndexError::new_err(e.to_string()))?;
        Ok(match outcome {
            RevealOutcome::Revealed { .. } => "revealed",
            RevealOutcome::PairSelected { .. } => "pair_selected",
            RevealOutcome::Rejected(_) => "rejected",
        })
    }

    /// Move the session clock forward.
    fn advance(&mut self, ms: u64) {
        self.clock.advance(ms);
    }

    /// Fire the pending resolution if due.
    ///
    /// Returns "matched", "mismatched", "stale" or None if nothing was due.
    fn tick(&mut self) -> Option<&'static str> {
        self.game.tick().map(|outcome| match outcome {
            ResolveOutcome::Matched { .. } => "matched",
            ResolveOutcome::Mismatched { .. } => "mismatched",
            ResolveOutcome::Stale => "stale",
        })
    }

    /// Visible faces: symbol id for face-up cards, None for face-down.
    fn faces(&self) -> Vec<Option<u8>> {
        self.game
            .snapshot()
            .cards
            .iter()
            .map(|c| c.face.map(|s| s.0))
            .collect()
    }

    /// Indices a reveal would currently be accepted for.
    fn legal_reveals(&self) -> Vec<u8> {
        self.game.state().legal_reveals().iter().map(|i| i.0).collect()
    }

    /// Bincode-encoded snapshot.
    fn snapshot_bytes(&self) -> PyResult<Vec<u8>> {
        self.game
            .snapshot()
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Text grid of the board.
    fn render(&self) -> String {
        self.game.render()
    }

    #[getter]
    fn phase(&self) -> &'static str {
        phase_name(self.game.phase())
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.game.state().stats().moves
    }

    #[getter]
    fn matched_pairs(&self) -> u32 {
        self.game.state().stats().matched_pairs
    }

    #[getter]
    fn is_won(&self) -> bool {
        self.game.phase() == Phase::Won
    }

    #[getter]
    fn elapsed_secs(&self) -> u64 {
        self.game.elapsed_secs()
    }

    fn __repr__(&self) -> String {
        let stats = self.game.state().stats();
        format!(
            "MemoryGame(phase={}, moves={}, matched={}/{})",
            phase_name(self.game.phase()),
            stats.moves,
            stats.matched_pairs,
            self.game.config().pair_count
        )
    }
}
