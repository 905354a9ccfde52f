//! The game session a UI shell talks to.
//!
//! `MemoryGame` ties a `MatchState` to its configuration, RNG, clock and
//! resolution timer. Shells drive it in one of two ways:
//!
//! - call `tick()` from their frame loop and let the built-in timer fire
//! - schedule the token returned by `reveal()` themselves and call
//!   `resolve(token)` when their own timer fires
//!
//! Either way `new_game()` invalidates whatever is still pending, so a
//! late callback can never touch the new board.

use tracing::{info, instrument};

use super::snapshot::MatchSnapshot;
use super::state::{MatchState, Phase, ResolveOutcome, RevealOutcome};
use super::timer::{ResolutionTimer, ResolutionToken};
use crate::core::{Board, CardIndex, Clock, GameRng, MatchConfig, SystemClock};
use crate::error::{ConfigError, EngineError};

/// A memory match session.
#[derive(Clone, Debug)]
pub struct MemoryGame<C: Clock = SystemClock> {
    config: MatchConfig,
    rng: GameRng,
    clock: C,
    state: MatchState,
    timer: ResolutionTimer,
}

impl MemoryGame<SystemClock> {
    /// Session on the system clock with an entropy-seeded deal.
    pub fn with_system_clock(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::from_entropy(), SystemClock::new())
    }
}

impl<C: Clock> MemoryGame<C> {
    /// Create a session and deal the first game.
    #[instrument(skip(config, rng, clock), fields(seed = rng.seed()))]
    pub fn new(config: MatchConfig, mut rng: GameRng, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::deal(config.alphabet.len(), config.pair_count, &mut rng);
        info!(pairs = config.pair_count, "game dealt");

        Ok(Self {
            config,
            rng,
            clock,
            state: MatchState::new(board, 0),
            timer: ResolutionTimer::new(),
        })
    }

    /// Throw away the current game and deal a new one.
    ///
    /// Any pending resolution is cancelled, and the generation is bumped so
    /// tokens handed out for the old board are stale from now on.
    #[instrument(skip(self), fields(old_generation = self.state.generation()))]
    pub fn new_game(&mut self) {
        if let Some(pending) = self.timer.cancel() {
            info!(token = %pending.token, "pending resolution discarded");
        }

        let generation = self.state.generation() + 1;
        let board = Board::deal(self.config.alphabet.len(), self.config.pair_count, &mut self.rng);
        self.state = MatchState::new(board, generation);
        info!(generation, "new game dealt");
    }

    /// Reveal a card. A completed pair schedules its resolution.
    #[instrument(level = "debug", skip(self), fields(generation = self.state.generation()))]
    pub fn reveal(&mut self, index: CardIndex) -> Result<RevealOutcome, EngineError> {
        let now = self.clock.now();
        let outcome = self.state.reveal(index, now)?;
        if let Some(token) = outcome.token() {
            self.timer
                .schedule(token, now.plus_millis(self.config.resolution_delay_ms));
        }
        Ok(outcome)
    }

    /// Fire the built-in timer if its resolution is due.
    ///
    /// Returns `None` when nothing was due.
    #[instrument(level = "debug", skip(self), fields(generation = self.state.generation()))]
    pub fn tick(&mut self) -> Option<ResolveOutcome> {
        let now = self.clock.now();
        let token = self.timer.take_due(now)?;
        Some(self.state.resolve(token, now))
    }

    /// Resolve with a token from an external scheduler.
    ///
    /// Stale tokens are ignored. A current token also clears the built-in
    /// timer so the pair is not resolved twice.
    #[instrument(level = "debug", skip(self), fields(generation = self.state.generation()))]
    pub fn resolve(&mut self, token: ResolutionToken) -> ResolveOutcome {
        let now = self.clock.now();
        let outcome = self.state.resolve(token, now);
        if outcome != ResolveOutcome::Stale {
            self.timer.cancel();
        }
        outcome
    }

    // === Read access ===

    /// Visible state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.state)
    }

    /// Text grid of the board.
    #[must_use]
    pub fn render(&self) -> String {
        self.snapshot()
            .render(&self.config.alphabet, self.config.columns)
    }

    /// Full state, including face-down faces.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Built-in timer, for shells that want to know when to tick next.
    #[must_use]
    pub fn timer(&self) -> &ResolutionTimer {
        &self.timer
    }

    /// Running elapsed seconds, frozen once the game is won.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.state.stats().elapsed_secs_at(self.clock.now())
    }
}
