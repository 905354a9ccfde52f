//! # memory-match
//!
//! Engine for the memory-matching card game: a board of face-down pairs,
//! two reveals per move, a fixed delay before each pair is checked, and a
//! win once every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All game data lives in `MatchState`. It only
//!    changes through the `reveal` and `resolve` transitions.
//!
//! 2. **Silent Debouncing**: Reveals that are not allowed right now are
//!    no-ops reported as `RevealOutcome::Rejected`, never errors. Only an
//!    out-of-range index is an error.
//!
//! 3. **Tokened Timers**: The resolution delay is a cancellable timer
//!    carrying a `ResolutionToken`. Starting a new game makes every
//!    outstanding token stale.
//!
//! 4. **Injected Time and Randomness**: Sessions take a `Clock` and a
//!    seeded `GameRng`, so every game can be replayed exactly.
//!
//! ## Example
//!
//! ```
//! use memory_match::{CardIndex, GameRng, ManualClock, MatchConfig, MemoryGame, Phase};
//!
//! let clock = ManualClock::new();
//! let mut game = MemoryGame::new(MatchConfig::default(), GameRng::new(42), clock.clone()).unwrap();
//!
//! game.reveal(CardIndex::new(0)).unwrap();
//! game.reveal(CardIndex::new(1)).unwrap();
//! assert_eq!(game.phase(), Phase::Resolving);
//!
//! clock.advance(1000);
//! assert!(game.tick().is_some());
//! assert_eq!(game.state().stats().moves, 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: Symbols, cards, board, dealing, RNG, clocks, configuration
//! - `engine`: State machine, resolution timer, session, snapshots
//! - `autoplay`: Agents and a runner for simulated games
//! - `error`: Contract and configuration errors

pub mod core;
pub mod engine;
pub mod autoplay;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, Symbol,
    Card, CardIndex, Board,
    deal_symbols,
    GameRng, GameRngState,
    Clock, ManualClock, SystemClock, Timestamp,
    MatchConfig, SessionStats,
    Action, ActionRecord,
};

pub use crate::engine::{
    MatchState, Phase, RejectReason, RevealOutcome, ResolveOutcome,
    ResolutionTimer, ResolutionToken, PendingResolution,
    MemoryGame,
    MatchSnapshot, CardView,
};

pub use crate::autoplay::{
    Agent, RandomAgent, PerfectMemoryAgent,
    AutoplayConfig, AutoplayError, GameSummary,
    play_game, play_games,
};

pub use crate::error::{ConfigError, EngineError, SnapshotError};
