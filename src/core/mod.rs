//! Core types: symbols, cards, the board, dealing, RNG, clocks, configuration.
//!
//! Nothing in here knows the rules of play. The board only offers the
//! primitive flips; `engine` decides when they are allowed.

pub mod symbol;
pub mod card;
pub mod board;
pub mod deal;
pub mod rng;
pub mod clock;
pub mod config;
pub mod stats;
pub mod action;

pub use symbol::{Alphabet, Symbol, DEFAULT_GLYPHS, MAX_SYMBOLS};
pub use card::{Card, CardIndex};
pub use board::Board;
pub use deal::deal_symbols;
pub use rng::{GameRng, GameRngState};
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{
    MatchConfig, DEFAULT_COLUMNS, DEFAULT_PAIR_COUNT, DEFAULT_RESOLUTION_DELAY_MS, MAX_PAIR_COUNT,
};
pub use stats::SessionStats;
pub use action::{Action, ActionRecord};
