//! Error types.
//!
//! Normal play never produces errors: rejected reveals and stale timer
//! firings are reported as outcomes. Errors here mean the caller broke a
//! contract (bad index, bad configuration) or a snapshot failed to encode.

use derive_more::{Display, Error};

use crate::core::CardIndex;

/// Contract violation against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Card index does not exist on the current board.
    #[display("card index {index} out of range for board of {len} cards")]
    IndexOutOfRange {
        /// The offending index.
        index: CardIndex,
        /// Number of cards on the board.
        len: usize,
    },
}

/// Invalid `MatchConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// A board needs at least one pair.
    #[display("pair count must be at least 1")]
    NoPairs,
    /// Not enough distinct symbols to deal the requested pairs.
    #[display("alphabet has {alphabet_len} symbols, {pair_count} pairs requested")]
    AlphabetTooSmall {
        /// Size of the configured alphabet.
        alphabet_len: usize,
        /// Requested pair count.
        pair_count: usize,
    },
    /// Symbols are `u8`, so glyphs past the first 256 would alias.
    #[display("alphabet has {alphabet_len} symbols, maximum is {max}")]
    AlphabetTooLarge {
        /// Size of the configured alphabet.
        alphabet_len: usize,
        /// Largest supported alphabet.
        max: usize,
    },
    /// Card indices and symbols are `u8`.
    #[display("pair count {pair_count} exceeds maximum of {max}")]
    TooManyPairs {
        /// Requested pair count.
        pair_count: usize,
        /// Largest supported pair count.
        max: usize,
    },
    /// Layout width for rendering.
    #[display("column count must be at least 1")]
    NoColumns,
}

/// Snapshot could not be encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("snapshot codec error: {message}")]
pub struct SnapshotError {
    /// Underlying codec message.
    pub message: String,
}

impl SnapshotError {
    /// Wrap a codec error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        Self::new(err.to_string())
    }
}
