//! Game configuration.
//!
//! `MatchConfig` defines the board (pair count, alphabet), the resolution
//! delay and the layout width used for text rendering. The defaults give
//! the classic 4x4 board of 8 pairs with a one second reveal.

use serde::{Deserialize, Serialize};

use super::symbol::{Alphabet, MAX_SYMBOLS};
use crate::error::ConfigError;

/// Pairs on a default board.
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Default pause between selecting a pair and resolving it.
pub const DEFAULT_RESOLUTION_DELAY_MS: u64 = 1000;

/// Default layout width.
pub const DEFAULT_COLUMNS: usize = 4;

/// Largest pair count addressable with `u8` card indices.
pub const MAX_PAIR_COUNT: usize = 127;

/// Configuration of a memory match session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of symbol pairs on the board. The board has twice as many cards.
    pub pair_count: usize,

    /// Milliseconds between the second reveal and the match check.
    pub resolution_delay_ms: u64,

    /// Cards per row when rendering the board as a grid.
    pub columns: usize,

    /// Symbols the board is dealt from. Must hold at least `pair_count`
    /// and at most `MAX_SYMBOLS` glyphs.
    pub alphabet: Alphabet,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            resolution_delay_ms: DEFAULT_RESOLUTION_DELAY_MS,
            columns: DEFAULT_COLUMNS,
            alphabet: Alphabet::default(),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolution_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resolution_delay_ms = delay_ms;
        self
    }

    /// Set the layout width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check that a board can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.pair_count > MAX_PAIR_COUNT {
            return Err(ConfigError::TooManyPairs {
                pair_count: self.pair_count,
                max: MAX_PAIR_COUNT,
            });
        }
        if self.alphabet.len() > MAX_SYMBOLS {
            return Err(ConfigError::AlphabetTooLarge {
                alphabet_len: self.alphabet.len(),
                max: MAX_SYMBOLS,
            });
        }
        if self.alphabet.len() < self.pair_count {
            return Err(ConfigError::AlphabetTooSmall {
                alphabet_len: self.alphabet.len(),
                pair_count: self.pair_count,
            });
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.pair_count, 8);
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.resolution_delay_ms, 1000);
        assert_eq!(config.columns, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::new()
            .with_pair_count(3)
            .with_resolution_delay_ms(250)
            .with_columns(3)
            .with_alphabet(Alphabet::new(["A", "B", "C"]));

        assert_eq!(config.card_count(), 6);
        assert_eq!(config.resolution_delay_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert_eq!(
            MatchConfig::new().with_pair_count(0).validate(),
            Err(ConfigError::NoPairs)
        );
        assert_eq!(
            MatchConfig::new().with_pair_count(17).validate(),
            Err(ConfigError::AlphabetTooSmall {
                alphabet_len: 16,
                pair_count: 17,
            })
        );
        assert!(matches!(
            MatchConfig::new().with_pair_count(200).validate(),
            Err(ConfigError::TooManyPairs { .. })
        ));
        assert_eq!(
            MatchConfig::new().with_columns(0).validate(),
            Err(ConfigError::NoColumns)
        );
    }

    #[test]
    fn test_validate_rejects_oversized_alphabet() {
        let wide = |n: usize| Alphabet::new((0..n).map(|i| i.to_string()));

        assert_eq!(
            MatchConfig::new().with_alphabet(wide(300)).validate(),
            Err(ConfigError::AlphabetTooLarge {
                alphabet_len: 300,
                max: MAX_SYMBOLS,
            })
        );
        assert!(MatchConfig::new()
            .with_pair_count(MAX_PAIR_COUNT)
            .with_alphabet(wide(MAX_SYMBOLS))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_serialization_fills_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"pair_count": 4}"#).unwrap();
        assert_eq!(config.pair_count, 4);
        assert_eq!(config.resolution_delay_ms, DEFAULT_RESOLUTION_DELAY_MS);
        assert_eq!(config.alphabet.len(), 16);
    }
}
