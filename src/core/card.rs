//! Cards and their positional identity.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Position of a card on the board, fixed when the board is dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub u8);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw position (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Card index for board position `index`, if addressable.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().map(Self)
    }

    /// Iterate over every addressable index of a board with `len` cards.
    pub fn all(len: usize) -> impl Iterator<Item = CardIndex> {
        (0..len).map_while(Self::from_index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card.
///
/// `matched` is terminal: once set, `revealed` is also set and neither
/// flag is ever cleared for the rest of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face value.
    pub symbol: Symbol,
    /// Face-up.
    pub revealed: bool,
    /// Part of a found pair.
    pub matched: bool,
}

impl Card {
    /// A face-down, unmatched card.
    #[must_use]
    pub const fn face_down(symbol: Symbol) -> Self {
        Self {
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Visible to the player (face-up or already matched).
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }
}
