//! Read-only views for rendering.
//!
//! A snapshot never leaks the face of a face-down card: `CardView::face`
//! is `None` unless the card is revealed or matched. Snapshots encode to
//! bincode for handing across a process or FFI boundary.

use serde::{Deserialize, Serialize};

use super::state::{MatchState, Phase};
use crate::core::{Alphabet, CardIndex, SessionStats, Symbol};
use crate::error::SnapshotError;

/// What the player can see of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub index: CardIndex,
    /// Face value, only present while the card is face-up.
    pub face: Option<Symbol>,
    pub revealed: bool,
    pub matched: bool,
}

/// Everything a shell needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub cards: Vec<CardView>,
    pub selection: Vec<CardIndex>,
    pub stats: SessionStats,
    pub pair_count: usize,
    pub locked: bool,
    pub generation: u64,
}

impl MatchSnapshot {
    /// Capture the visible part of a state.
    #[must_use]
    pub fn capture(state: &MatchState) -> Self {
        let cards = state
            .board()
            .iter()
            .map(|(index, card)| CardView {
                index,
                face: card.is_face_up().then_some(card.symbol),
                revealed: card.revealed,
                matched: card.matched,
            })
            .collect();

        Self {
            phase: state.phase(),
            cards,
            selection: state.selection().to_vec(),
            stats: *state.stats(),
            pair_count: state.board().pair_count(),
            locked: state.is_locked(),
            generation: state.generation(),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Render the board as a text grid, `columns` cards per row.
    ///
    /// Face-down cards show `?`, face-up cards their glyph. Matched cards
    /// are wrapped in brackets.
    #[must_use]
    pub fn render(&self, alphabet: &Alphabet, columns: usize) -> String {
        let columns = columns.max(1);
        self.cards
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|view| {
                        let glyph = view
                            .face
                            .and_then(|s| alphabet.glyph(s))
                            .unwrap_or("?");
                        if view.matched {
                            format!("[{glyph}]")
                        } else {
                            format!(" {glyph} ")
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
