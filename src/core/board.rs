//! The board: an ordered row of cards dealt in pairs.
//!
//! The board owns its cards exclusively. It only offers the primitive
//! flips the engine needs; rules about *when* a flip is allowed live in
//! `engine::state`.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardIndex};
use super::config::MAX_PAIR_COUNT;
use super::deal::deal_symbols;
use super::rng::GameRng;
use super::symbol::Symbol;
use crate::error::EngineError;

/// Cards for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Deal a fresh face-down board.
    pub fn deal(alphabet_len: usize, pair_count: usize, rng: &mut GameRng) -> Self {
        Self::from_symbols(deal_symbols(alphabet_len, pair_count, rng))
    }

    /// Build a face-down board with a fixed layout.
    ///
    /// Used by tests and replays. The caller is responsible for supplying
    /// each symbol exactly twice.
    ///
    /// # Panics
    ///
    /// Panics if more than `2 * MAX_PAIR_COUNT` symbols are supplied, since
    /// card indices are `u8`.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let cards: Vec<Card> = symbols.into_iter().map(Card::face_down).collect();
        assert!(
            cards.len() <= MAX_PAIR_COUNT * 2,
            "board of {} cards exceeds maximum of {}",
            cards.len(),
            MAX_PAIR_COUNT * 2
        );
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Bounds-check an index.
    pub fn check(&self, index: CardIndex) -> Result<(), EngineError> {
        if index.index() < self.cards.len() {
            Ok(())
        } else {
            Err(EngineError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
        }
    }

    /// Get a card.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.index())
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over `(index, card)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardIndex, &Card)> {
        CardIndex::all(self.cards.len()).zip(self.cards.iter())
    }

    /// Turn a card face-up.
    pub(crate) fn reveal(&mut self, index: CardIndex) {
        self.cards[index.index()].revealed = true;
    }

    /// Turn a card back face-down. Matched cards stay face-up.
    pub(crate) fn hide(&mut self, index: CardIndex) {
        let card = &mut self.cards[index.index()];
        if !card.matched {
            card.revealed = false;
        }
    }

    /// Mark a card as part of a found pair.
    pub(crate) fn mark_matched(&mut self, index: CardIndex) {
        let card = &mut self.cards[index.index()];
        card.revealed = true;
        card.matched = true;
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Every card matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    /// Index of the other card carrying the same symbol.
    #[must_use]
    pub fn partner_of(&self, index: CardIndex) -> Option<CardIndex> {
        let symbol = self.get(index)?.symbol;
        self.iter()
            .find(|(i, card)| *i != index && card.symbol == symbol)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_symbols([0, 1, 0, 1].map(Symbol))
    }

    #[test]
    fn test_deal_size() {
        let mut rng = GameRng::new(5);
        let board = Board::deal(16, 8, &mut rng);
        assert_eq!(board.len(), 16);
        assert_eq!(board.pair_count(), 8);
        assert!(board.cards().iter().all(|c| !c.revealed && !c.matched));
    }

    #[test]
    fn test_check_bounds() {
        let board = board();
        assert!(board.check(CardIndex(3)).is_ok());
        assert_eq!(
            board.check(CardIndex(4)),
            Err(EngineError::IndexOutOfRange {
                index: CardIndex(4),
                len: 4
            })
        );
    }

    #[test]
    fn test_hide_keeps_matched_face_up() {
        let mut board = board();
        board.mark_matched(CardIndex(0));
        board.hide(CardIndex(0));

        let card = board.get(CardIndex(0)).unwrap();
        assert!(card.matched);
        assert!(card.revealed);
    }

    #[test]
    fn test_partner_of() {
        let board = board();
        assert_eq!(board.partner_of(CardIndex(0)), Some(CardIndex(2)));
        assert_eq!(board.partner_of(CardIndex(3)), Some(CardIndex(1)));
        assert_eq!(board.partner_of(CardIndex(9)), None);
    }

    #[test]
    fn test_all_matched() {
        let mut board = board();
        assert!(!board.all_matched());
        for i in 0..4 {
            board.mark_matched(CardIndex(i));
        }
        assert!(board.all_matched());
        assert_eq!(board.matched_cards(), 4);
    }

    #[test]
    fn test_largest_board_indices_unique() {
        let symbols = (0..MAX_PAIR_COUNT as u8).flat_map(|s| [Symbol(s), Symbol(s)]);
        let board = Board::from_symbols(symbols);
        let indices: Vec<_> = board.iter().map(|(i, _)| i).collect();

        assert_eq!(indices.len(), MAX_PAIR_COUNT * 2);
        assert!(indices.iter().enumerate().all(|(pos, i)| i.index() == pos));
        assert_eq!(board.partner_of(CardIndex(253)), Some(CardIndex(252)));
    }

    #[test]
    #[should_panic(expected = "exceeds maximum")]
    fn test_oversized_board_rejected() {
        Board::from_symbols((0..300).map(|i| Symbol((i / 2) as u8)));
    }
}
