//! Agents that pick which card to reveal next.
//!
//! Agents only ever see `MatchSnapshot`s, the same view a human player
//! gets, so they cannot peek at face-down cards.

use rustc_hash::FxHashMap;

use crate::core::{CardIndex, GameRng, Symbol};
use crate::engine::MatchSnapshot;

/// Chooses reveals from what is visible.
pub trait Agent {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Pick the next card to reveal. `None` gives up.
    fn choose(&mut self, view: &MatchSnapshot, rng: &mut GameRng) -> Option<CardIndex>;

    /// See the board after every accepted transition.
    fn observe(&mut self, _view: &MatchSnapshot) {}

    /// Forget everything before a new game.
    fn reset(&mut self) {}
}

/// Face-down cards in a view.
fn face_down(view: &MatchSnapshot) -> Vec<CardIndex> {
    view.cards
        .iter()
        .filter(|c| c.face.is_none())
        .map(|c| c.index)
        .collect()
}

/// Reveals a uniformly random face-down card. Remembers nothing.
#[derive(Clone, Debug, Default)]
pub struct RandomAgent;

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, view: &MatchSnapshot, rng: &mut GameRng) -> Option<CardIndex> {
        rng.choose(&face_down(view)).copied()
    }
}

/// Remembers every face it has seen and never misses a known pair.
#[derive(Clone, Debug, Default)]
pub struct PerfectMemoryAgent {
    seen: FxHashMap<CardIndex, Symbol>,
}

impl PerfectMemoryAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of face-down cards whose face is remembered.
    #[must_use]
    pub fn remembered(&self) -> usize {
        self.seen.len()
    }

    /// A remembered, still face-down card carrying `symbol`, other than `except`.
    fn known(&self, view: &MatchSnapshot, symbol: Symbol, except: CardIndex) -> Option<CardIndex> {
        let mut candidates: Vec<_> = self
            .seen
            .iter()
            .filter(|&(&i, &s)| s == symbol && i != except && view.cards[i.index()].face.is_none())
            .map(|(&i, _)| i)
            .collect();
        candidates.sort_unstable();
        candidates.first().copied()
    }

    /// A remembered pair that is still face-down.
    fn known_pair(&self, view: &MatchSnapshot) -> Option<CardIndex> {
        let mut indices: Vec<_> = self.seen.keys().copied().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .find(|&i| self.known(view, self.seen[&i], i).is_some())
    }

    /// A face-down card never seen before.
    fn unseen(&self, view: &MatchSnapshot, rng: &mut GameRng) -> Option<CardIndex> {
        let unseen: Vec<_> = face_down(view)
            .into_iter()
            .filter(|i| !self.seen.contains_key(i))
            .collect();
        rng.choose(&unseen).copied()
    }
}

impl Agent for PerfectMemoryAgent {
    fn name(&self) -> &str {
        "perfect-memory"
    }

    fn choose(&mut self, view: &MatchSnapshot, rng: &mut GameRng) -> Option<CardIndex> {
        match view.selection.as_slice() {
            [first] => {
                let symbol = view.cards[first.index()].face?;
                self.known(view, symbol, *first)
                    .or_else(|| self.unseen(view, rng))
                    .or_else(|| rng.choose(&face_down(view)).copied())
            }
            _ => self
                .known_pair(view)
                .or_else(|| self.unseen(view, rng))
                .or_else(|| rng.choose(&face_down(view)).copied()),
        }
    }

    fn observe(&mut self, view: &MatchSnapshot) {
        for card in &view.cards {
            if card.matched {
                self.seen.remove(&card.index);
            } else if let Some(face) = card.face {
                self.seen.insert(card.index, face);
            }
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
    }
}
