//! Match state and its transitions.
//!
//! `MatchState` is plain data plus two transitions:
//!
//! - `reveal(index, now)`: turn a card face-up, possibly completing a pair
//! - `resolve(token, now)`: check a completed pair once its delay elapsed
//!
//! ```text
//!   Idle ──reveal──▶ OneRevealed ──reveal──▶ Resolving ──resolve──▶ Idle
//!                                                  │
//!                                                  └──resolve (last pair)──▶ Won
//! ```
//!
//! Reveals that are not allowed right now (locked, already selected,
//! already matched, game won) are silent no-ops reported as
//! `RevealOutcome::Rejected`. Only an out-of-range index is an error.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace, warn};

use super::timer::ResolutionToken;
use crate::core::{Action, ActionRecord, Board, CardIndex, SessionStats, Symbol, Timestamp};
use crate::error::EngineError;

/// Where the game is in its reveal/resolve cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No unresolved card is face-up.
    Idle,
    /// One card selected.
    OneRevealed,
    /// Two cards selected, waiting for the resolution delay.
    Resolving,
    /// Every pair found. Terminal.
    Won,
}

/// Why a reveal was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The game is over.
    GameWon,
    /// A pair is waiting to be resolved.
    Locked,
    /// Two cards are already selected.
    SelectionFull,
    /// This card is already selected.
    AlreadySelected,
    /// This card is already part of a found pair.
    AlreadyMatched,
}

/// Result of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// First card of a pair turned face-up.
    Revealed {
        index: CardIndex,
        symbol: Symbol,
    },
    /// Second card turned face-up; the pair must now be resolved with `token`.
    PairSelected {
        first: CardIndex,
        second: CardIndex,
        token: ResolutionToken,
    },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl RevealOutcome {
    /// Whether the reveal changed the state.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, RevealOutcome::Rejected(_))
    }

    /// Token to resolve with, if this reveal completed a pair.
    #[must_use]
    pub fn token(&self) -> Option<ResolutionToken> {
        match self {
            RevealOutcome::PairSelected { token, .. } => Some(*token),
            _ => None,
        }
    }
}

/// Result of a resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveOutcome {
    /// The pair matched and stays face-up. `won` if it was the last pair.
    Matched {
        first: CardIndex,
        second: CardIndex,
        won: bool,
    },
    /// The pair did not match and was turned face-down.
    Mismatched { first: CardIndex, second: CardIndex },
    /// The token does not name the pending resolution. Nothing changed.
    Stale,
}

/// Complete state of one game.
///
/// Cloning is cheap: the history is an `im::Vector`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    board: Board,
    selection: SmallVec<[CardIndex; 2]>,
    stats: SessionStats,
    locked: bool,
    generation: u64,
    history: Vector<ActionRecord>,
}

impl MatchState {
    /// Start a game on `board`.
    ///
    /// `generation` must differ from every earlier game of the same session,
    /// otherwise tokens from those games would be accepted here.
    #[must_use]
    pub fn new(board: Board, generation: u64) -> Self {
        Self {
            board,
            selection: SmallVec::new(),
            stats: SessionStats::new(),
            locked: false,
            generation,
            history: Vector::new(),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Selected, unresolved cards (0, 1 or 2).
    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        &self.selection
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reveals are refused while a pair waits for resolution.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accepted transitions in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.stats.is_complete() {
            Phase::Won
        } else if self.locked {
            Phase::Resolving
        } else if self.selection.len() == 1 {
            Phase::OneRevealed
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase() == Phase::Won
    }

    /// Token of the resolution currently pending, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<ResolutionToken> {
        (self.locked && self.selection.len() == 2)
            .then(|| ResolutionToken::new(self.generation, self.stats.moves))
    }

    /// Why a reveal of `index` would be refused right now.
    fn rejection(&self, index: CardIndex) -> Option<RejectReason> {
        if self.stats.is_complete() {
            Some(RejectReason::GameWon)
        } else if self.locked {
            Some(RejectReason::Locked)
        } else if self.selection.len() >= 2 {
            Some(RejectReason::SelectionFull)
        } else if self.selection.contains(&index) {
            Some(RejectReason::AlreadySelected)
        } else if self.board.get(index).is_some_and(|c| c.matched) {
            Some(RejectReason::AlreadyMatched)
        } else {
            None
        }
    }

    /// Cards a reveal would currently be accepted for.
    #[must_use]
    pub fn legal_reveals(&self) -> Vec<CardIndex> {
        self.board
            .iter()
            .map(|(index, _)| index)
            .filter(|&index| self.rejection(index).is_none())
            .collect()
    }

    // === Transitions ===

    /// Turn a card face-up.
    ///
    /// Returns `PairSelected` with the token to resolve with once the
    /// second card of a pair is up. The state is then locked until
    /// `resolve` is called with that token.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn reveal(&mut self, index: CardIndex, now: Timestamp) -> Result<RevealOutcome, EngineError> {
        self.board.check(index)?;

        if let Some(reason) = self.rejection(index) {
            trace!(?reason, "reveal rejected");
            return Ok(RevealOutcome::Rejected(reason));
        }

        if self.stats.started_at.is_none() {
            self.stats.started_at = Some(now);
        }

        self.board.reveal(index);
        self.selection.push(index);
        self.record(Action::Reveal(index), now);

        if self.selection.len() == 2 {
            let (first, second) = (self.selection[0], self.selection[1]);
            self.stats.moves += 1;
            self.locked = true;
            let token = ResolutionToken::new(self.generation, self.stats.moves);
            debug!(%first, %second, moves = self.stats.moves, "pair selected");
            Ok(RevealOutcome::PairSelected {
                first,
                second,
                token,
            })
        } else {
            let symbol = self.board.cards()[index.index()].symbol;
            debug!(%symbol, "card revealed");
            Ok(RevealOutcome::Revealed { index, symbol })
        }
    }

    /// Check the selected pair.
    ///
    /// Tokens from another game or another move, or arriving while nothing
    /// is pending, are stale and ignored.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn resolve(&mut self, token: ResolutionToken, now: Timestamp) -> ResolveOutcome {
        let (first, second) = match (self.pending_token(), &self.selection[..]) {
            (Some(pending), &[first, second]) if pending == token => (first, second),
            _ => {
                warn!(%token, "stale resolution ignored");
                return ResolveOutcome::Stale;
            }
        };

        let cards = self.board.cards();
        let matched = cards[first.index()].symbol == cards[second.index()].symbol;

        if matched {
            self.board.mark_matched(first);
            self.board.mark_matched(second);
            self.stats.matched_pairs += 1;
        } else {
            self.board.hide(first);
            self.board.hide(second);
        }

        self.selection.clear();
        self.locked = false;
        self.record(
            Action::Resolve {
                first,
                second,
                matched,
            },
            now,
        );

        if !matched {
            debug!(%first, %second, "pair mismatched");
            return ResolveOutcome::Mismatched { first, second };
        }

        let won = self.stats.matched_pairs as usize == self.board.pair_count();
        if won {
            self.stats.completed_at = Some(now);
            info!(
                moves = self.stats.moves,
                elapsed_secs = self.stats.elapsed_secs(),
                "game won"
            );
        } else {
            debug!(%first, %second, matched_pairs = self.stats.matched_pairs, "pair matched");
        }

        ResolveOutcome::Matched { first, second, won }
    }

    fn record(&mut self, action: Action, at: Timestamp) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(action, sequence, at));
    }
}
