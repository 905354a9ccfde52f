//! Accepted transitions, as recorded in a session's history.
//!
//! Only transitions that changed the state are recorded. Rejected reveals
//! and stale resolutions leave no trace.

use serde::{Deserialize, Serialize};

use super::card::CardIndex;
use super::clock::Timestamp;

/// A state-changing transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A card was turned face-up.
    Reveal(CardIndex),
    /// A selected pair was checked.
    Resolve {
        /// First card of the pair.
        first: CardIndex,
        /// Second card of the pair.
        second: CardIndex,
        /// Whether the two faces were equal.
        matched: bool,
    },
}

impl Action {
    /// Check if this is a reveal.
    #[must_use]
    pub fn is_reveal(&self) -> bool {
        matches!(self, Action::Reveal(_))
    }
}

/// A recorded action with its position and time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The transition.
    pub action: Action,

    /// Position in the session history (0-based).
    pub sequence: u32,

    /// When the transition happened.
    pub at: Timestamp,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: u32, at: Timestamp) -> Self {
        Self {
            action,
            sequence,
            at,
        }
    }
}
