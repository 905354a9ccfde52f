//! The resolution timer.
//!
//! After a pair is selected the engine waits a fixed delay before checking
//! it. That wait is modelled as a single pending slot holding a
//! `ResolutionToken`. The token names exactly one resolution (game
//! generation plus move number), so a timer that fires late, after a new
//! game was started, carries a token the engine no longer accepts.

use serde::{Deserialize, Serialize};

use crate::core::Timestamp;

/// Identifies one pending resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionToken {
    /// Game generation the pair was selected in.
    pub generation: u64,
    /// Move number of the selection (1-based).
    pub move_number: u32,
}

impl ResolutionToken {
    #[must_use]
    pub const fn new(generation: u64, move_number: u32) -> Self {
        Self {
            generation,
            move_number,
        }
    }
}

impl std::fmt::Display for ResolutionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Resolution(gen={}, move={})", self.generation, self.move_number)
    }
}

/// A scheduled resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    /// Which resolution to fire.
    pub token: ResolutionToken,
    /// When it becomes due.
    pub due_at: Timestamp,
}

/// Single-slot cancellable timer.
///
/// ```
/// use memory_match::core::Timestamp;
/// use memory_match::engine::{ResolutionTimer, ResolutionToken};
///
/// let mut timer = ResolutionTimer::new();
/// let token = ResolutionToken::new(1, 1);
/// timer.schedule(token, Timestamp::from_millis(1000));
///
/// assert_eq!(timer.take_due(Timestamp::from_millis(999)), None);
/// assert_eq!(timer.take_due(Timestamp::from_millis(1000)), Some(token));
/// assert!(!timer.is_pending());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResolutionTimer {
    slot: Option<PendingResolution>,
}

impl ResolutionTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a resolution, replacing anything already pending.
    pub fn schedule(&mut self, token: ResolutionToken, due_at: Timestamp) {
        self.slot = Some(PendingResolution { token, due_at });
    }

    /// Drop the pending resolution, returning it if there was one.
    pub fn cancel(&mut self) -> Option<PendingResolution> {
        self.slot.take()
    }

    /// Take the pending token if it is due at `now`.
    pub fn take_due(&mut self, now: Timestamp) -> Option<ResolutionToken> {
        match self.slot {
            Some(pending) if pending.due_at <= now => {
                self.slot = None;
                Some(pending.token)
            }
            _ => None,
        }
    }

    /// Currently scheduled resolution.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.slot.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel() {
        let mut timer = ResolutionTimer::new();
        timer.schedule(ResolutionToken::new(0, 1), Timestamp(10));

        let cancelled = timer.cancel().unwrap();
        assert_eq!(cancelled.token, ResolutionToken::new(0, 1));
        assert_eq!(timer.take_due(Timestamp(1_000)), None);
        assert!(timer.cancel().is_none());
    }

    #[test]
    fn test_schedule_replaces() {
        let mut timer = ResolutionTimer::new();
        timer.schedule(ResolutionToken::new(0, 1), Timestamp(10));
        timer.schedule(ResolutionToken::new(1, 1), Timestamp(20));

        assert_eq!(timer.take_due(Timestamp(15)), None);
        assert_eq!(timer.take_due(Timestamp(20)), Some(ResolutionToken::new(1, 1)));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(
            format!("{}", ResolutionToken::new(3, 7)),
            "Resolution(gen=3, move=7)"
        );
    }
}
