//! Tracing coverage of the session API.
//!
//! Kept in its own test binary so no global subscriber from the other
//! integration files can swallow the spans.

use std::sync::{Arc, Mutex};

use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use memory_match::{CardIndex, GameRng, ManualClock, MatchConfig, MemoryGame, ResolveOutcome};

/// Records `(target, name)` of every span opened.
#[derive(Clone, Default)]
struct SpanRecorder {
    spans: Arc<Mutex<Vec<(String, String)>>>,
}

impl SpanRecorder {
    fn names_in(&self, target: &str) -> Vec<String> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == target)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for SpanRecorder {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        let meta = attrs.metadata();
        self.spans
            .lock()
            .unwrap()
            .push((meta.target().to_string(), meta.name().to_string()));
    }
}

// =============================================================================
// Session spans
// =============================================================================

/// Every public transition of `MemoryGame` opens its own span.
#[test]
fn test_session_transitions_are_instrumented() {
    let recorder = SpanRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());

    tracing::subscriber::with_default(subscriber, || {
        let clock = ManualClock::new();
        let mut game =
            MemoryGame::new(MatchConfig::default(), GameRng::new(4), clock.clone()).unwrap();

        let partner = game.state().board().partner_of(CardIndex(0)).unwrap();
        game.reveal(CardIndex(0)).unwrap();
        let token = game.reveal(partner).unwrap().token().unwrap();

        assert_eq!(game.tick(), None);
        clock.advance(game.config().resolution_delay_ms);
        assert!(matches!(game.tick(), Some(ResolveOutcome::Matched { .. })));

        // Already resolved by the timer.
        assert_eq!(game.resolve(token), ResolveOutcome::Stale);
        game.new_game();
    });

    let names = recorder.names_in("memory_match::engine::game");
    for expected in ["new", "reveal", "tick", "resolve", "new_game"] {
        assert!(
            names.iter().any(|n| n == expected),
            "no `{expected}` span in {names:?}"
        );
    }
    assert_eq!(names.iter().filter(|n| *n == "reveal").count(), 2);
    assert_eq!(names.iter().filter(|n| *n == "tick").count(), 2);
}
