//! Autoplay and snapshot integration tests.

use memory_match::{
    play_game, play_games, Agent, AutoplayConfig, GameRng, ManualClock, MatchConfig,
    MatchSnapshot, MemoryGame, PerfectMemoryAgent, Phase, RandomAgent,
};

// =============================================================================
// Autoplay
// =============================================================================

/// Perfect memory wins every game without a rejected reveal.
#[test]
fn test_perfect_memory_always_wins() {
    let summaries = play_games(
        &MatchConfig::default(),
        &mut PerfectMemoryAgent::new(),
        &AutoplayConfig::new().with_seed(1_000),
        50,
    )
    .unwrap();

    for summary in &summaries {
        assert!(summary.won, "seed {} not won", summary.seed);
        assert_eq!(summary.rejected, 0);
        assert!((8..=15).contains(&summary.moves));
        assert_eq!(summary.reveals as u32, summary.moves * 2);
    }
}

/// A random player eventually wins given enough reveals.
#[test]
fn test_random_eventually_wins() {
    let summary = play_game(
        &MatchConfig::default().with_pair_count(4),
        &mut RandomAgent,
        &AutoplayConfig::new().with_seed(3).with_max_steps(10_000),
    )
    .unwrap();

    assert!(summary.won);
    assert_eq!(summary.matched_pairs, 4);
}

/// Perfect memory never needs more moves than a random player.
#[test]
fn test_memory_beats_random_on_average() {
    let config = MatchConfig::default();
    let autoplay = AutoplayConfig::new().with_seed(77).with_max_steps(10_000);

    let perfect = play_games(&config, &mut PerfectMemoryAgent::new(), &autoplay, 20).unwrap();
    let random = play_games(&config, &mut RandomAgent, &autoplay, 20).unwrap();

    let total = |s: &[memory_match::GameSummary]| s.iter().map(|g| g.moves).sum::<u32>();
    assert!(total(&perfect) < total(&random));
}

/// Same seed, same game.
#[test]
fn test_autoplay_is_reproducible() {
    let config = MatchConfig::default();
    let autoplay = AutoplayConfig::new().with_seed(9);

    let a = play_game(&config, &mut RandomAgent, &autoplay).unwrap();
    let b = play_game(&config, &mut RandomAgent, &autoplay).unwrap();
    assert_eq!(a, b);
}

/// Elapsed time reflects simulated think time and delays, floored.
#[test]
fn test_elapsed_time_from_manual_clock() {
    // One pair, first reveal at 300ms, second at 600ms, resolved at 1600ms.
    let summary = play_game(
        &MatchConfig::default().with_pair_count(1),
        &mut PerfectMemoryAgent::new(),
        &AutoplayConfig::new().with_think_time_ms(300),
    )
    .unwrap();

    assert!(summary.won);
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.elapsed_secs, 1);
}

// =============================================================================
// Snapshots
// =============================================================================

/// Snapshots never expose face-down faces.
#[test]
fn test_snapshot_hides_faces() {
    let clock = ManualClock::new();
    let mut game = MemoryGame::new(MatchConfig::default(), GameRng::new(5), clock).unwrap();
    let mut agent = RandomAgent;
    let mut rng = GameRng::new(6);

    let pick = agent.choose(&game.snapshot(), &mut rng).unwrap();
    game.reveal(pick).unwrap();

    let snap = game.snapshot();
    let shown: Vec<_> = snap.cards.iter().filter(|c| c.face.is_some()).collect();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].index, pick);
    assert_eq!(snap.phase, Phase::OneRevealed);
}

/// Snapshots travel as JSON and bincode.
#[test]
fn test_snapshot_serde() {
    let clock = ManualClock::new();
    let mut game = MemoryGame::new(MatchConfig::default(), GameRng::new(5), clock).unwrap();
    game.reveal(memory_match::CardIndex(4)).unwrap();
    let snap = game.snapshot();

    let json = serde_json::to_string(&snap).unwrap();
    let from_json: MatchSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, snap);

    let bytes = snap.to_bytes().unwrap();
    assert_eq!(MatchSnapshot::from_bytes(&bytes).unwrap(), snap);
}
