//! Play whole games with an agent against a manual clock.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::agent::Agent;
use crate::core::{GameRng, ManualClock, MatchConfig};
use crate::engine::{MemoryGame, Phase, RevealOutcome};
use crate::error::{ConfigError, EngineError};

/// Configuration for autoplay runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Seed for the deal. Game `n` of a batch uses `seed + n`.
    pub seed: u64,

    /// Maximum agent steps (reveal attempts) before giving up.
    pub max_steps: usize,

    /// Simulated milliseconds between an agent's reveals.
    pub think_time_ms: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_steps: 1_000,
            think_time_ms: 500,
        }
    }
}

impl AutoplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deal seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set maximum steps per game.
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    /// Set simulated think time.
    pub fn with_think_time_ms(mut self, ms: u64) -> Self {
        self.think_time_ms = ms;
        self
    }
}

/// Outcome of one autoplayed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub won: bool,
    pub moves: u32,
    pub matched_pairs: u32,
    pub reveals: usize,
    /// Reveals the engine ignored.
    pub rejected: usize,
    pub elapsed_secs: u64,
}

/// Autoplay failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum AutoplayError {
    #[display("invalid match config: {_0}")]
    Config(ConfigError),
    #[display("engine contract violated: {_0}")]
    Engine(EngineError),
}

/// Play one game to completion or until `max_steps` reveals were attempted.
#[instrument(skip(match_config, agent, autoplay), fields(agent = agent.name(), seed = autoplay.seed))]
pub fn play_game<A: Agent + ?Sized>(
    match_config: &MatchConfig,
    agent: &mut A,
    autoplay: &AutoplayConfig,
) -> Result<GameSummary, AutoplayError> {
    let mut dealer = GameRng::new(autoplay.seed);
    let mut agent_rng = dealer.fork();
    let clock = ManualClock::new();
    let mut game = MemoryGame::new(match_config.clone(), dealer, clock.clone())?;

    agent.reset();
    let mut reveals = 0;
    let mut rejected = 0;

    while reveals < autoplay.max_steps {
        match game.phase() {
            Phase::Won => break,
            Phase::Resolving => {
                clock.advance(match_config.resolution_delay_ms);
                game.tick();
                agent.observe(&game.snapshot());
                continue;
            }
            Phase::Idle | Phase::OneRevealed => {}
        }

        let view = game.snapshot();
        let Some(index) = agent.choose(&view, &mut agent_rng) else {
            debug!("agent gave up");
            break;
        };

        clock.advance(autoplay.think_time_ms);
        reveals += 1;
        match game.reveal(index)? {
            RevealOutcome::Rejected(reason) => {
                rejected += 1;
                debug!(%index, ?reason, "agent reveal rejected");
            }
            _ => agent.observe(&game.snapshot()),
        }
    }

    // A pair selected on the last allowed reveal still gets resolved.
    if game.phase() == Phase::Resolving {
        clock.advance(match_config.resolution_delay_ms);
        game.tick();
    }

    let stats = *game.state().stats();
    Ok(GameSummary {
        seed: autoplay.seed,
        won: game.phase() == Phase::Won,
        moves: stats.moves,
        matched_pairs: stats.matched_pairs,
        reveals,
        rejected,
        elapsed_secs: stats.elapsed_secs(),
    })
}

/// Play `count` games with seeds `seed, seed + 1, ...`.
pub fn play_games<A: Agent + ?Sized>(
    match_config: &MatchConfig,
    agent: &mut A,
    autoplay: &AutoplayConfig,
    count: usize,
) -> Result<Vec<GameSummary>, AutoplayError> {
    (0..count as u64)
        .map(|n| {
            let config = autoplay.clone().with_seed(autoplay.seed.wrapping_add(n));
            play_game(match_config, agent, &config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::{PerfectMemoryAgent, RandomAgent};

    #[test]
    fn test_default_config() {
        let config = AutoplayConfig::default();
        assert_eq!(config.max_steps, 1_000);
        assert_eq!(config.think_time_ms, 500);
    }

    #[test]
    fn test_config_serialization() {
        let config = AutoplayConfig::new().with_seed(3).with_max_steps(40);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["max_steps"], 40);

        let parsed: AutoplayConfig =
            serde_json::from_str(r#"{"seed": 3, "max_steps": 40, "think_time_ms": 500}"#).unwrap();
        assert_eq!(parsed.max_steps, 40);
        assert_eq!(parsed.seed, 3);
    }

    #[test]
    fn test_perfect_memory_wins() {
        let summary = play_game(
            &MatchConfig::default(),
            &mut PerfectMemoryAgent::new(),
            &AutoplayConfig::new().with_seed(7),
        )
        .unwrap();

        assert!(summary.won);
        assert_eq!(summary.matched_pairs, 8);
        assert_eq!(summary.rejected, 0);
        assert!(summary.moves >= 8);
        // Worst case for perfect memory is 2n - 1 moves.
        assert!(summary.moves <= 15);
    }

    #[test]
    fn test_max_steps_stops_game() {
        let summary = play_game(
            &MatchConfig::default(),
            &mut RandomAgent,
            &AutoplayConfig::new().with_max_steps(4),
        )
        .unwrap();

        assert_eq!(summary.reveals, 4);
        assert_eq!(summary.moves, 2);
        assert!(!summary.won);
    }

    #[test]
    fn test_invalid_config() {
        let err = play_game(
            &MatchConfig::default().with_pair_count(0),
            &mut RandomAgent,
            &AutoplayConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, AutoplayError::Config(ConfigError::NoPairs));
    }

    #[test]
    fn test_play_games_seeds() {
        let summaries = play_games(
            &MatchConfig::default().with_pair_count(4),
            &mut PerfectMemoryAgent::new(),
            &AutoplayConfig::new().with_seed(100),
            3,
        )
        .unwrap();

        let seeds: Vec<_> = summaries.iter().map(|s| s.seed).collect();
        assert_eq!(seeds, vec![100, 101, 102]);
        assert!(summaries.iter().all(|s| s.won));
    }
}
