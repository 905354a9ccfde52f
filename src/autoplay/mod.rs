//! Automated play.
//!
//! Agents play through the same surface a UI shell uses (`reveal`,
//! `tick`, snapshots) on a manual clock, which makes whole games
//! reproducible from a seed. Used for tests, benchmarks and the
//! Python bindings.

pub mod agent;
pub mod runner;

pub use agent::{Agent, PerfectMemoryAgent, RandomAgent};
pub use runner::{play_game, play_games, AutoplayConfig, AutoplayError, GameSummary};
