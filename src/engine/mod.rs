//! The memory match engine.
//!
//! - `state`: `MatchState` and its `reveal`/`resolve` transitions
//! - `timer`: generation-tokened, cancellable resolution timer
//! - `game`: `MemoryGame`, the session surface for a UI shell
//! - `snapshot`: read-only views for rendering

pub mod state;
pub mod timer;
pub mod game;
pub mod snapshot;

pub use state::{MatchState, Phase, RejectReason, ResolveOutcome, RevealOutcome};
pub use timer::{PendingResolution, ResolutionTimer, ResolutionToken};
pub use game::MemoryGame;
pub use snapshot::{CardView, MatchSnapshot};
