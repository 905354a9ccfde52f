//! Python bindings for the memory-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(pair_count=8, seed=42)
//! game.reveal(0)
//! game.reveal(1)
//! game.advance(1000)
//! game.tick()          # "matched" or "mismatched"
//!
//! # Batch of simulated games
//! summaries = mm.autoplay(agent="perfect-memory", count=100)
//! ```

use pyo3::prelude::*;

mod py_autoplay;
mod py_game;

pub use py_autoplay::*;
pub use py_game::*;

/// memory_match: memory-matching card game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    m.add_class::<PyGameSummary>()?;
    m.add_function(wrap_pyfunction!(autoplay, m)?)?;

    Ok(())
}
