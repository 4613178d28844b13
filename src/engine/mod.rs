//! Game state and the puzzle engine.

pub mod puzzle;
pub mod state;

pub use puzzle::PuzzleEngine;
pub use state::GameState;
