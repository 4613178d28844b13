//! # color-sort
//!
//! A deterministic engine for the single-player "color sort" puzzle:
//! columns hold stacks of colored blocks, and the player moves contiguous
//! same-colored runs between columns until every non-empty column holds
//! four blocks of one color.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through a seeded [`GameRng`].
//!    The same seed produces the same board and the same session.
//!
//! 2. **Single Owner**: Game state is one owned aggregate ([`GameState`]),
//!    mutated only through the engine's operations. No globals, no shared
//!    mutable references between columns.
//!
//! 3. **Silent Rejection**: There is no error type. Illegal moves and
//!    out-of-range indices leave the state unchanged; the caller observes
//!    the state, not failures.
//!
//! ## Modules
//!
//! - `core`: Colors, columns, boards, RNG
//! - `engine`: Game state and the puzzle engine (the four operations:
//!   initialize, select column, apply move, reset)
//!
//! ## Example
//!
//! ```
//! use color_sort::PuzzleEngine;
//!
//! let mut engine = PuzzleEngine::new(42);
//! assert_eq!(engine.state().moves(), 0);
//!
//! // Click a column to select it, click it again to deselect.
//! engine.select_column(0);
//! assert_eq!(engine.state().selected(), Some(0));
//! engine.select_column(0);
//! assert!(engine.state().selected().is_none());
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, Column, GameRng, GameRngState, MAX_COLS, MIN_COLS, ROW_CAPACITY,
};

pub use crate::engine::{GameState, PuzzleEngine};
