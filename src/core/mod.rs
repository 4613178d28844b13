//! Core value types: colors, columns, boards, RNG.
//!
//! These are the building blocks the engine operates on. None of them
//! enforce game rules - move legality and selection live in `engine`.

pub mod board;
pub mod color;
pub mod column;
pub mod rng;

pub use board::{Board, MAX_COLS, MIN_COLS};
pub use color::Color;
pub use column::{Column, ROW_CAPACITY};
pub use rng::{GameRng, GameRngState};
