//! The single owned game aggregate.
//!
//! `GameState` holds everything a presentation layer needs to render a
//! game: the board, which column is selected (at most one), the move
//! counter, and the won flag. Fields are private - all mutation goes
//! through [`PuzzleEngine`](crate::engine::PuzzleEngine), and the state is
//! replaced wholesale on reset.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng};

/// Complete game state: board, selection, move counter, won flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    selected: Option<usize>,
    moves: u32,
    won: bool,
}

impl GameState {
    /// Generate a fresh state: new shuffled board, no selection, zero
    /// moves, not won.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        Self::with_board(Board::generate(rng))
    }

    /// Create a fresh state over an explicit board.
    ///
    /// Useful for tests and tooling that need a known position.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            selected: None,
            moves: 0,
            won: false,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The currently selected column, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Number of successful moves so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether the puzzle has been solved.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
        if self.board.is_solved() {
            self.won = true;
        }
    }
}
