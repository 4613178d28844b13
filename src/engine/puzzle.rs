//! The puzzle engine: the four operations a presentation layer calls.
//!
//! ## Operations
//!
//! - [`PuzzleEngine::new`] - generate a fresh game from a seed
//! - [`PuzzleEngine::select_column`] - handle a column click: select,
//!   deselect, or attempt a move
//! - [`PuzzleEngine::apply_move`] - move the top same-colored run between
//!   two columns, if legal
//! - [`PuzzleEngine::reset`] - discard the game and generate a new one
//!
//! There is no error type. Illegal input - out-of-range indices, empty
//! sources, mismatched colors, full targets - leaves the state unchanged.
//! The engine is synchronous and single-threaded; callers serialize their
//! interactions.

use crate::core::GameRng;
use crate::engine::state::GameState;

/// Owns the game state and drives it through moves.
///
/// All randomness in a session - the initial board and every board after
/// [`reset`](PuzzleEngine::reset) - comes from one seeded RNG stream, so a
/// whole session replays identically from the same seed.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    state: GameState,
    rng: GameRng,
}

impl PuzzleEngine {
    /// Generate a fresh game from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let state = GameState::generate(&mut rng);
        Self { state, rng }
    }

    /// Create an engine over an explicit state.
    ///
    /// The seed only feeds boards generated by later resets. Useful for
    /// tests and tooling that need a known position.
    #[must_use]
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self {
            state,
            rng: GameRng::new(seed),
        }
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discard the current game and generate a new one.
    ///
    /// Always yields zero moves, not won, nothing selected. Draws from
    /// the engine's ongoing RNG stream.
    pub fn reset(&mut self) {
        self.state = GameState::generate(&mut self.rng);
    }

    /// Handle a click on a column.
    ///
    /// With nothing selected, a non-empty column becomes the selection
    /// (clicking an empty column does nothing). With a selection, clicking
    /// a different column attempts [`apply_move`](PuzzleEngine::apply_move)
    /// from the selection to it; clicking the selected column again just
    /// deselects. Either way the selection is cleared afterwards.
    ///
    /// No-op once the game is won, and for out-of-range indices.
    pub fn select_column(&mut self, index: usize) {
        if self.state.is_won() || index >= self.state.board().column_count() {
            return;
        }

        match self.state.selected() {
            None => {
                let non_empty = self
                    .state
                    .board()
                    .column(index)
                    .is_some_and(|column| !column.is_empty());
                if non_empty {
                    self.state.set_selected(Some(index));
                }
            }
            Some(source) => {
                if index != source {
                    self.apply_move(source, index);
                }
                self.state.set_selected(None);
            }
        }
    }

    /// Move the top same-colored run from `source` to `target`.
    ///
    /// Moves `min(run length, free space)` blocks, preserving their
    /// order. Legal only if at least one block fits and the target is
    /// empty or its top block matches the run's color. On success the
    /// move counter increments and the win predicate is re-evaluated.
    ///
    /// Returns whether a move was applied. Illegal moves - including
    /// out-of-range indices, `source == target`, and an empty source -
    /// change nothing.
    pub fn apply_move(&mut self, source: usize, target: usize) -> bool {
        let Some((src, dst)) = self.state.board_mut().column_pair_mut(source, target) else {
            return false;
        };
        let Some(top_color) = src.top() else {
            return false;
        };

        let count = src.top_run_len().min(dst.available_space());
        if count == 0 || !(dst.is_empty() || dst.top() == Some(top_color)) {
            return false;
        }

        let moved = src.take_top(count);
        dst.place(&moved);
        self.state.record_move();
        true
    }
}
