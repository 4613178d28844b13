//! The board: an ordered row of columns, plus generation and the win
//! predicate.
//!
//! ## Generation
//!
//! A fresh board has `N` columns, `N` drawn uniformly from
//! `[MIN_COLS, MAX_COLS]`. The first `N - 2` columns are filled with
//! `(N - 2) * ROW_CAPACITY` blocks: the first `N - 2` palette colors, each
//! repeated `ROW_CAPACITY` times, shuffled uniformly across the filled
//! slots. The last 2 columns start empty. Only the arrangement is random -
//! color selection follows palette order.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::column::{Column, ROW_CAPACITY};
use super::rng::GameRng;

/// Minimum number of columns on a board.
pub const MIN_COLS: usize = 6;

/// Maximum number of columns on a board.
pub const MAX_COLS: usize = 8;

/// An ordered row of columns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Generate a fresh shuffled board from the given RNG.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let column_count = rng.gen_range_usize(MIN_COLS..MAX_COLS + 1);
        let filled = column_count - 2;

        // One token per block: the first `filled` palette colors, each
        // repeated ROW_CAPACITY times.
        let mut tokens: Vec<Color> = Color::PALETTE[..filled]
            .iter()
            .flat_map(|&color| std::iter::repeat(color).take(ROW_CAPACITY))
            .collect();
        rng.shuffle(&mut tokens);

        let mut columns: Vec<Column> = tokens
            .chunks(ROW_CAPACITY)
            .map(Column::from_slice)
            .collect();
        columns.resize(column_count, Column::new());

        Self { columns }
    }

    /// Create a board from explicit columns.
    ///
    /// Useful for tests and tooling that need a known position.
    #[must_use]
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns, in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by index.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Take mutable references to two distinct columns.
    ///
    /// Returns `None` if the indices are equal or out of range.
    pub(crate) fn column_pair_mut(
        &mut self,
        a: usize,
        b: usize,
    ) -> Option<(&mut Column, &mut Column)> {
        if a == b || a >= self.columns.len() || b >= self.columns.len() {
            return None;
        }
        if a < b {
            let (left, right) = self.columns.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.columns.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// The win predicate: every non-empty column is a complete
    /// single-color stack, and the number of complete columns equals
    /// `column_count - 2`.
    ///
    /// The second condition is implied by the first under block
    /// conservation, but is checked explicitly so the predicate stays
    /// correct if move logic ever changes.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        for column in &self.columns {
            if !column.is_empty() && !column.is_complete() {
                return false;
            }
        }

        let complete = self
            .columns
            .iter()
            .filter(|column| column.len() == ROW_CAPACITY)
            .count();
        complete == self.column_count() - 2
    }
}
