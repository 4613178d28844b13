//! A single column: a bounded stack of colored blocks.
//!
//! Blocks are stored bottom-to-top, so the last element is the top of the
//! stack. A column never holds more than [`ROW_CAPACITY`] blocks; moves
//! splice a suffix off one column and append it to another, preserving
//! relative order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;

/// Fixed per-column capacity.
pub const ROW_CAPACITY: usize = 4;

/// An ordered stack of blocks, bottom-to-top, holding at most
/// [`ROW_CAPACITY`] blocks.
///
/// Backed by a `SmallVec` with inline capacity `ROW_CAPACITY`, so a column
/// never heap-allocates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    blocks: SmallVec<[Color; ROW_CAPACITY]>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a column holding the given blocks, bottom-to-top.
    ///
    /// Panics if more than `ROW_CAPACITY` blocks are given.
    #[must_use]
    pub fn from_slice(blocks: &[Color]) -> Self {
        assert!(
            blocks.len() <= ROW_CAPACITY,
            "Column holds at most {} blocks",
            ROW_CAPACITY
        );
        Self {
            blocks: SmallVec::from_slice(blocks),
        }
    }

    /// Number of blocks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if this column holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The blocks, bottom-to-top.
    #[must_use]
    pub fn blocks(&self) -> &[Color] {
        &self.blocks
    }

    /// The top block, or `None` if the column is empty.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.blocks.last().copied()
    }

    /// Length of the maximal same-colored run at the top of the column.
    ///
    /// Zero for an empty column.
    #[must_use]
    pub fn top_run_len(&self) -> usize {
        match self.top() {
            Some(top) => self
                .blocks
                .iter()
                .rev()
                .take_while(|&&block| block == top)
                .count(),
            None => 0,
        }
    }

    /// Free slots remaining.
    #[must_use]
    pub fn available_space(&self) -> usize {
        ROW_CAPACITY - self.blocks.len()
    }

    /// Check if this column is a complete single-color stack of
    /// `ROW_CAPACITY` blocks.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.blocks.len() == ROW_CAPACITY
            && self.blocks.iter().all(|&block| block == self.blocks[0])
    }

    /// Push a block on top.
    ///
    /// Callers must respect capacity; generation and move application
    /// never exceed it.
    pub(crate) fn push(&mut self, color: Color) {
        debug_assert!(self.blocks.len() < ROW_CAPACITY);
        self.blocks.push(color);
    }

    /// Remove the top `count` blocks, returning them in bottom-to-top
    /// order.
    pub(crate) fn take_top(&mut self, count: usize) -> SmallVec<[Color; ROW_CAPACITY]> {
        debug_assert!(count <= self.blocks.len());
        let split = self.blocks.len() - count;
        self.blocks.drain(split..).collect()
    }

    /// Append blocks on top, preserving their order.
    pub(crate) fn place(&mut self, blocks: &[Color]) {
        debug_assert!(self.blocks.len() + blocks.len() <= ROW_CAPACITY);
        self.blocks.extend_from_slice(blocks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Red};

    #[test]
    fn test_empty_column() {
        let col = Column::new();
        assert!(col.is_empty());
        assert_eq!(col.len(), 0);
        assert_eq!(col.top(), None);
        assert_eq!(col.top_run_len(), 0);
        assert_eq!(col.available_space(), ROW_CAPACITY);
        assert!(!col.is_complete());
    }

    #[test]
    fn test_top_run_len() {
        let col = Column::from_slice(&[Red, Blue, Blue, Blue]);
        assert_eq!(col.top(), Some(Blue));
        assert_eq!(col.top_run_len(), 3);

        let col = Column::from_slice(&[Blue, Red]);
        assert_eq!(col.top_run_len(), 1);

        let col = Column::from_slice(&[Red, Red, Red, Red]);
        assert_eq!(col.top_run_len(), 4);
    }

    #[test]
    fn test_is_complete() {
        assert!(Column::from_slice(&[Red, Red, Red, Red]).is_complete());
        assert!(!Column::from_slice(&[Red, Red, Red]).is_complete());
        assert!(!Column::from_slice(&[Red, Red, Red, Blue]).is_complete());
    }

    #[test]
    fn test_take_top_preserves_order() {
        let mut col = Column::from_slice(&[Red, Blue, Blue, Blue]);
        let taken = col.take_top(3);

        assert_eq!(taken.as_slice(), &[Blue, Blue, Blue]);
        assert_eq!(col.blocks(), &[Red]);
    }

    #[test]
    fn test_place_appends_on_top() {
        let mut col = Column::from_slice(&[Red]);
        col.place(&[Blue, Blue]);

        assert_eq!(col.blocks(), &[Red, Blue, Blue]);
        assert_eq!(col.available_space(), 1);
    }

    #[test]
    #[should_panic(expected = "Column holds at most")]
    fn test_from_slice_over_capacity() {
        let _ = Column::from_slice(&[Red, Red, Red, Red, Red]);
    }
}
