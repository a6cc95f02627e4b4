//! Seams between the sorter and whatever holds the rows
//!
//! The sorter only ever reads cell text and hands back a permutation, so any
//! table (owned rows, a rendered document, a terminal view) can be sorted by
//! implementing these two traits.

use crate::error::SortError;

/// Read access to a table's body rows
pub trait RowSource {
    /// Number of body rows
    fn row_count(&self) -> usize;

    /// Number of cells in the given row
    fn cell_count(&self, row: usize) -> usize;

    /// Display text of a cell, or `None` when the row or column does not exist
    fn cell(&self, row: usize, column: usize) -> Option<&str>;
}

/// Write access used to apply a sort
pub trait RowSink {
    /// Move rows so that position `i` holds the row currently at `order[i]`.
    ///
    /// Implementations must move the existing rows rather than rebuild them and
    /// must reject anything that is not a permutation of `0..row_count`.
    fn reorder(&mut self, order: &[usize]) -> Result<(), SortError>;
}
