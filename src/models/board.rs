//! The clue board: categories in columns, clue rows with point values.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::BASE_CLUE_VALUE;
use crate::models::{Category, Clue, Showing};

/// Reference to one board cell.
///
/// The column indexes the category (board columns match category order)
/// and the row indexes the clue within that category. This is the single
/// coordinate convention shared by the model, the renderer, and the input
/// handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// Category index (0-based, left to right).
    pub column: usize,
    /// Clue index within the category (0-based, top to bottom).
    pub row: usize,
}

impl CellRef {
    /// Creates a new cell reference.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// A rectangular grid of categories and clues.
///
/// Column order equals the category selection order from acquisition.
/// Every category holds the same number of clues, so the grid is always
/// rectangular and row `r` exists in every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Creates a board from categories in column order.
    ///
    /// # Errors
    ///
    /// Returns an error if `categories` is empty or the categories do not
    /// all hold the same number of clues.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let Some(first) = categories.first() else {
            anyhow::bail!("A board needs at least one category");
        };

        let rows = first.clue_count();
        if let Some(odd) = categories.iter().find(|c| c.clue_count() != rows) {
            anyhow::bail!(
                "Category '{}' has {} clues, expected {} to match the rest of the board",
                odd.title(),
                odd.clue_count(),
                rows
            );
        }

        Ok(Self { categories })
    }

    /// Number of categories (columns).
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of clue rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.categories.first().map_or(0, Category::clue_count)
    }

    /// The category in `column`, if any.
    #[must_use]
    pub fn category(&self, column: usize) -> Option<&Category> {
        self.categories.get(column)
    }

    /// Iterates over categories in column order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// The clue at `cell`, if the cell is on the board.
    #[must_use]
    pub fn clue_at(&self, cell: CellRef) -> Option<&Clue> {
        self.categories.get(cell.column)?.clue(cell.row)
    }

    /// Mutable access to the clue at `cell`, if the cell is on the board.
    pub fn clue_at_mut(&mut self, cell: CellRef) -> Option<&mut Clue> {
        self.categories.get_mut(cell.column)?.clue_mut(cell.row)
    }

    /// Point value of a clue row: 100 for the top row, then 200, 300, …
    #[must_use]
    pub const fn row_value(row: usize) -> i64 {
        (row as i64 + 1) * BASE_CLUE_VALUE
    }

    /// Number of clues not yet played to completion.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.categories
            .iter()
            .flat_map(Category::clues)
            .filter(|clue| clue.showing() != Showing::Answer)
            .count()
    }

    /// Whether every clue on the board has reached its answer.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(title: &str, rows: usize) -> Category {
        let clues = (0..rows)
            .map(|i| Clue::new(format!("{title} q{i}"), format!("{title} a{i}")).unwrap())
            .collect();
        Category::new(title, clues).unwrap()
    }

    fn sample_board() -> Board {
        Board::new(vec![
            category("Math", 5),
            category("Literature", 5),
            category("History", 5),
        ])
        .unwrap()
    }

    #[test]
    fn test_dimensions() {
        let board = sample_board();
        assert_eq!(board.category_count(), 3);
        assert_eq!(board.row_count(), 5);
    }

    #[test]
    fn test_rejects_empty_and_ragged() {
        assert!(Board::new(vec![]).is_err());
        assert!(Board::new(vec![category("Math", 5), category("History", 4)]).is_err());
    }

    #[test]
    fn test_cell_lookup_column_is_category() {
        let board = sample_board();

        // Column picks the category, row picks the clue within it.
        let clue = board.clue_at(CellRef::new(1, 3)).unwrap();
        assert_eq!(clue.question(), "Literature q3");

        assert!(board.clue_at(CellRef::new(3, 0)).is_none());
        assert!(board.clue_at(CellRef::new(0, 5)).is_none());
    }

    #[test]
    fn test_row_values() {
        assert_eq!(Board::row_value(0), 100);
        assert_eq!(Board::row_value(1), 200);
        assert_eq!(Board::row_value(4), 500);
    }

    #[test]
    fn test_remaining_and_exhausted() {
        let mut board = Board::new(vec![category("Math", 2)]).unwrap();
        assert_eq!(board.remaining(), 2);
        assert!(!board.is_exhausted());

        for row in 0..2 {
            let clue = board.clue_at_mut(CellRef::new(0, row)).unwrap();
            clue.advance();
            clue.advance();
        }

        assert_eq!(board.remaining(), 0);
        assert!(board.is_exhausted());
    }
}
