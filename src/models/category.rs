//! A named group of clues shown as one board column.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Clue;

/// A trivia category: a title plus an ordered list of clues.
///
/// The title is immutable and the clue list has a fixed length once the
/// category is built. Clue order matters: clue `r` sits in board row `r`
/// and carries that row's point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty (after trimming) or the clue
    /// list is empty.
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Result<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            anyhow::bail!("Category title cannot be empty");
        }
        if clues.is_empty() {
            anyhow::bail!("Category '{title}' has no clues");
        }

        Ok(Self { title, clues })
    }

    /// The category title, as shown in the board header.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of clues in this category.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }

    /// The clue at `row`, if any.
    #[must_use]
    pub fn clue(&self, row: usize) -> Option<&Clue> {
        self.clues.get(row)
    }

    /// Mutable access to the clue at `row`, if any.
    pub fn clue_mut(&mut self, row: usize) -> Option<&mut Clue> {
        self.clues.get_mut(row)
    }

    /// Iterates over the clues in row order.
    pub fn clues(&self) -> impl Iterator<Item = &Clue> {
        self.clues.iter()
    }
}
