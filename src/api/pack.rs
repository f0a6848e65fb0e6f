//! Local clue packs for offline play.
//!
//! A pack is a JSON array of categories in the same shape the trivia API
//! produces, validated the same way:
//!
//! ```json
//! [
//!   {
//!     "title": "State Capitals",
//!     "clues": [
//!       { "question": "This city is the capital of Oregon", "answer": "Salem" }
//!     ]
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::Path;

use crate::api::{category_from_detail, sampling, CategoryDetail};
use crate::models::{Board, Category};

/// Loads and validates a clue pack file.
///
/// Every category must clean down to a full column of usable clues, just
/// as API responses must.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON category
/// array, or contains a category with too few usable clues.
pub fn load_pack(path: &Path) -> Result<Vec<Category>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read clue pack: {}", path.display()))?;

    let details: Vec<CategoryDetail> = serde_json::from_str(&content)
        .context(format!("Failed to parse clue pack: {}", path.display()))?;

    details
        .into_iter()
        .map(category_from_detail)
        .collect::<Result<Vec<Category>>>()
        .context(format!("Invalid category in clue pack: {}", path.display()))
}

/// Assembles a board by drawing `count` categories from a loaded pack.
///
/// Packs larger than the board are sampled without replacement the same
/// way the API pool is.
///
/// # Errors
///
/// Returns an error if the pack holds fewer than `count` categories.
pub fn board_from_pack<R>(categories: Vec<Category>, count: usize, rng: &mut R) -> Result<Board>
where
    R: Rng + ?Sized,
{
    let drawn = sampling::sample_without_replacement(categories, count, rng)
        .context("Clue pack has fewer categories than the board needs")?;

    Board::new(drawn)
}
