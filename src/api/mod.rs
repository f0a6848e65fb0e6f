//! Trivia data acquisition.
//!
//! This module fetches category candidates and full clue data from a
//! jservice-compatible HTTP API, cleans the clue text, and assembles
//! validated [`Board`] values. Local clue packs provide the same data
//! offline.

pub mod pack;
pub mod sampling;

// Re-export commonly used functions
pub use pack::{board_from_pack, load_pack};
pub use sampling::sample_without_replacement;

use anyhow::{Context, Result};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::constants::{CATEGORY_POOL_SIZE, CLUES_PER_CATEGORY};
use crate::models::{Board, Category, Clue};

/// One candidate from the category listing endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategorySummary {
    /// Category id accepted by the detail endpoint
    pub id: u64,
    /// Category title
    pub title: String,
    /// Advertised number of clues in this category
    #[serde(default)]
    pub clues_count: u32,
}

/// Full category payload from the detail endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryDetail {
    /// Category title
    pub title: String,
    /// Clue records as delivered, possibly with gaps
    pub clues: Vec<ClueRecord>,
}

/// One clue as the service delivers it.
///
/// Upstream data is uneven: question or answer may be missing, empty, or
/// wrapped in HTML markup. Records are cleaned and filtered before they
/// become model [`Clue`]s.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClueRecord {
    /// Clue prompt
    #[serde(default)]
    pub question: Option<String>,
    /// Expected response
    #[serde(default)]
    pub answer: Option<String>,
}

/// Blocking HTTP client for a jservice-compatible trivia API.
///
/// Calls run on the caller's thread; a per-request timeout turns a hung
/// service into a surfaced error instead of a frozen UI.
pub struct TriviaClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TriviaClient {
    /// Creates a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the candidate pool from `GET {base}/categories?count=50`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// response that does not decode as a category list.
    pub fn fetch_candidates(&self) -> Result<Vec<CategorySummary>> {
        let url = format!("{}/categories", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("count", CATEGORY_POOL_SIZE.to_string())])
            .send()
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Trivia API error {status} from {url}");
        }

        response
            .json()
            .with_context(|| format!("Malformed category list from {url}"))
    }

    /// Fetches one category's clues from `GET {base}/category?id={id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// response that does not decode as a category.
    pub fn fetch_category(&self, id: u64) -> Result<CategoryDetail> {
        let url = format!("{}/category", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("id", id.to_string())])
            .send()
            .with_context(|| format!("Request to {url}?id={id} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Trivia API error {status} from {url}?id={id}");
        }

        response
            .json()
            .with_context(|| format!("Malformed category {id} from {url}"))
    }

    /// Fetches and assembles a full board of `count` categories.
    ///
    /// Candidates advertising fewer clues than a column needs are dropped
    /// before the draw, then `count` ids are sampled without replacement
    /// and each category is fetched and validated. The board is returned
    /// whole or not at all.
    ///
    /// # Errors
    ///
    /// Returns an error if any fetch fails, the filtered pool is smaller
    /// than `count`, or a drawn category decodes with too few usable clues.
    pub fn fetch_board<R>(&self, count: usize, rng: &mut R) -> Result<Board>
    where
        R: Rng + ?Sized,
    {
        let pool = usable_candidates(self.fetch_candidates()?);

        let drawn = sampling::sample_without_replacement(pool, count, rng)
            .context("Not enough usable categories in the candidate pool")?;

        let categories = drawn
            .into_iter()
            .map(|summary| {
                let detail = self
                    .fetch_category(summary.id)
                    .with_context(|| format!("Failed to fetch category '{}'", summary.title))?;
                category_from_detail(detail)
            })
            .collect::<Result<Vec<Category>>>()?;

        Board::new(categories)
    }
}

/// Where boards come from: the live API or a loaded clue pack.
pub enum ClueSource {
    /// Fetch categories over HTTP
    Remote(TriviaClient),
    /// Draw from categories loaded out of a clue pack file
    Pack(Vec<Category>),
}

impl ClueSource {
    /// Acquires a complete board of `count` categories from this source.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot produce a full board; the
    /// game state is left untouched in that case.
    pub fn acquire<R>(&self, count: usize, rng: &mut R) -> Result<Board>
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Remote(client) => client.fetch_board(count, rng),
            Self::Pack(categories) => pack::board_from_pack(categories.clone(), count, rng),
        }
    }
}

/// Drops pool candidates advertising fewer clues than a column needs.
///
/// Runs before the draw, so a thin category can never be sampled onto
/// the board.
#[must_use]
pub fn usable_candidates(pool: Vec<CategorySummary>) -> Vec<CategorySummary> {
    pool.into_iter()
        .filter(|candidate| candidate.clues_count as usize >= CLUES_PER_CATEGORY)
        .collect()
}

/// Converts a wire category into a model [`Category`].
///
/// Cleans the title and every clue, discards clues left without a
/// question or answer, and truncates usable clues beyond the column
/// height.
///
/// # Errors
///
/// Returns an error if fewer usable clues remain than a column needs.
pub fn category_from_detail(detail: CategoryDetail) -> Result<Category> {
    let title = clean_text(&detail.title);

    let mut clues = Vec::with_capacity(CLUES_PER_CATEGORY);
    for record in detail.clues {
        if clues.len() == CLUES_PER_CATEGORY {
            break;
        }

        let question = clean_text(record.question.as_deref().unwrap_or(""));
        let answer = clean_text(record.answer.as_deref().unwrap_or(""));
        if question.is_empty() || answer.is_empty() {
            continue;
        }

        clues.push(Clue::new(question, answer)?);
    }

    if clues.len() < CLUES_PER_CATEGORY {
        anyhow::bail!(
            "Category '{title}' has only {} usable clues ({CLUES_PER_CATEGORY} needed)",
            clues.len()
        );
    }

    Category::new(title, clues)
}

/// Strips HTML tags and decodes the entities that show up in upstream
/// clue text, then collapses runs of whitespace.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let tag_regex = Regex::new(r"<[^>]*>").unwrap();
    let stripped = tag_regex.replace_all(raw, " ");

    // &amp; last so double-encoded text cannot re-form an entity
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Showing;

    fn record(question: &str, answer: &str) -> ClueRecord {
        ClueRecord {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
        }
    }

    #[test]
    fn test_clean_text_strips_tags_and_entities() {
        assert_eq!(clean_text("<i>Hamlet</i>"), "Hamlet");
        assert_eq!(clean_text("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(clean_text("it&#039;s &quot;here&quot;"), "it's \"here\"");
        assert_eq!(clean_text("a <b>bold</b>\n  claim"), "a bold claim");
        assert_eq!(clean_text("<img src='x'>"), "");
    }

    #[test]
    fn test_clean_text_double_encoded_stays_literal() {
        assert_eq!(clean_text("4 &amp;lt; 5"), "4 &lt; 5");
    }

    #[test]
    fn test_category_from_detail_filters_and_truncates() {
        let detail = CategoryDetail {
            title: "  Science &amp; Nature ".to_string(),
            clues: vec![
                record("q1", "a1"),
                ClueRecord::default(),
                record("q2", "<i></i>"),
                record("q3", "a3"),
                record("q4", "a4"),
                record("q5", "a5"),
                record("q6", "a6"),
                record("q7", "a7"),
            ],
        };

        let category = category_from_detail(detail).unwrap();
        assert_eq!(category.title(), "Science & Nature");
        assert_eq!(category.clue_count(), CLUES_PER_CATEGORY);

        let questions: Vec<_> = category.clues().map(Clue::question).collect();
        assert_eq!(questions, vec!["q1", "q3", "q4", "q5", "q6"]);
        assert!(category.clues().all(|clue| clue.showing() == Showing::Hidden));
    }

    #[test]
    fn test_category_from_detail_too_few_usable_clues() {
        let detail = CategoryDetail {
            title: "Thin".to_string(),
            clues: vec![
                record("q1", "a1"),
                record("q2", "a2"),
                record("q3", ""),
                record("q4", "a4"),
            ],
        };

        assert!(category_from_detail(detail).is_err());
    }

    #[test]
    fn test_usable_candidates_drops_thin_pool_entries() {
        let summary = |id: u64, clues_count: u32| CategorySummary {
            id,
            title: format!("Cat {id}"),
            clues_count,
        };
        let pool = vec![summary(1, 5), summary(2, 2), summary(3, 9), summary(4, 0)];

        let kept: Vec<u64> = usable_candidates(pool).iter().map(|c| c.id).collect();
        assert_eq!(kept, vec![1, 3]);
    }

    #[test]
    fn test_wire_types_ignore_unknown_fields() {
        let json = r#"{
            "id": 11496,
            "title": "mixed bag",
            "clues_count": 10,
            "created_at": "2014-02-11T22:47:18.000Z"
        }"#;
        let summary: CategorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 11496);
        assert_eq!(summary.clues_count, 10);

        let json = r#"{
            "id": 11496,
            "title": "mixed bag",
            "clues": [
                { "id": 1, "question": "q", "answer": "a", "value": 100, "airdate": null }
            ]
        }"#;
        let detail: CategoryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.clues.len(), 1);
        assert_eq!(detail.clues[0].question.as_deref(), Some("q"));
    }

    #[test]
    fn test_clue_record_tolerates_nulls() {
        let json = r#"{ "question": null, "answer": "a" }"#;
        let record: ClueRecord = serde_json::from_str(json).unwrap();
        assert!(record.question.is_none());
        assert_eq!(record.answer.as_deref(), Some("a"));
    }
}
