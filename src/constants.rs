//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed board geometry.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Cluegrid";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "cluegrid";

/// Number of categories on a board (one per column).
pub const DEFAULT_CATEGORY_COUNT: usize = 6;

/// Number of clues per category (one per row).
pub const CLUES_PER_CATEGORY: usize = 5;

/// Number of candidate categories fetched before sampling.
pub const CATEGORY_POOL_SIZE: usize = 50;

/// Point value of the first clue row; row `r` is worth `(r + 1) * BASE_CLUE_VALUE`.
pub const BASE_CLUE_VALUE: i64 = 100;

/// Default base URL of the trivia API (jservice-compatible).
pub const DEFAULT_API_BASE_URL: &str = "https://jservice.io/api";

/// Default request timeout for API calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
