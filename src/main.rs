//! Cluegrid - terminal trivia board game
//!
//! Deals a board of trivia categories from a jservice-compatible API (or a
//! local clue pack), then runs a Jeopardy-style game in the terminal:
//! reveal clues, judge answers, and keep score for a table of players.

// Module declarations
mod api;
mod config;
mod constants;
mod models;
mod tui;

use anyhow::Result;
use clap::Parser;
use constants::APP_BINARY_NAME;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Cluegrid - terminal trivia board game
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Number of categories on the board
    #[arg(short, long, value_name = "N")]
    categories: Option<usize>,

    /// Comma-separated player names to pre-fill the setup screen
    #[arg(short, long, value_delimiter = ',', value_name = "NAMES")]
    players: Option<Vec<String>>,

    /// Seed for category sampling (reproducible boards)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Trivia API base URL override
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Play from a local clue pack file instead of the API
    #[arg(long, value_name = "FILE")]
    pack: Option<PathBuf>,

    /// Color theme: auto, dark, or light
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config, then let CLI flags override it
    let mut config = config::Config::load()?;
    if let Some(count) = cli.categories {
        config.api.category_count = count;
    }
    if let Some(url) = cli.api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(mode) = cli.theme.as_deref() {
        config.ui.theme_mode = config::ThemeMode::parse(mode)?;
    }
    config.validate()?;

    let source = match cli.pack {
        Some(path) => api::ClueSource::Pack(api::load_pack(&path)?),
        None => api::ClueSource::Remote(api::TriviaClient::new(&config.api)?),
    };

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let draft = match cli.players {
        Some(names) => models::RosterDraft::with_names(names),
        None => models::RosterDraft::new(),
    };

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config, source, rng, draft);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before reporting any loop error
    tui::restore_terminal(terminal)?;
    result?;

    Ok(())
}
