//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod board;
pub mod clue_panel;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod judge_prompt;
pub mod roster_editor;
pub mod scoreboard;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand_chacha::ChaCha8Rng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::api::ClueSource;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Board, CellRef, Game, GamePhase, RevealOutcome, Roster, RosterDraft, Verdict};

// Re-export TUI components
pub use board::BoardWidget;
pub use clue_panel::CluePanel;
pub use component::Component;
pub use help_overlay::HelpOverlay;
pub use judge_prompt::JudgePrompt;
pub use roster_editor::RosterEditor;
pub use scoreboard::Scoreboard;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Type of popup currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Correct/incorrect prompt for a revealed answer
    JudgePrompt,
    /// Help overlay popup
    HelpOverlay,
}

/// Active component - holds the currently active popup component
///
/// This enum wraps all component types that implement the Component trait.
/// Only one component can be active at a time.
pub enum ActiveComponent {
    /// Judge prompt component
    JudgePrompt(JudgePrompt),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// A board acquisition queued by an input handler.
///
/// Acquisition blocks the UI thread, so handlers queue the deal and the
/// event loop runs it right after a frame is drawn. That frame carries
/// the contacting notice, which would otherwise never reach the screen.
#[derive(Debug)]
pub enum PendingDeal {
    /// First deal, with the roster built from the setup draft
    Start(Roster),
    /// Fresh deal for the roster already seated
    NewRound,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// The running game; absent until the first board is dealt
    pub game: Option<Game>,
    /// Player name slots edited on the setup screen
    pub draft: RosterDraft,
    /// Where boards come from (live API or a local clue pack)
    pub source: ClueSource,
    /// Seeded generator driving category sampling
    pub rng: ChaCha8Rng,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Selected name slot on the setup screen
    pub roster_cursor: usize,
    /// Selected board cell while playing
    pub cursor: CellRef,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message, shown in place of the key hints
    pub status_message: Option<String>,
    /// Current error message (if any)
    pub error_message: Option<String>,

    /// Application configuration
    pub config: Config,

    // Control flags
    /// Acquisition queued to run once the next frame is on screen
    pub pending_deal: Option<PendingDeal>,
    /// Flag to quit the application
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial application state on the setup screen.
    #[must_use]
    pub fn new(config: Config, source: ClueSource, rng: ChaCha8Rng, draft: RosterDraft) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            game: None,
            draft,
            source,
            rng,
            theme,
            roster_cursor: 0,
            cursor: CellRef::new(0, 0),
            active_popup: None,
            active_component: None,
            status_message: None,
            error_message: None,
            config,
            pending_deal: None,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Validates the draft into a roster and queues the first deal.
    ///
    /// An empty draft surfaces as an error overlay and leaves the setup
    /// screen editable.
    pub fn request_start(&mut self) {
        match self.draft.build() {
            Ok(roster) => {
                self.pending_deal = Some(PendingDeal::Start(roster));
                let notice = self.dealing_notice();
                self.set_status(notice);
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Queues a fresh deal for the roster already seated.
    pub fn request_new_round(&mut self) {
        if self.game.is_some() {
            self.pending_deal = Some(PendingDeal::NewRound);
            let notice = self.dealing_notice();
            self.set_status(notice);
        }
    }

    /// Runs a queued acquisition.
    ///
    /// The event loop calls this right after drawing, so the notice set
    /// by the request is on screen while the fetch blocks.
    pub fn run_pending_deal(&mut self) {
        match self.pending_deal.take() {
            Some(PendingDeal::Start(roster)) => self.start_game(roster),
            Some(PendingDeal::NewRound) => self.deal_board(),
            None => {}
        }
    }

    fn dealing_notice(&self) -> &'static str {
        match self.source {
            ClueSource::Remote(_) => "Contacting the trivia server...",
            ClueSource::Pack(_) => "Dealing from the clue pack...",
        }
    }

    /// Acquires a board for `roster` and starts play.
    ///
    /// A failed acquisition surfaces as an error overlay and leaves the
    /// setup screen editable; no game is created.
    fn start_game(&mut self, roster: Roster) {
        match self.source.acquire(self.config.api.category_count, &mut self.rng) {
            Ok(board) => {
                let mut game = Game::new(roster);
                game.start(board);
                let starter = game.current_player().name.clone();
                self.game = Some(game);
                self.cursor = CellRef::new(0, 0);
                self.set_status(format!("{starter} starts. Pick a clue"));
            }
            Err(err) => self.set_error(format!("{err:#}")),
        }
    }

    /// Acquires a fresh board for the existing roster and starts the round.
    ///
    /// Used between rounds, where the players are already locked in. On
    /// failure the game stays in setup and Enter retries the deal.
    fn deal_board(&mut self) {
        let board = match self.source.acquire(self.config.api.category_count, &mut self.rng) {
            Ok(board) => board,
            Err(err) => {
                self.set_error(format!("{err:#}"));
                return;
            }
        };

        let Some(game) = self.game.as_mut() else {
            return;
        };
        game.start(board);
        let starter = game.current_player().name.clone();
        self.cursor = CellRef::new(0, 0);
        self.set_status(format!("New round. {starter} starts"));
    }

    /// Resets scores, discards the board, and queues a new deal for the
    /// same players.
    pub fn restart_same_players(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        game.clear_same_players();
        self.request_new_round();
    }

    /// Activates the clue at `cell` and reacts to the outcome.
    pub fn reveal_cell(&mut self, cell: CellRef) {
        let outcome = match self.game.as_mut() {
            Some(game) => game.reveal(cell),
            None => return,
        };

        match outcome {
            Ok(RevealOutcome::QuestionShown) => {
                let message = self.game.as_ref().and_then(|game| {
                    let board = game.board()?;
                    let category = board.category(cell.column)?;
                    Some(format!(
                        "{} plays {} for ${}",
                        game.current_player().name,
                        category.title(),
                        Board::row_value(cell.row)
                    ))
                });
                if let Some(message) = message {
                    self.set_status(message);
                }
            }
            Ok(RevealOutcome::AnswerShown) => self.open_judge_prompt(),
            Ok(RevealOutcome::Ignored) => self.set_status("Already played"),
            Ok(RevealOutcome::JudgmentPending) => {
                self.set_status("Judge the current answer first");
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Resolves the pending judgment with `verdict` and closes the prompt.
    pub fn apply_judgment(&mut self, verdict: Verdict) {
        let result = match self.game.as_mut() {
            Some(game) => game.judge(verdict),
            None => return,
        };
        self.close_component();

        let judgment = match result {
            Ok(judgment) => judgment,
            Err(err) => {
                self.set_error(err.to_string());
                return;
            }
        };

        let Some(game) = self.game.as_ref() else {
            return;
        };
        let message = match judgment.verdict {
            Verdict::Correct => {
                let name = game
                    .roster()
                    .iter()
                    .find(|player| player.id == judgment.player_id)
                    .map_or("?", |player| player.name.as_str());
                format!("\u{2713} {name} +${}", judgment.value)
            }
            Verdict::Incorrect => format!("\u{2717} Pass to {}", game.current_player().name),
        };

        if game.board().is_some_and(Board::is_exhausted) {
            self.set_status(format!("{message}. Board complete, r deals a new round"));
        } else {
            self.set_status(message);
        }
    }

    // === Component Management Methods (Component Trait Pattern) ===

    /// Open the judge prompt component for the pending judgment
    pub fn open_judge_prompt(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let (Some(cell), Some(board)) = (game.pending_judgment(), game.board()) else {
            return;
        };

        let title = board
            .category(cell.column)
            .map(|category| category.title().to_string())
            .unwrap_or_default();
        let answer = board
            .clue_at(cell)
            .map(|clue| clue.answer().to_string())
            .unwrap_or_default();

        let prompt = JudgePrompt::new(
            game.current_player().name.clone(),
            title,
            Board::row_value(cell.row),
            answer,
        );
        self.active_component = Some(ActiveComponent::JudgePrompt(prompt));
        self.active_popup = Some(PopupType::JudgePrompt);
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        let help = HelpOverlay::new();
        self.active_component = Some(ActiveComponent::HelpOverlay(help));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        use rand::SeedableRng;

        let config = Config {
            api: crate::config::ApiConfig {
                category_count: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        Self::new(
            config,
            ClueSource::Pack(crate::models::test_categories()),
            ChaCha8Rng::seed_from_u64(7),
            RosterDraft::with_names(["Alice", "Bob"]),
        )
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Run a queued deal now that the contacting notice is on screen
        if state.pending_deal.is_some() {
            state.run_pending_deal();
            continue;
        }

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    handle_mouse_event(state, mouse, screen);
                }
                _ => {} // Terminal resized, will re-render on next loop
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Vertical layout of the setup screen: title, roster editor, status bar.
pub(crate) fn setup_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Roster editor
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

/// Vertical layout of the play screen: title, board, clue, players, status.
///
/// The mouse handler resolves clicks through the same chunks, so the board
/// area it hit-tests is exactly the area the board rendered into.
pub(crate) fn play_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Board grid
            Constraint::Length(6), // Clue panel
            Constraint::Length(4), // Scoreboard
            Constraint::Length(3), // Status bar
        ])
        .split(area)
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    match state.game.as_ref().map(Game::phase) {
        Some(GamePhase::Playing) => {
            let chunks = play_chunks(f.area());
            render_title_bar(f, chunks[0], state);
            BoardWidget::render(f, chunks[1], state);
            CluePanel::render(f, chunks[2], state);
            Scoreboard::render(f, chunks[3], state);
            StatusBar::render(f, chunks[4], state);
        }
        Some(GamePhase::Setup) => {
            let chunks = setup_chunks(f.area());
            render_title_bar(f, chunks[0], state);
            render_between_rounds(f, chunks[1], state);
            StatusBar::render(f, chunks[2], state);
        }
        None => {
            let chunks = setup_chunks(f.area());
            render_title_bar(f, chunks[0], state);
            RosterEditor::render(f, chunks[1], state);
            StatusBar::render(f, chunks[2], state);
        }
    }

    // Render popup if active
    if let Some(popup_type) = &state.active_popup {
        render_popup(f, popup_type, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the remaining clue count while playing
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.game.as_ref().and_then(Game::board) {
        Some(board) => format!(" {APP_NAME} - {} clues left", board.remaining()),
        None => format!(" {APP_NAME}"),
    };

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the between-rounds screen: roster locked, waiting for a deal
fn render_between_rounds(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let block = Block::default()
        .title(" New Round ")
        .borders(Borders::ALL)
        .style(Style::default().fg(theme.primary).bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            "Scores are reset. Same players:",
            Style::default().fg(theme.warning),
        ),
        Line::from(""),
    ];
    if let Some(game) = state.game.as_ref() {
        for player in game.roster().iter() {
            lines.push(Line::styled(
                format!("  {}. {}", player.id, player.name),
                Style::default().fg(theme.accent),
            ));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Enter deals a new board",
        Style::default().fg(theme.text_muted),
    ));

    f.render_widget(Paragraph::new(lines), inner);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: &PopupType, state: &AppState) {
    match popup_type {
        PopupType::JudgePrompt => {
            if let Some(ActiveComponent::JudgePrompt(ref prompt)) = state.active_component {
                prompt.render(f, f.area(), &state.theme);
            }
        }
        PopupType::HelpOverlay => {
            if let Some(ActiveComponent::HelpOverlay(ref help)) = state.active_component {
                help.render(f, f.area(), &state.theme);
            }
        }
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    // Split into title and message
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(2), // Help text
        ])
        .split(area);

    // Title with error styling
    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    // Error message with word wrap
    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    // Help text
    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    match state.game.as_ref().map(Game::phase) {
        Some(GamePhase::Playing) => handlers::handle_play_input(state, key),
        Some(GamePhase::Setup) => handlers::handle_between_rounds_input(state, key),
        None => handlers::handle_roster_input(state, key),
    }
}

/// Handle mouse input events
fn handle_mouse_event(state: &mut AppState, mouse: event::MouseEvent, screen: Rect) {
    use crossterm::event::{MouseButton, MouseEventKind};

    // Popups and the error overlay are keyboard-only
    if state.error_message.is_some() || state.active_popup.is_some() {
        return;
    }
    if state.game.as_ref().map(Game::phase) != Some(GamePhase::Playing) {
        return;
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        handlers::handle_play_click(state, mouse.column, mouse.row, screen);
    }
}
