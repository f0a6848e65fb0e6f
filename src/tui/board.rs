//! Board widget: the category/clue grid and its coordinate mapping.
//!
//! Cell geometry lives in exactly one place, the [`cell_rect`]/[`cell_at`]
//! pair. The renderer draws every cell from `cell_rect` and the mouse
//! handler resolves clicks through `cell_at`, so the two can never
//! disagree about which cell a screen position belongs to.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::AppState;
use crate::models::{Board, CellRef, Showing};

/// Height in terminal rows of the category header strip.
const HEADER_ROWS: u16 = 2;

/// The inner grid area of the board widget, minus its borders, or `None`
/// if the area is too small to hold a grid.
fn grid_inner(area: Rect) -> Option<Rect> {
    if area.width < 3 || area.height < HEADER_ROWS + 3 {
        return None;
    }
    Some(Rect::new(
        area.x + 1,
        area.y + 1,
        area.width - 2,
        area.height - 2,
    ))
}

/// The screen rectangle of the category header for `column`.
#[must_use]
pub fn header_rect(area: Rect, columns: usize, column: usize) -> Option<Rect> {
    let inner = grid_inner(area)?;
    let col_w = inner.width / columns as u16;
    if col_w == 0 || column >= columns {
        return None;
    }
    Some(Rect::new(
        inner.x + col_w * column as u16,
        inner.y,
        col_w,
        HEADER_ROWS,
    ))
}

/// The screen rectangle of a clue cell, or `None` if the cell is off the
/// grid or the area is too small to render one.
#[must_use]
pub fn cell_rect(area: Rect, columns: usize, rows: usize, cell: CellRef) -> Option<Rect> {
    let inner = grid_inner(area)?;
    if cell.column >= columns || cell.row >= rows {
        return None;
    }

    let col_w = inner.width / columns as u16;
    let row_h = (inner.height - HEADER_ROWS) / rows as u16;
    if col_w == 0 || row_h == 0 {
        return None;
    }

    Some(Rect::new(
        inner.x + col_w * cell.column as u16,
        inner.y + HEADER_ROWS + row_h * cell.row as u16,
        col_w,
        row_h,
    ))
}

/// The clue cell under a screen position, or `None` for the borders, the
/// header strip, and the slack right/bottom edge left by integer division.
#[must_use]
pub fn cell_at(area: Rect, columns: usize, rows: usize, x: u16, y: u16) -> Option<CellRef> {
    let inner = grid_inner(area)?;
    let col_w = inner.width / columns as u16;
    let row_h = (inner.height - HEADER_ROWS) / rows as u16;
    if col_w == 0 || row_h == 0 {
        return None;
    }

    let grid_y = inner.y + HEADER_ROWS;
    if x < inner.x || y < grid_y {
        return None;
    }

    let column = ((x - inner.x) / col_w) as usize;
    let row = ((y - grid_y) / row_h) as usize;
    if column >= columns || row >= rows {
        return None;
    }

    Some(CellRef::new(column, row))
}

/// Board widget renders the category headers and the value grid.
pub struct BoardWidget;

impl BoardWidget {
    /// Render the board grid with the cursor highlight.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let block = Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        f.render_widget(block, area);

        let Some(board) = state.game.as_ref().and_then(|game| game.board()) else {
            let placeholder = Paragraph::new("No board dealt")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_muted));
            if let Some(inner) = grid_inner(area) {
                f.render_widget(placeholder, inner);
            }
            return;
        };

        let columns = board.category_count();
        let rows = board.row_count();

        for (column, category) in board.categories().enumerate() {
            let Some(rect) = header_rect(area, columns, column) else {
                continue;
            };
            let header = Paragraph::new(category.title().to_string())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(
                    Style::default()
                        .fg(theme.text)
                        .bg(theme.board_bg)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(header, rect);
        }

        for column in 0..columns {
            for row in 0..rows {
                let cell = CellRef::new(column, row);
                let Some(rect) = cell_rect(area, columns, rows, cell) else {
                    continue;
                };
                Self::render_cell(f, rect, state, board, cell);
            }
        }
    }

    fn render_cell(f: &mut Frame, rect: Rect, state: &AppState, board: &Board, cell: CellRef) {
        let theme = &state.theme;
        let showing = board
            .clue_at(cell)
            .map_or(Showing::Hidden, crate::models::Clue::showing);

        let (label, style) = match showing {
            Showing::Hidden => (
                format!("${}", Board::row_value(cell.row)),
                Style::default()
                    .fg(theme.gold)
                    .bg(theme.board_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Showing::Question => (
                "?".to_string(),
                Style::default()
                    .fg(theme.text)
                    .bg(theme.board_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Showing::Answer => (
                String::new(),
                Style::default().fg(theme.text_muted).bg(theme.background),
            ),
        };

        let style = if cell == state.cursor {
            style
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            style
        };

        // Pad above the label so it sits at the cell's vertical middle
        let pad = rect.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
        lines.push(Line::from(label));

        let cell_widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(cell_widget, rect);
    }
}
