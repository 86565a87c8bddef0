//! TUI rendering with ratatui
//!
//! Draws the board by projecting the 700x500 board space onto the board
//! panel's cells; the same projection, run in reverse, turns mouse cells back
//! into board points for the event loop.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Message, MessageStyle};
use crate::board::layout::{BOARD_HEIGHT, BOARD_WIDTH, PILE_HALF_EXTENT};
use crate::core::{Collidable, Point, Positionable, Renderable, Visual};
use crate::interaction::AssignmentMode;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let (header, board, results, messages, status) = layout_chunks(f.area());

    render_header(f, header);
    render_board(f, app, board);
    render_results(f, app, results);
    render_messages(f, &app.messages, messages);
    render_status(f, app, status);
}

/// Inner cell area the board space is projected onto.
///
/// The mouse handler uses the same chunk math, so hit tests and drawing
/// always agree.
#[must_use]
pub fn board_inner(area: Rect) -> Rect {
    let (_, board, _, _, _) = layout_chunks(area);
    inner(board)
}

/// Map a terminal cell inside the board panel to board coordinates
#[must_use]
pub fn cell_to_board(area: Rect, column: u16, row: u16) -> Option<Point> {
    if area.width == 0
        || area.height == 0
        || column < area.x
        || column >= area.x + area.width
        || row < area.y
        || row >= area.y + area.height
    {
        return None;
    }
    Some(project(area, column, row))
}

/// Map a terminal cell to board coordinates, clamping to the board edges.
///
/// Drags may wander outside the panel; the gesture should follow to the edge
/// instead of freezing.
#[must_use]
pub fn cell_to_board_clamped(area: Rect, column: u16, row: u16) -> Point {
    let column = column.clamp(area.x, area.x + area.width.saturating_sub(1));
    let row = row.clamp(area.y, area.y + area.height.saturating_sub(1));
    project(area, column, row)
}

fn project(area: Rect, column: u16, row: u16) -> Point {
    let fx = (f32::from(column - area.x) + 0.5) / f32::from(area.width.max(1));
    let fy = (f32::from(row - area.y) + 0.5) / f32::from(area.height.max(1));
    Point::new(fx * BOARD_WIDTH, fy * BOARD_HEIGHT)
}

/// Board point to the cell nearest its projection
fn board_to_cell(area: Rect, point: Point) -> (u16, u16) {
    let col = area.x + ((point.x / BOARD_WIDTH) * f32::from(area.width)) as u16;
    let row = area.y + ((point.y / BOARD_HEIGHT) * f32::from(area.height)) as u16;
    (
        col.min(area.x + area.width.saturating_sub(1)),
        row.min(area.y + area.height.saturating_sub(1)),
    )
}

fn layout_chunks(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(5), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(68), // Board
            Constraint::Percentage(32), // Results
        ])
        .split(rows[1]);

    (rows[0], main[0], main[1], rows[2], rows[3])
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE BOARD - drag letters, then filter")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    let inner = inner(area);
    if inner.width < 10 || inner.height < 6 {
        return;
    }

    // Pile mats first, tokens on top in draw order
    for mat in app.board.mats() {
        render_mat(f, inner, mat.slot(), mat.center());
    }

    for &id in app.board.draw_order() {
        let token = app.board.token(id);
        render_token(
            f,
            inner,
            token.position(),
            token.letter().as_char(),
            token.visual(),
        );
    }
}

fn render_mat(f: &mut Frame, area: Rect, slot: usize, center: Point) {
    let width = (((PILE_HALF_EXTENT * 2.0) / BOARD_WIDTH) * f32::from(area.width)) as u16;
    let height = (((PILE_HALF_EXTENT * 2.0) / BOARD_HEIGHT) * f32::from(area.height)) as u16;
    let width = width.max(5);
    let height = height.max(3);

    let (col, row) = board_to_cell(area, center);
    let rect = clipped(area, col, row, width, height);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let mat = Block::default()
        .title(format!(" {} ", slot + 1))
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(mat, rect);
}

fn render_token(f: &mut Frame, area: Rect, position: Point, letter: char, visual: Visual) {
    let (col, row) = board_to_cell(area, position);
    let rect = clipped(area, col, row, 5, 1);
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let style = match visual {
        Visual::Plain => Style::default().fg(Color::Black).bg(Color::Gray),
        Visual::Excluded => Style::default().fg(Color::DarkGray).bg(Color::Black),
        Visual::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Visual::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    };

    let chip = Paragraph::new(letter.to_ascii_uppercase().to_string())
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(chip, rect);
}

/// Rect of `width`x`height` centered on a cell, clipped to the area
fn clipped(area: Rect, col: u16, row: u16, width: u16, height: u16) -> Rect {
    let x = col.saturating_sub(width / 2).max(area.x);
    let y = row.saturating_sub(height / 2).max(area.y);
    let right = (x + width).min(area.x + area.width);
    let bottom = (y + height).min(area.y + area.height);
    Rect {
        x,
        y,
        width: right.saturating_sub(x),
        height: bottom.saturating_sub(y),
    }
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let (title, lines): (String, Vec<Line>) = match &app.results {
        None => (
            " Candidates ".to_string(),
            vec![
                Line::from(""),
                Line::from("Press Enter to filter the"),
                Line::from("word list against the board."),
            ],
        ),
        Some(matches) if matches.is_empty() => (
            " Candidates (0) ".to_string(),
            vec![Line::from(Span::styled(
                "No candidates match.",
                Style::default().fg(Color::Red),
            ))],
        ),
        Some(matches) => {
            let visible = usize::from(inner(area).height);
            let mut lines: Vec<Line> = matches
                .iter()
                .take(visible)
                .map(|word| Line::from(word.to_uppercase()))
                .collect();
            if matches.len() > visible {
                let hidden = matches.len() - visible;
                if let Some(last) = lines.last_mut() {
                    *last = Line::from(Span::styled(
                        format!("... and {hidden} more"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            (format!(" Candidates ({}) ", matches.len()), lines)
        }
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .take(usize::from(area.height.saturating_sub(2)))
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let (mode_text, mode_color) = match app.controller.mode() {
        AssignmentMode::Correct => ("Mode: CORRECT", Color::Green),
        AssignmentMode::Present => ("Mode: PRESENT", Color::Yellow),
    };
    let mode = Paragraph::new(mode_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(mode_color).add_modifier(Modifier::BOLD));
    f.render_widget(mode, chunks[0]);

    let count_text = match app.result_count() {
        Some(count) => format!("Candidates: {count}"),
        None => "Candidates: -".to_string(),
    };
    let count = Paragraph::new(count_text).alignment(Alignment::Center);
    f.render_widget(count, chunks[1]);

    let help = Paragraph::new("q: Quit | m: Mode | r: Reset | Enter: Filter")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
