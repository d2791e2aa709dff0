//! Snapshot rendering for the caret demo.
//!
//! Draws the buffer rows with the selection highlighted between the
//! normalized endpoints, places the terminal cursor at the caret cell when
//! the selection is collapsed, and shows a one-line status bar.

use caret_editor::Snapshot;
use ratatui::layout::{Constraint, Layout, Position as ScreenPosition, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

pub fn draw(frame: &mut Frame, snapshot: &Snapshot, tab_width: usize) {
    let [text_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    render_text(frame, text_area, snapshot, tab_width);
    render_status(frame, status_area, snapshot);
}

fn render_text(frame: &mut Frame, area: Rect, snapshot: &Snapshot, tab_width: usize) {
    let selected = Style::default().bg(Color::Blue).fg(Color::White);
    let windowed = snapshot.start != snapshot.end;

    let mut lines = Vec::with_capacity(snapshot.data.len());
    for (row, text) in snapshot.data.iter().enumerate() {
        let line = match selection_on_row(snapshot, row) {
            Some((from, to)) if windowed => {
                let head: String = text.chars().take(from).collect();
                let (sel, tail): (String, String) = match to {
                    Some(to) => (
                        text.chars().skip(from).take(to - from).collect(),
                        text.chars().skip(to).collect(),
                    ),
                    // Selection runs past the row end; the extra space
                    // stands in for the selected newline.
                    None => {
                        let mut sel: String = text.chars().skip(from).collect();
                        sel.push(' ');
                        (sel, String::new())
                    }
                };
                Line::from(vec![
                    Span::raw(expand_tabs(&head, tab_width)),
                    Span::styled(expand_tabs(&sel, tab_width), selected),
                    Span::raw(expand_tabs(&tail, tab_width)),
                ])
            }
            _ => Line::raw(expand_tabs(text, tab_width)),
        };
        lines.push(line);
    }

    let block = Block::default().borders(Borders::ALL).title("caret");
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if !windowed && area.width > 2 && area.height > 2 {
        let row = snapshot.start.row;
        let text = snapshot.data.get(row).map(String::as_str).unwrap_or("");
        let x = cell_offset(text, snapshot.start.col, tab_width);
        frame.set_cursor_position(ScreenPosition::new(
            area.x + 1 + x.min((area.width - 2) as usize) as u16,
            area.y + 1 + (row as u16).min(area.height - 3),
        ));
    }
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let position = if snapshot.start == snapshot.end {
        format!("{}:{}", snapshot.start.row + 1, snapshot.start.col + 1)
    } else {
        format!(
            "{}:{} - {}:{}",
            snapshot.start.row + 1,
            snapshot.start.col + 1,
            snapshot.end.row + 1,
            snapshot.end.col + 1
        )
    };
    let status = Line::from(format!(" {position}  |  Ctrl+Q quit")).dim();
    frame.render_widget(status, area);
}

/// Selection char-column range on `row`: `(from, Some(to))` for a range that
/// ends on this row, `(from, None)` when it continues past the row end.
/// `None` when the selection does not touch the row.
fn selection_on_row(snapshot: &Snapshot, row: usize) -> Option<(usize, Option<usize>)> {
    let (low, high) = (snapshot.start, snapshot.end);
    if row < low.row || row > high.row {
        return None;
    }
    if low.row == high.row {
        return Some((low.col, Some(high.col)));
    }
    if row == low.row {
        Some((low.col, None))
    } else if row == high.row {
        Some((0, Some(high.col)))
    } else {
        Some((0, None))
    }
}

fn expand_tabs(text: &str, tab_width: usize) -> String {
    text.replace('\t', &" ".repeat(tab_width.max(1)))
}

/// Screen cell offset of char column `col` in `text`.
fn cell_offset(text: &str, col: usize, tab_width: usize) -> usize {
    text.chars()
        .take(col)
        .map(|ch| match ch {
            '\t' => tab_width.max(1),
            _ => ch.width().unwrap_or(0),
        })
        .sum()
}
