//! Stateless UI rendering for the calculator.

use crate::app::App;
use crate::keypad::{Button, Cursor, LAYOUT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const BUTTON_WIDTH: u16 = 8;
const BUTTON_HEIGHT: u16 = 3;
const DISPLAY_HEIGHT: u16 = 4;
const CALC_WIDTH: u16 = BUTTON_WIDTH * 4;
const CALC_HEIGHT: u16 = DISPLAY_HEIGHT + BUTTON_HEIGHT * LAYOUT.len() as u16;

/// Renders the two-line display and the button grid with cursor highlight.
pub fn draw(frame: &mut Frame, app: &App) {
    let (display, grid) = split_calculator(frame.area());

    draw_display(frame, display, app);
    for (cursor, button, cell) in button_cells(grid) {
        draw_button(frame, cell, button, cursor == app.cursor());
    }
}

/// Finds the button under a terminal coordinate, for mouse dispatch.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<(Cursor, Button)> {
    let (_, grid) = split_calculator(area);
    let position = Position::new(column, row);

    button_cells(grid)
        .into_iter()
        .find(|(_, _, cell)| cell.contains(position))
        .map(|(cursor, button, _)| (cursor, button))
}

fn draw_display(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(app.previous_line()).style(Style::default().fg(Color::DarkGray)),
        Line::from(app.current_line()).style(Style::default().add_modifier(Modifier::BOLD)),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(display, area);
}

fn draw_button(frame: &mut Frame, area: Rect, button: Button, highlighted: bool) {
    let base_style = match button {
        Button::Digit(_) => Style::default(),
        Button::Op(_) | Button::Equals => Style::default().fg(Color::Cyan),
        Button::Clear | Button::Delete => Style::default().fg(Color::Red),
    };

    let style = if highlighted {
        base_style
            .bg(Color::White)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(button.label())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Splits the centered calculator region into display and grid areas.
fn split_calculator(area: Rect) -> (Rect, Rect) {
    let calculator = center_rect(area, CALC_WIDTH, CALC_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT * LAYOUT.len() as u16),
        ])
        .split(calculator);

    (chunks[0], chunks[1])
}

/// Lays out every keypad button within the grid area.
fn button_cells(grid: Rect) -> Vec<(Cursor, Button, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(BUTTON_HEIGHT); LAYOUT.len()])
        .split(grid);

    let mut cells = Vec::new();
    for (row_index, row) in LAYOUT.iter().enumerate() {
        let constraints: Vec<Constraint> = row
            .iter()
            .map(|(_, span)| Constraint::Length(span * BUTTON_WIDTH))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[row_index]);

        for (cell_index, &(button, _)) in row.iter().enumerate() {
            cells.push((
                Cursor {
                    row: row_index,
                    cell: cell_index,
                },
                button,
                columns[cell_index],
            ));
        }
    }
    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_finds_the_clicked_button() {
        let area = Rect::new(0, 0, 80, 30);
        let (_, grid) = split_calculator(area);

        // Click the center of every laid-out button and expect it back.
        for (cursor, button, cell) in button_cells(grid) {
            let x = cell.x + cell.width / 2;
            let y = cell.y + cell.height / 2;
            assert_eq!(hit_test(area, x, y), Some((cursor, button)));
        }
    }

    #[test]
    fn hit_test_misses_outside_the_grid() {
        let area = Rect::new(0, 0, 80, 30);
        assert_eq!(hit_test(area, 0, 0), None);
    }
}
