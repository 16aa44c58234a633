//! Terminal UI rendering with ratatui

use crate::board::{Cell, ROWS};
use crate::game::{Game, GameState};
use crate::piece::Piece;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BLOCK: &str = "██";
const EMPTY: &str = "  ";

/// Total width: board (10*2 + 2 for borders) + side panel (16)
const GAME_WIDTH: u16 = 38;
/// Total height: board (20) + 2 for borders
const GAME_HEIGHT: u16 = 22;

/// Render the entire game UI
pub fn render_game(frame: &mut Frame, game: &Game) {
    let area = frame.area();
    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Board
            Constraint::Length(16), // Next piece + score
        ])
        .split(game_area);

    render_board(frame, main_layout[0], game);

    let side_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Next piece preview
            Constraint::Min(5),     // Score
        ])
        .split(main_layout[1]);

    render_next(frame, side_layout[0], &game.next);
    render_score(frame, side_layout[1], game);

    if game.state == GameState::GameOver {
        render_overlay(frame, area, "YOU LOST", &format!("Score: {}", game.score.points));
    }
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the well from the game's dense frame matrix
fn render_board(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" WELLFALL ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let matrix = game.frame();
    let mut lines: Vec<Line> = Vec::with_capacity(ROWS);
    for row in matrix.iter() {
        let spans: Vec<Span> = row
            .iter()
            .map(|cell| match cell {
                Cell::Filled(color) => Span::styled(BLOCK, Style::default().fg(*color)),
                Cell::Empty => Span::raw(EMPTY),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the next-piece preview from its occupancy template
fn render_next(frame: &mut Frame, area: Rect, next: &Piece) {
    let block = Block::default()
        .title(" NEXT ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let color = next.color();
    let mut lines: Vec<Line> = Vec::new();
    for template_row in next.template() {
        let spans: Vec<Span> = template_row
            .bytes()
            .map(|byte| {
                if byte == b'#' {
                    Span::styled(BLOCK, Style::default().fg(color))
                } else {
                    Span::raw(EMPTY)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render the score panel
fn render_score(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" SCORE ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::styled(
            format!("{}", game.score.points),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Line::raw(""),
        Line::styled(
            format!("Lines: {}", game.score.lines),
            Style::default().fg(Color::Gray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render a centered popup over the playfield
fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let popup_area = center_rect(area, 24, 5);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
