//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Feedback, NUM_GUESSES, Row, Tile, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // Header
            Constraint::Length(TILE_HEIGHT * NUM_GUESSES as u16), // Board
            Constraint::Length(3),                                // Status
            Constraint::Min(3),                                   // Messages
            Constraint::Length(1),                                // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_status(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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
    let board = app.session.board();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TILE_HEIGHT); NUM_GUESSES])
        .split(area);

    for (row, row_area) in board.rows().iter().zip(row_areas.iter()) {
        render_row(f, row, *row_area);
    }
}

fn render_row(f: &mut Frame, row: &Row, area: Rect) {
    let tile_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TILE_WIDTH); WORD_LENGTH])
        .flex(Flex::Center)
        .split(area);

    for (tile, tile_area) in row.iter().zip(tile_areas.iter()) {
        render_tile(f, *tile, *tile_area);
    }
}

fn render_tile(f: &mut Frame, tile: Tile, area: Rect) {
    let letter = tile
        .letter
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();

    let (fg, border) = match tile.feedback {
        Some(feedback) => (Color::Black, feedback_color(feedback)),
        None if tile.letter.is_some() => (Color::White, Color::Gray),
        None => (Color::White, Color::DarkGray),
    };
    let style = match tile.feedback {
        Some(feedback) => Style::default().fg(fg).bg(feedback_color(feedback)),
        None => Style::default().fg(fg),
    };

    let paragraph = Paragraph::new(letter)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );

    f.render_widget(paragraph, area);
}

const fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Close => Color::Yellow,
        Feedback::Incorrect => Color::DarkGray,
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let status = Paragraph::new(app.status_text())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Stats "));
    f.render_widget(stats, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.session.is_loading() {
        "Esc: Quit | Ctrl-N: Retry"
    } else {
        "Type letters | Backspace: Delete | Enter: Submit | Ctrl-N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
