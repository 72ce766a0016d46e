//! Formatting utilities for terminal output

use crate::core::{Feedback, Row, Tile};
use colored::{ColoredString, Colorize};

/// Format a tile as a three-column cell, coloured by its feedback
#[must_use]
pub fn format_tile(tile: Tile) -> ColoredString {
    let letter = tile.letter.unwrap_or('_').to_ascii_uppercase();
    let cell = format!(" {letter} ");

    match tile.feedback {
        Some(Feedback::Correct) => cell.black().on_green(),
        Some(Feedback::Close) => cell.black().on_yellow(),
        Some(Feedback::Incorrect) => cell.white().on_bright_black(),
        None => cell.normal(),
    }
}

/// Format a row of tiles, followed by its emoji squares once it has feedback
#[must_use]
pub fn format_row(row: &Row) -> String {
    let tiles: String = row.iter().map(|&tile| format_tile(tile).to_string()).collect();
    let emoji: String = row
        .iter()
        .filter_map(|tile| tile.feedback.map(Feedback::emoji))
        .collect();

    if emoji.is_empty() {
        tiles
    } else {
        format!("{tiles}  {emoji}")
    }
}
