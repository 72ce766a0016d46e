//! Display functions for line mode

use super::formatters::format_row;
use crate::core::{Board, Status, Word};
use colored::Colorize;

/// Print the game banner and instructions
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Line Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden 5-letter word in 6 tries.");
    println!("After each guess:\n");
    println!("  {} letter is in the right spot", "green".black().on_green());
    println!("  {} letter is in the word, elsewhere", "yellow".black().on_yellow());
    println!("  {} letter is not in the word\n", "gray".white().on_bright_black());
    println!("Type 'quit' to exit.\n");
}

/// Print every row of the board
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        println!("  {}", format_row(row));
    }
    println!();
}

/// Print the closing line for a finished game
pub fn print_result(status: Status, solution: &Word, board: &Board) {
    match status {
        Status::Won { attempts } => {
            println!("{}", format!("✅ Solved in {attempts}!").green().bold());
        }
        Status::Lost => {
            println!(
                "{}",
                format!(
                    "❌ Out of guesses. The word was {}",
                    solution.text().to_uppercase()
                )
                .red()
                .bold()
            );
        }
        Status::InProgress => return,
    }
    println!("\n{}\n", board.to_emoji());
}
