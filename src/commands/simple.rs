//! Simple line mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::{Key, Session, Status, WORD_LENGTH};
use crate::output::{print_banner, print_board, print_result};
use crate::wordlists::{WordProvider, fetch_solution};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info};

/// What a line of input did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Submitted,
    Rejected,
    Quit,
}

/// Type one line into the session
///
/// Only a line of exactly `WORD_LENGTH` ASCII letters is typed in, followed by
/// `Enter`, so every accepted line becomes one guess. Anything else is rejected
/// before it reaches the game.
pub fn play_line(session: &mut Session, line: &str) -> LineOutcome {
    let line = line.trim();
    if line.eq_ignore_ascii_case("quit") {
        return LineOutcome::Quit;
    }

    if line.len() != WORD_LENGTH || !line.chars().all(|c| c.is_ascii_alphabetic()) {
        return LineOutcome::Rejected;
    }

    for key in line.chars().map(Key::Char).chain([Key::Enter]) {
        session.handle_key(key);
    }
    LineOutcome::Submitted
}

/// Run the simple line mode
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or if there's an I/O
/// error reading user input.
pub fn run_simple(provider: &dyn WordProvider) -> Result<()> {
    print_banner();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Fetching word list from {}", provider.describe()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let fetched = fetch_solution(provider);
    spinner.finish_and_clear();

    let solution = fetched.context("could not start a game")?;
    let mut session = Session::default();
    session.activate(solution);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Guess: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match play_line(&mut session, &line?) {
            LineOutcome::Quit => break,
            LineOutcome::Rejected => {
                println!("Enter a {WORD_LENGTH}-letter word.");
                continue;
            }
            LineOutcome::Submitted => debug!("guess submitted"),
        }

        let board = session.board();
        print_board(&board);

        if let (Some(status), Some(solution)) = (session.status(), session.solution())
            && status != Status::InProgress
        {
            info!(?status, "game finished");
            print_result(status, solution, &board);
            break;
        }
    }

    Ok(())
}
