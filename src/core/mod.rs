//! Core domain types for Wordle
//!
//! The game state, its transition function and the board projection are all
//! pure: no I/O and no randomness.

mod board;
mod feedback;
mod key;
mod session;
mod state;
mod word;

pub use board::{Board, Row, Tile, render_row};
pub use feedback::Feedback;
pub use key::Key;
pub use session::Session;
pub use state::{GameState, Status};
pub use word::{Word, WordError};

/// Letters in every word
pub const WORD_LENGTH: usize = 5;

/// Attempt slots per game
pub const NUM_GUESSES: usize = 6;
