//! Wordle Game
//!
//! A terminal Wordle: guess the hidden five-letter word in six tries.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Board, Feedback, GameState, Key, Word};
//!
//! let solution = Word::new("crane").unwrap();
//! let mut state = GameState::new();
//! for key in "trace".chars().map(Key::Char).chain([Key::Enter]) {
//!     state = state.transition(key, &solution);
//! }
//!
//! let board = Board::project(&state, Some(&solution));
//! assert_eq!(board.rows()[0][0].feedback, Some(Feedback::Incorrect));
//! assert_eq!(board.rows()[0][1].feedback, Some(Feedback::Correct));
//! assert_eq!(board.rows()[0][3].feedback, Some(Feedback::Close));
//! ```

// Core domain types
pub mod core;

// Word lists and providers
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
