//! Game state and its key-driven transition function
//!
//! `GameState` holds the submitted guesses and the guess being typed. It never
//! holds the solution: every query that depends on it takes the solution as an
//! argument, so a state can be checked against any word.

use super::{Key, NUM_GUESSES, WORD_LENGTH, Word};

/// Submitted guesses plus the in-progress guess
///
/// Slots fill strictly in order: every slot before the first empty one is
/// filled and every slot after it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    guesses: [Option<Word>; NUM_GUESSES],
    current_guess: String,
}

/// Outcome of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won { attempts: usize },
    Lost,
}

impl GameState {
    /// Fresh state with every attempt slot empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The attempt slots in order, `None` for empty slots
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &[Option<Word>; NUM_GUESSES] {
        &self.guesses
    }

    /// Letters typed so far for the next guess
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Submitted guesses, oldest first
    pub fn submitted(&self) -> impl Iterator<Item = &Word> {
        self.guesses.iter().flatten()
    }

    /// Index of the first empty attempt slot, `None` once all are filled
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        self.guesses.iter().position(Option::is_none)
    }

    /// True once the solution was guessed or the last slot is filled
    #[must_use]
    pub fn is_over(&self, solution: &Word) -> bool {
        self.guesses[NUM_GUESSES - 1].is_some() || self.submitted().any(|guess| guess == solution)
    }

    #[must_use]
    pub fn status(&self, solution: &Word) -> Status {
        if let Some(index) = self.submitted().position(|guess| guess == solution) {
            Status::Won {
                attempts: index + 1,
            }
        } else if self.guesses[NUM_GUESSES - 1].is_some() {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Apply one key press and return the resulting state
    ///
    /// Total and side-effect free: keys that mean nothing in the current state
    /// return it unchanged, and once the game is over every key is ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GameState, Key, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let mut state = GameState::new();
    /// for key in "TRACE".chars().map(Key::Char).chain([Key::Enter]) {
    ///     state = state.transition(key, &solution);
    /// }
    ///
    /// assert_eq!(state.guesses()[0].as_ref().map(Word::text), Some("trace"));
    /// assert_eq!(state.current_guess(), "");
    /// ```
    #[must_use]
    pub fn transition(&self, key: Key, solution: &Word) -> Self {
        if self.is_over(solution) {
            return self.clone();
        }

        match key {
            Key::Backspace => {
                let mut next = self.clone();
                next.current_guess.pop();
                next
            }
            Key::Enter => self.submit().unwrap_or_else(|| self.clone()),
            _ => match key.letter() {
                Some(letter) if self.current_guess.len() < WORD_LENGTH => {
                    let mut next = self.clone();
                    next.current_guess.push(letter);
                    next
                }
                _ => self.clone(),
            },
        }
    }

    /// Move a full-length guess into the first empty slot
    fn submit(&self) -> Option<Self> {
        if self.current_guess.len() != WORD_LENGTH {
            return None;
        }

        let slot = self.active_row()?;
        let word = Word::new(self.current_guess.as_str()).ok()?;

        let mut next = self.clone();
        next.guesses[slot] = Some(word);
        next.current_guess.clear();
        Some(next)
    }
}
