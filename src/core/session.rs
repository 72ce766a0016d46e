//! Two-phase game session
//!
//! A session starts `Loading` while the word list is fetched, and becomes
//! `Active` once a solution is chosen. Keys pressed while loading are dropped.

use super::{Board, GameState, Key, Status, Word};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Loading,
    Active {
        solution: Word,
        state: GameState,
    },
}

impl Session {
    /// Start a new game with `solution`, discarding any previous progress
    pub fn activate(&mut self, solution: Word) {
        *self = Self::Active {
            solution,
            state: GameState::new(),
        };
    }

    /// Feed one key to the game
    ///
    /// Ignored while loading. Returns true if the state changed.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Key, Session, Word};
    ///
    /// let mut session = Session::default();
    /// assert!(!session.handle_key(Key::Char('a')));
    ///
    /// session.activate(Word::new("crane").unwrap());
    /// assert!(session.handle_key(Key::Char('a')));
    /// assert_eq!(session.state().map(|s| s.current_guess()), Some("a"));
    /// ```
    pub fn handle_key(&mut self, key: Key) -> bool {
        match self {
            Self::Loading => false,
            Self::Active { solution, state } => {
                let next = state.transition(key, solution);
                if next == *state {
                    return false;
                }
                *state = next;
                true
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn solution(&self) -> Option<&Word> {
        match self {
            Self::Loading => None,
            Self::Active { solution, .. } => Some(solution),
        }
    }

    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        match self {
            Self::Loading => None,
            Self::Active { state, .. } => Some(state),
        }
    }

    /// `None` while loading
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Loading => None,
            Self::Active { solution, state } => Some(state.status(solution)),
        }
    }

    /// Current board; blank while loading
    #[must_use]
    pub fn board(&self) -> Board {
        match self {
            Self::Loading => Board::project(&GameState::new(), None),
            Self::Active { solution, state } => Board::project(state, Some(solution)),
        }
    }
}
