//! Per-letter feedback for a guessed row
//!
//! Each position is classified on its own:
//! - Correct: same letter at the same position in the solution
//! - Close: letter appears somewhere else in the solution
//! - Incorrect: letter is not in the solution
//!
//! Letter frequency is not tracked, so a letter repeated in the guess can be
//! marked `Close` more than once even if the solution holds a single copy.

use super::Word;

/// Feedback class of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Close,
    Incorrect,
}

impl Feedback {
    /// Classify `letter` typed at `position` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::classify(b'c', 0, &solution), Feedback::Correct);
    /// assert_eq!(Feedback::classify(b'r', 0, &solution), Feedback::Close);
    /// assert_eq!(Feedback::classify(b't', 0, &solution), Feedback::Incorrect);
    /// ```
    #[must_use]
    pub fn classify(letter: u8, position: usize, solution: &Word) -> Self {
        if solution.chars().get(position) == Some(&letter) {
            Self::Correct
        } else if solution.has_letter(letter) {
            Self::Close
        } else {
            Self::Incorrect
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Close => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_word(guess: &str, solution: &str) -> Vec<Feedback> {
        let solution = Word::new(solution).unwrap();
        guess
            .bytes()
            .enumerate()
            .map(|(i, letter)| Feedback::classify(letter, i, &solution))
            .collect()
    }

    #[test]
    fn crane_against_trace() {
        use Feedback::{Close, Correct, Incorrect};
        // r, a and e sit in the same spots; c is elsewhere; t is absent
        assert_eq!(
            classify_word("trace", "crane"),
            vec![Incorrect, Correct, Correct, Close, Correct]
        );
    }

    #[test]
    fn exact_match_is_all_correct() {
        assert!(
            classify_word("crane", "crane")
                .iter()
                .all(|&f| f == Feedback::Correct)
        );
    }

    #[test]
    fn duplicate_letters_are_checked_independently() {
        use Feedback::{Close, Correct, Incorrect};
        // Both leading e's are close even though crane has a single e
        assert_eq!(
            classify_word("eerie", "crane"),
            vec![Close, Close, Close, Incorrect, Correct]
        );
    }

    #[test]
    fn no_shared_letters_is_all_incorrect() {
        assert!(
            classify_word("fight", "crane")
                .iter()
                .all(|&f| f == Feedback::Incorrect)
        );
    }

    #[test]
    fn out_of_range_position_falls_back_to_containment() {
        let solution = Word::new("crane").unwrap();
        assert_eq!(Feedback::classify(b'c', 9, &solution), Feedback::Close);
        assert_eq!(Feedback::classify(b'z', 9, &solution), Feedback::Incorrect);
    }

    #[test]
    fn emoji_squares() {
        assert_eq!(Feedback::Correct.emoji(), '🟩');
        assert_eq!(Feedback::Close.emoji(), '🟨');
        assert_eq!(Feedback::Incorrect.emoji(), '⬜');
    }
}
