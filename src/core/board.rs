//! Projection of a game state onto a grid of tiles
//!
//! The board is derived on every draw and never stored. Only final rows carry
//! feedback: rows before the active one, or every row once all slots are filled.

use super::{Feedback, GameState, NUM_GUESSES, WORD_LENGTH, Word};

/// One square of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub feedback: Option<Feedback>,
}

/// A fixed-width row of tiles
pub type Row = [Tile; WORD_LENGTH];

/// Render a single row
///
/// The row text is padded with blank tiles to `WORD_LENGTH`. Feedback is only
/// attached when the row is final and the solution is known; blank tiles stay
/// neutral either way.
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, Word, render_row};
///
/// let solution = Word::new("crane").unwrap();
///
/// let row = render_row("trace", Some(&solution), true);
/// assert_eq!(row[0].feedback, Some(Feedback::Incorrect));
/// assert_eq!(row[1].feedback, Some(Feedback::Correct));
/// assert_eq!(row[3].feedback, Some(Feedback::Close));
///
/// let typing = render_row("tr", Some(&solution), false);
/// assert_eq!(typing[0].letter, Some('t'));
/// assert_eq!(typing[2].letter, None);
/// assert!(typing.iter().all(|tile| tile.feedback.is_none()));
/// ```
#[must_use]
pub fn render_row(row: &str, solution: Option<&Word>, is_final: bool) -> Row {
    let mut tiles = [Tile::default(); WORD_LENGTH];
    let solution = solution.filter(|_| is_final);

    for (position, (tile, letter)) in tiles.iter_mut().zip(row.chars()).enumerate() {
        tile.letter = Some(letter);
        tile.feedback = solution.and_then(|solution| {
            u8::try_from(letter)
                .ok()
                .map(|byte| Feedback::classify(byte, position, solution))
        });
    }

    tiles
}

/// Every row of the board, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; NUM_GUESSES],
}

impl Board {
    /// Project a state onto the board
    ///
    /// The active row shows the guess being typed, filled rows show their
    /// guess, and rows after the active one are blank.
    #[must_use]
    pub fn project(state: &GameState, solution: Option<&Word>) -> Self {
        let active = state.active_row();
        let mut rows = [[Tile::default(); WORD_LENGTH]; NUM_GUESSES];

        for (i, (row, guess)) in rows.iter_mut().zip(state.guesses()).enumerate() {
            let text = match guess {
                Some(word) => word.text(),
                None if Some(i) == active => state.current_guess(),
                None => "",
            };
            let is_final = active.is_none_or(|active| i < active);
            *row = render_row(text, solution, is_final);
        }

        Self { rows }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; NUM_GUESSES] {
        &self.rows
    }

    /// Emoji grid of the final rows, one line per row
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.rows
            .iter()
            .filter(|row| row.iter().all(|tile| tile.feedback.is_some()))
            .map(|row| {
                row.iter()
                    .filter_map(|tile| tile.feedback.map(Feedback::emoji))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Key;

    fn solution() -> Word {
        Word::new("crane").unwrap()
    }

    fn play(solution: &Word, input: &[&str]) -> GameState {
        input.iter().fold(GameState::new(), |state, word| {
            word.chars()
                .map(Key::Char)
                .chain([Key::Enter])
                .fold(state, |s, key| s.transition(key, solution))
        })
    }

    fn feedback(row: &Row) -> Vec<Option<Feedback>> {
        row.iter().map(|tile| tile.feedback).collect()
    }

    fn letters(row: &Row) -> String {
        row.iter().map(|tile| tile.letter.unwrap_or(' ')).collect()
    }

    #[test]
    fn non_final_row_has_no_feedback() {
        let row = render_row("crane", Some(&solution()), false);
        assert_eq!(letters(&row), "crane");
        assert!(row.iter().all(|tile| tile.feedback.is_none()));
    }

    #[test]
    fn row_without_solution_has_no_feedback() {
        let row = render_row("crane", None, true);
        assert!(row.iter().all(|tile| tile.feedback.is_none()));
    }

    #[test]
    fn short_rows_are_padded() {
        let row = render_row("ab", Some(&solution()), false);
        assert_eq!(row.len(), WORD_LENGTH);
        assert_eq!(letters(&row), "ab   ");

        let empty = render_row("", None, false);
        assert_eq!(empty, [Tile::default(); WORD_LENGTH]);
    }

    #[test]
    fn blank_tiles_in_final_row_stay_neutral() {
        let row = render_row("cr", Some(&solution()), true);
        assert_eq!(
            feedback(&row),
            vec![Some(Feedback::Correct), Some(Feedback::Correct), None, None, None]
        );
    }

    #[test]
    fn fresh_board_is_blank() {
        let board = Board::project(&GameState::new(), Some(&solution()));
        assert!(
            board
                .rows()
                .iter()
                .flatten()
                .all(|tile| *tile == Tile::default())
        );
    }

    #[test]
    fn active_row_shows_current_guess_without_feedback() {
        let sol = solution();
        let state = play(&sol, &["trace"]);
        let state = state.transition(Key::Char('s'), &sol);
        let board = Board::project(&state, Some(&sol));

        assert_eq!(letters(&board.rows()[0]), "trace");
        assert_eq!(
            feedback(&board.rows()[0]),
            vec![
                Some(Feedback::Incorrect),
                Some(Feedback::Correct),
                Some(Feedback::Correct),
                Some(Feedback::Close),
                Some(Feedback::Correct),
            ]
        );
        assert_eq!(letters(&board.rows()[1]), "s    ");
        assert!(board.rows()[1].iter().all(|tile| tile.feedback.is_none()));
        assert_eq!(letters(&board.rows()[2]), "     ");
    }

    #[test]
    fn win_marks_row_correct_and_leaves_rest_blank() {
        let sol = solution();
        let state = play(&sol, &["crane"]);
        let board = Board::project(&state, Some(&sol));

        assert!(
            board.rows()[0]
                .iter()
                .all(|tile| tile.feedback == Some(Feedback::Correct))
        );
        for row in &board.rows()[1..] {
            assert_eq!(*row, [Tile::default(); WORD_LENGTH]);
        }
    }

    #[test]
    fn full_board_is_entirely_final() {
        let sol = solution();
        let state = play(&sol, &["trace"; NUM_GUESSES]);
        assert_eq!(state.active_row(), None);

        let board = Board::project(&state, Some(&sol));
        assert!(
            board
                .rows()
                .iter()
                .flatten()
                .all(|tile| tile.feedback.is_some())
        );
    }

    #[test]
    fn row_feedback_is_independent_of_other_rows() {
        let sol = solution();
        let forward = Board::project(&play(&sol, &["trace", "eerie", "fight"]), Some(&sol));
        let shuffled = Board::project(&play(&sol, &["fight", "trace", "eerie"]), Some(&sol));

        assert_eq!(forward.rows()[0], shuffled.rows()[1]);
        assert_eq!(forward.rows()[1], shuffled.rows()[2]);
        assert_eq!(forward.rows()[2], shuffled.rows()[0]);
    }

    #[test]
    fn emoji_grid_covers_final_rows_only() {
        let sol = solution();
        let state = play(&sol, &["fight", "crane"]);
        let board = Board::project(&state, Some(&sol));

        assert_eq!(board.to_emoji(), "⬜⬜⬜⬜⬜\n🟩🟩🟩🟩🟩");
    }
}
