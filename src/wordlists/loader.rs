//! Word list loading utilities
//!
//! Turns raw word list payloads (text files, JSON bodies) into candidate words.

use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a newline-separated file
///
/// Blank lines are skipped and surrounding whitespace is trimmed. Entries are
/// not validated here; the solution is validated when it is chosen.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Split text into trimmed, non-empty lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a JSON array of strings
///
/// # Errors
///
/// Returns a `serde_json` error if the body is not a JSON array of strings.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list(r#"["Crane", "slate"]"#).unwrap();
/// assert_eq!(words, vec!["Crane", "slate"]);
/// ```
pub fn parse_word_list(body: &str) -> serde_json::Result<Vec<String>> {
    serde_json::from_str(body)
}

/// Copy an embedded string slice into owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
