//! Word providers
//!
//! A provider supplies the candidate words a game's solution is drawn from.
//! The game only asks for the list once per game; providers don't cache.

use super::ANSWERS;
use super::loader::{load_from_file, parse_word_list, words_from_slice};
use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Default word list endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("word list request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("word list is empty")]
    EmptyWordList,
    #[error("'{word}' cannot be used as a solution: {source}")]
    InvalidSolution {
        word: String,
        #[source]
        source: WordError,
    },
}

/// Source of candidate solution words
pub trait WordProvider: Send + Sync {
    /// Fetch the full candidate list
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the list cannot be retrieved or parsed.
    fn fetch_words(&self) -> Result<Vec<String>, ProviderError>;

    /// Human-readable origin, for logs and status lines
    fn describe(&self) -> String;
}

/// Fetches a JSON array of words with one HTTP GET
#[derive(Debug, Clone)]
pub struct HttpProvider {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpProvider {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl WordProvider for HttpProvider {
    fn fetch_words(&self) -> Result<Vec<String>, ProviderError> {
        let body = self
            .client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(parse_word_list(&body)?)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Reads newline-separated words from a local file
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordProvider for FileProvider {
    fn fetch_words(&self) -> Result<Vec<String>, ProviderError> {
        load_from_file(&self.path).map_err(|source| ProviderError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves the word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedProvider;

impl WordProvider for EmbeddedProvider {
    fn fetch_words(&self) -> Result<Vec<String>, ProviderError> {
        Ok(words_from_slice(ANSWERS))
    }

    fn describe(&self) -> String {
        "embedded word list".to_string()
    }
}

/// Pick one word uniformly at random and lowercase it
///
/// # Errors
///
/// Returns `EmptyWordList` for an empty list, or `InvalidSolution` if the
/// chosen entry is not a 5-letter word.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::choose_solution;
///
/// let words = vec!["CRANE".to_string()];
/// let solution = choose_solution(&words, &mut StdRng::seed_from_u64(7)).unwrap();
/// assert_eq!(solution.text(), "crane");
/// ```
pub fn choose_solution<R: Rng + ?Sized>(
    words: &[String],
    rng: &mut R,
) -> Result<Word, ProviderError> {
    let word = words.choose(rng).ok_or(ProviderError::EmptyWordList)?;
    Word::new(word.as_str()).map_err(|source| ProviderError::InvalidSolution {
        word: word.clone(),
        source,
    })
}

/// Fetch the word list once and draw a solution from it
///
/// # Errors
///
/// Returns any error from the provider or from [`choose_solution`].
#[instrument(skip_all, fields(source = %provider.describe()))]
pub fn fetch_solution(provider: &dyn WordProvider) -> Result<Word, ProviderError> {
    info!("fetching word list");
    let words = provider.fetch_words()?;
    info!(count = words.len(), "word list fetched");

    let solution = choose_solution(&words, &mut rand::rng())?;
    debug!(%solution, "solution chosen");
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    struct FixedProvider(Vec<&'static str>);

    impl WordProvider for FixedProvider {
        fn fetch_words(&self) -> Result<Vec<String>, ProviderError> {
            Ok(words_from_slice(&self.0))
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words_from_slice(words)
    }

    #[test]
    fn choose_solution_lowercases() {
        let mut rng = StdRng::seed_from_u64(1);
        let solution = choose_solution(&owned(&["SlAtE"]), &mut rng).unwrap();
        assert_eq!(solution.text(), "slate");
    }

    #[test]
    fn choose_solution_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            choose_solution(&[], &mut rng),
            Err(ProviderError::EmptyWordList)
        ));
    }

    #[test]
    fn choose_solution_invalid_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = choose_solution(&owned(&["toolong"]), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::InvalidSolution {
                source: WordError::InvalidLength(7),
                ..
            }
        ));
    }

    #[test]
    fn choose_solution_picks_from_the_list() {
        let words = owned(&["crane", "slate", "irate", "trace"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let solution = choose_solution(&words, &mut rng).unwrap();
            assert!(words.iter().any(|w| w == solution.text()));
        }
    }

    #[test]
    fn choose_solution_reaches_every_word() {
        let words = owned(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(choose_solution(&words, &mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn fetch_solution_uses_provider() {
        let solution = fetch_solution(&FixedProvider(vec!["CRANE"])).unwrap();
        assert_eq!(solution.text(), "crane");
    }

    #[test]
    fn fetch_solution_propagates_empty_list() {
        assert!(matches!(
            fetch_solution(&FixedProvider(vec![])),
            Err(ProviderError::EmptyWordList)
        ));
    }

    #[test]
    fn embedded_provider_yields_valid_words() {
        let words = EmbeddedProvider.fetch_words().unwrap();
        assert_eq!(words.len(), ANSWERS.len());
        assert!(words.iter().all(|w| Word::new(w.as_str()).is_ok()));
    }

    #[test]
    fn file_provider_reports_path_on_error() {
        let provider = FileProvider::new("/no/such/words.txt");
        let err = provider.fetch_words().unwrap_err();
        assert!(matches!(err, ProviderError::Io { .. }));
        assert!(err.to_string().contains("/no/such/words.txt"));
    }

    #[test]
    fn file_provider_reads_lines() {
        let path = std::env::temp_dir().join(format!("wordle_game_words_{}.txt", std::process::id()));
        std::fs::write(&path, "crane\nslate\n\n").unwrap();

        let words = FileProvider::new(&path).fetch_words().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["crane", "slate"]);
    }

    /// Serve a single canned HTTP response on a loopback port
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }

            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
        });

        (url, handle)
    }

    #[test]
    fn http_provider_describes_its_endpoint() {
        assert_eq!(HttpProvider::new(DEFAULT_ENDPOINT).describe(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn http_provider_fetches_json_array() {
        let (url, server) = serve_once("200 OK", r#"["CRANE"]"#);
        let solution = fetch_solution(&HttpProvider::new(url));
        server.join().unwrap();

        assert_eq!(solution.unwrap().text(), "crane");
    }

    #[test]
    fn http_provider_server_error_is_http_error() {
        let (url, server) = serve_once("500 Internal Server Error", "oops");
        let result = HttpProvider::new(url).fetch_words();
        server.join().unwrap();

        assert!(matches!(result, Err(ProviderError::Http(_))));
    }

    #[test]
    fn http_provider_rejects_non_array_body() {
        let (url, server) = serve_once("200 OK", r#"{"w":1}"#);
        let result = HttpProvider::new(url).fetch_words();
        server.join().unwrap();

        assert!(matches!(result, Err(ProviderError::Json(_))));
    }
}
