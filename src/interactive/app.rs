//! TUI application state and logic

use crate::core::{Key, NUM_GUESSES, Session, Status, Word};
use crate::wordlists::{ProviderError, WordProvider, fetch_solution};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

/// How long the event loop waits for a key before checking the word list fetch
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type FetchResult = Result<Word, ProviderError>;

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    provider: Arc<dyn WordProvider>,
    pending: Option<Receiver<FetchResult>>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    fn record(&mut self, status: Status) {
        self.total_games += 1;
        if matches!(status, Status::Won { .. }) {
            self.games_won += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(provider: Arc<dyn WordProvider>) -> Self {
        Self {
            session: Session::default(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            provider,
            pending: None,
        }
    }

    /// Fetch the word list on a background thread
    ///
    /// The session stays `Loading` until [`App::poll_fetch`] sees the result.
    pub fn start_fetch(&mut self) {
        let (tx, rx) = mpsc::channel();
        let provider = Arc::clone(&self.provider);

        thread::spawn(move || {
            // The receiver is gone if a newer game replaced this fetch
            tx.send(fetch_solution(provider.as_ref())).ok();
        });

        self.pending = Some(rx);
    }

    /// Activate the session if the background fetch has finished
    ///
    /// A failed fetch is logged and not retried; the session stays inert.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(solution)) => {
                self.pending = None;
                self.session.activate(solution);
                self.add_message("Guess the word!", MessageStyle::Info);
            }
            Ok(Err(err)) => {
                self.pending = None;
                error!(error = %err, "failed to load word list");
            }
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                error!("word list fetch ended without a result");
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed a game key to the session, recording the result if it ends the game
    pub fn handle_key(&mut self, key: Key) {
        let was_over = self.is_over();
        if !self.session.handle_key(key) {
            return;
        }

        if key == Key::Enter
            && let Some(state) = self.session.state()
        {
            debug!(guesses = state.submitted().count(), "guess submitted");
        }

        if !was_over && self.is_over() {
            self.finish_game();
        }
    }

    fn is_over(&self) -> bool {
        matches!(
            self.session.status(),
            Some(Status::Won { .. } | Status::Lost)
        )
    }

    fn finish_game(&mut self) {
        let Some(status) = self.session.status() else {
            return;
        };
        self.stats.record(status);
        info!(?status, "game finished");

        match status {
            Status::Won { attempts } => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Status::Lost => {
                let word = self
                    .session
                    .solution()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(
                    &format!("Out of guesses! The word was {word}"),
                    MessageStyle::Error,
                );
            }
            Status::InProgress => {}
        }
        self.add_message("Ctrl-N for a new game, Esc to quit.", MessageStyle::Info);
    }

    /// Drop the current game and fetch a fresh solution
    pub fn new_game(&mut self) {
        self.session = Session::default();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.start_fetch();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// One-line summary of where the game stands
    #[must_use]
    pub fn status_text(&self) -> String {
        match (self.session.status(), self.session.state()) {
            (Some(Status::InProgress), Some(state)) => format!(
                "Attempt {} of {NUM_GUESSES}",
                state.active_row().map_or(NUM_GUESSES, |row| row + 1)
            ),
            (Some(Status::Won { attempts }), _) => format!("Solved in {attempts}!"),
            (Some(Status::Lost), _) => "Out of guesses".to_string(),
            _ => format!("Loading word list from {}...", self.provider.describe()),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start_fetch();

    loop {
        app.poll_fetch();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_game(),
                KeyCode::Esc => app.should_quit = true,
                code => app.handle_key(Key::from(code)),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
