//! Wordle Game - CLI
//!
//! Terminal Wordle with a full-screen TUI and a simple line mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use wordle_game::{
    commands::run_simple,
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    wordlists::{DEFAULT_ENDPOINT, EmbeddedProvider, FileProvider, HttpProvider, WordProvider},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'remote' (default, fetched from --endpoint), 'embedded', or path to file
    #[arg(short = 'w', long, global = true, default_value = "remote")]
    wordlist: String,

    /// Endpoint returning a JSON array of candidate words
    #[arg(
        short,
        long,
        global = true,
        env = "WORDLE_API_URL",
        default_value = DEFAULT_ENDPOINT
    )]
    endpoint: String,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,
}

/// Pick the word provider based on the -w flag
///
/// - "remote": one GET to the configured endpoint
/// - "embedded": the list compiled into the binary
/// - "<path>": newline-separated words from a file
fn word_provider(wordlist: &str, endpoint: &str) -> Arc<dyn WordProvider> {
    match wordlist {
        "remote" => Arc::new(HttpProvider::new(endpoint)),
        "embedded" => Arc::new(EmbeddedProvider),
        path => Arc::new(FileProvider::new(path)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider = word_provider(&cli.wordlist, &cli.endpoint);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            logging::init(cli.log_file.as_deref().map_or(LogTarget::Off, LogTarget::File))?;
            run_tui(App::new(provider))
        }
        Commands::Simple => {
            logging::init(
                cli.log_file
                    .as_deref()
                    .map_or(LogTarget::Stderr, LogTarget::File),
            )?;
            run_simple(provider.as_ref())
        }
    }
}
