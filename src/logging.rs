//! Tracing setup
//!
//! The TUI owns the terminal, so it only logs when given a file. Line mode logs
//! to stderr, where only warnings and errors are shown by default so the
//! spinner and board stay readable. `RUST_LOG` overrides the default filter in
//! every case.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter for log files when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "wordle_game=info";

/// Filter for stderr when `RUST_LOG` is unset
pub const STDERR_FILTER: &str = "wordle_game=warn";

/// Where log events are written
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Off,
    Stderr,
    File(&'a Path),
}

impl LogTarget<'_> {
    /// Directive used when `RUST_LOG` is unset
    #[must_use]
    pub const fn default_filter(self) -> &'static str {
        match self {
            Self::Stderr => STDERR_FILTER,
            Self::Off | Self::File(_) => DEFAULT_FILTER,
        }
    }

    fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global subscriber
/// is already installed.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(target.env_filter())
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(target.env_filter())
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
    }

    tracing::trace!(?target, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_are_valid() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        assert!(EnvFilter::try_new(STDERR_FILTER).is_ok());
    }

    #[test]
    fn stderr_defaults_to_warnings_only() {
        assert_eq!(LogTarget::Stderr.default_filter(), "wordle_game=warn");
        assert_eq!(
            LogTarget::File(Path::new("wordle.log")).default_filter(),
            "wordle_game=info"
        );
    }

    #[test]
    fn off_installs_nothing() {
        assert!(init(LogTarget::Off).is_ok());
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let err = init(LogTarget::File(Path::new("/no/such/dir/wordle.log"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/wordle.log"));
    }
}
