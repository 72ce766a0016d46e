//! Word lists and word providers
//!
//! The embedded list is compiled into the binary; remote and file lists are
//! fetched through a [`WordProvider`].

mod embedded;
pub mod loader;
mod provider;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use provider::{
    DEFAULT_ENDPOINT, EmbeddedProvider, FileProvider, HttpProvider, ProviderError, WordProvider,
    choose_solution, fetch_solution,
};
