pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;

pub use checker::{CheckerOptions, SpellChecker};
pub use config::Config;

use thiserror::Error;

/// Errors surfaced by the checking engine.
///
/// The CLI wraps these in `anyhow` with context; embedding hosts can match
/// on the variants directly.
#[derive(Debug, Error)]
pub enum SpellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("out of memory")]
    OutOfMemory,

    #[error("a non-empty word is required")]
    EmptyWord,
}

pub type Result<T> = std::result::Result<T, SpellError>;

/// A single misspelled token found by a check pass.
///
/// `start` is the byte offset of the first letter in the checked text and
/// `end` is one past the last letter of the run. The token bytes between
/// them equal `word` with the original casing, except for runs longer than
/// [`checker::tokenizer::MAX_WORD_LEN`], where `word` holds the truncated
/// prefix and `end` still covers the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub word: String,
    pub start: usize,
    pub end: usize,
}
