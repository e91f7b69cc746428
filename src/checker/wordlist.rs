use crate::{Result, SpellError};
use std::cmp::Ordering;
use std::io::{BufRead, Write};

/// Byte-wise comparison after mapping `A-Z` to `a-z`. Non-letter bytes
/// compare by their raw value.
pub fn folded_cmp(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|b| b.to_ascii_lowercase());
    let b = b.bytes().map(|b| b.to_ascii_lowercase());
    a.cmp(b)
}

/// A sorted, duplicate-free sequence of words.
///
/// Words are kept in ascending [`folded_cmp`] order across every mutation,
/// so membership checks are a binary search and iteration yields sort
/// order. Backs all three dictionaries owned by the checker.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|entry| folded_cmp(entry, word))
            .is_ok()
    }

    /// Insert `word` preserving sort order.
    ///
    /// Returns `Ok(false)` without modifying the list when a word equal
    /// under case folding is already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        match self.words.binary_search_by(|entry| folded_cmp(entry, word)) {
            Ok(_) => Ok(false),
            Err(idx) => {
                self.words
                    .try_reserve(1)
                    .map_err(|_| SpellError::OutOfMemory)?;
                self.words.insert(idx, word.to_string());
                Ok(true)
            }
        }
    }

    /// Append words from a line-oriented reader, then restore the sort
    /// invariant with a single sort.
    ///
    /// Lines are trimmed of trailing whitespace (which also tolerates
    /// `\r\n` endings) and empty lines are skipped. When `skip_comments`
    /// is set, lines whose first non-whitespace byte is `#` are skipped as
    /// well. Words equal under case folding are stored once.
    ///
    /// Returns the total number of words in the list after the load. On
    /// failure the list may hold a partially loaded state; callers that
    /// need all-or-nothing semantics load into a fresh list and swap.
    pub fn bulk_load<R: BufRead>(&mut self, reader: R, skip_comments: bool) -> Result<usize> {
        for line in reader.lines() {
            let line = line?;
            let word = line.trim_end();
            if word.is_empty() {
                continue;
            }
            if skip_comments && word.trim_start().starts_with('#') {
                continue;
            }
            self.words
                .try_reserve(1)
                .map_err(|_| SpellError::OutOfMemory)?;
            self.words.push(word.to_string());
        }
        self.words.sort_by(|a, b| folded_cmp(a, b));
        self.words
            .dedup_by(|a, b| folded_cmp(a, b) == Ordering::Equal);
        Ok(self.words.len())
    }

    /// Words in case-folded sort order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Write one word per line, `\n`-terminated, in sort order.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        for word in &self.words {
            writeln!(sink, "{}", word)?;
        }
        Ok(())
    }
}
