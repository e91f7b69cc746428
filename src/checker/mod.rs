pub mod distance;
pub mod suggestions;
pub mod tokenizer;
pub mod wordlist;

use crate::{Misspelling, Result, SpellError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tokenizer::Tokenizer;
use wordlist::WordList;

/// Feature gates and suggestion limits, fixed at construction.
#[derive(Debug, Clone)]
pub struct CheckerOptions {
    pub enabled: bool,
    pub suggestions_enabled: bool,
    pub max_suggestion_distance: usize,
    pub max_suggestions: usize,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            suggestions_enabled: true,
            max_suggestion_distance: 2,
            max_suggestions: 5,
        }
    }
}

/// The checking engine.
///
/// Owns the main dictionary, the persistent user dictionary, the
/// session-only ignore list, and the misspelling index of the most recent
/// [`check`](Self::check) pass. All operations are synchronous and run to
/// completion on the calling thread; a host that shares one checker across
/// threads must provide its own mutual exclusion.
pub struct SpellChecker {
    main_dict: WordList,
    user_dict: WordList,
    ignored: WordList,
    misspellings: Vec<Misspelling>,
    options: CheckerOptions,
}

impl SpellChecker {
    pub fn new() -> Self {
        Self::with_options(CheckerOptions::default())
    }

    pub fn with_options(options: CheckerOptions) -> Self {
        Self {
            main_dict: WordList::new(),
            user_dict: WordList::new(),
            ignored: WordList::new(),
            misspellings: Vec::new(),
            options,
        }
    }

    /// Toggle the checking feature. While disabled, `check` clears the
    /// index and returns without scanning.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_suggestions_enabled(&mut self, enabled: bool) {
        self.options.suggestions_enabled = enabled;
    }

    pub fn suggestions_enabled(&self) -> bool {
        self.options.suggestions_enabled
    }

    /// A word is correct if it is empty or found (case-insensitively) in
    /// the ignore list, the main dictionary, or the user dictionary, in
    /// that order. Ignores win so a false positive can be suppressed
    /// without touching the persistent user dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        word.is_empty()
            || self.ignored.contains(word)
            || self.main_dict.contains(word)
            || self.user_dict.contains(word)
    }

    /// Run a full pass over `text`, rebuilding the misspelling index.
    ///
    /// The index is cleared first; when checking is disabled or the text
    /// contains only ASCII whitespace, the pass ends there. Records are
    /// appended in ascending position order and never overlap. On an
    /// allocation failure mid-pass the index keeps the records appended so
    /// far and the error is reported.
    pub fn check(&mut self, text: &str) -> Result<()> {
        self.misspellings.clear();

        if !self.options.enabled {
            return Ok(());
        }
        if text.bytes().all(|b| b.is_ascii_whitespace()) {
            return Ok(());
        }

        for token in Tokenizer::new(text) {
            if self.is_correct(token.text) {
                continue;
            }
            self.misspellings
                .try_reserve(1)
                .map_err(|_| SpellError::OutOfMemory)?;
            self.misspellings.push(Misspelling {
                word: token.text.to_string(),
                start: token.start,
                end: token.end,
            });
        }

        Ok(())
    }

    /// Read-only view of the misspellings found by the last check pass,
    /// in source-text order.
    pub fn misspellings(&self) -> &[Misspelling] {
        &self.misspellings
    }

    /// The misspelling covering byte `offset` in the last checked text,
    /// if any. Linear over the index, which stays small in practice.
    pub fn misspelled_at(&self, offset: usize) -> Option<&Misspelling> {
        self.misspellings
            .iter()
            .find(|m| m.start <= offset && offset < m.end)
    }

    /// Ranked corrections for `word`, drawn from the main dictionary.
    /// Returns an empty list when suggestions are disabled. The returned
    /// strings are owned copies the caller may keep.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>> {
        if !self.options.suggestions_enabled {
            return Ok(Vec::new());
        }
        suggestions::generate(
            word,
            &self.main_dict,
            self.options.max_suggestion_distance,
            self.options.max_suggestions,
        )
    }

    /// Add `word` to the persistent user dictionary. Duplicate additions
    /// are no-ops. The misspelling index is left untouched; re-run
    /// [`check`](Self::check) to refresh it.
    pub fn add_to_user_dict(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(SpellError::EmptyWord);
        }
        self.user_dict.insert(word)?;
        Ok(())
    }

    /// Treat `word` as correct for the rest of the session. Duplicate
    /// additions are no-ops; the misspelling index is left untouched.
    pub fn add_to_ignored(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(SpellError::EmptyWord);
        }
        self.ignored.insert(word)?;
        Ok(())
    }

    /// Drop every session ignore, e.g. when the host starts a new session.
    pub fn clear_ignored(&mut self) {
        self.ignored.clear();
    }

    /// Replace the main dictionary with the words read from `reader`.
    ///
    /// Lines whose first non-whitespace byte is `#` are comments. The load
    /// is transactional: on failure the previous dictionary is kept.
    /// Returns the new dictionary's word count.
    pub fn load_main_dict<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut fresh = WordList::new();
        let count = fresh.bulk_load(reader, true)?;
        self.main_dict = fresh;
        Ok(count)
    }

    /// Load the main dictionary from a file. A missing file is an error:
    /// without a main dictionary the engine flags every non-ignored word.
    pub fn load_main_dict_file(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path)?;
        self.load_main_dict(BufReader::new(file))
    }

    /// Replace the user dictionary with the words read from `reader`.
    /// Unlike the main dictionary, every non-empty line is a word; `#`
    /// has no special meaning here.
    pub fn load_user_dict<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut fresh = WordList::new();
        let count = fresh.bulk_load(reader, false)?;
        self.user_dict = fresh;
        Ok(count)
    }

    /// Load the user dictionary from a file. A missing file is not an
    /// error: the user simply has no saved words yet.
    pub fn load_user_dict_file(&mut self, path: &Path) -> Result<usize> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.user_dict = WordList::new();
                return Ok(0);
            }
            Err(err) => return Err(err.into()),
        };
        self.load_user_dict(BufReader::new(file))
    }

    /// Write the user dictionary, one word per line in case-folded sort
    /// order, no comments.
    pub fn save_user_dict<W: Write>(&self, sink: W) -> Result<()> {
        self.user_dict.write_to(sink)
    }

    pub fn save_user_dict_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.user_dict.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn main_dict(&self) -> &WordList {
        &self.main_dict
    }

    pub fn user_dict(&self) -> &WordList {
        &self.user_dict
    }

    pub fn ignored(&self) -> &WordList {
        &self.ignored
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn checker_with_main(words: &str) -> SpellChecker {
        let mut checker = SpellChecker::new();
        checker.load_main_dict(Cursor::new(words.to_string())).unwrap();
        checker
    }

    fn sample_checker() -> SpellChecker {
        checker_with_main("hello\nworld\nthe\nquick\nbrown\nfox\n")
    }

    fn spans(checker: &SpellChecker) -> Vec<(&str, usize, usize)> {
        checker
            .misspellings()
            .iter()
            .map(|m| (m.word.as_str(), m.start, m.end))
            .collect()
    }

    #[test]
    fn test_known_words_produce_empty_index() {
        let mut checker = sample_checker();
        checker.check("hello world").unwrap();
        assert!(checker.misspellings().is_empty());
    }

    #[test]
    fn test_misspellings_recorded_with_positions() {
        let mut checker = sample_checker();
        checker.check("helo wrld").unwrap();
        assert_eq!(spans(&checker), vec![("helo", 0, 4), ("wrld", 5, 9)]);
    }

    #[test]
    fn test_case_folding_against_dictionary() {
        let mut checker = sample_checker();
        checker.check("  ,Hello,, WORLD! ").unwrap();
        assert!(checker.misspellings().is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        let mut checker = sample_checker();

        checker.check("helo").unwrap();
        assert_eq!(checker.misspellings().len(), 1);

        checker.check("").unwrap();
        assert!(checker.misspellings().is_empty());

        checker.check("   \t\n").unwrap();
        assert!(checker.misspellings().is_empty());
    }

    #[test]
    fn test_disabled_checker_clears_and_skips() {
        let mut checker = sample_checker();
        checker.check("helo").unwrap();
        assert_eq!(checker.misspellings().len(), 1);

        checker.set_enabled(false);
        checker.check("helo wrld").unwrap();
        assert!(checker.misspellings().is_empty());

        checker.set_enabled(true);
        checker.check("helo wrld").unwrap();
        assert_eq!(checker.misspellings().len(), 2);
    }

    #[test]
    fn test_is_correct_precedence_and_case() {
        let mut checker = sample_checker();

        assert!(checker.is_correct(""));
        assert!(checker.is_correct("hello"));
        assert!(checker.is_correct("HELLO"));
        assert!(!checker.is_correct("helo"));

        checker.add_to_ignored("helo").unwrap();
        assert!(checker.is_correct("helo"));
        assert!(checker.is_correct("HELO"));
    }

    #[test]
    fn test_ignored_words_suppressed_in_check() {
        let mut checker = sample_checker();
        checker.add_to_ignored("helo").unwrap();
        checker.check("helo wrld").unwrap();
        assert_eq!(spans(&checker), vec![("wrld", 5, 9)]);
    }

    #[test]
    fn test_clear_ignored_restores_flagging() {
        let mut checker = sample_checker();
        checker.add_to_ignored("helo").unwrap();
        checker.clear_ignored();
        checker.check("helo").unwrap();
        assert_eq!(checker.misspellings().len(), 1);
    }

    #[test]
    fn test_user_dict_counts_as_correct() {
        let mut checker = sample_checker();
        checker.add_to_user_dict("spellcore").unwrap();
        checker.check("spellcore is great").unwrap();

        // "is" and "great" are unknown; "spellcore" is not.
        assert_eq!(
            spans(&checker)
                .iter()
                .map(|&(w, _, _)| w)
                .collect::<Vec<_>>(),
            vec!["is", "great"]
        );
    }

    #[test]
    fn test_add_to_user_dict_is_idempotent() {
        let mut checker = SpellChecker::new();
        checker.add_to_user_dict("once").unwrap();
        checker.add_to_user_dict("once").unwrap();
        checker.add_to_user_dict("ONCE").unwrap();
        assert_eq!(checker.user_dict().len(), 1);
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let mut checker = SpellChecker::new();
        assert!(matches!(
            checker.add_to_user_dict(""),
            Err(SpellError::EmptyWord)
        ));
        assert!(matches!(
            checker.add_to_ignored(""),
            Err(SpellError::EmptyWord)
        ));
    }

    #[test]
    fn test_misspelled_at_covers_record_spans() {
        let mut checker = sample_checker();
        checker.check("helo wrld").unwrap();

        assert_eq!(checker.misspelled_at(0).unwrap().word, "helo");
        assert_eq!(checker.misspelled_at(3).unwrap().word, "helo");
        assert!(checker.misspelled_at(4).is_none());
        assert_eq!(checker.misspelled_at(6).unwrap().word, "wrld");
        assert!(checker.misspelled_at(9).is_none());
        assert!(checker.misspelled_at(100).is_none());
    }

    #[test]
    fn test_records_are_ordered_and_disjoint() {
        let mut checker = sample_checker();
        checker.check("abc def ghi jkl").unwrap();

        let records = checker.misspellings();
        for pair in records.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_records_slice_source_text_exactly() {
        let text = "The qick brown foks jumps";
        let mut checker = sample_checker();
        checker.check(text).unwrap();

        for m in checker.misspellings() {
            assert_eq!(&text[m.start..m.end], m.word);
            assert!(m.word.bytes().all(|b| b.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_suggest_ranks_and_respects_gate() {
        let mut checker = sample_checker();

        assert_eq!(checker.suggest("helo").unwrap(), vec!["hello"]);
        assert_eq!(checker.suggest("wrld").unwrap(), vec!["world"]);

        checker.set_suggestions_enabled(false);
        assert!(checker.suggest("helo").unwrap().is_empty());
    }

    #[test]
    fn test_suggestions_outlive_checker_mutation() {
        let mut checker = sample_checker();
        let suggestions = checker.suggest("helo").unwrap();
        checker.load_main_dict(Cursor::new("replaced\n".to_string())).unwrap();
        assert_eq!(suggestions, vec!["hello"]);
    }

    #[test]
    fn test_main_dict_load_is_transactional() {
        struct FailingReader;

        impl io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "stream broke"))
            }
        }

        let mut checker = sample_checker();
        let before = checker.main_dict().len();

        let result = checker.load_main_dict(BufReader::new(FailingReader));
        assert!(matches!(result, Err(SpellError::Io(_))));
        assert_eq!(checker.main_dict().len(), before);
        assert!(checker.is_correct("hello"));
    }

    #[test]
    fn test_user_dict_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("personal.txt");

        let mut checker = SpellChecker::new();
        checker.add_to_user_dict("zebra").unwrap();
        checker.add_to_user_dict("Apple").unwrap();
        checker.save_user_dict_file(&path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "Apple\nzebra\n");

        let mut reloaded = SpellChecker::new();
        let count = reloaded.load_user_dict_file(&path).unwrap();
        assert_eq!(count, 2);
        assert!(reloaded.is_correct("apple"));
        assert!(reloaded.is_correct("ZEBRA"));
    }

    #[test]
    fn test_missing_user_dict_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let mut checker = SpellChecker::new();
        let count = checker
            .load_user_dict_file(&dir.path().join("absent.txt"))
            .unwrap();
        assert_eq!(count, 0);
        assert!(checker.user_dict().is_empty());
    }

    #[test]
    fn test_missing_main_dict_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut checker = SpellChecker::new();
        let result = checker.load_main_dict_file(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(SpellError::Io(_))));
    }

    #[test]
    fn test_degraded_engine_flags_everything() {
        let mut checker = SpellChecker::new();
        checker.add_to_ignored("keep").unwrap();
        checker.check("keep this word").unwrap();

        assert_eq!(
            spans(&checker)
                .iter()
                .map(|&(w, _, _)| w)
                .collect::<Vec<_>>(),
            vec!["this", "word"]
        );
    }

    #[test]
    fn test_oversized_token_checked_as_truncated() {
        let long = "x".repeat(300);
        let mut checker = sample_checker();
        checker.check(&long).unwrap();

        let records = checker.misspellings();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word.len(), tokenizer::MAX_WORD_LEN);
        assert_eq!(records[0].start, 0);
        assert_eq!(records[0].end, 300);
    }
}
