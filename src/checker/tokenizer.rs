/// Longest word the tokenizer will materialize, in bytes. Longer runs are
/// truncated but their spans still cover the full run.
pub const MAX_WORD_LEN: usize = 255;

/// A maximal run of ASCII letters and its byte span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Lazily yields ASCII-letter runs with their byte positions.
///
/// Every byte outside `A-Z`/`a-z` is a separator, including anything at or
/// above 0x80, so multi-byte UTF-8 sequences never join a token.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();

        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        let end = self.pos;

        // The run is pure ASCII, so a byte-count slice cannot split a char.
        let len = (end - start).min(MAX_WORD_LEN);
        Some(Token {
            text: &self.text[start..start + len],
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<(&str, usize, usize)> {
        Tokenizer::new(text).map(|t| (t.text, t.start, t.end)).collect()
    }

    #[test]
    fn test_empty_and_whitespace_yield_nothing() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \t\n").is_empty());
        assert!(tokens("12 34 !?").is_empty());
    }

    #[test]
    fn test_words_with_positions() {
        assert_eq!(
            tokens("hello world"),
            vec![("hello", 0, 5), ("world", 6, 11)]
        );
    }

    #[test]
    fn test_punctuation_separates() {
        assert_eq!(
            tokens("  ,Hello,, WORLD! "),
            vec![("Hello", 3, 8), ("WORLD", 11, 16)]
        );
        assert_eq!(tokens("don't"), vec![("don", 0, 3), ("t", 4, 5)]);
    }

    #[test]
    fn test_single_letter_at_origin() {
        assert_eq!(tokens("a"), vec![("a", 0, 1)]);
    }

    #[test]
    fn test_token_at_end_of_buffer() {
        let text = "end";
        let all = tokens(text);
        assert_eq!(all, vec![("end", 0, 3)]);
        assert_eq!(all[0].2, text.len());
    }

    #[test]
    fn test_non_ascii_bytes_separate() {
        // 'é' is two bytes (0xC3 0xA9); both act as separators.
        assert_eq!(tokens("caf\u{e9}s"), vec![("caf", 0, 3), ("s", 5, 6)]);
    }

    #[test]
    fn test_oversized_run_truncates_but_spans_fully() {
        let long = "a".repeat(300);
        let text = format!("{} tail", long);
        let all = tokens(&text);

        assert_eq!(all.len(), 2);
        let (word, start, end) = all[0];
        assert_eq!(word.len(), MAX_WORD_LEN);
        assert_eq!(start, 0);
        assert_eq!(end, 300);
        // Scanning resumes past the run, not inside its tail.
        assert_eq!(all[1], ("tail", 301, 305));
    }
}
