//! Tokenized view of an input text, built once and shared by every signal
//! source.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Runs of terminal punctuation end a sentence.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+").unwrap_or_else(|e| unreachable!("static regex: {e}"))
});

/// Lower-cased word tokens plus sentence structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<String>,
    sentence_count: usize,
}

impl Document {
    /// Split `text` on Unicode word boundaries and terminal punctuation.
    ///
    /// Text with words but no terminal punctuation is a single sentence.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let tokens: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();
        let sentence_count = SENTENCE_END
            .split(text)
            .filter(|segment| segment.unicode_words().next().is_some())
            .count();
        Self {
            tokens,
            sentence_count,
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub const fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Mean words per sentence (0.0 for an empty document).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_sentence_len(&self) -> f64 {
        if self.sentence_count == 0 {
            return 0.0;
        }
        self.tokens.len() as f64 / self.sentence_count as f64
    }

    /// Mean characters per word (0.0 for an empty document).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_word_len(&self) -> f64 {
        if self.tokens.is_empty() {
            return 0.0;
        }
        let chars: usize = self.tokens.iter().map(|t| t.chars().count()).sum();
        chars as f64 / self.tokens.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokens_are_lowercased_words() {
        let doc = Document::parse("Hello, World! It's JAZZ night.");
        assert_eq!(doc.tokens(), ["hello", "world", "it's", "jazz", "night"]);
    }

    #[test]
    fn counts_sentences_on_terminal_punctuation() {
        let doc = Document::parse("One two. Three four five! Six?");
        assert_eq!(doc.sentence_count(), 3);
        assert_eq!(doc.word_count(), 6);
        assert!((doc.avg_sentence_len() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn punctuation_runs_do_not_create_empty_sentences() {
        let doc = Document::parse("Wait... what?!? Really!!!");
        assert_eq!(doc.sentence_count(), 3);
    }

    #[test]
    fn no_terminal_punctuation_is_one_sentence() {
        let doc = Document::parse("a line with no ending");
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn empty_and_punctuation_only_text() {
        for text in ["", "   ", "?!.", "--"] {
            let doc = Document::parse(text);
            assert!(doc.is_empty(), "{text:?}");
            assert_eq!(doc.sentence_count(), 0);
            assert!(doc.avg_sentence_len().abs() < f64::EPSILON);
            assert!(doc.avg_word_len().abs() < f64::EPSILON);
        }
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let doc = Document::parse("café naïve");
        assert!((doc.avg_word_len() - 4.5).abs() < 1e-12);
    }
}
