//! Word truncation.

use std::borrow::Cow;

use crate::limit::WordLimit;
use crate::tokenize::{line_tokens, whitespace_tokens};

/// Suffix appended when text was cut.
pub const DEFAULT_MARKER: &str = "...";

/// How text is cut into countable words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenization {
    /// Line chunks, split on single spaces only when they contain one.
    #[default]
    KeepLines,
    /// Runs of non-whitespace; line breaks are not preserved.
    Whitespace,
}

impl Tokenization {
    pub fn tokens(self, input: &str) -> Vec<&str> {
        match self {
            Self::KeepLines => line_tokens(input),
            Self::Whitespace => whitespace_tokens(input),
        }
    }
}

/// A configured truncation: word limit, marker and tokenization mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncator {
    pub words: WordLimit,
    pub marker: String,
    pub tokenization: Tokenization,
}

impl Default for Truncator {
    fn default() -> Self {
        Self {
            words: WordLimit::default(),
            marker: DEFAULT_MARKER.to_string(),
            tokenization: Tokenization::default(),
        }
    }
}

impl Truncator {
    pub fn new(words: WordLimit, marker: impl Into<String>) -> Self {
        Self {
            words,
            marker: marker.into(),
            tokenization: Tokenization::KeepLines,
        }
    }

    pub fn with_tokenization(mut self, tokenization: Tokenization) -> Self {
        self.tokenization = tokenization;
        self
    }

    /// Truncate `input`.
    ///
    /// Returns `None` for absent input. When the token count does not exceed
    /// [`WordLimit::effective`], the input comes back borrowed and verbatim.
    /// Otherwise the first `effective() + 1` tokens are joined with single
    /// spaces and the marker is appended directly after them.
    pub fn truncate<'a>(&self, input: Option<&'a str>) -> Option<Cow<'a, str>> {
        let input = input?;
        let tokens = self.tokenization.tokens(input);
        let last = self.words.effective();

        if tokens.len() <= last {
            tracing::trace!(
                tokens = tokens.len(),
                words = %self.words,
                "Input within word limit, returned unchanged"
            );
            return Some(Cow::Borrowed(input));
        }

        let mut out = tokens[..=last].join(" ");
        out.push_str(&self.marker);
        tracing::debug!(
            tokens = tokens.len(),
            kept = last + 1,
            mode = ?self.tokenization,
            "Truncated input"
        );
        Some(Cow::Owned(out))
    }
}

/// Truncate to `words` tokens, keeping line breaks intact.
///
/// ```
/// use truncwords_core::{truncate_words_and_keep_lines, WordLimit};
///
/// let out = truncate_words_and_keep_lines(Some("noSpacesLine\nanother"), WordLimit::new(1), "~");
/// assert_eq!(out.as_deref(), Some("noSpacesLine\n~"));
/// assert_eq!(truncate_words_and_keep_lines(None, WordLimit::default(), "..."), None);
/// ```
pub fn truncate_words_and_keep_lines<'a>(
    input: Option<&'a str>,
    words: WordLimit,
    marker: &str,
) -> Option<Cow<'a, str>> {
    Truncator::new(words, marker).truncate(input)
}

/// Truncate to `words` whitespace-separated words.
pub fn truncate_words<'a>(
    input: Option<&'a str>,
    words: WordLimit,
    marker: &str,
) -> Option<Cow<'a, str>> {
    Truncator::new(words, marker)
        .with_tokenization(Tokenization::Whitespace)
        .truncate(input)
}
