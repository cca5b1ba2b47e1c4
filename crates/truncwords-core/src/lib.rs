//! Line-preserving word truncation.
//!
//! The core of the `truncate_words_and_keep_lines` template filter, free of any
//! template host. Text is cut to a word budget, but the "words" are counted so
//! that line breaks survive: each line is scanned as a chunk together with its
//! terminator, and only chunks containing spaces are split further.
//!
//! # Modules
//!
//! - [`limit`]: Word limit coercion (`"12"`, `"abc"`, `3.9`, defaults)
//! - [`tokenize`]: Chunk scanning and token splitting
//! - [`truncate`]: The truncation itself, line-preserving or whitespace-based
//!
//! # Example
//!
//! ```
//! use truncwords_core::{truncate_words_and_keep_lines, WordLimit};
//!
//! let out = truncate_words_and_keep_lines(Some("line one\nline two\n"), WordLimit::new(2), "...");
//! assert_eq!(out.as_deref(), Some("line one\n..."));
//! ```

pub mod limit;
pub mod tokenize;
pub mod truncate;

pub use limit::{WordLimit, DEFAULT_WORD_LIMIT};
pub use tokenize::{chunks, line_tokens, whitespace_tokens, Chunks};
pub use truncate::{
    truncate_words, truncate_words_and_keep_lines, Tokenization, Truncator, DEFAULT_MARKER,
};
