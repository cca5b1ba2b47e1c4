//! Line-preserving word truncation filters for Tera.
//!
//! Re-exports the workspace crates so site builds can depend on one crate:
//!
//! - [`truncwords_core`]: tokenizer, word-limit coercion and truncation (no template host)
//! - [`truncwords_tera`]: filter registration and the template engine wrapper
//!
//! ```
//! let mut tera = tera::Tera::default();
//! truncwords::register_filters(&mut tera);
//! ```

pub use truncwords_core;
pub use truncwords_tera;

pub use truncwords_core::{
    truncate_words, truncate_words_and_keep_lines, Tokenization, Truncator, WordLimit,
    DEFAULT_MARKER, DEFAULT_WORD_LIMIT,
};
pub use truncwords_tera::{
    register_filters, EngineError, TemplateEngine, KEEP_LINES_FILTER, TRUNCATE_WORDS_FILTER,
};
