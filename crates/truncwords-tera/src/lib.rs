//! Tera integration for the truncwords filters.
//!
//! Nothing is registered at load time. Call [`register_filters`] on your own
//! `Tera` instance, or use [`TemplateEngine`], which does it on construction.
//!
//! ```
//! use tera::{Context, Tera};
//!
//! let mut tera = Tera::default();
//! truncwords_tera::register_filters(&mut tera);
//!
//! let mut context = Context::new();
//! context.insert("body", "line one\nline two\n");
//! let out = tera
//!     .render_str("{{ body | truncate_words_and_keep_lines(words=2) }}", &context)
//!     .unwrap();
//! assert_eq!(out, "line one\n...");
//! ```

mod engine;
mod filters;
mod loader;

pub use engine::{EngineError, RenderedFile, TemplateEngine, TEMPLATE_SUFFIX};
pub use filters::{
    register_filters, truncate_words, truncate_words_and_keep_lines, KEEP_LINES_FILTER,
    TRUNCATE_WORDS_FILTER,
};
pub use loader::LoaderError;
