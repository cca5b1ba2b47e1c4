//! Tera filters for word truncation.
//!
//! Both filters take two optional named arguments:
//!
//! - `words`: word limit (default 15). Integers are used as-is, floats are
//!   truncated, strings are read leniently (`"abc"` is 0), anything else is 0.
//! - `marker`: suffix appended on truncation (default `"..."`). Must be a string.

use std::collections::HashMap;

use tera::{Result, Tera, Value};
use truncwords_core::{Tokenization, Truncator, WordLimit, DEFAULT_MARKER};

/// Name of the line-preserving filter.
pub const KEEP_LINES_FILTER: &str = "truncate_words_and_keep_lines";

/// Name of the whitespace-splitting filter.
pub const TRUNCATE_WORDS_FILTER: &str = "truncatewords";

const WORDS_ARG: &str = "words";
const MARKER_ARG: &str = "marker";

/// Register both truncation filters on a Tera instance.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter(KEEP_LINES_FILTER, truncate_words_and_keep_lines);
    tera.register_filter(TRUNCATE_WORDS_FILTER, truncate_words);
}

/// `truncate_words_and_keep_lines` filter. Expects a string or null.
pub fn truncate_words_and_keep_lines(
    value: &Value,
    args: &HashMap<String, Value>,
) -> Result<Value> {
    let input = match value {
        Value::Null => None,
        Value::String(s) => Some(s.as_str()),
        _ => {
            return Err(tera::Error::msg(format!(
                "{KEEP_LINES_FILTER} filter expects a string"
            )));
        }
    };
    apply(input, args, KEEP_LINES_FILTER, Tokenization::KeepLines)
}

/// `truncatewords` filter. Numbers and booleans are truncated as their text form.
pub fn truncate_words(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let rendered;
    let input = match value {
        Value::Null => None,
        Value::String(s) => Some(s.as_str()),
        Value::Number(n) => {
            rendered = n.to_string();
            Some(rendered.as_str())
        }
        Value::Bool(b) => {
            rendered = b.to_string();
            Some(rendered.as_str())
        }
        _ => {
            return Err(tera::Error::msg(format!(
                "{TRUNCATE_WORDS_FILTER} filter expects a string"
            )));
        }
    };
    apply(input, args, TRUNCATE_WORDS_FILTER, Tokenization::Whitespace)
}

fn apply(
    input: Option<&str>,
    args: &HashMap<String, Value>,
    filter: &str,
    tokenization: Tokenization,
) -> Result<Value> {
    let truncator = Truncator::new(word_limit(args), marker(args, filter)?)
        .with_tokenization(tokenization);

    match truncator.truncate(input) {
        Some(text) => Ok(Value::String(text.into_owned())),
        None => {
            tracing::trace!(filter, "Null input passed through");
            Ok(Value::Null)
        }
    }
}

fn word_limit(args: &HashMap<String, Value>) -> WordLimit {
    match args.get(WORDS_ARG) {
        None => WordLimit::default(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => WordLimit::new(i),
            (None, Some(_), _) => WordLimit::new(i64::MAX),
            (None, None, Some(f)) => WordLimit::from_f64(f),
            (None, None, None) => WordLimit::new(0),
        },
        Some(Value::String(s)) => WordLimit::parse_lenient(s),
        Some(other) => {
            tracing::debug!(value = %other, "Non-numeric word limit coerced to 0");
            WordLimit::new(0)
        }
    }
}

fn marker<'a>(args: &'a HashMap<String, Value>, filter: &str) -> Result<&'a str> {
    match args.get(MARKER_ARG) {
        None => Ok(DEFAULT_MARKER),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(tera::Error::msg(format!(
            "{filter} filter expects `{MARKER_ARG}` to be a string"
        ))),
    }
}
