//! Word limit coercion.
//!
//! Template authors pass the limit however their template language hands it
//! over: as an integer, a float, or text. Coercion never fails. Text is read
//! up to the first character that cannot continue an integer, and anything
//! that yields no digits counts as zero.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Number of words kept when the caller does not pass a limit.
pub const DEFAULT_WORD_LIMIT: i64 = 15;

/// Requested number of words, as given by the caller (may be zero or negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordLimit(i64);

impl WordLimit {
    pub const fn new(words: i64) -> Self {
        Self(words)
    }

    /// The raw requested word count.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Coerce text to a word limit.
    ///
    /// Leading whitespace is skipped, then an optional sign and a run of
    /// digits are read. A single `_` between two digits is accepted as a
    /// separator (`"1_000"`). Everything after the integer prefix is ignored,
    /// so `"12 words"` is 12 and `"abc"` is 0. Values past `i64` saturate.
    pub fn parse_lenient(text: &str) -> Self {
        Self(leading_integer(text))
    }

    /// Coerce a float, truncating toward zero. NaN becomes 0 and infinities saturate.
    pub fn from_f64(value: f64) -> Self {
        Self(value.trunc() as i64)
    }

    /// Highest token index kept (`words - 1`, never below zero).
    ///
    /// Text whose token count does not exceed this index is left alone;
    /// otherwise `effective() + 1` tokens are kept.
    pub fn effective(self) -> usize {
        let last = self.0.saturating_sub(1).max(0);
        usize::try_from(last).unwrap_or(usize::MAX)
    }
}

impl Default for WordLimit {
    fn default() -> Self {
        Self(DEFAULT_WORD_LIMIT)
    }
}

impl From<i64> for WordLimit {
    fn from(words: i64) -> Self {
        Self(words)
    }
}

impl FromStr for WordLimit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for WordLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn leading_integer(text: &str) -> i64 {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let bytes = digits.as_bytes();
    let mut value: i64 = 0;
    let mut after_digit = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => {
                value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
                after_digit = true;
            }
            b'_' if after_digit && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {
                after_digit = false;
            }
            _ => break,
        }
    }

    if negative {
        -value
    } else {
        value
    }
}
