//! `truncwords truncate`: cut text from a file or stdin to a word count.

use truncwords_core::{Tokenization, Truncator, WordLimit, DEFAULT_MARKER};

use crate::cli_config::CliConfig;
use crate::error::{CtlError, CtlResult};
use crate::output;
use crate::TruncateArgs;

pub(crate) fn truncate_text(args: TruncateArgs, cli_config: &CliConfig) -> CtlResult<()> {
    let text = super::read_input(args.input.as_deref())?;
    let truncator = resolve_truncator(
        args.words.as_deref(),
        args.marker,
        args.whitespace,
        cli_config,
    );
    tracing::debug!(
        words = %truncator.words,
        marker = %truncator.marker,
        mode = ?truncator.tokenization,
        "Truncating input"
    );

    let truncated = truncator.truncate(Some(text.as_str())).unwrap_or_default();
    output::raw(&truncated).map_err(CtlError::Output)
}

/// Combine flags with config defaults. Flags (or their env vars) win.
fn resolve_truncator(
    words: Option<&str>,
    marker: Option<String>,
    whitespace: bool,
    cli_config: &CliConfig,
) -> Truncator {
    let words = match words {
        Some(words) => WordLimit::parse_lenient(words),
        None => cli_config
            .default_words
            .map(WordLimit::new)
            .unwrap_or_default(),
    };
    let marker = marker
        .or_else(|| cli_config.default_marker.clone())
        .unwrap_or_else(|| DEFAULT_MARKER.to_string());
    let tokenization = if whitespace {
        Tokenization::Whitespace
    } else {
        Tokenization::KeepLines
    };

    Truncator::new(words, marker).with_tokenization(tokenization)
}
