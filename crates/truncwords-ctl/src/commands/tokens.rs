//! `truncwords tokens`: show how text is cut into chunks and tokens.

use truncwords_core::{chunks, Tokenization};

use crate::error::CtlResult;
use crate::output;
use crate::TokensArgs;

pub(crate) fn show_tokens(args: TokensArgs) -> CtlResult<()> {
    let text = super::read_input(args.input.as_deref())?;
    let tokenization = if args.whitespace {
        Tokenization::Whitespace
    } else {
        Tokenization::KeepLines
    };
    let tokens = tokenization.tokens(&text);

    if tokens.is_empty() {
        output::warning("No tokens found.");
        return Ok(());
    }

    if tokenization == Tokenization::KeepLines {
        let chunks: Vec<&str> = chunks(&text).collect();
        output::header("Chunks:");
        for (i, chunk) in chunks.iter().enumerate() {
            output::item(format!("{i:>3}  {chunk:?}"));
        }
        output::blank();
        output::label("Chunks", chunks.len());
    }

    output::header("Tokens:");
    for (i, token) in tokens.iter().enumerate() {
        output::item(format!("{i:>3}  {token:?}"));
    }
    output::blank();
    output::label("Tokens", tokens.len());
    output::dim(format!(
        "  (left unchanged for --words {} and above)",
        tokens.len() + 1
    ));

    Ok(())
}
