//! Command handlers for the `truncwords` binary.

mod render;
mod tokens;
mod truncate;

pub(crate) use render::render_template;
pub(crate) use tokens::show_tokens;
pub(crate) use truncate::truncate_text;

use std::io::Read;
use std::path::Path;

use crate::error::{CtlError, CtlResult};

/// Read the whole input, from a file when given, otherwise from stdin.
fn read_input(path: Option<&Path>) -> CtlResult<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| CtlError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CtlError::Stdin)?;
            Ok(buf)
        }
    }
}
