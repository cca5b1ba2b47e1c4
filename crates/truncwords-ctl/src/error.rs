//! Error type for CLI commands.

use std::path::PathBuf;

use truncwords_tera::EngineError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CtlError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("rendering the template directory {0} needs --output DIR")]
    OutputDirRequired(PathBuf),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("invalid --var '{0}': expected KEY=VALUE")]
    InvalidVar(String),
    #[error("invalid context file {path}: {message}")]
    Context { path: PathBuf, message: String },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub(crate) type CtlResult<T> = Result<T, CtlError>;
