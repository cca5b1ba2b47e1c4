//! `truncwords`: line-preserving word truncation from the command line.
//!
//! Truncates text from a file or stdin, shows how text is tokenized, and
//! renders Tera templates with the truncation filters registered.

mod cli_config;
mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "truncwords",
    version,
    about = "Truncate text to a word count while keeping its line breaks",
    styles = output::clap_styles()
)]
struct Cli {
    /// Log at debug level (RUST_LOG still applies to other targets)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Truncate text from FILE (or stdin) and print it without a trailing newline
    Truncate(TruncateArgs),
    /// Show the chunks and tokens the word count is taken over
    Tokens(TokensArgs),
    /// Render a Tera template with the truncation filters registered
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub(crate) struct TruncateArgs {
    /// Words to keep; non-numeric text counts as 0 [default: 15]
    #[arg(short, long, env = "TRUNCWORDS_WORDS")]
    pub words: Option<String>,

    /// Suffix appended when text is cut [default: "..."]
    #[arg(short, long, env = "TRUNCWORDS_MARKER", allow_hyphen_values = true)]
    pub marker: Option<String>,

    /// Count whitespace-separated words instead of keeping lines
    #[arg(long)]
    pub whitespace: bool,

    /// Input file (stdin when omitted)
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct TokensArgs {
    /// Count whitespace-separated words instead of keeping lines
    #[arg(long)]
    pub whitespace: bool,

    /// Input file (stdin when omitted)
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct RenderArgs {
    /// Template file, or a directory of .tera templates (needs --output)
    pub template: PathBuf,

    /// Context variable as KEY=VALUE (repeatable, overrides --context)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Context file (.json, otherwise TOML)
    #[arg(short, long)]
    pub context: Option<PathBuf>,

    /// Write output here instead of stdout (a directory when TEMPLATE is one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Truncate(args) => {
            let cli_config = cli_config::load_cli_config();
            commands::truncate_text(args, &cli_config)
        }
        Commands::Tokens(args) => commands::show_tokens(args),
        Commands::Render(args) => commands::render_template(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let mut filter = EnvFilter::from_default_env();
    for target in ["truncwords_core", "truncwords_tera", "truncwords"] {
        if let Ok(directive) = format!("{target}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
