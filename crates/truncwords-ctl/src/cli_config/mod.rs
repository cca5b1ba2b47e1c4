//! CLI configuration: defaults for the two truncation parameters.
//!
//! Only supplies fallbacks; `--words`/`--marker` (or their environment
//! variables) always win.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use serde::Deserialize;

/// CLI-specific configuration loaded from `.truncwords.toml`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Word limit used when `--words` is not given.
    pub default_words: Option<i64>,

    /// Marker used when `--marker` is not given.
    pub default_marker: Option<String>,
}
