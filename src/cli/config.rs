//! Shell configuration.

use std::path::PathBuf;

use crate::types::DEFAULT_DOT_FILE;

/// How outcomes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status lines, with menu and prompts.
    #[default]
    Text,
    /// One JSON object per outcome; menu and prompts are suppressed.
    Json,
}

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Destination of the export command.
    pub dot_path: PathBuf,
    pub format: OutputFormat,
    /// Print the option menu before each prompt (text format only).
    pub show_menu: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dot_path: PathBuf::from(DEFAULT_DOT_FILE),
            format: OutputFormat::Text,
            show_menu: true,
        }
    }
}
