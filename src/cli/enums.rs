//! CLI enum types for the color theme and output format options.

use clap::ValueEnum;

use crate::render::ColorScheme;

/// Color theme for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

impl From<Theme> for ColorScheme {
    fn from(t: Theme) -> Self {
        match t {
            Theme::Dark => ColorScheme::Dark,
            Theme::Light => ColorScheme::Light,
        }
    }
}

/// How one-shot results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Result block with step tables
    #[default]
    Text,
    /// Machine-readable JSON, traces included
    Json,
}
