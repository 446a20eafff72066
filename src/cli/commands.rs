//! Subcommand handlers for one-shot conversions and config actions.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::{Command, ConfigAction};
use super::enums::OutputFormat;
use crate::config::{default_path as get_config_path, ConfigError, Settings, DEFAULT_CONFIG};
use crate::engine::ConversionError;
use crate::ops::{self, Outcome};
use crate::render::Renderer;

/// Errors surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run a one-shot conversion subcommand.
///
/// `Menu` and `Config` are dispatched by the caller and produce no outcome here.
pub fn conversion_outcome(
    command: &Command,
    settings: &Settings,
) -> Result<Option<Outcome>, ConversionError> {
    let steps = settings.show_steps;
    let outcome = match command {
        Command::Convert { value, from, to } => {
            Outcome::Integer(ops::integer(value, *from, *to, steps)?)
        }
        Command::Float { value, to } => {
            Outcome::DecimalFloat(ops::decimal_float(value, *to, settings.max_digits, steps)?)
        }
        Command::Fraction { value, to } => {
            Outcome::Fraction(ops::fraction(*value, *to, settings.max_digits, steps)?)
        }
        Command::Char { code } => Outcome::CodePoint(ops::code_point(*code)?),
        Command::Code { character } => Outcome::CodePoint(ops::character(character)?),
        Command::Detect { value } => Outcome::Detection(ops::detect(value)?),
        Command::Menu | Command::Config { .. } => return Ok(None),
    };
    Ok(Some(outcome))
}

/// Print an outcome in the requested format.
pub fn print_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    format: OutputFormat,
    renderer: &Renderer,
    show_steps: bool,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => write!(out, "{}", renderer.outcome(outcome, show_steps))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(outcome)?)?,
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action<W: Write>(
    out: &mut W,
    action: ConfigAction,
    config_path: Option<&Path>,
    settings: &Settings,
) -> Result<(), AppError> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            writeln!(out, "Current configuration:")?;
            writeln!(out, "  Theme: {}", settings.theme.name())?;
            writeln!(out, "  Color: {}", yes_no(settings.color))?;
            writeln!(out, "  Show steps: {}", yes_no(settings.show_steps))?;
            writeln!(out, "  Max fraction digits: {}", settings.max_digits)?;
            writeln!(out)?;

            if config_path.exists() {
                writeln!(out, "Config file: {} (exists)", config_path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", config_path.display())?;
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(AppError::ConfigExists(config_path));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG)?;
            log::info!("wrote default config to {}", config_path.display());

            writeln!(out, "Created config file: {}", config_path.display())?;
        }
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
