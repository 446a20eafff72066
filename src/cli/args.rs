//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{OutputFormat, Theme};
use crate::validate::{parse_base, parse_code_point, parse_fraction, parse_max_digits};

/// Convert numbers between bases 2-16 and show the arithmetic behind each result
#[derive(Parser, Debug)]
#[command(name = "base-converter")]
#[command(version, about = "Educational number base converter", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Color theme (overrides config and BASECONV_THEME)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Hide the step-by-step tables
    #[arg(long, global = true)]
    pub no_steps: bool,

    /// Output format for one-shot subcommands
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum fractional digits (overrides config and BASECONV_MAX_DIGITS)
    #[arg(long, global = true, value_parser = parse_max_digits)]
    pub digits: Option<usize>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu (default)
    Menu,
    /// Convert an integer between two bases
    Convert {
        /// Digits to convert, optionally negative
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source base (2-16)
        #[arg(long, short, default_value = "10", value_parser = parse_base)]
        from: u32,
        /// Target base (2-16)
        #[arg(long, short, value_parser = parse_base)]
        to: u32,
    },
    /// Convert a decimal float such as -12.375
    Float {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target base (2-16)
        #[arg(long, short, value_parser = parse_base)]
        to: u32,
    },
    /// Convert a fraction in [0, 1)
    Fraction {
        #[arg(value_parser = parse_fraction)]
        value: f64,
        /// Target base (2-16)
        #[arg(long, short, value_parser = parse_base)]
        to: u32,
    },
    /// Show the character for a code point
    Char {
        #[arg(allow_hyphen_values = true, value_parser = parse_code_point)]
        code: i64,
    },
    /// Show the code point of a single character
    Code { character: String },
    /// Guess which bases a digit string could belong to
    Detect {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
