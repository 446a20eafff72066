//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use commands::{conversion_outcome, handle_config_action, print_outcome, AppError};
pub use enums::{OutputFormat, Theme};
