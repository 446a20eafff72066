//! base-converter library crate.
//!
//! The `engine` module holds the pure conversion logic; everything else is
//! presentation shared by the interactive menu and the one-shot subcommands.

pub mod cli;
pub mod config;
pub mod engine;
pub mod operation;
pub mod ops;
pub mod render;
pub mod repl;
pub mod validate;

pub use config::{Config, ConfigError, Settings};
pub use engine::ConversionError;
pub use operation::{Operation, OperationKind};
pub use render::{ColorScheme, Renderer};
pub use repl::Session;
