//! Configuration file handling for base-converter.
//!
//! Loads configuration from `~/.config/base-converter/config.toml` or a custom path,
//! then applies `BASECONV_*` environment overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::DEFAULT_MAX_DIGITS;
use crate::render::ColorScheme;

/// Environment variable overriding `display.theme`.
pub const THEME_ENV: &str = "BASECONV_THEME";

/// Environment variable overriding `conversion.max_fraction_digits`.
pub const MAX_DIGITS_ENV: &str = "BASECONV_MAX_DIGITS";

/// Configuration file structure for base-converter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub conversion: ConversionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: ColorScheme,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub show_steps: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ColorScheme::default(),
            color: true,
            show_steps: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConversionConfig {
    #[serde(default = "default_max_digits")]
    pub max_fraction_digits: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_digits() -> usize {
    DEFAULT_MAX_DIGITS
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// With no explicit path, a missing default file yields the default config.
    /// An explicit path must exist. Either way a file that exists but cannot be
    /// parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound { path });
            }
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text and validate it.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.conversion.max_fraction_digits == 0 {
            return Err(ConfigError::Invalid {
                key: "conversion.max_fraction_digits",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `BASECONV_THEME` / `BASECONV_MAX_DIGITS` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source. Unusable values are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(THEME_ENV) {
            match ColorScheme::from_name(&value) {
                Some(theme) => {
                    log::debug!("{} overrides theme: {}", THEME_ENV, theme.name());
                    self.display.theme = theme;
                }
                None => log::warn!("ignoring {}={:?}: expected dark or light", THEME_ENV, value),
            }
        }
        if let Some(value) = lookup(MAX_DIGITS_ENV) {
            match value.trim().parse::<usize>() {
                Ok(digits) if digits > 0 => {
                    log::debug!("{} overrides max digits: {}", MAX_DIGITS_ENV, digits);
                    self.conversion.max_fraction_digits = digits;
                }
                _ => log::warn!(
                    "ignoring {}={:?}: expected a positive integer",
                    MAX_DIGITS_ENV,
                    value
                ),
            }
        }
    }
}

/// Effective settings after layering CLI flags over environment and file values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub theme: ColorScheme,
    pub color: bool,
    pub show_steps: bool,
    pub max_digits: usize,
}

impl Settings {
    pub fn resolve(
        config: &Config,
        theme: Option<ColorScheme>,
        no_color: bool,
        no_steps: bool,
        digits: Option<usize>,
    ) -> Self {
        Self {
            theme: theme.unwrap_or(config.display.theme),
            color: config.display.color && !no_color,
            show_steps: config.display.show_steps && !no_steps,
            max_digits: digits.unwrap_or(config.conversion.max_fraction_digits),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self::resolve(config, None, false, false, None)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("base-converter")
        .join("config.toml")
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# base-converter configuration

[display]
# Color scheme: dark, light
theme = "dark"
# Use ANSI colors at all
color = true
# Print the arithmetic steps behind each conversion
show_steps = true

[conversion]
# Maximum fractional digits produced for decimal floats
max_fraction_digits = 32
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.display.color);
        assert!(config.display.show_steps);
        assert_eq!(config.conversion.max_fraction_digits, DEFAULT_MAX_DIGITS);
    }

    #[test]
    fn test_default_config_template_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("[display]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.display.theme, ColorScheme::Light);
        assert!(config.display.show_steps);
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let err = Config::parse("[display]\ntheme = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_digits_rejected() {
        let err = Config::parse("[conversion]\nmax_fraction_digits = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(THEME_ENV, "LIGHT"), (MAX_DIGITS_ENV, "12")]);
        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.display.theme, ColorScheme::Light);
        assert_eq!(config.conversion.max_fraction_digits, 12);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            MAX_DIGITS_ENV => Some("zero".to_string()),
            THEME_ENV => Some("sepia".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_settings_precedence() {
        let mut config = Config::parse("[display]\ntheme = \"light\"\nshow_steps = false\n").unwrap();
        config.conversion.max_fraction_digits = 12;

        let settings = Settings::from(&config);
        assert_eq!(settings.theme, ColorScheme::Light);
        assert!(!settings.show_steps);
        assert_eq!(settings.max_digits, 12);

        let settings = Settings::resolve(&config, Some(ColorScheme::Dark), true, false, Some(4));
        assert_eq!(settings.theme, ColorScheme::Dark);
        assert!(!settings.color);
        assert_eq!(settings.max_digits, 4);
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("base-converter/config.toml"));
    }
}
