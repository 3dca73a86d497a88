//! User configuration loaded from a TOML file.

use crate::calculator::{Calculator, DEFAULT_MAX_ENTRY_LEN, DEFAULT_SIGNIFICANT_DIGITS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_DIR_NAME: &str = "padlaunch";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Longest number that can be typed.
    pub max_entry_len: usize,
    /// Significant digits shown for results.
    pub significant_digits: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_entry_len: DEFAULT_MAX_ENTRY_LEN,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl CalculatorConfig {
    pub fn build(&self) -> Calculator {
        Calculator::with_limits(self.max_entry_len, self.significant_digits)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Copy the result to the clipboard after `=`.
    pub copy_on_equals: bool,
    /// Draw the keypad when the calculator screen opens.
    pub show_keypad: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            copy_on_equals: false,
            show_keypad: true,
        }
    }
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &text)
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        Config::from_toml(Path::new("test.toml"), text)
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.calculator.max_entry_len, 20);
        assert_eq!(config.calculator.significant_digits, 10);
        assert!(!config.session.copy_on_equals);
        assert!(config.session.show_keypad);
    }

    #[test]
    fn test_partial_config() {
        let config = parse(
            r#"
            [calculator]
            significant_digits = 6

            [session]
            copy_on_equals = true
            "#,
        )
        .unwrap();
        assert_eq!(config.calculator.max_entry_len, 20);
        assert_eq!(config.calculator.significant_digits, 6);
        assert!(config.session.copy_on_equals);
        assert!(config.session.show_keypad);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let err = parse("[calculator]\nmax_entry_len = \"long\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/padlaunch.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_build_calculator_from_config() {
        let config = parse("[calculator]\nmax_entry_len = 3").unwrap();
        let mut calc = config.calculator.build();
        for label in ["1", "2", "3", "4"] {
            calc.handle_key(label.parse().unwrap());
        }
        assert_eq!(calc.display(), "123");
    }
}
