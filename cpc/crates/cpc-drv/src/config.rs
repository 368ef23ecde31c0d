//! Configuration module for the cpc driver.
//!
//! Settings come from a `cpc.toml` file. Every field is optional; a missing
//! file means all defaults.
//!
//! ```toml
//! verbose = false
//!
//! [repl]
//! prompt = "cp> "
//!
//! [output]
//! show_spans = false
//! ```

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cpc.toml";

/// Prompt printed before each interactive line.
pub const DEFAULT_PROMPT: &str = "cp> ";

/// Driver configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Interactive prompt settings.
    #[serde(default)]
    pub repl: ReplConfig,

    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Interactive prompt settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReplConfig {
    /// Text printed before reading each line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Token dump settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Append ` @start..end` byte ranges to each printed token.
    #[serde(default)]
    pub show_spans: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/cpc/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpc_drv::Config;
    ///
    /// let config = Config::parse("[repl]\nprompt = '>> '").unwrap();
    /// assert_eq!(config.repl.prompt, ">> ");
    /// assert!(!config.output.show_spans);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cpc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cpc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.repl.prompt, "cp> ");
        assert!(!config.output.show_spans);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            verbose = true

            [repl]
            prompt = "> "

            [output]
            show_spans = true
            "#,
        )
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.repl.prompt, "> ");
        assert!(config.output.show_spans);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::parse("[output]\nshow_spans = true").unwrap();
        assert_eq!(config.repl.prompt, DEFAULT_PROMPT);
        assert!(config.output.show_spans);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::parse("colour = true").unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = Config::parse("verbose = \"yes\"").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to parse"));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/cpc.toml"));
        assert!(matches!(result, Err(DriverError::Config(_))));
    }
}
