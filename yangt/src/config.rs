//! Configuration module for the yangt CLI.
//!
//! This module handles loading configuration settings for the yangt
//! application from a `yangt.toml` file.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use yangc_lex::{LexOptions, DEFAULT_MAX_ERRORS};

use crate::error::{Result, YangtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "yangt.toml";

/// Fallback worker count when the CPU count does not fit a `u32`.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// ```toml
/// verbose = false
///
/// [lexer]
/// max_errors = 8
/// debug = false
///
/// [check]
/// jobs = 4
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Errors reported per file before the rest of the file is skipped.
    #[serde(default = "default_max_errors")]
    pub max_errors: usize,

    /// Trace lexer state transitions and tag diagnostics with their
    /// reporting call site.
    #[serde(default)]
    pub debug: bool,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Number of parallel jobs.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

fn default_max_errors() -> usize {
    DEFAULT_MAX_ERRORS
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_errors: default_max_errors(),
            debug: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl LexerConfig {
    /// Lexer options for this configuration.
    pub fn options(&self) -> LexOptions {
        LexOptions::default()
            .with_max_errors(self.max_errors)
            .with_debug(self.debug)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/yangt/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load_from_path(&path)
            },
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(YangtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| YangtError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("yangt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("yangt").join(CONFIG_FILE_NAME))
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
        assert_eq!(config.lexer.max_errors, 8);
        assert!(!config.lexer.debug);
        assert!(config.check.jobs >= 1);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::parse(
            "verbose = true\n\n[lexer]\nmax_errors = 3\ndebug = true\n\n[check]\njobs = 2\n",
        )
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.lexer.max_errors, 3);
        assert!(config.lexer.debug);
        assert_eq!(config.check.jobs, 2);
    }

    #[test]
    fn test_parse_partial_section() {
        let config = Config::parse("[lexer]\nmax_errors = 1\n").unwrap();
        assert_eq!(config.lexer.max_errors, 1);
        assert!(!config.lexer.debug);
        assert_eq!(config.check, CheckConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let result = Config::parse("[lexer]\nmax_errrors = 1\n");
        assert!(matches!(result, Err(YangtError::Config(_))));
    }

    #[test]
    fn test_lexer_options() {
        let config = LexerConfig {
            max_errors: 2,
            debug: true,
        };
        let options = config.options();
        assert_eq!(options.max_errors, 2);
        assert!(options.debug);
        assert!(!options.pattern);
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[check]\njobs = 3\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.check.jobs, 3);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/yangt.toml"));
        assert!(result.is_err());
    }
}
