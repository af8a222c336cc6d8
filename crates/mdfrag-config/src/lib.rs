//! mdfrag Config
//!
//! This crate handles configuration loading and management
//! for the `mdfrag` command-line tool, using TOML files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdfrag/config.toml`
//! - macOS: `~/Library/Application Support/mdfrag/config.toml`
//! - Windows: `%APPDATA%\mdfrag\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdfrag_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an inline override
//! let config = Config::load_with_override(Some("[code]\nLanguage = \"rust\"")).unwrap();
//! ```

mod code;
mod output;

pub use code::{CodeConfig, CodeOverride};
pub use output::{OutputConfig, OutputOverride};

use mdfrag_core::{MdfragError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default TOML configuration string, written by `--init-config`.
const DEFAULT_TOML: &str = r#"[output]
EscapeInput     = false
TrailingNewline = false

[code]
Language = ""
"#;

const APP_NAME: &str = "mdfrag";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Output handling
    #[serde(default)]
    pub output: OutputConfig,

    /// Code block defaults
    #[serde(default)]
    pub code: CodeConfig,
}

/// A partial configuration given with `-c`.
///
/// Only the keys present in the override replace values of the base
/// config; everything else is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub output: OutputOverride,

    #[serde(default)]
    pub code: CodeOverride,
}

impl Config {
    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures `config.toml` exists in `config_dir`, creating it with
    /// defaults if not. An existing file is never overwritten.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MdfragError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it
    /// 3. Otherwise treat `override_config` as inline TOML and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<ConfigOverride> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| MdfragError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Keys set in `other` take precedence; unset keys keep their value.
    ///
    /// # Example
    ///
    /// ```
    /// use mdfrag_config::Config;
    ///
    /// let mut base = Config::default();
    /// base.code.language = "rust".into();
    ///
    /// let override_config = Config::parse_override("[output]\nEscapeInput = true").unwrap();
    /// base.merge(&override_config);
    ///
    /// assert!(base.output.escape_input);
    /// assert_eq!(base.code.language, "rust");
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.output.merge(&other.output);
        self.code.merge(&other.code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mdfrag-config-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_toml_matches_default() {
        let parsed: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let override_config: ConfigOverride = toml::from_str(
            r#"
            [output]
            TrailingNewline = true
            [code]
            Language = "rust"
        "#,
        )
        .unwrap();

        base.merge(&override_config);
        assert!(base.output.trailing_newline);
        assert!(!base.output.escape_input);
        assert_eq!(base.code.language, "rust");
    }

    #[test]
    fn test_unrelated_override_keeps_base_values() {
        let mut base = Config::default();
        base.output.escape_input = true;
        base.output.trailing_newline = true;

        base.merge(&Config::parse_override("[code]\nLanguage = \"go\"").unwrap());

        assert!(base.output.escape_input);
        assert!(base.output.trailing_newline);
        assert_eq!(base.code.language, "go");
    }

    #[test]
    fn test_override_can_switch_off() {
        let mut base = Config::default();
        base.output.escape_input = true;
        base.code.language = "sh".into();

        base.merge(&Config::parse_override("[output]\nEscapeInput = false").unwrap());

        assert!(!base.output.escape_input);
        assert_eq!(base.code.language, "sh");
    }

    #[test]
    fn test_parse_override_inline() {
        let config = Config::parse_override("[code]\nLanguage = \"sh\"").unwrap();
        assert_eq!(config.code.language.as_deref(), Some("sh"));
        assert_eq!(config.output, OutputOverride::default());
    }

    #[test]
    fn test_parse_override_invalid() {
        let err = Config::parse_override("[code\nLanguage =").unwrap_err();
        assert!(matches!(err, MdfragError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        // May be None in containers without a home directory
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("mdfrag"));
            assert!(p.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_ensure_config_file_writes_defaults() {
        let dir = scratch_path("init");
        let path = Config::ensure_config_file(&dir).unwrap();

        assert_eq!(path, dir.join("config.toml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_TOML);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_ensure_config_file_keeps_existing() {
        let dir = scratch_path("existing");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[code]\nLanguage = \"python\"\n").unwrap();

        let path = Config::ensure_config_file(&dir).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded.code.language, "python");
    }

    #[test]
    fn test_parse_override_from_file() {
        let path = scratch_path("override.toml");
        std::fs::write(&path, "[output]\nEscapeInput = true\n").unwrap();

        let config = Config::parse_override(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.output.escape_input, Some(true));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(&scratch_path("missing.toml")).unwrap_err();
        assert!(matches!(err, MdfragError::Io(_)));
    }
}
