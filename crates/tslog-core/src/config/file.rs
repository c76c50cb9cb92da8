//! File-based logger configuration (YAML)
//!
//! The user-level file lives at `~/.config/tslog/config.yaml`:
//!
//! ```yaml
//! level: warn
//! file: /var/log/myapp.log
//! color: auto
//! console: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colors::ColorMode;
use crate::error::{LogError, LogResult};
use crate::level::Severity;

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity that is emitted
    pub level: Severity,

    /// Log file to append to, console only when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Console color mode
    pub color: ColorMode,

    /// Whether lines are printed to stdout
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            file: None,
            color: ColorMode::Auto,
            console: true,
        }
    }
}

impl LoggerConfig {
    /// Enable or disable debug messages
    pub fn with_debug(mut self, with_debug: bool) -> Self {
        if with_debug {
            self.level = Severity::Debug;
        } else if self.level == Severity::Debug {
            self.level = Severity::Info;
        }
        self
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Path of the user-level config file
    pub fn user_path() -> PathBuf {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("tslog").join("config.yaml")
    }

    /// Load config from a YAML file, defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LogError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load the user-level config with environment overrides applied
    pub fn load_user() -> LogResult<Self> {
        Self::load(Self::user_path())?.apply_env()
    }

    /// Save config to a YAML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LogError::Config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| LogError::Config(format!("Failed to serialize YAML: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| LogError::Config(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Export config as JSON
    pub fn to_json(&self) -> LogResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LogError::Config(format!("Failed to serialize JSON: {}", e)))
    }

    /// Import config from JSON
    pub fn from_json(json: &str) -> LogResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LogError::Config(format!("Failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::load(dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_yaml_roundtrip_and_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = LoggerConfig::default()
            .with_level(Severity::Error)
            .with_file("/tmp/app.log")
            .with_color(ColorMode::Never);
        config.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("level: error"));
        assert!(content.contains("color: never"));
        assert_eq!(LoggerConfig::load(&path).unwrap(), config);

        // omitted keys fall back to defaults
        fs::write(&path, "level: debug\n").unwrap();
        let partial = LoggerConfig::load(&path).unwrap();
        assert_eq!(partial.level, Severity::Debug);
        assert!(partial.console);
        assert!(partial.file.is_none());
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "level: loud\n").unwrap();
        assert!(matches!(LoggerConfig::load(&path), Err(LogError::Config(_))));
    }

    #[test]
    fn test_json_export() {
        let config = LoggerConfig::default().with_debug(true);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"level\": \"debug\""));
        assert_eq!(LoggerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_with_debug_toggle() {
        let on = LoggerConfig::default().with_debug(true);
        assert_eq!(on.level, Severity::Debug);
        assert_eq!(on.clone().with_debug(false).level, Severity::Info);

        let warn = LoggerConfig::default().with_level(Severity::Warn).with_debug(false);
        assert_eq!(warn.level, Severity::Warn);
    }

    #[test]
    fn test_user_path() {
        let path = LoggerConfig::user_path();
        assert!(path.ends_with("tslog/config.yaml"));
    }
}
