//! Environment variable overrides

use std::path::PathBuf;

use crate::colors::ColorMode;
use crate::error::{LogError, LogResult};
use crate::level::Severity;

use super::file::LoggerConfig;

/// Minimum severity (`info`, `warn`, `error`, `debug`)
pub const ENV_LEVEL: &str = "TSLOG_LEVEL";
/// `1`/`true` enables debug messages, `0`/`false` disables them
pub const ENV_DEBUG: &str = "TSLOG_DEBUG";
/// Log file path
pub const ENV_FILE: &str = "TSLOG_FILE";
/// Console color mode (`auto`, `always`, `never`)
pub const ENV_COLOR: &str = "TSLOG_COLOR";

impl LoggerConfig {
    /// Default config with `TSLOG_*` overrides applied
    pub fn from_env() -> LogResult<Self> {
        Self::default().apply_env()
    }

    /// Apply `TSLOG_*` overrides from the process environment
    pub fn apply_env(self) -> LogResult<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    ///
    /// `TSLOG_DEBUG` is applied after `TSLOG_LEVEL`. Empty values are ignored.
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> LogResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(level) = get(ENV_LEVEL) {
            self.level = level.parse::<Severity>()?;
        }
        if let Some(debug) = get(ENV_DEBUG) {
            self = self.with_debug(parse_bool(ENV_DEBUG, &debug)?);
        }
        if let Some(file) = get(ENV_FILE) {
            self.file = Some(PathBuf::from(file));
        }
        if let Some(color) = get(ENV_COLOR) {
            self.color = color.parse::<ColorMode>()?;
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> LogResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LogError::Config(format!("{} must be a boolean, got {}", key, other))),
    }
}
