//! Severities and level filtering

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::error::LogError;

/// Severity attached to every log call
///
/// Variants are declared in the order the levels were historically
/// enumerated. Filtering does not use declaration order, see [`Severity::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
    Debug,
}

impl Severity {
    /// All severities in declaration order
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Debug,
    ];

    /// Lower-case tag written at the start of every line
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Debug => "debug",
        }
    }

    /// Console color for this severity
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => Color::Green,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Debug => Color::SoftRed,
        }
    }

    /// Filtering rank: debug < info < warn < error
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Warn => 2,
            Severity::Error => 3,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "debug" => Ok(Severity::Debug),
            other => Err(LogError::InvalidSeverity(other.to_string())),
        }
    }
}

/// Decides whether a message of a given severity is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelFilter {
    min: Severity,
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::from_debug(false)
    }
}

impl LevelFilter {
    /// Filter that emits `min` and everything ranked above it
    pub fn new(min: Severity) -> Self {
        Self { min }
    }

    /// Filter matching the classic `with_debug` switch
    ///
    /// Without debug only debug messages are dropped.
    pub fn from_debug(with_debug: bool) -> Self {
        if with_debug {
            Self::new(Severity::Debug)
        } else {
            Self::new(Severity::Info)
        }
    }

    /// The configured minimum severity
    pub fn min(&self) -> Severity {
        self.min
    }

    /// Whether debug messages pass this filter
    pub fn debug_enabled(&self) -> bool {
        self.allows(Severity::Debug)
    }

    /// Whether a message of `severity` should be emitted
    pub fn allows(&self, severity: Severity) -> bool {
        severity.rank() >= self.min.rank()
    }
}

impl From<Severity> for LevelFilter {
    fn from(min: Severity) -> Self {
        Self::new(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank() {
        assert!(Severity::Info.rank() > Severity::Debug.rank());
        assert!(Severity::Warn.rank() > Severity::Info.rank());
        assert!(Severity::Error.rank() > Severity::Warn.rank());
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!(" debug ".parse::<Severity>().unwrap(), Severity::Debug);
        assert!(matches!(
            "fatal".parse::<Severity>(),
            Err(LogError::InvalidSeverity(s)) if s == "fatal"
        ));
    }

    #[test]
    fn test_debug_switch() {
        let without = LevelFilter::from_debug(false);
        assert!(!without.allows(Severity::Debug));
        assert!(without.allows(Severity::Info));
        assert!(without.allows(Severity::Warn));
        assert!(without.allows(Severity::Error));

        let with = LevelFilter::from_debug(true);
        assert!(Severity::ALL.iter().all(|s| with.allows(*s)));
    }

    #[test]
    fn test_min_warn_drops_below() {
        let filter = LevelFilter::new(Severity::Warn);
        assert!(!filter.allows(Severity::Debug));
        assert!(!filter.allows(Severity::Info));
        assert!(filter.allows(Severity::Warn));
        assert!(filter.allows(Severity::Error));
        assert!(!filter.debug_enabled());
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Info.color(), Color::Green);
        assert_eq!(Severity::Warn.color(), Color::Yellow);
        assert_eq!(Severity::Error.color(), Color::Red);
        assert_eq!(Severity::Debug.color(), Color::SoftRed);
    }
}
