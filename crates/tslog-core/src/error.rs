//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while constructing or writing through a logger
#[derive(Error, Debug)]
pub enum LogError {
    /// The log file could not be opened or created
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a line to a sink failed
    #[error("failed to write log line: {0}")]
    Write(#[from] std::io::Error),

    /// The logger handle was cleared and can no longer be used
    #[error("logger has been cleared")]
    Cleared,

    /// A default logger is already installed
    #[error("a default logger is already installed")]
    AlreadyInitialized,

    /// No default logger is installed
    #[error("no default logger is installed")]
    NotInitialized,

    /// A severity name could not be parsed
    #[error("invalid severity: {0}")]
    InvalidSeverity(String),

    /// Configuration could not be loaded or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Create an open error for the given path
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from using a cleared handle
    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared)
    }
}

pub type LogResult<T> = Result<T, LogError>;
