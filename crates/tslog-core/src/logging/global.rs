//! Process-wide default logger
//!
//! Lifecycle: call [`init`] (or [`init_with`]) once at startup, log through
//! [`log`], [`logf`] or the `*_log!` macros, and call [`shutdown`] before
//! exit to flush and close the file. Only one default logger can be
//! installed at a time.

use std::fmt;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::level::Severity;

use super::file_logger::FileLogger;
use super::format::Location;
use super::thread_logger::ThreadLogger;
use super::traits::Logger;

/// The logger installed as process-wide default
#[derive(Debug, Clone)]
pub enum DefaultLogger {
    Thread(ThreadLogger),
    File(FileLogger),
}

impl DefaultLogger {
    /// A file logger when the config names a file, a console logger otherwise
    pub fn from_config(config: &LoggerConfig) -> LogResult<Self> {
        match config.file {
            Some(_) => FileLogger::with_config(config).map(DefaultLogger::File),
            None => Ok(DefaultLogger::Thread(ThreadLogger::with_config(config))),
        }
    }

    pub fn thread_logger(&self) -> &ThreadLogger {
        match self {
            DefaultLogger::Thread(logger) => logger,
            DefaultLogger::File(logger) => logger.thread_logger(),
        }
    }

    pub fn file_logger(&self) -> Option<&FileLogger> {
        match self {
            DefaultLogger::Thread(_) => None,
            DefaultLogger::File(logger) => Some(logger),
        }
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str) -> LogResult<()> {
        self.log_at(severity, Location::caller(), message)
    }

    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) -> LogResult<()> {
        match self {
            DefaultLogger::Thread(logger) => logger.logf(severity, args),
            DefaultLogger::File(logger) => logger.logf(severity, args),
        }
    }

    pub fn log_at(&self, severity: Severity, location: Location, message: &str) -> LogResult<()> {
        match self {
            DefaultLogger::Thread(logger) => logger.log_at(None, severity, location, message),
            DefaultLogger::File(logger) => {
                logger
                    .thread_logger()
                    .log_at(Some(logger.file()), severity, location, message)
            }
        }
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.logf(Severity::Info, args)
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.logf(Severity::Warn, args)
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.logf(Severity::Error, args)
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        self.logf(Severity::Debug, args)
    }

    pub fn clear(&self) -> LogResult<()> {
        match self {
            DefaultLogger::Thread(logger) => logger.clear(),
            DefaultLogger::File(logger) => logger.clear(),
        }
    }
}

impl From<ThreadLogger> for DefaultLogger {
    fn from(logger: ThreadLogger) -> Self {
        DefaultLogger::Thread(logger)
    }
}

impl From<FileLogger> for DefaultLogger {
    fn from(logger: FileLogger) -> Self {
        DefaultLogger::File(logger)
    }
}

impl Logger for DefaultLogger {
    #[track_caller]
    fn debug(&self, message: &str) {
        let _ = self.log_at(Severity::Debug, Location::caller(), message);
    }

    #[track_caller]
    fn info(&self, message: &str) {
        let _ = self.log_at(Severity::Info, Location::caller(), message);
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        let _ = self.log_at(Severity::Warn, Location::caller(), message);
    }

    #[track_caller]
    fn error(&self, message: &str) {
        let _ = self.log_at(Severity::Error, Location::caller(), message);
    }
}

/// Global default logger slot
static DEFAULT: Lazy<RwLock<Option<DefaultLogger>>> = Lazy::new(|| RwLock::new(None));

/// Build a logger from `config` and install it as the default
pub fn init(config: &LoggerConfig) -> LogResult<()> {
    init_with(DefaultLogger::from_config(config)?)
}

/// Install a logger configured from `TSLOG_*` environment variables
pub fn init_from_env() -> LogResult<()> {
    init(&LoggerConfig::from_env()?)
}

/// Install `logger` as the default
///
/// Fails with [`LogError::AlreadyInitialized`] if one is installed. The
/// rejected handle is dropped, not cleared: it may share state with the
/// installed logger, and its file closes once the caller drops its clones.
pub fn init_with(logger: impl Into<DefaultLogger>) -> LogResult<()> {
    let mut slot = DEFAULT.write();
    if slot.is_some() {
        return Err(LogError::AlreadyInitialized);
    }
    *slot = Some(logger.into());
    Ok(())
}

/// A handle to the installed default logger
pub fn default_logger() -> Option<DefaultLogger> {
    DEFAULT.read().clone()
}

pub fn is_initialized() -> bool {
    DEFAULT.read().is_some()
}

/// Remove and clear the default logger
///
/// Handles obtained earlier through [`default_logger`] become cleared too.
/// Does nothing when no logger is installed.
pub fn shutdown() -> LogResult<()> {
    let logger = DEFAULT.write().take();
    match logger {
        Some(logger) => logger.clear(),
        None => Ok(()),
    }
}

/// Log through the default logger
#[track_caller]
pub fn log(severity: Severity, message: &str) -> LogResult<()> {
    let location = Location::caller();
    let logger = default_logger().ok_or(LogError::NotInitialized)?;
    logger.log_at(severity, location, message)
}

/// Formatted variant of [`log`]
#[track_caller]
pub fn logf(severity: Severity, args: fmt::Arguments<'_>) -> LogResult<()> {
    let logger = default_logger().ok_or(LogError::NotInitialized)?;
    logger.logf(severity, args)
}
