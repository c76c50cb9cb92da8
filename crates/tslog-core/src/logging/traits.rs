//! Logger trait definition

use std::sync::Arc;

use crate::level::Severity;

/// Logger abstraction for code that should not care where lines go
///
/// Implementations:
/// - `ThreadLogger`: colored console output
/// - `FileLogger`: console plus an append-only file
/// - `DefaultLogger`: whichever of the two is installed process-wide
/// - `NoOpLogger`: silent logger for testing
///
/// These methods cannot fail; write errors are discarded. Call the inherent
/// methods on the concrete loggers to observe them.
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);

    /// Log a message at `severity`
    fn log_severity(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => self.info(message),
            Severity::Warn => self.warn(message),
            Severity::Error => self.error(message),
            Severity::Debug => self.debug(message),
        }
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Formatted logging through an explicit handle
///
/// Works with `ThreadLogger`, `FileLogger` and `DefaultLogger`; evaluates to
/// the handle's `LogResult<()>`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warnf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(format_args!($($arg)*))
    };
}

/// Formatted logging through the process-wide default logger
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::logf($crate::Severity::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::logging::logf($crate::Severity::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::logf($crate::Severity::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::logf($crate::Severity::Error, format_args!($($arg)*))
    };
}
