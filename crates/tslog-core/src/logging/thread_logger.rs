//! Thread-safe console logger
//!
//! [`ThreadLogger`] is the core handle. Every call is level-checked and
//! formatted on the calling thread, then written under a single mutex so
//! lines from concurrent threads never interleave. A call may name a
//! [`LogFile`] to receive the same line (uncolored) in addition to the
//! console.
//!
//! ```rust,ignore
//! use tslog_core::{ThreadLogger, Severity};
//!
//! let logger = ThreadLogger::new(true);
//! logger.info("service started");
//! logger.warnf(format_args!("{} retries left", 3));
//! logger.clear();
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::colors::{write_colored, ColorMode};
use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::level::{LevelFilter, Severity};

use super::format::{format_line, time_string, Location};
use super::sink::LogFile;
use super::traits::Logger;

/// Signature of the plain dispatch function
pub type LogFn = fn(&ThreadLogger, Option<&LogFile>, Severity, Location, &str) -> LogResult<()>;

/// Signature of the formatted dispatch function
pub type LogFnF =
    fn(&ThreadLogger, Option<&LogFile>, Severity, Location, fmt::Arguments<'_>) -> LogResult<()>;

/// Console half of the write path, guarded by the logger mutex
struct Console {
    writer: Box<dyn Write + Send>,
    color: bool,
    enabled: bool,
}

impl Console {
    fn write_line(&mut self, severity: Severity, line: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.color {
            write_colored(severity.color(), &mut *self.writer, line)?;
        } else {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()
    }
}

struct ThreadLoggerInner {
    filter: RwLock<LevelFilter>,
    console: Mutex<Console>,
    cleared: AtomicBool,
}

/// A thread-safe logger handle
///
/// Clones share the same state: clearing one clears them all.
#[derive(Clone)]
pub struct ThreadLogger {
    inner: Arc<ThreadLoggerInner>,
}

impl ThreadLogger {
    /// Create a logger writing to stdout
    ///
    /// With `with_debug` false, debug calls are dropped.
    pub fn new(with_debug: bool) -> Self {
        Self::builder().with_debug(with_debug).build()
    }

    /// Create a logger from configuration
    ///
    /// The configured file is ignored here, see [`super::FileLogger::with_config`].
    pub fn with_config(config: &LoggerConfig) -> Self {
        Self::builder()
            .filter(LevelFilter::new(config.level))
            .color(config.color)
            .console(config.console)
            .build()
    }

    pub fn builder() -> ThreadLoggerBuilder {
        ThreadLoggerBuilder::default()
    }

    pub fn filter(&self) -> LevelFilter {
        *self.inner.filter.read()
    }

    /// Change the minimum severity for this logger and its clones
    pub fn set_filter(&self, filter: impl Into<LevelFilter>) {
        *self.inner.filter.write() = filter.into();
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        self.filter().allows(severity)
    }

    pub fn is_cleared(&self) -> bool {
        self.inner.cleared.load(Ordering::SeqCst)
    }

    /// Log a message to the console
    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str) -> LogResult<()> {
        log_fn(self, None, severity, Location::caller(), message)
    }

    /// Log a formatted message to the console
    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(self, None, severity, Location::caller(), args)
    }

    /// Log a message to the console and, if given, to `file`
    #[track_caller]
    pub fn log_to(
        &self,
        file: Option<&LogFile>,
        severity: Severity,
        message: &str,
    ) -> LogResult<()> {
        log_fn(self, file, severity, Location::caller(), message)
    }

    /// Formatted variant of [`ThreadLogger::log_to`]
    #[track_caller]
    pub fn logf_to(
        &self,
        file: Option<&LogFile>,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) -> LogResult<()> {
        log_fnf(self, file, severity, Location::caller(), args)
    }

    /// Log with an explicit call-site location
    pub fn log_at(
        &self,
        file: Option<&LogFile>,
        severity: Severity,
        location: Location,
        message: &str,
    ) -> LogResult<()> {
        if self.is_cleared() {
            return Err(LogError::Cleared);
        }
        if !self.enabled(severity) {
            return Ok(());
        }

        let line = format_line(severity, &time_string(), location, message);

        let mut console = self.inner.console.lock();
        // clear() may have won the lock while we were formatting
        if self.is_cleared() {
            return Err(LogError::Cleared);
        }
        let file_result = match file {
            Some(file) => file.write_line(&line),
            None => Ok(()),
        };
        let console_result = console.write_line(severity, &line).map_err(LogError::from);
        file_result.and(console_result)
    }

    #[track_caller]
    pub fn info(&self, message: &str) -> LogResult<()> {
        self.log_at(None, Severity::Info, Location::caller(), message)
    }

    #[track_caller]
    pub fn warn(&self, message: &str) -> LogResult<()> {
        self.log_at(None, Severity::Warn, Location::caller(), message)
    }

    #[track_caller]
    pub fn error(&self, message: &str) -> LogResult<()> {
        self.log_at(None, Severity::Error, Location::caller(), message)
    }

    #[track_caller]
    pub fn debug(&self, message: &str) -> LogResult<()> {
        self.log_at(None, Severity::Debug, Location::caller(), message)
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(self, None, Severity::Info, Location::caller(), args)
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(self, None, Severity::Warn, Location::caller(), args)
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(self, None, Severity::Error, Location::caller(), args)
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(self, None, Severity::Debug, Location::caller(), args)
    }

    /// Release the logger
    ///
    /// Waits for any in-flight write, flushes the console and marks this
    /// handle and all clones cleared. Clearing twice is a no-op.
    pub fn clear(&self) -> LogResult<()> {
        let mut console = self.inner.console.lock();
        if self.inner.cleared.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        console.writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for ThreadLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadLogger")
            .field("filter", &self.filter())
            .field("cleared", &self.is_cleared())
            .finish()
    }
}

impl Logger for ThreadLogger {
    #[track_caller]
    fn debug(&self, message: &str) {
        let _ = self.log_at(None, Severity::Debug, Location::caller(), message);
    }

    #[track_caller]
    fn info(&self, message: &str) {
        let _ = self.log_at(None, Severity::Info, Location::caller(), message);
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        let _ = self.log_at(None, Severity::Warn, Location::caller(), message);
    }

    #[track_caller]
    fn error(&self, message: &str) {
        let _ = self.log_at(None, Severity::Error, Location::caller(), message);
    }
}

/// Plain dispatch: filter, timestamp and write `message`
pub fn log_fn(
    logger: &ThreadLogger,
    file: Option<&LogFile>,
    severity: Severity,
    location: Location,
    message: &str,
) -> LogResult<()> {
    logger.log_at(file, severity, location, message)
}

/// Formatted dispatch: render `args` then behave like [`log_fn`]
///
/// Dropped severities are never rendered.
pub fn log_fnf(
    logger: &ThreadLogger,
    file: Option<&LogFile>,
    severity: Severity,
    location: Location,
    args: fmt::Arguments<'_>,
) -> LogResult<()> {
    if logger.is_cleared() {
        return Err(LogError::Cleared);
    }
    if !logger.enabled(severity) {
        return Ok(());
    }
    let message = match args.as_str() {
        Some(s) => std::borrow::Cow::Borrowed(s),
        None => std::borrow::Cow::Owned(args.to_string()),
    };
    logger.log_at(file, severity, location, &message)
}

/// Create a logger writing to stdout
pub fn new_thread_logger(with_debug: bool) -> ThreadLogger {
    ThreadLogger::new(with_debug)
}

/// Release a logger created with [`new_thread_logger`]
pub fn clear_thread_logger(logger: &ThreadLogger) -> LogResult<()> {
    logger.clear()
}

/// Builder for [`ThreadLogger`]
pub struct ThreadLoggerBuilder {
    filter: LevelFilter,
    color: ColorMode,
    console: bool,
    writer: Option<Box<dyn Write + Send>>,
}

impl Default for ThreadLoggerBuilder {
    fn default() -> Self {
        Self {
            filter: LevelFilter::default(),
            color: ColorMode::Auto,
            console: true,
            writer: None,
        }
    }
}

impl ThreadLoggerBuilder {
    pub fn filter(mut self, filter: impl Into<LevelFilter>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_debug(mut self, with_debug: bool) -> Self {
        self.filter = LevelFilter::from_debug(with_debug);
        self
    }

    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Disable to log to files only
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Send console output to `writer` instead of stdout
    ///
    /// `ColorMode::Auto` resolves against stdout, so pair custom writers
    /// with an explicit mode.
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn build(self) -> ThreadLogger {
        let writer = self.writer.unwrap_or_else(|| Box::new(io::stdout()));
        ThreadLogger {
            inner: Arc::new(ThreadLoggerInner {
                filter: RwLock::new(self.filter),
                console: Mutex::new(Console {
                    writer,
                    color: self.color.enabled(),
                    enabled: self.console,
                }),
                cleared: AtomicBool::new(false),
            }),
        }
    }
}
