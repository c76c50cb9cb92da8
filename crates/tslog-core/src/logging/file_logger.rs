//! File-backed logger
//!
//! A [`FileLogger`] pairs a [`ThreadLogger`] with an append-only [`LogFile`].
//! Its calls go to both the console and the file; use
//! [`FileLogger::thread_logger`] to log to the console alone.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::level::Severity;

use super::format::Location;
use super::sink::LogFile;
use super::thread_logger::{log_fn, log_fnf, ThreadLogger};
use super::traits::Logger;

/// A logger that writes every line to the console and a file
///
/// Clones share the file and the underlying thread logger.
#[derive(Clone)]
pub struct FileLogger {
    logger: ThreadLogger,
    file: Arc<LogFile>,
}

impl FileLogger {
    /// Open `path` (created if missing, appended to otherwise)
    pub fn open(path: impl AsRef<Path>, with_debug: bool) -> LogResult<Self> {
        let file = LogFile::open(path)?;
        Ok(Self::from_parts(ThreadLogger::new(with_debug), file))
    }

    /// Build a file logger from configuration
    ///
    /// Fails with [`LogError::Config`] when no file is configured.
    pub fn with_config(config: &LoggerConfig) -> LogResult<Self> {
        let path = config
            .file
            .as_ref()
            .ok_or_else(|| LogError::Config("no log file configured".to_string()))?;
        let file = LogFile::open(path)?;
        Ok(Self::from_parts(ThreadLogger::with_config(config), file))
    }

    pub fn from_parts(logger: ThreadLogger, file: LogFile) -> Self {
        Self {
            logger,
            file: Arc::new(file),
        }
    }

    /// The underlying logger, for console-only calls
    pub fn thread_logger(&self) -> &ThreadLogger {
        &self.logger
    }

    pub fn file(&self) -> &LogFile {
        &self.file
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn is_cleared(&self) -> bool {
        self.logger.is_cleared() || self.file.is_closed()
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: &str) -> LogResult<()> {
        log_fn(&self.logger, Some(&self.file), severity, Location::caller(), message)
    }

    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(&self.logger, Some(&self.file), severity, Location::caller(), args)
    }

    #[track_caller]
    pub fn info(&self, message: &str) -> LogResult<()> {
        log_fn(&self.logger, Some(&self.file), Severity::Info, Location::caller(), message)
    }

    #[track_caller]
    pub fn warn(&self, message: &str) -> LogResult<()> {
        log_fn(&self.logger, Some(&self.file), Severity::Warn, Location::caller(), message)
    }

    #[track_caller]
    pub fn error(&self, message: &str) -> LogResult<()> {
        log_fn(&self.logger, Some(&self.file), Severity::Error, Location::caller(), message)
    }

    #[track_caller]
    pub fn debug(&self, message: &str) -> LogResult<()> {
        log_fn(&self.logger, Some(&self.file), Severity::Debug, Location::caller(), message)
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(&self.logger, Some(&self.file), Severity::Info, Location::caller(), args)
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(&self.logger, Some(&self.file), Severity::Warn, Location::caller(), args)
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(&self.logger, Some(&self.file), Severity::Error, Location::caller(), args)
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> LogResult<()> {
        log_fnf(&self.logger, Some(&self.file), Severity::Debug, Location::caller(), args)
    }

    fn emit(&self, severity: Severity, location: Location, message: &str) -> LogResult<()> {
        self.logger.log_at(Some(&self.file), severity, location, message)
    }

    /// Clear the thread logger, then flush and close the file
    ///
    /// Clearing the logger first waits out any in-flight write, so a
    /// concurrent call either lands on both sinks or is refused. Both halves
    /// are released even if one fails; the first error is returned.
    pub fn clear(&self) -> LogResult<()> {
        let logger_result = self.logger.clear();
        let file_result = self.file.close();
        logger_result.and(file_result)
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("path", &self.file.path())
            .field("filter", &self.logger.filter())
            .field("cleared", &self.is_cleared())
            .finish()
    }
}

impl Logger for FileLogger {
    #[track_caller]
    fn debug(&self, message: &str) {
        let _ = self.emit(Severity::Debug, Location::caller(), message);
    }

    #[track_caller]
    fn info(&self, message: &str) {
        let _ = self.emit(Severity::Info, Location::caller(), message);
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        let _ = self.emit(Severity::Warn, Location::caller(), message);
    }

    #[track_caller]
    fn error(&self, message: &str) {
        let _ = self.emit(Severity::Error, Location::caller(), message);
    }
}

/// Open a file logger at `output_file`
pub fn new_file_logger(output_file: impl AsRef<Path>, with_debug: bool) -> LogResult<FileLogger> {
    FileLogger::open(output_file, with_debug)
}

/// Close the file and release the logger
pub fn clear_file_logger(logger: &FileLogger) -> LogResult<()> {
    logger.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorMode;
    use crate::level::LevelFilter;
    use crate::logging::thread_logger::test_support::SharedBuffer;
    use std::fs;
    use std::thread;
    use tempfile::tempdir;

    fn quiet_logger(dir: &Path, filter: impl Into<LevelFilter>) -> FileLogger {
        let logger = ThreadLogger::builder()
            .filter(filter)
            .color(ColorMode::Never)
            .console(false)
            .build();
        let file = LogFile::open(dir.join("test.log")).unwrap();
        FileLogger::from_parts(logger, file)
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_new_file_logger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file_logger_test.log");

        for with_debug in [false, true] {
            let fhl = new_file_logger(&path, with_debug).unwrap();
            assert_eq!(fhl.thread_logger().filter().debug_enabled(), with_debug);
            assert_eq!(fhl.path(), path);
            clear_file_logger(&fhl).unwrap();
        }
        assert!(path.exists());
    }

    #[test]
    fn test_file_lines_are_plain() {
        let dir = tempdir().unwrap();
        let fhl = quiet_logger(dir.path(), Severity::Debug);
        fhl.info("this is an info log").unwrap();
        fhl.debugf(format_args!("this is a {} style debug log", "printf")).unwrap();

        let lines = read_lines(fhl.path());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[info - "));
        assert!(lines[0].ends_with("] this is an info log"));
        assert!(lines[1].ends_with("] this is a printf style debug log"));
        assert!(!lines.iter().any(|l| l.contains('\x1b')));
    }

    #[test]
    fn test_handle_macros() {
        let dir = tempdir().unwrap();
        let fhl = quiet_logger(dir.path(), Severity::Info);
        crate::log_info!(fhl, "this is a {} style info log", "printf").unwrap();
        crate::log_error!(fhl, "code {}", 7).unwrap();
        crate::log_debug!(fhl, "dropped").unwrap();
        crate::log_warn!(fhl.thread_logger(), "console only").unwrap();

        let lines = read_lines(fhl.path());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] this is a printf style info log"));
        assert!(lines[1].starts_with("[error - ") && lines[1].ends_with("] code 7"));
    }

    #[test]
    fn test_min_warn_one_error_line() {
        let dir = tempdir().unwrap();
        let fhl = quiet_logger(dir.path(), Severity::Warn);
        fhl.info("not written").unwrap();
        fhl.error("written").unwrap();

        let lines = read_lines(fhl.path());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[error - "));
    }

    #[test]
    fn test_below_minimum_writes_nothing() {
        let dir = tempdir().unwrap();
        let fhl = quiet_logger(dir.path(), Severity::Error);
        for severity in [Severity::Debug, Severity::Info, Severity::Warn] {
            fhl.log(severity, "dropped").unwrap();
            fhl.logf(severity, format_args!("dropped {}", 2)).unwrap();
        }
        assert!(read_lines(fhl.path()).is_empty());
    }

    #[test]
    fn test_console_only_through_thread_logger() {
        let dir = tempdir().unwrap();
        let buf = SharedBuffer::default();
        let logger = ThreadLogger::builder()
            .color(ColorMode::Never)
            .writer(buf.clone())
            .build();
        let fhl = FileLogger::from_parts(logger, LogFile::open(dir.path().join("a.log")).unwrap());

        fhl.warn("both").unwrap();
        fhl.thread_logger().info("this will only log to stdout").unwrap();

        assert_eq!(read_lines(fhl.path()).len(), 1);
        assert_eq!(buf.lines().len(), 2);
    }

    #[test]
    fn test_concurrent_writers_unique_markers() {
        let dir = tempdir().unwrap();
        let fhl = quiet_logger(dir.path(), Severity::Debug);
        let threads = 4;
        let per_thread = 100;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let fhl = fhl.clone();
                thread::spawn(move || {
                    for i in 0..per_thread {
                        fhl.errorf(format_args!("marker-{}-{}", t, i)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = read_lines(fhl.path());
        assert_eq!(lines.len(), threads * per_thread);
        for t in 0..threads {
            for i in 0..per_thread {
                let marker = format!("] marker-{}-{}", t, i);
                assert_eq!(lines.iter().filter(|l| l.ends_with(&marker)).count(), 1);
            }
        }
    }

    #[test]
    fn test_write_after_clear_fails_cleanly() {
        let dir = tempdir().unwrap();
        let fhl = quiet_logger(dir.path(), Severity::Info);
        fhl.info("before").unwrap();
        fhl.clear().unwrap();

        assert!(fhl.is_cleared());
        assert!(fhl.info("after").unwrap_err().is_cleared());
        assert!(fhl.thread_logger().info("after").unwrap_err().is_cleared());
        assert_eq!(read_lines(fhl.path()).len(), 1);
        fhl.clear().unwrap();
    }

    #[test]
    fn test_open_inaccessible_path() {
        let dir = tempdir().unwrap();
        let err = FileLogger::open(dir.path().join("nope").join("x.log"), false).unwrap_err();
        assert!(matches!(err, LogError::Open { .. }));
    }

    #[test]
    fn test_with_config_requires_file() {
        let err = FileLogger::with_config(&LoggerConfig::default()).unwrap_err();
        assert!(matches!(err, LogError::Config(_)));

        let dir = tempdir().unwrap();
        let config = LoggerConfig {
            level: Severity::Warn,
            file: Some(dir.path().join("cfg.log")),
            color: ColorMode::Never,
            console: false,
        };
        let fhl = FileLogger::with_config(&config).unwrap();
        fhl.info("dropped").unwrap();
        fhl.warn("kept").unwrap();
        assert_eq!(read_lines(fhl.path()).len(), 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_file_write_still_reaches_console() {
        let buf = SharedBuffer::default();
        let logger = ThreadLogger::builder()
            .color(ColorMode::Never)
            .writer(buf.clone())
            .build();
        // every write to /dev/full fails with ENOSPC
        let fhl = FileLogger::from_parts(logger, LogFile::open("/dev/full").unwrap());

        let err = fhl.error("disk full").unwrap_err();
        assert!(matches!(err, LogError::Write(_)), "{err}");
        let lines = buf.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("] disk full"));
    }

    #[test]
    fn test_clear_refuses_both_sinks() {
        let dir = tempdir().unwrap();
        let buf = SharedBuffer::default();
        let logger = ThreadLogger::builder()
            .color(ColorMode::Never)
            .writer(buf.clone())
            .build();
        let fhl = FileLogger::from_parts(logger, LogFile::open(dir.path().join("c.log")).unwrap());

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let fhl = fhl.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let _ = fhl.infof(format_args!("race-{}-{}", t, i));
                    }
                })
            })
            .collect();
        fhl.clear().unwrap();
        for writer in writers {
            writer.join().unwrap();
        }

        // every call that reached the console also reached the file
        assert_eq!(buf.lines(), read_lines(fhl.path()));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_clear_releases_file_handle() {
        let dir = tempdir().unwrap();
        let fhl = quiet_logger(dir.path(), Severity::Info);
        let path = fs::canonicalize(fhl.path()).unwrap();

        let open_handles = || {
            fs::read_dir("/proc/self/fd")
                .unwrap()
                .filter_map(|e| e.ok())
                .filter_map(|e| fs::read_link(e.path()).ok())
                .filter(|target| *target == path)
                .count()
        };

        assert_eq!(open_handles(), 1);
        fhl.clear().unwrap();
        assert_eq!(open_handles(), 0);
    }
}
