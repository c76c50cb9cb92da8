//! tslog Core
//!
//! A thread-safe leveled logger. Every call is timestamped, tagged with its
//! severity and call site, printed color-coded to stdout and optionally
//! appended to a log file:
//!
//! ```text
//! [warn - Jul 06 10:12:20 PM - main.rs:14] disk almost full
//! ```
//!
//! ## Handles
//!
//! - [`ThreadLogger`]: console logger, safe to share between threads
//! - [`FileLogger`]: a `ThreadLogger` that also appends to a file
//! - [`logging::global`]: optional process-wide default with an explicit
//!   `init`/`shutdown` lifecycle
//!
//! ```rust,ignore
//! use tslog_core::{new_file_logger, clear_file_logger, log_info, Severity};
//!
//! let fhl = new_file_logger("app.log", true)?;
//! fhl.info("service started")?;
//! log_info!(fhl, "listening on {}", addr)?;
//! fhl.thread_logger().warn("console only")?;
//! clear_file_logger(&fhl)?;
//! ```

pub mod colors;
pub mod config;
pub mod error;
pub mod level;
pub mod logging;

// Re-export commonly used types
pub use colors::{format_colored, print_colored, write_colored, Color, ColorMode};

pub use config::LoggerConfig;

pub use error::{LogError, LogResult};

pub use level::{LevelFilter, Severity};

pub use logging::{
    clear_file_logger, clear_thread_logger, new_file_logger, new_thread_logger,
    time_string, write_file_log,
    DefaultLogger, FileLogger, LogFile, Location, Logger, LoggerExt, NoOpLogger,
    SharedLogger, ThreadLogger,
};
