//! Loggers, sinks and dispatch

mod traits;
mod noop;
pub mod format;
pub mod sink;
pub mod thread_logger;
pub mod file_logger;
pub mod global;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;

pub use format::{time_string, Location, TIME_FORMAT};
pub use sink::{write_file_log, LogFile};
pub use thread_logger::{
    clear_thread_logger, log_fn, log_fnf, new_thread_logger, LogFn, LogFnF, ThreadLogger,
    ThreadLoggerBuilder,
};
pub use file_logger::{clear_file_logger, new_file_logger, FileLogger};
pub use global::{
    default_logger, init, init_from_env, init_with, is_initialized, log, logf, shutdown,
    DefaultLogger,
};
