//! Line layout shared by every sink
//!
//! A line looks like `[info - Jul 06 10:12:20 PM - main.rs:42] message`.

use std::fmt;

use chrono::{DateTime, Local};

use crate::level::Severity;

/// strftime layout of the timestamp, e.g. `Jul 06 10:12:20 PM`
pub const TIME_FORMAT: &str = "%b %d %r";

/// Call-site file and line of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self {
            file: strip_dirs(file),
            line,
        }
    }

    /// Location of the caller, following `#[track_caller]` frames
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn strip_dirs(path: &'static str) -> &'static str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Current local time formatted with [`TIME_FORMAT`]
pub fn time_string() -> String {
    format_time(&Local::now())
}

pub fn format_time(time: &DateTime<Local>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Build a complete line without trailing newline
pub fn format_line(
    severity: Severity,
    timestamp: &str,
    location: Location,
    message: &str,
) -> String {
    format!("[{} - {} - {}] {}", severity, timestamp, location, message)
}
