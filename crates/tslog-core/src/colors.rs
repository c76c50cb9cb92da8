//! ANSI color helpers for console output
//!
//! Codes are bold variants. Pass [`Color::Reset`] to return the terminal to
//! its normal style.

use std::io::{self, IsTerminal, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

pub const ANSI_COLOR_RED: &str = "\x1b[1;31m";
pub const ANSI_COLOR_SOFT_RED: &str = "\x1b[1;38;5;210m";
pub const ANSI_COLOR_GREEN: &str = "\x1b[1;32m";
pub const ANSI_COLOR_YELLOW: &str = "\x1b[1;33m";
pub const ANSI_COLOR_BLUE: &str = "\x1b[1;34m";
pub const ANSI_COLOR_MAGENTA: &str = "\x1b[1;35m";
pub const ANSI_COLOR_CYAN: &str = "\x1b[1;36m";
pub const ANSI_COLOR_RESET: &str = "\x1b[1;0m";

/// Console colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    SoftRed,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Reset,
}

impl Color {
    /// ANSI escape sequence for this color
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Color::Red => ANSI_COLOR_RED,
            Color::SoftRed => ANSI_COLOR_SOFT_RED,
            Color::Green => ANSI_COLOR_GREEN,
            Color::Yellow => ANSI_COLOR_YELLOW,
            Color::Blue => ANSI_COLOR_BLUE,
            Color::Magenta => ANSI_COLOR_MAGENTA,
            Color::Cyan => ANSI_COLOR_CYAN,
            Color::Reset => ANSI_COLOR_RESET,
        }
    }
}

/// Prefix `message` with the color's escape sequence
pub fn format_colored(color: Color, message: &str) -> String {
    let code = color.ansi_code();
    let mut out = String::with_capacity(code.len() + message.len());
    out.push_str(code);
    out.push_str(message);
    out
}

/// Write `message` wrapped in `color` and a reset, followed by a newline
///
/// The whole line goes out in a single `write_all`.
pub fn write_colored<W>(color: Color, writer: &mut W, message: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let line = format!("{}{}{}\n", color.ansi_code(), message, ANSI_COLOR_RESET);
    writer.write_all(line.as_bytes())
}

/// Print `message` to stdout in `color`
pub fn print_colored(color: Color, message: &str) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let _ = write_colored(color, &mut lock, message);
}

/// When console output should carry color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current stdout
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(ColorMode::Auto),
            "always" | "1" | "true" => Ok(ColorMode::Always),
            "never" | "0" | "false" => Ok(ColorMode::Never),
            other => Err(LogError::Config(format!("invalid color mode: {}", other))),
        }
    }
}
