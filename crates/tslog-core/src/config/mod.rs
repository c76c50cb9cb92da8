//! Logger configuration
//!
//! Sources, later ones overriding earlier ones:
//! - built-in defaults (`info`, console on, automatic color)
//! - a YAML file (user level: `~/.config/tslog/config.yaml`)
//! - `TSLOG_*` environment variables

mod env;
mod file;

pub use env::{ENV_COLOR, ENV_DEBUG, ENV_FILE, ENV_LEVEL};
pub use file::LoggerConfig;
