//! Shared utilities: logging setup and timing helpers.

pub mod logger;
pub mod timer;

pub use logger::{env_directives, init_logger, LogLevel};
pub use timer::{format_duration, Timer};
