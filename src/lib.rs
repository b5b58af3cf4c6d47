//! Minimal synchronous file-append logger.
//!
//! ```no_run
//! linelog::log("/tmp/app.log", "ERROR", "disk full")?;
//! # Ok::<(), linelog::LogError>(())
//! ```

pub mod error;
pub mod line_logger;

pub use error::{LogError, LogResult};
pub use line_logger::{
    current_timestamp, format_line, format_timestamp, log, log_wide, log_wide_with, log_with,
    transcode_wide, ControlChars, LineOptions,
};
