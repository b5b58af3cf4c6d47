//! Append-only text logging, one timestamped line per call.
//!
//! Each call opens the target file in append mode, writes a single
//! `[DD-MM-YYYY HH:MM:SS]\t<level>\t<message>\n` line and closes it again.
//! No handle is kept between calls and no locking is done, so concurrent
//! writers to the same path must coordinate on their own.

use crate::error::{LogError, LogResult};
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "[%d-%m-%Y %H:%M:%S]";

/// How tabs, newlines and backslashes inside `level` and `message` are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlChars {
    /// Write the text verbatim. A message with a newline spans several lines.
    #[default]
    Preserve,
    /// Escape `\`, tab, CR and LF so every entry is exactly one line of three fields.
    Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineOptions {
    pub control_chars: ControlChars,
}

impl LineOptions {
    /// Options that escape control characters instead of writing them verbatim.
    pub fn escaped() -> Self {
        Self {
            control_chars: ControlChars::Escape,
        }
    }
}

/// Format `time` as `[DD-MM-YYYY HH:MM:SS]`.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time as `[DD-MM-YYYY HH:MM:SS]`.
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Decode a UTF-16 message for writing as UTF-8.
///
/// Unpaired surrogates become U+FFFD; decoding never fails.
pub fn transcode_wide(message: &[u16]) -> String {
    String::from_utf16_lossy(message)
}

fn escape_control(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Build a complete log line, trailing newline included.
pub fn format_line(timestamp: &str, level: &str, message: &str, options: &LineOptions) -> String {
    match options.control_chars {
        ControlChars::Preserve => format!("{}\t{}\t{}\n", timestamp, level, message),
        ControlChars::Escape => format!(
            "{}\t{}\t{}\n",
            timestamp,
            escape_control(level),
            escape_control(message)
        ),
    }
}

fn append_line(path: &Path, line: &str) -> LogResult<()> {
    // Parent directories are never created: a missing directory is an open failure.
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(line.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| LogError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Append one timestamped line to `path`, writing the message verbatim.
pub fn log(path: impl AsRef<Path>, level: &str, message: &str) -> LogResult<()> {
    log_with(path, level, message, &LineOptions::default())
}

/// Append one timestamped line to `path` using the given control-character policy.
pub fn log_with(
    path: impl AsRef<Path>,
    level: &str,
    message: &str,
    options: &LineOptions,
) -> LogResult<()> {
    let line = format_line(&current_timestamp(), level, message, options);
    append_line(path.as_ref(), &line)
}

/// Append one timestamped line whose message arrives as UTF-16.
pub fn log_wide(path: impl AsRef<Path>, level: &str, message: &[u16]) -> LogResult<()> {
    log_wide_with(path, level, message, &LineOptions::default())
}

/// Append one timestamped UTF-16 message using the given control-character policy.
pub fn log_wide_with(
    path: impl AsRef<Path>,
    level: &str,
    message: &[u16],
    options: &LineOptions,
) -> LogResult<()> {
    log_with(path, level, &transcode_wide(message), options)
}
