//! Error type for line logging.
//!
//! Every failure is returned to the caller; nothing here panics or aborts.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    /// The log file could not be opened or created for append.
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The line could not be written or flushed.
    #[error("failed to write to log file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Path of the log file the failed call targeted.
    pub fn path(&self) -> &Path {
        match self {
            LogError::Open { path, .. } | LogError::Write { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            LogError::Open { source, .. } | LogError::Write { source, .. } => source.kind(),
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_display_includes_path() {
        let err = LogError::Open {
            path: PathBuf::from("/missing/app.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };

        let text = err.to_string();
        assert!(text.contains("/missing/app.log"), "unexpected message: {}", text);
        assert!(text.starts_with("failed to open"));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.path(), Path::new("/missing/app.log"));
    }

    #[test]
    fn test_write_error_exposes_source() {
        use std::error::Error as _;

        let err = LogError::Write {
            path: PathBuf::from("app.log"),
            source: io::Error::new(io::ErrorKind::Other, "device full"),
        };

        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("device full".to_string())
        );
    }
}
