use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while linting a marketplace.
///
/// Validators never return these; they record failed checks instead. An error
/// only escapes when the run itself cannot start (e.g. an unreadable root).
#[derive(Error, Debug)]
pub enum LintError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The repository root is missing or not a directory.
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
}

/// Convenience alias for `Result<T, LintError>`.
pub type Result<T> = std::result::Result<T, LintError>;
