//! Error type for annotation loading.
//!
//! Every failure of [`load_json_annotations`](crate::load_json_annotations) surfaces as a single
//! [`AnnotationLoadError`]. Callers that only need to skip or abort can rely on the `Display`
//! message; callers that want to branch can match on [`AnnotationLoadError::kind`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, AnnotationLoadError>;

/// Raised when an annotation file cannot be loaded or fails basic validation
#[derive(Error, Debug)]
pub enum AnnotationLoadError {
    #[error("File does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Could not read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {} at line {line}, column {column}: {message}", path.display())]
    InvalidJson {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected top-level JSON array in {}, got {found}", path.display())]
    UnexpectedTopLevel { path: PathBuf, found: &'static str },

    #[error(
        "Expected each item to be a JSON object in {}, but item {index} is {found}",
        path.display()
    )]
    UnexpectedItem { path: PathBuf, index: usize, found: &'static str },
}

/// Coarse cause of an [`AnnotationLoadError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    NotFound,
    NotAFile,
    Read,
    InvalidJson,
    UnexpectedTopLevel,
    UnexpectedItem,
}

impl AnnotationLoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::NotFound { .. } => LoadErrorKind::NotFound,
            Self::NotAFile { .. } => LoadErrorKind::NotAFile,
            Self::Read { .. } => LoadErrorKind::Read,
            Self::InvalidJson { .. } => LoadErrorKind::InvalidJson,
            Self::UnexpectedTopLevel { .. } => LoadErrorKind::UnexpectedTopLevel,
            Self::UnexpectedItem { .. } => LoadErrorKind::UnexpectedItem,
        }
    }

    /// Path the failed load was attempted on (after home expansion)
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::NotAFile { path }
            | Self::Read { path, .. }
            | Self::InvalidJson { path, .. }
            | Self::UnexpectedTopLevel { path, .. }
            | Self::UnexpectedItem { path, .. } => path,
        }
    }

    /// Wrap a `serde_json` syntax error, keeping its position separate from its message
    pub(crate) fn invalid_json(path: PathBuf, source: serde_json::Error) -> Self {
        let line = source.line();
        let column = source.column();
        let message = strip_position(&source.to_string(), line, column);
        Self::InvalidJson { path, line, column, message, source }
    }
}

/// `serde_json` appends " at line L column C" to its messages; the position is reported
/// separately, so drop the suffix to avoid printing it twice.
fn strip_position(message: &str, line: usize, column: usize) -> String {
    let suffix = format!(" at line {} column {}", line, column);
    message.strip_suffix(&suffix).unwrap_or(message).to_string()
}
