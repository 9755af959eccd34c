use thiserror::Error;

/// Errors that can occur while loading or scanning a source artifact.
///
/// A query that finds nothing is not an error; it yields an empty result.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input unavailable: {message} (path: {path})")]
    InputUnavailable { message: String, path: String },

    #[error("invalid pattern: {message} (pattern: {pattern})")]
    InvalidPattern { message: String, pattern: String },

    #[error("invalid search term: {message}")]
    InvalidTerm { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `ScanError`.
pub type Result<T> = std::result::Result<T, ScanError>;
