use thiserror::Error;

/// Errors raised by the path codecs and keyword parsers.
///
/// Arc commands and degenerate fits are not errors: arcs are skipped with
/// a logged warning, zero extents are fitted 1:1.
#[derive(Error, Debug)]
pub enum PathError {
    /// Malformed SVG path data. `index` is the offending token's position.
    #[error("invalid path syntax at token {index}: {reason}")]
    InvalidPathSyntax { index: usize, reason: String },

    #[error("path data exceeds the limit of {limit} {what}")]
    LimitExceeded { what: &'static str, limit: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid path document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("non-finite or out-of-range coordinate in path document")]
    NonFinite,
}

impl PathError {
    /// Stable machine-readable code, used by the JS bindings.
    pub fn code(&self) -> &'static str {
        match self {
            PathError::InvalidPathSyntax { .. } => "invalid_syntax",
            PathError::LimitExceeded { .. } => "limit_exceeded",
            PathError::InvalidArgument(_) => "invalid_argument",
            PathError::Json(_) => "json_parse",
            PathError::NonFinite => "non_finite",
        }
    }

    pub(crate) fn syntax(index: usize, reason: impl Into<String>) -> Self {
        PathError::InvalidPathSyntax { index, reason: reason.into() }
    }
}
