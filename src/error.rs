use serde::Serialize;
use thiserror::Error;

use crate::token::WildcardKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Destination template requires {wanted} {kind} wildcard(s) but the source glob only captures {available}"
    )]
    WildcardCountMismatch {
        kind: WildcardKind,
        wanted: usize,
        available: usize,
    },

    #[error("Destination already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Rename {from} -> {to} failed: {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} of {} rename attempt(s) failed", .0.len(), .1)]
    Batch(Vec<AttemptFailure>, usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "INVALID_ARGUMENT",
            Error::WildcardCountMismatch { .. } => "WILDCARD_COUNT_MISMATCH",
            Error::AlreadyExists { .. } => "ALREADY_EXISTS",
            Error::Rename { .. } => "RENAME_FAILED",
            Error::Pattern(_) => "PATTERN_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Batch(..) => "BATCH_FAILED",
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// One failed attempt out of a batch. Successful attempts in the same
/// batch are never undone; this only reports what went wrong.
#[derive(Debug, Serialize)]
pub struct AttemptFailure {
    pub index: usize,
    pub old_name: String,
    pub new_name: String,
    pub code: &'static str,
    pub message: String,
}

impl AttemptFailure {
    pub fn new(index: usize, old_name: &str, new_name: &str, error: &Error) -> Self {
        Self {
            index,
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            code: error.code(),
            message: error.to_string(),
        }
    }
}
