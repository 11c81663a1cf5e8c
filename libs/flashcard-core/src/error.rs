//! Error types for flashcard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while reading flashcard JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("input is not valid UTF-8")]
    NotUtf8,

    #[error("expected an array of flashcards, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record {index} is not an object (found {found})")]
    RecordNotObject { index: usize, found: &'static str },

    #[error("record {index} has an unsupported value for \"{field}\" ({found})")]
    UnsupportedValue {
        index: usize,
        field: &'static str,
        found: &'static str,
    },
}

/// Failure category reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    InvalidFormat,
    UnexpectedError,
}

impl ErrorKind {
    /// Process exit code for this kind of failure.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::FileNotFound => 66,
            Self::InvalidFormat => 65,
            Self::UnexpectedError => 1,
        }
    }
}

/// Errors that can occur during a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    InvalidFormat(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::Io(_) | Self::Csv(_) => ErrorKind::UnexpectedError,
        }
    }
}
