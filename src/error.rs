use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Io,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Wrong file extension, expected .csv: {}", .0.display())]
    WrongExtension(PathBuf),

    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("Invalid CSV header, expected: {expected}")]
    InvalidHeader { expected: &'static str },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Io(_) => ErrorKind::Io,
            AppError::Json(e) if e.is_io() => ErrorKind::Io,
            _ => ErrorKind::Validation,
        }
    }
}

/// Why a single CSV row was rejected. Never fatal for the whole file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("column {column}: not a number: {value:?}")]
    InvalidNumber { column: &'static str, value: String },

    #[error("column {column}: unrecognised value: {value:?}")]
    InvalidValue { column: &'static str, value: String },

    #[error("{0}")]
    Validation(String),

    #[error("unterminated quoted field at end of input")]
    UnterminatedQuote,

    #[error("row is not valid UTF-8")]
    InvalidEncoding,
}

pub type Result<T> = std::result::Result<T, AppError>;
