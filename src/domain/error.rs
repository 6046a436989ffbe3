use std::io;

use thiserror::Error;

/// Library-wide error type for madlibs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The data file does not exist at the expected path.
    #[error("ERROR: {path} file not found.")]
    DataFileNotFound { path: String },

    /// The data file exists but is not a valid template collection.
    #[error("ERROR: {path} is not a valid mad-libs file: {detail}")]
    DataFileMalformed { path: String, detail: String },

    /// Console input ended while a selection was still required.
    #[error("Input stream closed before a selection was made")]
    InputClosed,
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers branching on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DataFileNotFound { .. } => io::ErrorKind::NotFound,
            AppError::DataFileMalformed { .. } => io::ErrorKind::InvalidData,
            AppError::InputClosed => io::ErrorKind::UnexpectedEof,
        }
    }
}
