use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not read products from {path}: {source}")]
    ProductsFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid product at index {index}: {reason}")]
    InvalidProduct { index: usize, reason: String },

    #[error("could not start logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, AppError>;
