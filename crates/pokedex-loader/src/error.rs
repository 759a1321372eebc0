//! Error types for pokedex-loader

use std::path::PathBuf;
use thiserror::Error;

/// Dataset loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Invalid schema: {0}")]
    InvalidSchema(#[from] pokedex_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
