//! Errors raised outside the session engine: config files, bundled word data,
//! and directory resolution. The engine itself never fails.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file malformed: {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Word list unavailable: {0}")]
    Language(String),

    #[error("No home or config directory could be resolved")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, Error>;
