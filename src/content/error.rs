//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported content format: {0:?}")]
    UnsupportedFormat(PathBuf),
}

impl ContentError {
    pub(crate) fn parse(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        ContentError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
