use std::path::PathBuf;
use thiserror::Error;

/// Errors that can arise while loading game data documents.
#[derive(Debug, Error)]
pub enum DataError {
    /// The document could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the record shape.
    /// There is no partial decode: one bad record fails the whole document.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory decode failure (no backing file).
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DataError {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DataError::Io { path, .. } | DataError::Parse { path, .. } => Some(path),
            DataError::Decode(_) => None,
        }
    }
}
