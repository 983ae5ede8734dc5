// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DimrankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, DimrankError>;

// Allow `?` on std::io::Error by converting to DimrankError::Io with unknown path.
impl From<std::io::Error> for DimrankError {
    fn from(source: std::io::Error) -> Self {
        DimrankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl DimrankError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DimrankError::Io {
            source,
            path: path.into(),
        }
    }
}
