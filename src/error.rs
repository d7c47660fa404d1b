use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        RegistryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        RegistryError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::Validation(err) => err.code(),
            RegistryError::Io { .. } => "io-failure",
            RegistryError::Json { .. } => "parse-failure",
        }
    }
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
