//! Errors raised while loading a single content item

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("entry document not found: {0:?}")]
    MissingEntry(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("invalid front matter field `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("gallery index {path:?}: {message}")]
    Gallery { path: PathBuf, message: String },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
