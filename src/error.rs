/// Error types for deck generation.
use std::path::PathBuf;
use thiserror::Error;

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Error types for deck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    /// The output file could not be created or written
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ZIP archive assembly error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),
}

impl DeckError {
    /// Wrap an IO error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeckError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<std::fmt::Error> for DeckError {
    fn from(err: std::fmt::Error) -> Self {
        DeckError::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::Zip(err.to_string())
    }
}
