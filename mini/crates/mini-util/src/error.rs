//! Error types for the mini-util crate.

use thiserror::Error;

/// Error type for loading source units.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The named resource could not be read.
    #[error("can't read {name}")]
    Io {
        /// Name of the resource, as it was requested.
        name: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Returns the name of the resource this error is about.
    pub fn name(&self) -> &str {
        match self {
            SourceError::Io { name, .. } => name,
        }
    }
}

/// Result type alias for source loading operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
