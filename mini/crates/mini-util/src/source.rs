//! Source units.
//!
//! A [`SourceText`] pairs the text to scan with the name it came from.
//! Once built it never changes; the lexer only ever borrows it.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{SourceError, SourceResult};

/// A named, immutable piece of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    name: String,
    content: String,
}

impl SourceText {
    /// Creates a source unit from in-memory text.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Reads the file at `path` into a source unit named after the path.
    ///
    /// The whole file is read before anything is returned. Bytes are decoded
    /// as UTF-8; malformed sequences become U+FFFD rather than failing the
    /// load.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] carrying the path if the file cannot be
    /// read.
    pub fn load(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();

        let bytes = fs::read(path).map_err(|source| SourceError::Io {
            name: name.clone(),
            source,
        })?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(err) => {
                warn!(file = %name, "invalid UTF-8, replacing malformed sequences");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        debug!(file = %name, bytes = content.len(), "loaded source");
        Ok(Self { name, content })
    }

    /// The name this source was created with, usually a file path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full text of the source.
    pub fn content(&self) -> &str {
        &self.content
    }
}
