//! source::file
//!
//! File-backed token source.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::traits::{SourceError, TokenSource};

/// A token source reading a JSON file from disk.
///
/// The file is read on every [`TokenSource::load`] call; callers that want
/// caching get it from the store, not from the source.
///
/// # Example
///
/// ```no_run
/// use stylebook::source::{FileSource, TokenSource};
///
/// let source = FileSource::new("theme.json");
/// let value = source.load()?;
/// # Ok::<(), stylebook::source::SourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenSource for FileSource {
    fn load(&self) -> Result<Value, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|err| SourceError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
