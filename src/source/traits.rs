//! source::traits
//!
//! Token source trait definition.
//!
//! # Design
//!
//! A [`TokenSource`] produces the raw JSON for one document. The store is
//! handed its sources at construction time; nothing in the core probes the
//! environment for where data might live. Loading is the only fallible
//! step in the pipeline: once a value is produced, parsing and queries
//! degrade instead of failing.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Errors from loading a token source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying data could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The data was read but is not valid JSON.
    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// A provider of raw document JSON.
///
/// Implementations should be cheap to call repeatedly; the store caches
/// the parsed result and only calls [`TokenSource::load`] again after its
/// cache is cleared.
pub trait TokenSource {
    /// Load the raw JSON value from the underlying source.
    fn load(&self) -> Result<Value, SourceError>;

    /// A human-readable description of where the data comes from, for
    /// diagnostics.
    fn describe(&self) -> String;
}
