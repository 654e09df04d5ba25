//! source::memory
//!
//! In-memory token source.

use serde_json::{Map, Value};

use super::traits::{SourceError, TokenSource};

/// A token source serving a value held in memory.
///
/// This is the injection point for embedders that already have the
/// document as a value, and for tests that stub out loading.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use stylebook::source::{StaticSource, TokenSource};
///
/// let source = StaticSource::new(json!({ "settings": {} }));
/// assert_eq!(source.load().unwrap(), json!({ "settings": {} }));
/// ```
#[derive(Debug, Clone)]
pub struct StaticSource {
    value: Value,
}

impl StaticSource {
    /// Create a source serving the given value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Create a source serving an empty object.
    pub fn empty() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

impl TokenSource for StaticSource {
    fn load(&self) -> Result<Value, SourceError> {
        Ok(self.value.clone())
    }

    fn describe(&self) -> String {
        "in-memory value".to_string()
    }
}
