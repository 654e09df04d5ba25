//! core::document::external
//!
//! The secondary settings source: a small JSON blob contributing extra
//! colors and gradients maintained outside the token document.
//!
//! Expected shape:
//!
//! ```json
//! { "colors": ["#0000ff", "#ff8800"], "gradients": ["linear-gradient(...)"] }
//! ```
//!
//! Entries are positional, so tokens synthesized from them carry their
//! array index in the slug (`ext-color0`, `ext-gradient2`, ...). A skipped
//! entry still consumes its index, keeping slugs stable when an entry is
//! cleared rather than removed.

use serde_json::Value;

use crate::core::document::schema::scalar_string;
use crate::core::types::{Origin, Token, TokenCategory};

/// Parsed secondary settings.
///
/// Raw entries are kept as JSON values; synthesis decides per entry whether
/// it yields a token. Parsing never fails: missing or non-array fields
/// come back empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalSettings {
    pub colors: Vec<Value>,
    pub gradients: Vec<Value>,
}

impl ExternalSettings {
    /// Parse settings from their raw JSON value.
    pub fn from_value(root: &Value) -> Self {
        Self {
            colors: list(root, "colors"),
            gradients: list(root, "gradients"),
        }
    }

    /// Whether the settings contribute no entries at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.gradients.is_empty()
    }

    /// Synthesize color tokens from the `colors` entries.
    pub fn color_tokens(&self) -> Vec<Token> {
        synthesize(&self.colors, TokenCategory::Color)
    }

    /// Synthesize gradient tokens from the `gradients` entries.
    pub fn gradient_tokens(&self) -> Vec<Token> {
        synthesize(&self.gradients, TokenCategory::Gradient)
    }
}

fn list(root: &Value, key: &str) -> Vec<Value> {
    root.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Turn positional entries into tokens: scalar entries become tokens named
/// and slugged by index, empty strings and non-scalars are skipped.
fn synthesize(entries: &[Value], category: TokenCategory) -> Vec<Token> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let value = scalar_string(entry).filter(|v| !v.is_empty())?;
            Some(Token::new(
                format!("ext-{}{}", category.as_str(), index),
                value,
                Some(format!("External {} {}", category.label(), index)),
                Origin::External,
            ))
        })
        .collect()
}
