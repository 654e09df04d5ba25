//! core::snapshot
//!
//! The all-tokens snapshot envelope.
//!
//! # Schema Design
//!
//! Snapshots are meant to be piped to files and diffed between runs, so
//! the envelope is self-describing:
//!
//! - `kind` and `schemaVersion` identify the artifact
//! - `generatedAt` records when it was taken
//! - `fingerprint` hashes the content, so "did anything change" is a
//!   string comparison rather than a deep diff
//!
//! Parsing a snapshot back is strict: unknown fields are rejected and the
//! kind and version are checked before the full structure is read.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use stylebook::core::snapshot::{parse_snapshot, SNAPSHOT_KIND};
//! use stylebook::core::store::TokenStore;
//! use stylebook::core::types::Scope;
//!
//! let store = TokenStore::from_value(json!({
//!     "settings": {
//!         "color": {
//!             "palette": { "theme": [{ "slug": "blue", "color": "#00f" }] }
//!         }
//!     }
//! }));
//!
//! let snapshot = store.snapshot(Scope::All);
//! assert_eq!(snapshot.kind, SNAPSHOT_KIND);
//!
//! let json = serde_json::to_string(&snapshot).unwrap();
//! let parsed = parse_snapshot(&json).unwrap();
//! assert_eq!(parsed.colors.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::document::LayoutSettings;
use crate::core::store::TokenStore;
use crate::core::types::{Fingerprint, Scope, Token, UtcTimestamp};

/// The kind identifier for token snapshots.
pub const SNAPSHOT_KIND: &str = "stylebook.token-snapshot";

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from reading a snapshot back.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to parse snapshot: {0}")]
    ParseError(String),

    #[error("invalid kind '{found}', expected '{}'", SNAPSHOT_KIND)]
    InvalidKind { found: String },

    #[error("unsupported schema version {0}, supported: {SNAPSHOT_VERSION}")]
    UnsupportedVersion(u32),
}

/// Envelope for version dispatch before full parsing.
#[derive(Debug, Deserialize)]
struct SnapshotEnvelope {
    kind: String,
    #[serde(rename = "schemaVersion")]
    schema_version: u32,
}

/// Parse snapshot JSON with kind and version checks.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, the `kind` field is not
/// [`SNAPSHOT_KIND`], or the `schemaVersion` is unsupported.
pub fn parse_snapshot(json: &str) -> Result<TokenSnapshot, SnapshotError> {
    let envelope: SnapshotEnvelope =
        serde_json::from_str(json).map_err(|e| SnapshotError::ParseError(e.to_string()))?;

    if envelope.kind != SNAPSHOT_KIND {
        return Err(SnapshotError::InvalidKind {
            found: envelope.kind,
        });
    }

    match envelope.schema_version {
        1 => serde_json::from_str(json).map_err(|e| SnapshotError::ParseError(e.to_string())),
        v => Err(SnapshotError::UnsupportedVersion(v)),
    }
}

/// Every query result at one point in time.
///
/// Field names follow the document's camelCase convention so exports sit
/// naturally next to the documents they describe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenSnapshot {
    /// Kind identifier (always "stylebook.token-snapshot")
    pub kind: String,

    /// Schema version (always 1 for this struct)
    pub schema_version: u32,

    /// When the snapshot was taken
    pub generated_at: UtcTimestamp,

    /// Content hash; equal content in equal order hashes equal
    pub fingerprint: Fingerprint,

    /// The scope the queries ran under
    pub scope: Scope,

    pub colors: Vec<Token>,
    pub gradients: Vec<Token>,
    pub font_sizes: Vec<Token>,
    pub font_families: Vec<Token>,
    pub spacing: Vec<Token>,
    pub shadows: Vec<Token>,
    pub border_radius: Map<String, Value>,
    pub custom: Map<String, Value>,
    pub layout: LayoutSettings,
}

impl TokenSnapshot {
    /// Run every query against the store and wrap the results.
    pub(crate) fn capture(store: &TokenStore, scope: Scope) -> Self {
        let colors = store.colors(scope);
        let gradients = store.gradients(scope);
        let font_sizes = store.font_sizes(scope);
        let font_families = store.font_families(scope);
        let spacing = store.spacing_sizes(scope);
        let shadows = store.shadows(scope);
        let border_radius = store.border_radii();
        let custom = store.custom_properties(None);
        let layout = store.layout();

        let fingerprint = fingerprint_of(
            scope,
            &[
                ("colors", &colors),
                ("gradients", &gradients),
                ("fontSizes", &font_sizes),
                ("fontFamilies", &font_families),
                ("spacing", &spacing),
                ("shadows", &shadows),
            ],
            &border_radius,
            &custom,
            &layout,
        );

        Self {
            kind: SNAPSHOT_KIND.to_string(),
            schema_version: SNAPSHOT_VERSION,
            generated_at: UtcTimestamp::now(),
            fingerprint,
            scope,
            colors,
            gradients,
            font_sizes,
            font_families,
            spacing,
            shadows,
            border_radius,
            custom,
            layout,
        }
    }
}

/// Hash the snapshot content, label by label, token by token.
///
/// The timestamp is deliberately excluded: two captures of identical
/// content must fingerprint identically.
fn fingerprint_of(
    scope: Scope,
    categories: &[(&str, &[Token])],
    border_radius: &Map<String, Value>,
    custom: &Map<String, Value>,
    layout: &LayoutSettings,
) -> Fingerprint {
    let mut chunks: Vec<String> = Vec::new();
    chunks.push(format!("scope\0{scope}"));
    for (label, tokens) in categories {
        chunks.push(format!("[{label}]"));
        for token in *tokens {
            chunks.push(format!(
                "{}\0{}\0{}\0{}",
                token.slug, token.value, token.name, token.origin
            ));
        }
    }
    chunks.push("[borderRadius]".to_string());
    chunks.push(Value::Object(border_radius.clone()).to_string());
    chunks.push("[custom]".to_string());
    chunks.push(Value::Object(custom.clone()).to_string());
    chunks.push("[layout]".to_string());
    chunks.push(format!(
        "{}\0{}",
        layout.content_size.as_deref().unwrap_or(""),
        layout.wide_size.as_deref().unwrap_or("")
    ));
    Fingerprint::compute(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_store() -> TokenStore {
        TokenStore::from_value(json!({
            "settings": {
                "color": {
                    "palette": {
                        "theme": [{ "slug": "blue", "color": "#0000ff" }],
                        "default": [{ "slug": "blue", "color": "#aaaaaa" }]
                    }
                },
                "custom": { "borderRadius": { "small": "4px" } },
                "layout": { "contentSize": "840px" }
            }
        }))
    }

    #[test]
    fn capture_fills_the_envelope() {
        let snapshot = sample_store().snapshot(Scope::All);
        assert_eq!(snapshot.kind, SNAPSHOT_KIND);
        assert_eq!(snapshot.schema_version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.scope, Scope::All);
        assert!(!snapshot.fingerprint.as_str().is_empty());
        assert_eq!(snapshot.colors.len(), 2);
        assert_eq!(snapshot.border_radius["small"], json!("4px"));
        assert_eq!(snapshot.layout.content_size.as_deref(), Some("840px"));
    }

    #[test]
    fn serializes_camel_case_keys() {
        let snapshot = sample_store().snapshot(Scope::ThemeOnly);
        let value = serde_json::to_value(&snapshot).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "kind",
            "schemaVersion",
            "generatedAt",
            "fingerprint",
            "scope",
            "fontSizes",
            "fontFamilies",
            "borderRadius",
        ] {
            assert!(obj.contains_key(key), "missing key: {key}");
        }
    }

    #[test]
    fn parse_roundtrip() {
        let snapshot = sample_store().snapshot(Scope::All);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed = parse_snapshot(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn parse_rejects_wrong_kind() {
        let json = r#"{ "kind": "other.artifact", "schemaVersion": 1 }"#;
        match parse_snapshot(json) {
            Err(SnapshotError::InvalidKind { found }) => assert_eq!(found, "other.artifact"),
            other => panic!("expected invalid kind, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_unsupported_version() {
        let json = r#"{ "kind": "stylebook.token-snapshot", "schemaVersion": 99 }"#;
        match parse_snapshot(json) {
            Err(SnapshotError::UnsupportedVersion(v)) => assert_eq!(v, 99),
            other => panic!("expected unsupported version, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse_snapshot("{ nope"),
            Err(SnapshotError::ParseError(_))
        ));
    }

    #[test]
    fn same_content_same_fingerprint() {
        let first = sample_store().snapshot(Scope::All);
        let second = sample_store().snapshot(Scope::All);
        assert_eq!(first.fingerprint, second.fingerprint);
    }

    #[test]
    fn different_content_different_fingerprint() {
        let first = sample_store().snapshot(Scope::All);
        let second = TokenStore::from_value(json!({
            "settings": {
                "color": {
                    "palette": { "theme": [{ "slug": "blue", "color": "#0000fe" }] }
                }
            }
        }))
        .snapshot(Scope::All);
        assert_ne!(first.fingerprint, second.fingerprint);
    }

    #[test]
    fn scope_is_part_of_the_identity() {
        let store = TokenStore::from_value(json!({}));
        let all = store.snapshot(Scope::All);
        let theme = store.snapshot(Scope::ThemeOnly);
        // Both are empty, but they answer different questions.
        assert_ne!(all.fingerprint, theme.fingerprint);
    }
}
