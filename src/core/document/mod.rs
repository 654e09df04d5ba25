//! core::document
//!
//! Parsed token documents and the secondary settings blob.
//!
//! # Modules
//!
//! - [`schema`] - Source tree shapes: records, preset collections, documents
//! - [`external`] - Secondary settings source and token synthesis
//!
//! # Design
//!
//! - Shape classification happens once, at parse time
//! - Parsing is lenient and never fails; malformed data degrades to empty
//! - Document order is preserved wherever it is meaningful (origin groups,
//!   custom property trees, positional external entries)
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use stylebook::core::document::Document;
//! use stylebook::core::types::OriginFilter;
//!
//! let doc = Document::from_value(&json!({
//!     "settings": {
//!         "color": {
//!             "palette": {
//!                 "theme": [{ "slug": "blue", "color": "#0000ff" }]
//!             }
//!         }
//!     }
//! }));
//!
//! let flat = doc.palette.flatten(OriginFilter::All);
//! assert_eq!(flat.len(), 1);
//! ```

pub mod external;
pub mod schema;

// Re-export commonly used types
pub use external::ExternalSettings;
pub use schema::{Document, LayoutSettings, PresetData, RawToken};
