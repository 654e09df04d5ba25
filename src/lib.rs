//! Stylebook - Query design tokens from theme documents
//!
//! Stylebook normalizes nested theme documents into flat, typed token
//! lists: colors, gradients, typography, spacing, shadows, border radii
//! and free-form custom properties, each tagged with the origin group
//! it came from.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, formats output)
//! - [`core`] - Domain types, document model, token store, snapshots
//! - [`source`] - Pluggable document sources (file, in-memory)
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Stylebook maintains the following invariants:
//!
//! 1. Queries never panic on malformed input; they degrade to empty results
//! 2. Origin groups merge in a fixed priority order, then document order
//! 3. Each source is read at most once until the cache is cleared
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use stylebook::core::store::TokenStore;
//! use stylebook::core::types::Scope;
//!
//! let store = TokenStore::from_value(json!({
//!     "settings": {
//!         "color": {
//!             "palette": {
//!                 "theme": [{ "slug": "blue", "color": "#0000ff" }]
//!             }
//!         }
//!     }
//! }));
//!
//! let colors = store.colors(Scope::ThemeOnly);
//! assert_eq!(colors[0].slug, "blue");
//! assert_eq!(colors[0].name, "Blue");
//! ```

pub mod cli;
pub mod core;
pub mod source;
pub mod ui;
