//! core
//!
//! Core domain types, schemas, and operations for Stylebook.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Origin, Scope, TokenCategory, Token, etc.
//! - [`document`] - Token document model and origin flattening
//! - [`store`] - Cached token store over pluggable sources
//! - [`snapshot`] - Versioned snapshot envelope with fingerprinting
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict where we write, lenient where we read
//! - Malformed input degrades to empty results, never panics

pub mod config;
pub mod document;
pub mod snapshot;
pub mod store;
pub mod types;
