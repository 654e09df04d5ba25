//! source
//!
//! Where token documents come from.
//!
//! # Architecture
//!
//! Documents reach the store through the [`TokenSource`] trait, which has
//! two implementations:
//!
//! - [`FileSource`]: reads a JSON file from disk (what the CLI uses)
//! - [`StaticSource`]: serves an in-memory value (embedders and tests)
//!
//! Sources are handed to the store explicitly at construction; there is no
//! ambient discovery of documents. A store's optional secondary source is
//! just another `TokenSource`, so external settings can come from a file,
//! a literal value, or anything else that implements the trait.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use stylebook::source::{StaticSource, TokenSource};
//!
//! let source = StaticSource::new(json!({ "colors": ["#0000ff"] }));
//! let value = source.load()?;
//! assert_eq!(value["colors"][0], "#0000ff");
//! # Ok::<(), stylebook::source::SourceError>(())
//! ```

mod file;
mod memory;
mod traits;

pub use file::FileSource;
pub use memory::StaticSource;
pub use traits::{SourceError, TokenSource};
