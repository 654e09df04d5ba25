//! custom command - Show the custom properties tree

use anyhow::Result;
use serde_json::Value;

use crate::cli::Context;

/// Show the custom properties tree, optionally narrowed to one section.
///
/// Output is always JSON; the tree is free-form so there is no table
/// shape for it.
pub fn custom(ctx: &Context, section: Option<&str>, compact: bool) -> Result<()> {
    let store = ctx.store()?;
    let tree = Value::Object(store.custom_properties(section));

    if compact {
        println!("{}", serde_json::to_string(&tree)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    }

    Ok(())
}
