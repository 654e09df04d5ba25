//! radii command - Show the border radius map

use anyhow::Result;
use serde_json::Value;

use crate::cli::Context;
use crate::ui::output;

/// Show border radius values from the custom properties tree.
pub fn radii(ctx: &Context, json: bool) -> Result<()> {
    let store = ctx.store()?;
    let radii = store.border_radii();

    if json {
        println!("{}", serde_json::to_string_pretty(&Value::Object(radii))?);
        return Ok(());
    }

    if radii.is_empty() {
        output::print("No border radius values found.", ctx.verbosity);
        return Ok(());
    }

    let mut rows = vec![vec!["KEY".to_string(), "VALUE".to_string()]];
    for (key, value) in &radii {
        rows.push(vec![key.clone(), radius_display(value)]);
    }
    println!("{}", output::format_table(&rows));

    Ok(())
}

/// Strings print bare; anything else prints as compact JSON.
fn radius_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
