//! Shared rendering for token list commands.

use anyhow::Result;
use serde_json::json;

use crate::cli::Context;
use crate::core::types::{Token, TokenCategory};
use crate::ui::output;

/// Print a token list as an aligned table, or as JSON with `--json`.
///
/// JSON output is always valid JSON, even for an empty list. Table
/// output prints a quiet-respecting notice instead of an empty table.
pub(super) fn print_tokens(
    ctx: &Context,
    tokens: &[Token],
    category: TokenCategory,
    json_output: bool,
    vars: bool,
) -> Result<()> {
    if json_output {
        let value = if vars {
            serde_json::Value::Array(
                tokens
                    .iter()
                    .map(|t| {
                        json!({
                            "slug": t.slug,
                            "value": t.value,
                            "name": t.name,
                            "origin": t.origin.as_str(),
                            "var": t.css_var(category),
                        })
                    })
                    .collect(),
            )
        } else {
            serde_json::to_value(tokens)?
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if tokens.is_empty() {
        output::print(
            format!("No {} tokens found.", category.label().to_lowercase()),
            ctx.verbosity,
        );
        return Ok(());
    }

    println!("{}", token_table(tokens, category, vars));
    Ok(())
}

fn token_table(tokens: &[Token], category: TokenCategory, vars: bool) -> String {
    let mut rows = Vec::with_capacity(tokens.len() + 1);

    let mut header = vec![
        "SLUG".to_string(),
        "VALUE".to_string(),
        "NAME".to_string(),
        "ORIGIN".to_string(),
    ];
    if vars {
        header.push("VAR".to_string());
    }
    rows.push(header);

    for token in tokens {
        let mut row = vec![
            token.slug.clone(),
            token.value.clone(),
            token.name.clone(),
            token.origin.as_str().to_string(),
        ];
        if vars {
            row.push(token.css_var(category));
        }
        rows.push(row);
    }

    output::format_table(&rows)
}
