//! typography command - List font size and font family tokens

use anyhow::Result;
use serde_json::Value;

use super::render;
use crate::cli::args::ScopeArg;
use crate::cli::Context;
use crate::core::types::TokenCategory;

/// List typography tokens, optionally restricted to one group.
pub fn typography(
    ctx: &Context,
    sizes: bool,
    families: bool,
    scope: Option<ScopeArg>,
    json: bool,
) -> Result<()> {
    let store = ctx.store()?;
    let scope = ctx.scope(scope);

    let show_sizes = sizes || !families;
    let show_families = families || !sizes;

    if json {
        let mut object = serde_json::Map::new();
        if show_sizes {
            object.insert("fontSizes".to_string(), serde_json::to_value(store.font_sizes(scope))?);
        }
        if show_families {
            object.insert(
                "fontFamilies".to_string(),
                serde_json::to_value(store.font_families(scope))?,
            );
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(object))?);
        return Ok(());
    }

    let both = show_sizes && show_families;
    if show_sizes {
        if both {
            println!("Font sizes:");
        }
        render::print_tokens(ctx, &store.font_sizes(scope), TokenCategory::FontSize, false, false)?;
    }
    if show_families {
        if both {
            println!();
            println!("Font families:");
        }
        render::print_tokens(
            ctx,
            &store.font_families(scope),
            TokenCategory::FontFamily,
            false,
            false,
        )?;
    }

    Ok(())
}
