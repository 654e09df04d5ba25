//! shadows command - List shadow presets

use anyhow::Result;

use super::render;
use crate::cli::args::ScopeArg;
use crate::cli::Context;
use crate::core::types::TokenCategory;

/// List shadow tokens.
pub fn shadows(ctx: &Context, scope: Option<ScopeArg>, json: bool) -> Result<()> {
    let store = ctx.store()?;
    let scope = ctx.scope(scope);

    render::print_tokens(ctx, &store.shadows(scope), TokenCategory::Shadow, json, false)
}
