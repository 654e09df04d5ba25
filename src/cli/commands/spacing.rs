//! spacing command - List spacing size tokens

use anyhow::Result;

use super::render;
use crate::cli::args::ScopeArg;
use crate::cli::Context;
use crate::core::types::TokenCategory;

/// List spacing size tokens.
pub fn spacing(ctx: &Context, scope: Option<ScopeArg>, json: bool) -> Result<()> {
    let store = ctx.store()?;
    let scope = ctx.scope(scope);

    render::print_tokens(
        ctx,
        &store.spacing_sizes(scope),
        TokenCategory::Spacing,
        json,
        false,
    )
}
