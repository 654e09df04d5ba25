//! colors and gradients commands - List origin-merged palette tokens

use anyhow::Result;

use super::render;
use crate::cli::args::ScopeArg;
use crate::cli::Context;
use crate::core::store::{self, TokenStore};
use crate::core::types::{Scope, Token, TokenCategory};
use crate::ui::output;

/// List color tokens.
pub fn colors(
    ctx: &Context,
    scope: Option<ScopeArg>,
    json: bool,
    vars: bool,
    effective: bool,
) -> Result<()> {
    palette(
        ctx,
        TokenCategory::Color,
        TokenStore::colors,
        scope,
        json,
        vars,
        effective,
    )
}

/// List gradient tokens.
pub fn gradients(
    ctx: &Context,
    scope: Option<ScopeArg>,
    json: bool,
    vars: bool,
    effective: bool,
) -> Result<()> {
    palette(
        ctx,
        TokenCategory::Gradient,
        TokenStore::gradients,
        scope,
        json,
        vars,
        effective,
    )
}

fn palette(
    ctx: &Context,
    category: TokenCategory,
    fetch: fn(&TokenStore, Scope) -> Vec<Token>,
    scope: Option<ScopeArg>,
    json: bool,
    vars: bool,
    effective: bool,
) -> Result<()> {
    let store = ctx.store()?;
    let scope = ctx.scope(scope);

    if scope == Scope::External && !store.has_secondary() {
        output::warn(
            "scope 'external' yields no tokens without a settings document (--settings)",
            ctx.verbosity,
        );
    }

    let mut tokens = fetch(&store, scope);
    if effective {
        tokens = store::effective_tokens(tokens);
    }

    render::print_tokens(ctx, &tokens, category, json, vars)
}
