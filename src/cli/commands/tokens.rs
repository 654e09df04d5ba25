//! tokens command - Emit a full token snapshot

use anyhow::Result;

use crate::cli::args::ScopeArg;
use crate::cli::Context;
use crate::core::types::Scope;
use crate::ui::output;

/// Emit every token category as one versioned JSON snapshot.
pub fn tokens(ctx: &Context, scope: Option<ScopeArg>, compact: bool) -> Result<()> {
    let store = ctx.store()?;
    let scope = ctx.scope(scope);

    if scope == Scope::External && !store.has_secondary() {
        output::warn(
            "scope 'external' yields no tokens without a settings document (--settings)",
            ctx.verbosity,
        );
    }

    let snapshot = store.snapshot(scope);

    if compact {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
