//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds a [`crate::core::store::TokenStore`] from the context
//! 2. Runs the typed query it fronts
//! 3. Formats and displays output (table or JSON)
//!
//! Handlers never reach into document internals; everything flows
//! through the store's query surface.

mod completion;
mod config_cmd;
mod custom;
mod palette;
mod radii;
mod render;
mod shadows;
mod spacing;
mod tokens;
mod typography;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use custom::custom;
pub use palette::{colors, gradients};
pub use radii::radii;
pub use shadows::shadows;
pub use spacing::spacing;
pub use tokens::tokens;
pub use typography::typography;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Colors {
            scope,
            json,
            vars,
            effective,
        } => palette::colors(ctx, scope, json, vars, effective),
        Command::Gradients {
            scope,
            json,
            vars,
            effective,
        } => palette::gradients(ctx, scope, json, vars, effective),
        Command::Typography {
            sizes,
            families,
            scope,
            json,
        } => typography::typography(ctx, sizes, families, scope, json),
        Command::Spacing { scope, json } => spacing::spacing(ctx, scope, json),
        Command::Shadows { scope, json } => shadows::shadows(ctx, scope, json),
        Command::Radii { json } => radii::radii(ctx, json),
        Command::Custom { section, compact } => custom::custom(ctx, section.as_deref(), compact),
        Command::Tokens { scope, compact } => tokens::tokens(ctx, scope, compact),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set {
                key,
                value,
                project,
            } => config_cmd::set(ctx, &key, &value, project),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
