//! config command - Get, set, or list configuration values

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{self, Config};
use crate::ui::output;

/// Get a configuration value from the merged view.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load(Some(&ctx.cwd)).context("Failed to load configuration")?;

    let value = match key {
        "file" => config.file().map(str::to_string),
        "settings" => config.settings().map(str::to_string),
        "scope" => config.scope().map(|s| s.to_string()),
        _ => bail!("Unknown configuration key: {}", key),
    };

    // Key exists but has no value - exit silently
    if let Some(value) = value {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value in the global or project layer.
pub fn set(ctx: &Context, key: &str, value: &str, project: bool) -> Result<()> {
    if project {
        let config = Config::load(Some(&ctx.cwd)).context("Failed to load configuration")?;
        let mut project_config = config.project.unwrap_or_default();
        match key {
            "file" => project_config.file = Some(value.to_string()),
            "settings" => project_config.settings = Some(value.to_string()),
            "scope" => project_config.scope = Some(value.to_string()),
            _ => bail!("Unknown configuration key: {}", key),
        }
        let path = config::write_project(&ctx.cwd, &project_config)
            .context("Failed to write project config")?;
        output::debug(format!("wrote {}", path.display()), ctx.verbosity);
    } else {
        let config = Config::load(None).context("Failed to load configuration")?;
        let mut global = config.global;
        match key {
            "file" => global.file = Some(value.to_string()),
            "settings" => global.settings = Some(value.to_string()),
            "scope" => global.scope = Some(value.to_string()),
            _ => bail!("Unknown configuration key: {}", key),
        }
        let path = config::write_global(&global).context("Failed to write global config")?;
        output::debug(format!("wrote {}", path.display()), ctx.verbosity);
    }

    output::success(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// List the merged configuration.
pub fn list(ctx: &Context) -> Result<()> {
    let config = Config::load(Some(&ctx.cwd)).context("Failed to load configuration")?;

    println!("# Configuration");
    if let Some(path) = config.global_path() {
        println!("# global: {}", path.display());
    }
    if let Some(path) = config.project_path() {
        println!("# project: {}", path.display());
    }

    println!("file = {}", config.file().unwrap_or("(not set)"));
    println!("settings = {}", config.settings().unwrap_or("(not set)"));
    match config.scope() {
        Some(scope) => println!("scope = {}", scope),
        None => println!("scope = (not set)"),
    }

    Ok(())
}
