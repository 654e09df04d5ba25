//! cli
//!
//! Command-line interface layer for Stylebook.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration into an execution context
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves the
//! token document path (flag over project config over global config),
//! and dispatches to handlers that query a [`TokenStore`]. All token
//! semantics live in [`crate::core`]; this layer only formats results.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::store::TokenStore;
use crate::core::types::Scope;
use crate::source::FileSource;
use crate::ui::output::{self, Verbosity};

/// Resolved execution context shared by command handlers.
#[derive(Debug)]
pub struct Context {
    /// Token document path, if one was resolved
    pub file: Option<PathBuf>,

    /// Secondary settings document path, if one was resolved
    pub settings: Option<PathBuf>,

    /// Scope used when a command has no --scope flag
    pub default_scope: Scope,

    /// Directory the project config is read from and written to
    pub cwd: PathBuf,

    /// Output verbosity
    pub verbosity: Verbosity,
}

impl Context {
    /// Resolve the context from CLI flags and configuration.
    ///
    /// Precedence per key: CLI flag, then project config, then global
    /// config. Relative config paths are resolved against the working
    /// directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = match &cli.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        let config = Config::load(Some(&cwd)).context("Failed to load configuration")?;

        let file = cli
            .file
            .clone()
            .or_else(|| config.file().map(|p| resolve_path(&cwd, p)));
        let settings = cli
            .settings
            .clone()
            .or_else(|| config.settings().map(|p| resolve_path(&cwd, p)));
        let default_scope = config.scope().unwrap_or_default();
        let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

        Ok(Context {
            file,
            settings,
            default_scope,
            cwd,
            verbosity,
        })
    }

    /// Build and eagerly load the token store for this context.
    ///
    /// # Errors
    ///
    /// Fails if no document path was resolved or a configured source
    /// cannot be read or parsed. The library degrades malformed shapes
    /// to empty results; unreadable files are an error here so scripts
    /// get a nonzero exit instead of silence.
    pub fn store(&self) -> Result<TokenStore> {
        let file = self.file.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "no token document specified; pass --file or set one with 'sb config set file <path>'"
            )
        })?;

        let mut store = TokenStore::from_file(file);
        if let Some(settings) = &self.settings {
            store = store.with_secondary(Box::new(FileSource::new(settings)));
        }

        output::debug(format!("sources: {:?}", store), self.verbosity);
        store
            .load()
            .with_context(|| format!("Failed to load token document {}", file.display()))?;

        Ok(store)
    }

    /// Scope for a query: the command's flag if given, else the
    /// configured default.
    pub fn scope(&self, flag: Option<args::ScopeArg>) -> Scope {
        flag.map(Scope::from).unwrap_or(self.default_scope)
    }
}

fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let ctx = Context::from_cli(&cli)?;

    commands::dispatch(cli.command, &ctx)
}
