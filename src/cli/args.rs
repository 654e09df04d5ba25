//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `-f` / `--file <path>`: Token document to read
//! - `--settings <path>`: Secondary settings document to merge
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::Scope;

/// Stylebook - Query design tokens from theme documents
#[derive(Parser, Debug)]
#[command(name = "sb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Token document to read (overrides configuration)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Secondary settings document to merge (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Run as if stylebook was started in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List color tokens
    #[command(
        name = "colors",
        long_about = "List color tokens from the token document.\n\n\
            Colors are gathered across origin groups in a fixed order: theme \
            first, then custom, then default, then any remaining origins in \
            document order. With an external settings document configured, \
            external colors are appended when the scope includes them.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List theme colors (default scope)
    sb colors

    # Include every origin plus external settings
    sb colors --scope all

    # Machine-readable output for scripting
    sb colors --json | jq '.[].slug'

    # Include the CSS custom property for each color
    sb colors --vars

    # One entry per slug, highest-priority origin wins
    sb colors --scope all --effective"
    )]
    Colors {
        /// Query scope
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Include CSS custom property names
        #[arg(long)]
        vars: bool,

        /// Keep only the first token per slug
        #[arg(long)]
        effective: bool,
    },

    /// List gradient tokens
    #[command(
        name = "gradients",
        long_about = "List gradient tokens from the token document.\n\n\
            Gradients follow the same origin ordering and external merge \
            rules as colors.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List theme gradients
    sb gradients

    # All origins, JSON output
    sb gradients --scope all --json

    # Only externally sourced gradients
    sb gradients --scope external"
    )]
    Gradients {
        /// Query scope
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Include CSS custom property names
        #[arg(long)]
        vars: bool,

        /// Keep only the first token per slug
        #[arg(long)]
        effective: bool,
    },

    /// List font size and font family tokens
    #[command(
        name = "typography",
        long_about = "List typography tokens: font sizes and font families.\n\n\
            By default both groups are shown. Use --sizes or --families to \
            restrict the output to one group. Typography tokens come from the \
            token document only; external settings never contribute here.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show font sizes and families
    sb typography

    # Only the size scale
    sb typography --sizes

    # Families as JSON
    sb typography --families --json"
    )]
    Typography {
        /// Show font sizes only
        #[arg(long, conflicts_with = "families")]
        sizes: bool,

        /// Show font families only
        #[arg(long)]
        families: bool,

        /// Query scope
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List spacing size tokens
    #[command(
        name = "spacing",
        long_about = "List spacing size tokens from the token document.\n\n\
            Spacing presets use the same name defaulting as every other \
            category: a missing name falls back to the capitalized slug.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List spacing sizes
    sb spacing

    # JSON output
    sb spacing --json"
    )]
    Spacing {
        /// Query scope
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List shadow tokens
    #[command(
        name = "shadows",
        long_about = "List shadow presets from the token document.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List shadows
    sb shadows

    # JSON output for scripting
    sb shadows --json"
    )]
    Shadows {
        /// Query scope
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the border radius map
    #[command(
        name = "radii",
        long_about = "Show border radius values from the custom properties tree.\n\n\
            Radii live under the 'borderRadius' key of the custom section \
            rather than in an origin-scoped collection, so they are shown as \
            a key/value map instead of a token list.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show border radii
    sb radii

    # JSON output
    sb radii --json"
    )]
    Radii {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the custom properties tree
    #[command(
        name = "custom",
        long_about = "Show the free-form custom properties tree.\n\n\
            Custom properties are an arbitrary JSON subtree, so output is \
            always JSON. Passing a section name narrows the output to that \
            section, wrapped under its key so the shape stays stable.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Whole custom tree
    sb custom

    # One section only
    sb custom borderRadius

    # Single-line output
    sb custom --compact"
    )]
    Custom {
        /// Section to select (defaults to the whole tree)
        section: Option<String>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Emit a full token snapshot as JSON
    #[command(
        name = "tokens",
        long_about = "Emit every token category as one versioned JSON snapshot.\n\n\
            The snapshot carries a kind tag, a schema version, a generation \
            timestamp and a content fingerprint, so downstream tools can \
            detect format changes and content drift cheaply.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Full snapshot, pretty-printed
    sb tokens

    # All origins plus external settings
    sb tokens --scope all

    # Compact form for piping
    sb tokens --compact | jq '.fingerprint'

    # Diff two documents by content
    sb tokens -f a.json --compact | jq -r '.fingerprint'
    sb tokens -f b.json --compact | jq -r '.fingerprint'"
    )]
    Tokens {
        /// Query scope
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "View or modify stylebook configuration.\n\n\
            Global configuration lives in ~/.stylebook/config.toml (or \
            $XDG_CONFIG_HOME/stylebook/config.toml); project configuration \
            lives in .stylebook.toml in the working directory and overrides \
            the global file key by key.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List the merged configuration
    sb config list

    # Point the global config at a document
    sb config set file ~/brand/theme.json

    # Project-local override
    sb config set file theme.json --project

    # Check a single value
    sb config get scope"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for stylebook \
            commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    sb completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    sb completion zsh >> ~/.zshrc

    # Fish
    sb completion fish > ~/.config/fish/completions/sb.fish

    # PowerShell
    sb completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Query scope argument
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    /// Every origin group plus external settings
    All,
    /// Theme-origin tokens only
    Theme,
    /// External settings tokens only
    External,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => Scope::All,
            ScopeArg::Theme => Scope::ThemeOnly,
            ScopeArg::External => Scope::External,
        }
    }
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key (file, settings, scope)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (file, settings, scope)
        key: String,
        /// Value to set
        value: String,
        /// Write to the project config instead of the global one
        #[arg(long)]
        project: bool,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
