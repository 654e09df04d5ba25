//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$STYLEBOOK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/stylebook/config.toml`
//! 3. `~/.stylebook/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `.stylebook.toml` in the working directory.
//!
//! # Validation
//!
//! Both scopes carry the same keys and are validated after parsing:
//! paths must be non-empty and `scope` must name a real query scope.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Scope;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// file = "/home/me/brand/theme.json"
/// scope = "all"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default token document path
    pub file: Option<String>,

    /// Secondary settings document path
    pub settings: Option<String>,

    /// Default query scope ("all", "theme", "external")
    pub scope: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_keys(self.file.as_deref(), self.settings.as_deref(), self.scope.as_deref())
    }
}

/// Project configuration.
///
/// Lives next to the project's sources and overrides the global config
/// key by key.
///
/// # Example
///
/// ```toml
/// file = "theme.json"
/// settings = "brand-settings.json"
/// scope = "theme"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Token document path, relative to the project directory
    pub file: Option<String>,

    /// Secondary settings document path
    pub settings: Option<String>,

    /// Default query scope ("all", "theme", "external")
    pub scope: Option<String>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_keys(self.file.as_deref(), self.settings.as_deref(), self.scope.as_deref())
    }
}

fn validate_keys(
    file: Option<&str>,
    settings: Option<&str>,
    scope: Option<&str>,
) -> Result<(), ConfigError> {
    if let Some(file) = file {
        if file.is_empty() {
            return Err(ConfigError::InvalidValue("file cannot be empty".to_string()));
        }
    }
    if let Some(settings) = settings {
        if settings.is_empty() {
            return Err(ConfigError::InvalidValue(
                "settings cannot be empty".to_string(),
            ));
        }
    }
    if let Some(scope) = scope {
        scope
            .parse::<Scope>()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
    }
    Ok(())
}
