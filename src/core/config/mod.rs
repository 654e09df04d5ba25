//! core::config
//!
//! Configuration loading and persistence.
//!
//! # Layers
//!
//! Two layers, merged key by key with the project layer winning:
//!
//! 1. Global: `$STYLEBOOK_CONFIG`, else `$XDG_CONFIG_HOME/stylebook/config.toml`,
//!    else `~/.stylebook/config.toml`
//! 2. Project: `.stylebook.toml` in the working directory
//!
//! Missing files are not errors; every key has a default. Unknown keys
//! and invalid values are errors, so a typo in a config file is caught
//! at load time rather than silently ignored.
//!
//! # Writes
//!
//! Writes go through a temp file and an atomic rename, so a crash
//! mid-write never leaves a truncated config behind.

mod schema;

pub use schema::{GlobalConfig, ProjectConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::core::types::Scope;

/// Project config filename, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".stylebook.toml";

/// Errors arising from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a config file
    #[error("failed to read config at {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a config file
    #[error("failed to parse config at {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Failed to write a config file
    #[error("failed to write config at {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is invalid
    #[error("invalid config value: {0}")]
    InvalidValue(String),

    /// Home directory could not be determined
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Merged view over the global and project configuration layers.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global (user-level) configuration
    pub global: GlobalConfig,

    /// Project configuration, if a project file was found
    pub project: Option<ProjectConfig>,

    /// Where the global config was loaded from, if any file existed
    global_path: Option<PathBuf>,

    /// Where the project config was loaded from
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration, layering the project config (if `cwd` is
    /// given and contains one) over the global config.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated. Missing files are fine.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let (global, global_path) = load_global()?;
        global.validate()?;

        let (project, project_path) = match cwd {
            Some(dir) => load_project(dir)?,
            None => (None, None),
        };
        if let Some(project) = &project {
            project.validate()?;
        }

        Ok(Config {
            global,
            project,
            global_path,
            project_path,
        })
    }

    /// Token document path, project layer winning.
    pub fn file(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.file.as_deref())
            .or(self.global.file.as_deref())
    }

    /// Secondary settings document path, project layer winning.
    pub fn settings(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.settings.as_deref())
            .or(self.global.settings.as_deref())
    }

    /// Default query scope, project layer winning.
    ///
    /// Values were validated at load time, so an unparseable scope here
    /// is treated as unset.
    pub fn scope(&self) -> Option<Scope> {
        self.project
            .as_ref()
            .and_then(|p| p.scope.as_deref())
            .or(self.global.scope.as_deref())
            .and_then(|s| s.parse().ok())
    }

    /// Path of the global config file that was loaded, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path of the project config file that was loaded, if any.
    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}

/// Load the global config from the first location that exists.
///
/// Search order:
/// 1. `$STYLEBOOK_CONFIG` (must exist if set)
/// 2. `$XDG_CONFIG_HOME/stylebook/config.toml`
/// 3. `~/.stylebook/config.toml`
///
/// Returns defaults when no file is found.
fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
    if let Ok(path) = std::env::var("STYLEBOOK_CONFIG") {
        let path = PathBuf::from(path);
        let config = read_config(&path)?;
        return Ok((config, Some(path)));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("stylebook").join("config.toml");
        if path.exists() {
            let config = read_config(&path)?;
            return Ok((config, Some(path)));
        }
    }

    let path = global_config_path()?;
    if path.exists() {
        let config = read_config(&path)?;
        return Ok((config, Some(path)));
    }

    Ok((GlobalConfig::default(), None))
}

/// Load the project config from `dir`, if one exists there.
fn load_project(dir: &Path) -> Result<(Option<ProjectConfig>, Option<PathBuf>), ConfigError> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    if !path.exists() {
        return Ok((None, None));
    }
    let config = read_config(&path)?;
    Ok((Some(config), Some(path)))
}

fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Canonical global config path: `~/.stylebook/config.toml`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if the home directory cannot be
/// determined.
pub fn global_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".stylebook").join("config.toml"))
}

/// Project config path for a given directory.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG_FILE)
}

/// Write the global config to its canonical location.
///
/// # Errors
///
/// Returns an error if the config is invalid or the write fails.
pub fn write_global(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
    config.validate()?;
    let path = global_config_path()?;
    write_config_atomic(&path, config)?;
    Ok(path)
}

/// Write a project config into `dir`.
///
/// # Errors
///
/// Returns an error if the config is invalid or the write fails.
pub fn write_project(dir: &Path, config: &ProjectConfig) -> Result<PathBuf, ConfigError> {
    config.validate()?;
    let path = project_config_path(dir);
    write_config_atomic(&path, config)?;
    Ok(path)
}

/// Write a config file atomically: temp file in the same directory,
/// sync, then rename over the target.
fn write_config_atomic<T: Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let temp_path = path.with_extension("toml.tmp");
    {
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
    }

    fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // The only test that touches STYLEBOOK_CONFIG; other tests go
    // through load_project so parallel runs never race on the env.
    #[test]
    fn load_layers_global_and_project() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        // An empty global file yields pure defaults.
        fs::write(&config_path, "").unwrap();
        std::env::set_var("STYLEBOOK_CONFIG", &config_path);

        let config = Config::load(None).unwrap();
        assert!(config.file().is_none());
        assert!(config.scope().is_none());
        assert_eq!(config.global_path(), Some(config_path.as_path()));

        fs::write(&config_path, "file = \"theme.json\"\nscope = \"all\"\n").unwrap();

        let config = Config::load(None).unwrap();
        assert_eq!(config.file(), Some("theme.json"));
        assert_eq!(config.scope(), Some(Scope::All));

        // Project layer merges over the global one.
        let project_dir = TempDir::new().unwrap();
        fs::write(
            project_dir.path().join(PROJECT_CONFIG_FILE),
            "file = \"local.json\"\nscope = \"theme\"\n",
        )
        .unwrap();

        let config = Config::load(Some(project_dir.path())).unwrap();
        assert_eq!(config.file(), Some("local.json"));
        assert_eq!(config.scope(), Some(Scope::ThemeOnly));
        assert!(config.project_path().is_some());

        // Invalid project values are rejected at load time.
        fs::write(
            project_dir.path().join(PROJECT_CONFIG_FILE),
            "scope = \"bogus\"\n",
        )
        .unwrap();
        let result = Config::load(Some(project_dir.path()));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

        fs::write(
            project_dir.path().join(PROJECT_CONFIG_FILE),
            "them = \"oops\"\n",
        )
        .unwrap();
        let result = Config::load(Some(project_dir.path()));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));

        std::env::remove_var("STYLEBOOK_CONFIG");
    }

    #[test]
    fn project_config_loaded_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PROJECT_CONFIG_FILE),
            "file = \"local.json\"\nsettings = \"brand.json\"\n",
        )
        .unwrap();

        let (project, path) = load_project(temp.path()).unwrap();
        let project = project.unwrap();
        assert_eq!(project.file.as_deref(), Some("local.json"));
        assert_eq!(project.settings.as_deref(), Some("brand.json"));
        assert_eq!(path, Some(temp.path().join(PROJECT_CONFIG_FILE)));
    }

    #[test]
    fn missing_project_config_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let (project, path) = load_project(temp.path()).unwrap();
        assert!(project.is_none());
        assert!(path.is_none());
    }

    #[test]
    fn precedence_project_overrides_global() {
        let config = Config {
            global: GlobalConfig {
                file: Some("global.json".to_string()),
                settings: Some("global-settings.json".to_string()),
                scope: Some("all".to_string()),
            },
            project: Some(ProjectConfig {
                file: Some("project.json".to_string()),
                settings: None,
                scope: Some("theme".to_string()),
            }),
            global_path: None,
            project_path: None,
        };

        assert_eq!(config.file(), Some("project.json"));
        // Unset project keys fall through to the global layer.
        assert_eq!(config.settings(), Some("global-settings.json"));
        assert_eq!(config.scope(), Some(Scope::ThemeOnly));
    }

    #[test]
    fn write_project_config_atomic() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig {
            file: Some("theme.json".to_string()),
            settings: None,
            scope: Some("theme".to_string()),
        };

        let path = write_project(temp.path(), &config).unwrap();
        assert!(path.exists());
        assert!(!temp.path().join(".stylebook.toml.tmp").exists());

        let (loaded, _) = load_project(temp.path()).unwrap();
        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn write_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig {
            scope: Some("sideways".to_string()),
            ..Default::default()
        };

        let result = write_project(temp.path(), &config);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
