//! Configuration file loading and persistence for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory)
//! and writing the merged configuration back when `--save` is given.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use entity_block::{EntityBlockError, config::AppConfig};

const LOCAL_CONFIG: &str = "entity-block/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

impl From<ConfigError> for EntityBlockError {
    fn from(err: ConfigError) -> Self {
        EntityBlockError::Config(err.to_string())
    }
}

/// Path of the configuration file in the platform-specific config directory.
fn system_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "entity-block", "entity-block")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (entity-block/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, EntityBlockError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    match system_config_path() {
        Some(system_config) if system_config.exists() => {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }
        Some(system_config) => {
            debug!(path = system_config.display().to_string(); "System configuration file not found");
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Write the configuration as TOML.
///
/// The explicit path is used when given, the platform-specific config file
/// otherwise. Missing parent directories are created.
///
/// # Errors
///
/// Returns error if no target path can be determined, or the configuration
/// cannot be serialized or written.
pub fn store_config(
    config: &AppConfig,
    explicit_path: Option<impl AsRef<Path>>,
) -> Result<PathBuf, EntityBlockError> {
    let path = match explicit_path {
        Some(path) => path.as_ref().to_path_buf(),
        None => system_config_path().ok_or(ConfigError::NoConfigDir)?,
    };

    let content = toml::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;

    info!(path = path.display().to_string(); "Configuration saved");
    Ok(path)
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, EntityBlockError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
