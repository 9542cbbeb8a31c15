//! Export configuration
//!
//! Settings are stored as JSON in the system's standard configuration
//! directory. Every field has a default, so a missing or partial file still
//! yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the stored configuration
const CONFIG_FILE: &str = "metadata.json";

/// Default host serving TV database artwork
pub const DEFAULT_BANNER_BASE_URL: &str = "http://www.thetvdb.com/banners/";

/// Errors that can occur while loading or storing the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory location
    #[error("Failed to determine config directory location")]
    ConfigDirectoryNotFound,

    /// Failed to create the config directory
    #[error("Failed to create config directory at {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read the config file
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the config file
    #[error("Failed to write config file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to deserialize the config file
    #[error("Failed to deserialize config file {path}: {source}")]
    DeserializationFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize the config for storing
    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Where a representative episode thumbnail is stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeThumbnailTarget {
    /// `<media base name>.tbn` next to the media file
    #[default]
    PerFile,
    /// A bare `folder.jpg`, relative to the working directory. Every
    /// episode export overwrites the same file; only useful for consumers
    /// relying on the old layout.
    SharedFolder,
}

/// Settings consulted on every export call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Use wide banners instead of posters for folder and season art
    pub use_banners: bool,
    pub episode_thumbnail: EpisodeThumbnailTarget,
    /// Base URL prepended to asset references
    pub banner_base_url: String,
    /// API key used to build episode guide URLs
    pub tvdb_api_key: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            use_banners: false,
            episode_thumbnail: EpisodeThumbnailTarget::default(),
            banner_base_url: DEFAULT_BANNER_BASE_URL.to_string(),
            tvdb_api_key: String::new(),
        }
    }
}

impl MetadataConfig {
    /// Loads the configuration from the standard config directory
    ///
    /// Returns the defaults if no configuration has been stored yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Loads the configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::DeserializationFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Stores the configuration in the standard config directory
    pub fn store(&self) -> Result<(), ConfigError> {
        self.store_to(&config_path()?)
    }

    /// Stores the configuration to an explicit file, creating its directory
    pub fn store_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Source of the configuration for an export call.
///
/// Exporters ask for the configuration on every call, so implementations
/// backed by mutable storage are picked up without rebuilding the exporter.
pub trait ConfigProvider {
    fn metadata_config(&self) -> MetadataConfig;
}

impl ConfigProvider for MetadataConfig {
    fn metadata_config(&self) -> MetadataConfig {
        self.clone()
    }
}

/// Path of the configuration file in the platform config directory
///
/// - Linux: ~/.config/xbmcmetadata/metadata.json
/// - macOS: ~/Library/Application Support/de.westhoffswelt.xbmcmetadata/metadata.json
/// - Windows: %APPDATA%\westhoffswelt\xbmcmetadata\config\metadata.json
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("de", "westhoffswelt", "xbmcmetadata")
        .ok_or(ConfigError::ConfigDirectoryNotFound)?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE))
}
