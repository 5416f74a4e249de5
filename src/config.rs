//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cabinet/cabinet.toml`
//! 3. Environment variables: `CABINET_*` prefix

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for cabinet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Path of the JSON data file holding nodes and links
    pub data_file: PathBuf,
    /// Base URL short links are served under
    pub public_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Get the default data file (`<XDG data dir>/cabinet.json`).
fn default_data_file() -> PathBuf {
    ProjectDirs::from("", "", "cabinet")
        .map(|dirs| dirs.data_dir().join("cabinet.json"))
        .unwrap_or_else(|| PathBuf::from("cabinet.json"))
}

/// Get the XDG config directory for cabinet.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cabinet").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cabinet.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/cabinet/cabinet.toml`
    /// 3. Environment variables: `CABINET_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let defaults = Settings::default();

        let mut builder = Config::builder()
            .set_default(
                "data_file",
                defaults.data_file.to_string_lossy().to_string(),
            )
            .map_err(config_err)?
            .set_default("public_base_url", defaults.public_base_url.clone())
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("CABINET"));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Render the settings as a TOML config template.
    pub fn to_template(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::OperationFailed {
            context: "render config template".to_string(),
            source: Box::new(e),
        })
    }
}

fn config_err(e: config::ConfigError) -> ApplicationError {
    ApplicationError::OperationFailed {
        context: "load configuration".to_string(),
        source: Box::new(e),
    }
}
