//! Configuration schema for npm-installer
//!
//! Configuration is stored at `~/.config/npm-installer/config.toml`

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Package manager settings
    pub npm: NpmConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// How the package manager is invoked
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NpmConfig {
    /// Binary to run
    pub program: String,

    /// Environment variable that points the package manager at its cache
    pub cache_env: String,

    /// Extra arguments appended after `install`
    pub extra_args: Vec<String>,

    /// Pass the caller's environment through to the subprocess
    pub inherit_env: bool,
}

impl Default for NpmConfig {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            cache_env: "NPM_CONFIG_CACHE".to_string(),
            extra_args: Vec::new(),
            inherit_env: true,
        }
    }
}
