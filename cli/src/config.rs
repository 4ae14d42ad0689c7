//! Configuration file handling for the CLI.
//!
//! Stores the backend URL and session cookie in
//! `$XDG_CONFIG_HOME/rentals/config.toml` following the XDG Base Directory
//! Specification.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use rentals_business::BusinessConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration stored on disk
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Backend base URL, without the `/api/v1` suffix
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Raw `Cookie` header value
    pub cookie: Option<String>,
}

pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "rentals", "rentals").context("Failed to determine home directory")
}

impl Config {
    /// Get the configuration file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/rentals/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn default_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to `path`, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn set_session(&mut self, cookie: &str) {
        self.session.cookie = Some(cookie.to_owned());
    }

    pub fn clear_session(&mut self) {
        self.session.cookie = None;
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.server.base_url = Some(url.to_owned());
    }

    /// Layer this file over `env`, then `base_url`/`session` flags over both.
    pub fn resolve(
        &self,
        env: BusinessConfig,
        base_url: Option<&str>,
        session: Option<&str>,
    ) -> BusinessConfig {
        let mut config = env;

        if let Some(url) = base_url.or(self.server.base_url.as_deref()) {
            config.api_base_url = url.to_owned();
        }
        if let Some(cookie) = session.or(self.session.cookie.as_deref()) {
            config.session_cookie = Some(cookie.to_owned());
        }

        config
    }
}
