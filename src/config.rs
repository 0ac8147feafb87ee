use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Directory name under the user config dir holding `config.toml`
const CONFIG_DIR_NAME: &str = "devdock";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub projects: ProjectsConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP API to
    pub host: String,
    /// Port to bind the HTTP API to
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Directory whose immediate subdirectories are reported as projects
    pub root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Host the companion service ports are probed on
    pub host: String,
    /// Per-probe connect timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/var/www"),
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            timeout_ms: 1000,
        }
    }
}

impl HealthConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the user config
    /// file is read if present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/devdock/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Read configuration file");
        Ok(config)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.health.timeout_ms == 0 {
            return Err(ConfigError::Invalid("health.timeout_ms must be greater than 0".into()).into());
        }
        if self.health.host.trim().is_empty() {
            return Err(ConfigError::Invalid("health.host must not be empty".into()).into());
        }
        if self.projects.root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("projects.root must not be empty".into()).into());
        }
        Ok(())
    }
}
