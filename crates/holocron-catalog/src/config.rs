use holocron_types::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "HOLOCRON_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load from an explicit path, or from the default location when `None`.
    ///
    /// Without a resolvable config directory the defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match explicit_path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Ok(path) => Self::load_from(&path),
                Err(_) => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("holocron").join("config.toml"))
            .ok_or_else(|| {
                Error::Config("Could not determine configuration directory".to_string())
            })
    }
}

/// Resolve the catalog base URL based on priority:
/// 1. Explicit value (--api-url flag)
/// 2. HOLOCRON_API_URL environment variable
/// 3. Configuration file
///
/// The config file itself falls back to the public catalog.
pub fn resolve_base_url(explicit: Option<&str>, config: &Config) -> String {
    resolve_base_url_with(explicit, std::env::var(BASE_URL_ENV).ok(), config)
}

pub(crate) fn resolve_base_url_with(
    explicit: Option<&str>,
    env_value: Option<String>,
    config: &Config,
) -> String {
    let chosen = explicit
        .map(str::to_string)
        .or(env_value.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| config.api.base_url.clone());

    normalize_base_url(&chosen)
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
