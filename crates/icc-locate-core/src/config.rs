use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outbound HTTP parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds for each probe or fetch.
    pub connect_timeout_secs: u64,
    /// Total timeout in seconds for each probe or fetch.
    pub timeout_secs: u64,
    /// Largest entry page or bundle body accepted, in bytes.
    pub max_body_bytes: usize,
    /// User-Agent sent upstream (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 30,
            max_body_bytes: 16 * 1024 * 1024,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/icc-locate/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocateConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8787".to_string(),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("icc-locate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LocateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LocateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<LocateConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LocateConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
