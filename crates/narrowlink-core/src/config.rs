use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::realm::Realm;

/// How CLI results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/narrowlink/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrowlinkConfig {
    /// Realm base URL links are resolved against (e.g. "https://chat.example.com").
    #[serde(default)]
    pub realm: Option<String>,
    /// Users/streams directory file (TOML, or JSON by extension).
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Output format: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl NarrowlinkConfig {
    /// Realm from config, validated. `None` if unset.
    pub fn realm(&self) -> Result<Option<Realm>> {
        self.realm
            .as_deref()
            .map(|raw| Realm::parse(raw).with_context(|| format!("config realm: {raw}")))
            .transpose()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("narrowlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NarrowlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NarrowlinkConfig::default();
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

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<NarrowlinkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NarrowlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
