use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Href patterns for one site (optional `[[sites]]` entries in config.toml).
///
/// Patterns are regular expressions matched case-insensitively against the
/// full href; see [`crate::strategy::RuleStrategy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRule {
    /// Site identity, e.g. "gitlab.com" (host without leading `www.`).
    pub site: String,
    /// Links matching any of these are skipped.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Links matching any of these are always treated as same-site.
    #[serde(default)]
    pub relative: Vec<String>,
    /// Links matching any of these are always treated as off-site. Wins over `relative`.
    #[serde(default)]
    pub absolute: Vec<String>,
}

/// Global configuration loaded from `~/.config/linkwise/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkwiseConfig {
    /// Register the built-in site strategies (github.com, google.com, yahoo.com).
    #[serde(default = "default_builtin_strategies")]
    pub builtin_strategies: bool,
    /// Length of a fresh sleep in minutes.
    #[serde(default = "default_sleep_minutes")]
    pub sleep_minutes: u64,
    /// Extra per-site rules; a rule for a built-in site replaces it.
    #[serde(default)]
    pub sites: Vec<SiteRule>,
}

fn default_builtin_strategies() -> bool {
    true
}

fn default_sleep_minutes() -> u64 {
    30
}

impl Default for LinkwiseConfig {
    fn default() -> Self {
        Self {
            builtin_strategies: default_builtin_strategies(),
            sleep_minutes: default_sleep_minutes(),
            sites: Vec::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkwise")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkwiseConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkwiseConfig::default();
        write_to_path(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from_path(path: &Path) -> Result<LinkwiseConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LinkwiseConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Write configuration as pretty TOML (creates parent dir if needed).
pub fn write_to_path(path: &Path, cfg: &LinkwiseConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir: {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
