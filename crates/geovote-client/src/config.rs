use crate::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolve the configuration directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GEOVOTE_PATH environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.geovote
pub fn resolve_config_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("GEOVOTE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("geovote"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".geovote"));
    }

    Err(ClientError::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Which endpoint serves the region tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeSource {
    #[default]
    TreemapData,
    RegionTree,
}

impl TreeSource {
    pub fn path(&self) -> &'static str {
        match self {
            TreeSource::TreemapData => "/geovote/api/treemap-data/",
            TreeSource::RegionTree => "/geovote/api/region-tree/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub default_age: u32,
    /// Terms offered by the term switcher, oldest first.
    pub ages: Vec<u32>,
    pub tree_source: TreeSource,
    pub request_timeout_secs: u64,
    pub resize_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            default_age: 22,
            ages: vec![20, 21, 22],
            tree_source: TreeSource::default(),
            request_timeout_secs: 10,
            resize_debounce_ms: 200,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_config_dir(None)?.join("config.toml"))
    }

    /// `--config` names a file; without it the directory is resolved.
    pub fn resolve_path(explicit_file: Option<&str>) -> Result<PathBuf> {
        match explicit_file {
            Some(file) => Ok(expand_tilde(file)),
            None => Self::default_path(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ClientError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Term `step` positions away from `current` in `ages`, if any.
    pub fn adjacent_age(&self, current: u32, step: isize) -> Option<u32> {
        let mut ages = self.ages.clone();
        ages.sort_unstable();
        ages.dedup();
        let index = ages.iter().position(|a| *a == current)?;
        let target = index.checked_add_signed(step)?;
        ages.get(target).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            base_url: "https://geovote.example".to_string(),
            default_age: 21,
            tree_source: TreeSource::RegionTree,
            ..Config::default()
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "tree_source = \"region-tree\"\n")?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.tree_source, TreeSource::RegionTree);
        assert_eq!(loaded.default_age, 22);
        assert_eq!(loaded.resize_debounce(), Duration::from_millis(200));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");

        std::fs::write(&path, "base_url = \"ftp://nope\"\n")?;
        assert!(matches!(Config::load_from(&path), Err(ClientError::Config(_))));

        std::fs::write(&path, "default_age = \"twenty\"\n")?;
        assert!(matches!(Config::load_from(&path), Err(ClientError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        assert_eq!(resolve_config_dir(Some("/tmp/gv"))?, PathBuf::from("/tmp/gv"));
        assert_eq!(
            Config::resolve_path(Some("/tmp/gv/custom.toml"))?,
            PathBuf::from("/tmp/gv/custom.toml")
        );
        Ok(())
    }

    #[test]
    fn test_adjacent_age() {
        let config = Config {
            ages: vec![22, 20, 21],
            ..Config::default()
        };
        assert_eq!(config.adjacent_age(21, 1), Some(22));
        assert_eq!(config.adjacent_age(21, -1), Some(20));
        assert_eq!(config.adjacent_age(22, 1), None);
        assert_eq!(config.adjacent_age(20, -1), None);
        assert_eq!(config.adjacent_age(19, 1), None);
    }
}
