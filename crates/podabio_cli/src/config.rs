//! podabio.toml handling

use anyhow::{Context, Result};
use podabio_theme::cache::DEFAULT_CAPACITY;
use podabio_theme::StyleConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "podabio.toml";

/// Top-level configuration (podabio.toml)
#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PodabioConfig {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Rendered style block cache
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl PodabioConfig {
    /// Load from a file, or from podabio.toml inside a directory.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// An explicit path must load; without one, ./podabio.toml is used when present.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[style]\nwidget_selector = \".link\"\n\n[cache]\ncapacity = 8\n",
        )
        .unwrap();

        let config = PodabioConfig::load(dir.path()).unwrap();
        assert_eq!(config.style.widget_selector, ".link");
        assert_eq!(config.style.scope_selector, ":root");
        assert_eq!(config.cache.capacity, 8);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PodabioConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[style\n").unwrap();
        let err = PodabioConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn toml_round_trip() {
        let config = PodabioConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(toml::from_str::<PodabioConfig>(&text).unwrap(), config);
    }
}
